//! Shared lifecycle bookkeeping for the two control families.
//!
//! Concrete behaviors hand their gesture math to these cores as
//! closures. The cores own the enabled flag, the target or active
//! state, and the listener lists, so every behavior ends and notifies
//! the same way.

use crate::controls::events::{EventListeners, NotificationKind};
use crate::picking::Intersection;
use crate::scene::ObjectId;

// ---------------------------------------------------------------------------
// Single-target lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle state for controls that grip exactly one object.
pub struct SingleTargetCore {
    /// Whether the owning control reacts to events.
    pub enabled: bool,
    /// Keep driving the target while it is occluded by a nearer hit.
    pub allow_non_top: bool,
    /// Notification listeners of the owning control.
    pub listeners: EventListeners,
    target: Option<ObjectId>,
}

impl SingleTargetCore {
    /// A core with no target bound.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self {
            enabled: true,
            allow_non_top,
            listeners: EventListeners::new(),
            target: None,
        }
    }

    /// The object the active gesture grips, if any.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Begin a gesture on the nearest hit. Binds the target, runs
    /// `do_start`, and claims the event when the hook accepts; a
    /// rejected hook unbinds again.
    pub fn start(
        &mut self,
        hits: &[Intersection],
        do_start: impl FnOnce(&Intersection) -> bool,
    ) -> bool {
        if !self.enabled || hits.is_empty() {
            return false;
        }
        let hit = &hits[0];
        self.target = Some(hit.object);
        if do_start(hit) {
            self.listeners.notify(NotificationKind::Start, &[hit.object]);
            true
        } else {
            self.target = None;
            false
        }
    }

    /// Drive an active gesture. Looks for the bound target among the
    /// hits (nearest first, occluded hits only with `allow_non_top`),
    /// runs `do_change` on it, and reports whether the target was
    /// found. Losing the target, or an empty hit list, ends the
    /// gesture through `do_end` instead.
    pub fn change(
        &mut self,
        hits: &[Intersection],
        do_change: impl FnOnce(ObjectId, &Intersection) -> bool,
        do_end: impl FnOnce(),
    ) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(target) = self.target else {
            return false;
        };
        if hits.is_empty() {
            return self.end(do_end);
        }
        let hit = if hits[0].object == target {
            Some(&hits[0])
        } else if self.allow_non_top {
            hits[1..].iter().find(|hit| hit.object == target)
        } else {
            None
        };
        if let Some(hit) = hit {
            if do_change(target, hit) {
                self.listeners.notify(NotificationKind::Change, &[target]);
            }
            true
        } else {
            let _ = self.end(do_end);
            false
        }
    }

    /// End the gesture. Runs `do_end` and notifies only when a target
    /// was bound. Always reports unclaimed.
    pub fn end(&mut self, do_end: impl FnOnce()) -> bool {
        if let Some(target) = self.target.take() {
            do_end();
            self.listeners.notify(NotificationKind::End, &[target]);
        }
        false
    }
}

// ---------------------------------------------------------------------------
// Targetless lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle state for controls that need no object, like camera
/// behaviors.
pub struct TargetlessCore {
    /// Whether the owning control reacts to events.
    pub enabled: bool,
    /// Notification listeners of the owning control.
    pub listeners: EventListeners,
    active: bool,
}

impl TargetlessCore {
    /// An inactive core.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            listeners: EventListeners::new(),
            active: false,
        }
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a gesture. Activates and claims when `do_start` accepts.
    pub fn start(&mut self, do_start: impl FnOnce() -> bool) -> bool {
        if !self.enabled {
            return false;
        }
        if do_start() {
            self.active = true;
            self.listeners.notify(NotificationKind::Start, &[]);
            true
        } else {
            false
        }
    }

    /// Drive an active gesture through `do_change`.
    pub fn change(&mut self, do_change: impl FnOnce() -> bool) -> bool {
        if !(self.enabled && self.active) {
            return false;
        }
        if do_change() {
            self.listeners.notify(NotificationKind::Change, &[]);
            true
        } else {
            false
        }
    }

    /// End the gesture. Deactivates unconditionally and always reports
    /// unclaimed.
    pub fn end(&mut self, do_end: impl FnOnce()) -> bool {
        self.active = false;
        do_end();
        false
    }
}

impl Default for TargetlessCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::controls::events::Listener;

    fn hit(object: ObjectId, distance: f32) -> Intersection {
        Intersection {
            object,
            point: Vec3::ZERO,
            distance,
        }
    }

    fn object_ids() -> (ObjectId, ObjectId) {
        let mut scene = crate::scene::Scene::new();
        let a = scene.add(crate::scene::SceneObject::new());
        let b = scene.add(crate::scene::SceneObject::new());
        (a, b)
    }

    #[test]
    fn test_start_binds_nearest_hit() {
        let (a, b) = object_ids();
        let mut core = SingleTargetCore::new(false);
        let claimed = core.start(&[hit(a, 1.0), hit(b, 2.0)], |hit| {
            assert_eq!(hit.object, a);
            true
        });
        assert!(claimed);
        assert_eq!(core.target(), Some(a));
    }

    #[test]
    fn test_rejected_start_unbinds() {
        let (a, _) = object_ids();
        let mut core = SingleTargetCore::new(false);
        assert!(!core.start(&[hit(a, 1.0)], |_| false));
        assert_eq!(core.target(), None);
    }

    #[test]
    fn test_change_without_target_is_a_miss() {
        let (a, _) = object_ids();
        let mut core = SingleTargetCore::new(false);
        assert!(!core.change(&[hit(a, 1.0)], |_, _| true, || {}));
    }

    #[test]
    fn test_occluded_target_needs_allow_non_top() {
        let (a, b) = object_ids();

        let mut strict = SingleTargetCore::new(false);
        assert!(strict.start(&[hit(a, 1.0)], |_| true));
        assert!(!strict.change(&[hit(b, 0.5), hit(a, 1.0)], |_, _| true, || {}));
        assert_eq!(strict.target(), None);

        let mut tolerant = SingleTargetCore::new(true);
        assert!(tolerant.start(&[hit(a, 1.0)], |_| true));
        assert!(tolerant.change(&[hit(b, 0.5), hit(a, 1.0)], |target, hit| {
            assert_eq!(target, a);
            assert_eq!(hit.object, a);
            true
        }, || {}));
        assert_eq!(tolerant.target(), Some(a));
    }

    #[test]
    fn test_empty_hits_end_the_gesture() {
        let (a, _) = object_ids();
        let ended = Rc::new(Cell::new(false));
        let seen = Rc::clone(&ended);
        let listener: Listener = Rc::new(move |n| {
            assert_eq!(n.kind, NotificationKind::End);
            seen.set(true);
        });

        let mut core = SingleTargetCore::new(false);
        core.listeners.add(NotificationKind::End, &listener);
        assert!(core.start(&[hit(a, 1.0)], |_| true));
        assert!(!core.change(&[], |_, _| true, || {}));
        assert!(ended.get());
        assert_eq!(core.target(), None);
    }

    #[test]
    fn test_found_target_with_declined_hook_still_reports_found() {
        let (a, _) = object_ids();
        let changed = Rc::new(Cell::new(false));
        let seen = Rc::clone(&changed);
        let listener: Listener = Rc::new(move |_| seen.set(true));

        let mut core = SingleTargetCore::new(false);
        core.listeners.add(NotificationKind::Change, &listener);
        assert!(core.start(&[hit(a, 1.0)], |_| true));
        assert!(core.change(&[hit(a, 1.0)], |_, _| false, || {}));
        assert!(!changed.get());
        assert_eq!(core.target(), Some(a));
    }

    #[test]
    fn test_targetless_lifecycle() {
        let mut core = TargetlessCore::new();
        assert!(!core.change(|| true));
        assert!(core.start(|| true));
        assert!(core.is_active());
        assert!(core.change(|| true));
        assert!(!core.end(|| {}));
        assert!(!core.is_active());
        assert!(!core.change(|| true));
    }

    #[test]
    fn test_disabled_targetless_never_starts() {
        let mut core = TargetlessCore::new();
        core.enabled = false;
        assert!(!core.start(|| true));
        assert!(!core.is_active());
    }
}
