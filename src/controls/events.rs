//! Lifecycle notifications and their listener lists.

use std::rc::Rc;

use crate::scene::ObjectId;

/// Which lifecycle edge a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A gesture claimed its target.
    Start,
    /// An active gesture mutated state.
    Change,
    /// A gesture released its target.
    End,
}

/// Payload delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlNotification {
    /// Lifecycle edge.
    pub kind: NotificationKind,
    /// Objects affected by the gesture, empty for targetless controls.
    pub objects: Vec<ObjectId>,
}

/// A lifecycle notification callback.
pub type Listener = Rc<dyn Fn(&ControlNotification)>;

/// Per-control listener lists, one per lifecycle edge.
///
/// Adding is idempotent per handle: a listener already present under a
/// kind is not added twice, so attaching the same callback through
/// several registration keys still delivers one call.
#[derive(Default)]
pub struct EventListeners {
    start: Vec<Listener>,
    change: Vec<Listener>,
    end: Vec<Listener>,
}

fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl EventListeners {
    /// Empty listener lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, kind: NotificationKind) -> &Vec<Listener> {
        match kind {
            NotificationKind::Start => &self.start,
            NotificationKind::Change => &self.change,
            NotificationKind::End => &self.end,
        }
    }

    fn list_mut(&mut self, kind: NotificationKind) -> &mut Vec<Listener> {
        match kind {
            NotificationKind::Start => &mut self.start,
            NotificationKind::Change => &mut self.change,
            NotificationKind::End => &mut self.end,
        }
    }

    /// Attach `listener` for `kind` unless that handle is already
    /// attached.
    pub fn add(&mut self, kind: NotificationKind, listener: &Listener) {
        let list = self.list_mut(kind);
        if !list.iter().any(|known| same_listener(known, listener)) {
            list.push(Rc::clone(listener));
        }
    }

    /// Detach `listener` from `kind`; no-op when absent.
    pub fn remove(&mut self, kind: NotificationKind, listener: &Listener) {
        self.list_mut(kind)
            .retain(|known| !same_listener(known, listener));
    }

    /// Deliver a notification to every listener attached for `kind`.
    pub fn notify(&self, kind: NotificationKind, objects: &[ObjectId]) {
        let list = self.list(kind);
        if list.is_empty() {
            return;
        }
        let notification = ControlNotification {
            kind,
            objects: objects.to_vec(),
        };
        for listener in list {
            listener(&notification);
        }
    }
}
