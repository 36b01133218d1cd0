//! Proxy targeting for objects a ray cannot hit.
//!
//! Composite objects (groups, meshes with no pick shape) cannot be
//! ray-cast targets themselves. [`ObjectWrapper`] stands a pickable
//! sphere in for one: controls grab and move the sphere, and the host
//! copies its pose back onto the wrapped object once per frame.

use std::cell::Cell;
use std::rc::Rc;

use crate::controls::events::Listener;
use crate::error::ControlError;
use crate::scene::{ObjectId, Scene, SceneObject};

/// A bounding-sphere proxy standing in for a composite object.
///
/// The sphere is centered on the wrapped object's position and shares
/// its parent transform, so a control mutating the sphere's pose moves
/// it exactly where the wrapped object should go. Pick a radius that
/// covers the main body of the object; projections that stick out can
/// be left uncovered.
pub struct ObjectWrapper {
    wrapped: ObjectId,
    proxy: ObjectId,
    active: Rc<Cell<bool>>,
}

impl ObjectWrapper {
    /// Wrap `wrapped`, inserting a proxy sphere of `radius` into the
    /// scene at the wrapped object's position, under the same parent
    /// transform.
    pub fn new(scene: &mut Scene, wrapped: ObjectId, radius: f32) -> Result<Self, ControlError> {
        let Some(target) = scene.get(wrapped) else {
            return Err(ControlError::UnknownObject(wrapped));
        };
        let proxy = scene.add(
            SceneObject::new()
                .with_position(target.position)
                .with_rotation(target.rotation)
                .with_parent_world(target.parent_world)
                .with_pick_sphere(radius),
        );
        log::debug!("wrapped object {wrapped:?} behind proxy sphere {proxy:?}");
        Ok(Self {
            wrapped,
            proxy,
            active: Rc::new(Cell::new(false)),
        })
    }

    /// The proxy sphere's ID. Register this, not the wrapped ID, as
    /// the controlled object.
    #[must_use]
    pub fn proxy(&self) -> ObjectId {
        self.proxy
    }

    /// The wrapped object's ID.
    #[must_use]
    pub fn wrapped(&self) -> ObjectId {
        self.wrapped
    }

    /// Copy the proxy's pose onto the wrapped object. Call once per
    /// frame, before rendering. A no-op if either object has been
    /// removed.
    pub fn sync(&self, scene: &mut Scene) {
        let Some(proxy) = scene.get(self.proxy) else {
            return;
        };
        let position = proxy.position;
        let rotation = proxy.rotation;
        if let Some(wrapped) = scene.get_mut(self.wrapped) {
            wrapped.position = position;
            wrapped.rotation = rotation;
        }
    }

    /// Whether a gesture currently holds the proxy. Hosts typically
    /// key a highlight effect off this.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// A start listener that marks the wrapper active when the proxy
    /// appears in the notification's object list.
    #[must_use]
    pub fn start_listener(&self) -> Listener {
        let proxy = self.proxy;
        let active = Rc::clone(&self.active);
        Rc::new(move |notification| {
            if notification.objects.contains(&proxy) {
                active.set(true);
            }
        })
    }

    /// An end listener that marks the wrapper inactive when the proxy
    /// appears in the notification's object list.
    #[must_use]
    pub fn end_listener(&self) -> Listener {
        let proxy = self.proxy;
        let active = Rc::clone(&self.active);
        Rc::new(move |notification| {
            if notification.objects.contains(&proxy) {
                active.set(false);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Quat, Vec3};

    use super::*;
    use crate::controls::events::{ControlNotification, NotificationKind};
    use crate::scene::PickShape;

    #[test]
    fn test_new_rejects_unknown_object() {
        let mut scene = Scene::new();
        let id = scene.add(SceneObject::new());
        assert!(scene.remove(id).is_some());
        assert!(matches!(
            ObjectWrapper::new(&mut scene, id, 1.0),
            Err(ControlError::UnknownObject(missing)) if missing == id
        ));
    }

    #[test]
    fn test_proxy_matches_wrapped_pose_and_parent() {
        let mut scene = Scene::new();
        let parent = Mat4::from_translation(Vec3::new(0.0, 3.0, 0.0));
        let wrapped = scene.add(
            SceneObject::new()
                .with_position(Vec3::new(1.0, 2.0, 3.0))
                .with_parent_world(parent),
        );
        let wrapper = ObjectWrapper::new(&mut scene, wrapped, 2.5).unwrap();

        let proxy = scene.get(wrapper.proxy()).unwrap();
        assert_eq!(proxy.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(proxy.parent_world, parent);
        assert_eq!(proxy.pick_shape, Some(PickShape::Sphere { radius: 2.5 }));
    }

    #[test]
    fn test_sync_copies_proxy_pose_onto_wrapped() {
        let mut scene = Scene::new();
        let wrapped = scene.add(SceneObject::new());
        let wrapper = ObjectWrapper::new(&mut scene, wrapped, 1.0).unwrap();

        let proxy = scene.get_mut(wrapper.proxy()).unwrap();
        proxy.position = Vec3::new(4.0, 5.0, 6.0);
        proxy.rotation = Quat::from_rotation_z(0.5);
        wrapper.sync(&mut scene);

        let wrapped = scene.get(wrapped).unwrap();
        assert_eq!(wrapped.position, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(wrapped.rotation, Quat::from_rotation_z(0.5));
    }

    #[test]
    fn test_listeners_track_only_the_proxy() {
        let mut scene = Scene::new();
        let wrapped = scene.add(SceneObject::new());
        let other = scene.add(SceneObject::new().with_pick_sphere(1.0));
        let wrapper = ObjectWrapper::new(&mut scene, wrapped, 1.0).unwrap();

        let start = wrapper.start_listener();
        let end = wrapper.end_listener();
        assert!(!wrapper.is_active());

        start(&ControlNotification {
            kind: NotificationKind::Start,
            objects: vec![other],
        });
        assert!(!wrapper.is_active());

        start(&ControlNotification {
            kind: NotificationKind::Start,
            objects: vec![wrapper.proxy()],
        });
        assert!(wrapper.is_active());

        end(&ControlNotification {
            kind: NotificationKind::End,
            objects: vec![other],
        });
        assert!(wrapper.is_active());

        end(&ControlNotification {
            kind: NotificationKind::End,
            objects: vec![wrapper.proxy()],
        });
        assert!(!wrapper.is_active());
    }
}
