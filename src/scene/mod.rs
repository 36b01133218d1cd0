//! Controlled-object store.
//!
//! The controls never hold references into the host's scene graph.
//! Instead the host mirrors each manipulable object into this flat
//! store and hands the dispatcher `&mut Scene` per event; controls
//! address objects by [`ObjectId`] and mutate their poses here.
//!
//! An object's `position`/`rotation` live in its parent's frame, with
//! the parent's world transform carried alongside. That keeps the
//! rotation and move math identical whether the object is a direct
//! scene child or nested deeper.

use glam::{Mat4, Quat, Vec3};

/// Identifier of an object in a [`Scene`]. Assigned on insertion and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

/// Shape ray casts resolve against, in the object's local frame,
/// centered on the object position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    /// Sphere of the given radius.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Axis-aligned box in the object's local frame.
    Cuboid {
        /// Half-extent along each local axis.
        half_extents: Vec3,
    },
}

/// A manipulable object: a pose in its parent's frame plus an optional
/// pick shape. Objects without a pick shape (composites, groups) cannot
/// be hit by rays directly; wrap them in an
/// [`ObjectWrapper`](crate::wrapper::ObjectWrapper) instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    id: ObjectId,
    /// Position in the parent's frame.
    pub position: Vec3,
    /// Orientation in the parent's frame.
    pub rotation: Quat,
    /// World transform of the parent node. Identity for direct scene
    /// children. Expected to be rigid (rotation + translation).
    pub parent_world: Mat4,
    /// Shape used for ray casting, if any.
    pub pick_shape: Option<PickShape>,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneObject {
    /// Create an object at the parent-frame origin with no pick shape.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ObjectId(0),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            parent_world: Mat4::IDENTITY,
            pick_shape: None,
        }
    }

    /// Builder: set the parent-frame position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder: set the parent-frame orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set the parent node's world transform.
    #[must_use]
    pub fn with_parent_world(mut self, parent_world: Mat4) -> Self {
        self.parent_world = parent_world;
        self
    }

    /// Builder: make the object pickable as a sphere.
    #[must_use]
    pub fn with_pick_sphere(mut self, radius: f32) -> Self {
        self.pick_shape = Some(PickShape::Sphere { radius });
        self
    }

    /// Builder: make the object pickable as a box.
    #[must_use]
    pub fn with_pick_cuboid(mut self, half_extents: Vec3) -> Self {
        self.pick_shape = Some(PickShape::Cuboid { half_extents });
        self
    }

    /// The object's ID within its scene.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's position in world space.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.parent_world.transform_point3(self.position)
    }

    /// Move the object to a world-space position, converting through
    /// the parent transform.
    pub fn set_world_position(&mut self, world: Vec3) {
        self.position = self.parent_world.inverse().transform_point3(world);
    }

    /// Convert a world-space point into the parent's frame, the frame
    /// `position` and `rotation` live in.
    #[must_use]
    pub fn world_to_parent(&self, point: Vec3) -> Vec3 {
        self.parent_world.inverse().transform_point3(point)
    }

    /// Full object-to-world transform (parent transform times local
    /// pose).
    #[must_use]
    pub fn world_transform(&self) -> Mat4 {
        self.parent_world * Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// Flat store of controlled objects. IDs are assigned monotonically on
/// insertion.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u32,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object, assigning it a fresh ID.
    pub fn add(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        object.id = id;
        self.objects.push(object);
        id
    }

    /// Remove an object by ID. Returns the object if it was present.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Look up an object by ID for mutation.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Iterate over all objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Number of objects in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut scene = Scene::new();
        let a = scene.add(SceneObject::new());
        let b = scene.add(SceneObject::new());
        assert_ne!(a, b);
        assert!(scene.remove(a).is_some());
        let c = scene.add(SceneObject::new());
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert!(scene.get(a).is_none());
        assert!(scene.get(c).is_some());
    }

    #[test]
    fn test_world_position_respects_parent_transform() {
        let parent = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let object = SceneObject::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_parent_world(parent);
        assert!((object.world_position() - Vec3::new(11.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_set_world_position_round_trips_through_parent() {
        let parent = Mat4::from_rotation_translation(
            Quat::from_rotation_y(FRAC_PI_2),
            Vec3::new(0.0, 5.0, 0.0),
        );
        let mut object = SceneObject::new().with_parent_world(parent);
        let target = Vec3::new(3.0, 4.0, -2.0);
        object.set_world_position(target);
        assert!((object.world_position() - target).length() < 1e-5);
    }

    #[test]
    fn test_world_to_parent_inverts_parent_transform() {
        let parent = Mat4::from_translation(Vec3::new(-4.0, 0.0, 1.0));
        let object = SceneObject::new().with_parent_world(parent);
        let local = object.world_to_parent(Vec3::new(0.0, 0.0, 1.0));
        assert!((local - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);
    }
}
