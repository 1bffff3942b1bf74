//! Objects a widget can move.

use void_math::Frame3;

/// Coordinate space a frame is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordSpace {
    /// Relative to the object's parent
    #[default]
    Object,
    /// Scene root
    World,
}

/// Anything with a frame that widgets can read and write.
///
/// Widgets borrow targets only for the duration of a call and never keep
/// them.
pub trait Transformable {
    /// The object's frame expressed in `space`.
    fn local_frame(&self, space: CoordSpace) -> Frame3;

    /// Replace the object's frame, with `frame` expressed in `space`.
    fn set_local_frame(&mut self, frame: Frame3, space: CoordSpace);
}

/// Scene node with a parent frame and a uniform parent scale.
///
/// The frame is stored relative to the parent. With a parent scale of `s`,
/// one object-space unit covers `s` world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject {
    pub parent: Frame3,
    pub parent_scale: f32,
    pub frame: Frame3,
}

impl SceneObject {
    /// Object placed directly in the scene root
    pub fn new(frame: Frame3) -> Self {
        Self {
            parent: Frame3::IDENTITY,
            parent_scale: 1.0,
            frame,
        }
    }

    /// Object nested under `parent`
    pub fn with_parent(frame: Frame3, parent: Frame3, parent_scale: f32) -> Self {
        Self {
            parent,
            parent_scale,
            frame,
        }
    }

    pub fn world_frame(&self) -> Frame3 {
        self.parent.frame_to_parent(&self.frame, self.parent_scale)
    }
}

impl Default for SceneObject {
    fn default() -> Self {
        Self::new(Frame3::IDENTITY)
    }
}

impl Transformable for SceneObject {
    fn local_frame(&self, space: CoordSpace) -> Frame3 {
        match space {
            CoordSpace::Object => self.frame,
            CoordSpace::World => self.world_frame(),
        }
    }

    fn set_local_frame(&mut self, frame: Frame3, space: CoordSpace) {
        self.frame = match space {
            CoordSpace::Object => frame,
            CoordSpace::World => self.parent.frame_from_parent(&frame, self.parent_scale),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_math::{Quat, Vec3};

    #[test]
    fn test_root_object_spaces_match() {
        let object = SceneObject::new(Frame3::from_origin(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(object.local_frame(CoordSpace::Object), object.local_frame(CoordSpace::World));
    }

    #[test]
    fn test_nested_world_frame() {
        let parent = Frame3::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_rotation_z(core::f32::consts::FRAC_PI_2),
        );
        let object = SceneObject::with_parent(Frame3::from_origin(Vec3::X), parent, 2.0);

        let world = object.local_frame(CoordSpace::World);
        // Parent X points along world Y, scaled by 2
        assert!(world.origin.abs_diff_eq(Vec3::new(10.0, 2.0, 0.0), 1e-5));
        assert!(world.x().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn test_set_world_frame_converts_to_object() {
        let parent = Frame3::from_origin(Vec3::new(0.0, 5.0, 0.0));
        let mut object = SceneObject::with_parent(Frame3::IDENTITY, parent, 0.5);

        object.set_local_frame(Frame3::from_origin(Vec3::new(1.0, 5.0, 0.0)), CoordSpace::World);
        assert!(object.frame.origin.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
    }
}
