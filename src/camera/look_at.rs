use bevy::prelude::*;

use super::GalleryCamera;
use super::config::CameraConfig;
use crate::schedule::GallerySet;

pub struct LookAtPlugin;

impl Plugin for LookAtPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, track_look_at.in_set(GallerySet::CameraAim));
    }
}

/// The point on the door plane straight ahead of a camera at `camera_x`
pub const fn look_at_target(camera_x: f32, look_at_height: f32) -> Vec3 {
    Vec3::new(camera_x, look_at_height, 0.0)
}

/// Full camera pose for a horizontal position: eye at the configured height
/// and depth, aimed squarely into the door plane.
pub fn camera_pose(x: f32, camera_config: &CameraConfig) -> Transform {
    Transform::from_translation(camera_config.eye(x))
        .looking_at(look_at_target(x, camera_config.look_at_height), Vec3::Y)
}

// runs every frame, moving or not, after the transition has written the position
fn track_look_at(
    camera_config: Res<CameraConfig>,
    mut camera: Single<&mut Transform, With<GalleryCamera>>,
) {
    let target = look_at_target(camera.translation.x, camera_config.look_at_height);
    camera.look_at(target, Vec3::Y);
}
