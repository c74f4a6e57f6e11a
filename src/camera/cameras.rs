use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::AmbientLight;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::GalleryCamera;
use super::config::CameraConfig;
use super::look_at::camera_pose;
use super::transition::CameraTransition;
use crate::gallery::DoorPositions;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_gallery_camera);
    }
}

/// Brightness of the ambient term carried by the camera
const AMBIENT_BRIGHTNESS: f32 = 650.0;

fn spawn_gallery_camera(
    mut commands: Commands,
    doors: Res<DoorPositions>,
    camera_config: Res<CameraConfig>,
) {
    let start_x = doors.first();

    commands.spawn((
        Name::new("GalleryCamera"),
        GalleryCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera_config.fov_radians(),
            ..default()
        }),
        camera_pose(start_x, &camera_config),
        CameraTransition::settled_at(start_x),
        // bloom is toggled at runtime and needs Hdr to be present
        Hdr,
        Tonemapping::TonyMcMapface,
        // an `AmbientLight` component on the camera overrides the global resource for this view
        AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
    ));
}
