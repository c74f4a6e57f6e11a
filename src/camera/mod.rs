mod cameras;
mod config;
mod constants;
mod look_at;
mod transition;

use bevy::prelude::*;

use cameras::CamerasPlugin;
pub use config::CameraConfig;
use config::CameraConfigPlugin;
use look_at::LookAtPlugin;
pub use transition::CameraTransition;
use transition::TransitionPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin)
            .add_plugins(TransitionPlugin)
            .add_plugins(LookAtPlugin);
    }
}

/// Marks the single camera that slides along the door row
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct GalleryCamera;
