use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::CAMERA_DEPTH;
use super::constants::CAMERA_FOV_DEGREES;
use super::constants::CAMERA_HEIGHT;
use super::constants::CAMERA_LOOK_AT_HEIGHT;
use super::constants::CAMERA_TRANSITION_DURATION_SECS;
use crate::inspector::inspectors_visible;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default().run_if(inspectors_visible),
        )
        .init_resource::<CameraConfig>()
        .add_systems(Update, (update_clear_color, update_field_of_view));
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    pub clear_color:              Color,
    /// Read when a transition starts; a running slide keeps its duration
    #[inspector(min = 0.05, max = 3.0, display = NumberDisplay::Slider)]
    pub transition_duration_secs: f32,
    #[inspector(min = 0.2, max = 4.0, display = NumberDisplay::Slider)]
    pub height:                   f32,
    #[inspector(min = 1.0, max = 15.0, display = NumberDisplay::Slider)]
    pub depth:                    f32,
    #[inspector(min = 0.0, max = 3.0, display = NumberDisplay::Slider)]
    pub look_at_height:           f32,
    #[inspector(min = 20.0, max = 100.0, display = NumberDisplay::Slider)]
    pub fov_degrees:              f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            clear_color:              Color::srgb(0.93, 0.93, 0.93),
            transition_duration_secs: CAMERA_TRANSITION_DURATION_SECS,
            height:                   CAMERA_HEIGHT,
            depth:                    CAMERA_DEPTH,
            look_at_height:           CAMERA_LOOK_AT_HEIGHT,
            fov_degrees:              CAMERA_FOV_DEGREES,
        }
    }
}

impl CameraConfig {
    /// Camera position in front of a door plane offset `x`
    pub const fn eye(&self, x: f32) -> Vec3 { Vec3::new(x, self.height, self.depth) }

    pub fn fov_radians(&self) -> f32 { self.fov_degrees.to_radians() }
}

// lets the inspector drive ClearColor while the gallery is running
fn update_clear_color(camera_config: Res<CameraConfig>, mut clear_color: ResMut<ClearColor>) {
    if camera_config.is_changed() {
        clear_color.0 = camera_config.clear_color;
    }
}

fn update_field_of_view(
    camera_config: Res<CameraConfig>,
    mut projection: Single<&mut Projection, With<super::GalleryCamera>>,
) {
    if !camera_config.is_changed() {
        return;
    }
    if let Projection::Perspective(ref mut perspective) = **projection {
        perspective.fov = camera_config.fov_radians();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_keeps_height_and_depth_fixed() {
        let config = CameraConfig::default();
        assert_eq!(config.eye(4.0), Vec3::new(4.0, 1.6, 5.2));
        assert_eq!(config.eye(-3.5).y, config.eye(8.0).y);
        assert_eq!(config.eye(-3.5).z, config.eye(8.0).z);
    }

    #[test]
    fn default_duration_is_shared_by_all_transitions() {
        assert_eq!(
            CameraConfig::default().transition_duration_secs,
            CAMERA_TRANSITION_DURATION_SECS
        );
    }
}
