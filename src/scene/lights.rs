use bevy::prelude::*;

use super::constants::SUN_ILLUMINANCE;
use super::constants::SUN_POSITION;

pub struct LightsPlugin;

impl Plugin for LightsPlugin {
    fn build(&self, app: &mut App) { app.add_systems(Startup, spawn_sun); }
}

// the ambient term lives on the camera, see `camera::cameras`
fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
