mod constants;
mod doors;
mod lights;

use bevy::prelude::*;

use doors::DoorsPlugin;
use lights::LightsPlugin;

/// Static geometry the camera slides past: floor, doors and the sun
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) { app.add_plugins((DoorsPlugin, LightsPlugin)); }
}
