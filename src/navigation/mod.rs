mod buttons;
mod constants;
mod input;

use bevy::prelude::*;

use buttons::ButtonsPlugin;
pub use constants::NAVIGATION_Z_INDEX;
use input::InputPlugin;

/// On-screen step buttons, the position indicator and keyboard shortcuts
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) { app.add_plugins((ButtonsPlugin, InputPlugin)); }
}
