mod bloom;
mod config;
mod constants;
mod overlay;

use bevy::prelude::*;

use bloom::BloomPlugin;
pub use config::PostProcessConfig;
use config::PostProcessConfigPlugin;
use overlay::OverlayPlugin;

/// Cosmetic pass over the rendered gallery: bloom, vignette, grain and scanlines
pub struct PostProcessPlugin;

impl Plugin for PostProcessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PostProcessConfigPlugin)
            .add_plugins(BloomPlugin)
            .add_plugins(OverlayPlugin);
    }
}
