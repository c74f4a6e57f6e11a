use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::inspector::inspectors_visible;

pub struct PostProcessConfigPlugin;

impl Plugin for PostProcessConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<PostProcessConfig>::default().run_if(inspectors_visible),
        )
        .init_resource::<PostProcessConfig>();
    }
}

/// Parameters of the cosmetic pass layered over the gallery.
/// None of them affect where the camera goes.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct PostProcessConfig {
    pub enabled:                   bool,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_intensity:           f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_low_frequency_boost: f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_high_pass_frequency: f32,
    /// Darkness reached in the corners
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub vignette_strength:         f32,
    /// Normalized radius where darkening begins (1.0 = corner)
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub vignette_radius:           f32,
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub grain_intensity:           f32,
    /// Seconds between grain reshuffles
    #[inspector(min = 0.01, max = 1.0, display = NumberDisplay::Slider)]
    pub grain_interval_secs:       f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub scanline_darkness:         f32,
    /// Pixel rows per scanline period
    #[inspector(min = 2, max = 16)]
    pub scanline_spacing:          u32,
}

impl Default for PostProcessConfig {
    fn default() -> Self {
        Self {
            enabled:                   true,
            bloom_intensity:           0.15,
            bloom_low_frequency_boost: 0.6,
            bloom_high_pass_frequency: 1.0,
            vignette_strength:         0.45,
            vignette_radius:           0.55,
            grain_intensity:           0.06,
            grain_interval_secs:       0.05,
            scanline_darkness:         0.12,
            scanline_spacing:          3,
        }
    }
}
