//! Screen-space vignette, film grain and scanlines.
//!
//! Each effect is a generated RGBA texture on a full-window UI node sitting
//! just below the navigation controls. Updates swap in a fresh image handle
//! and let the old one drop.

use std::time::Duration;

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::Extent3d;
use bevy::render::render_resource::TextureDimension;
use bevy::render::render_resource::TextureFormat;
use bevy::ui::widget::NodeImageMode;

use super::config::PostProcessConfig;
use super::constants::GRAIN_TILE_SIZE;
use super::constants::VIGNETTE_TEXTURE_SIZE;
use crate::navigation::NAVIGATION_Z_INDEX;
use crate::schedule::GallerySet;
use crate::traits::U32Ext;
use crate::traits::UnitF32Ext;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GrainTimer(Timer::from_seconds(
            PostProcessConfig::default().grain_interval_secs,
            TimerMode::Repeating,
        )))
        .add_systems(Startup, spawn_overlays)
        .add_systems(
            Update,
            (update_overlays, refresh_grain)
                .chain()
                .in_set(GallerySet::Presentation),
        );
    }
}

#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub enum Overlay {
    Vignette,
    Grain,
    Scanlines,
}

impl Overlay {
    const ALL: [Self; 3] = [Self::Vignette, Self::Grain, Self::Scanlines];

    // stacking order among the overlays, all below the navigation
    const fn z_index(self) -> i32 {
        match self {
            Self::Scanlines => NAVIGATION_Z_INDEX - 3,
            Self::Grain => NAVIGATION_Z_INDEX - 2,
            Self::Vignette => NAVIGATION_Z_INDEX - 1,
        }
    }

    const fn image_mode(self) -> NodeImageMode {
        match self {
            Self::Vignette => NodeImageMode::Stretch,
            Self::Grain | Self::Scanlines => NodeImageMode::Tiled {
                tile_x:        true,
                tile_y:        true,
                stretch_value: 1.0,
            },
        }
    }

    fn image(self, config: &PostProcessConfig) -> Image {
        match self {
            Self::Vignette => rgba_image(
                VIGNETTE_TEXTURE_SIZE,
                VIGNETTE_TEXTURE_SIZE,
                vignette_pixels(
                    VIGNETTE_TEXTURE_SIZE,
                    config.vignette_strength,
                    config.vignette_radius,
                ),
            ),
            Self::Grain => rgba_image(
                GRAIN_TILE_SIZE,
                GRAIN_TILE_SIZE,
                grain_pixels(GRAIN_TILE_SIZE, config.grain_intensity, rand::random::<f32>),
            ),
            Self::Scanlines => {
                let spacing = config.scanline_spacing.max(1);
                rgba_image(1, spacing, scanline_pixels(spacing, config.scanline_darkness))
            },
        }
    }
}

#[derive(Resource, Debug)]
struct GrainTimer(Timer);

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x >= edge1 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * 2.0f32.mul_add(-t, 3.0)
}

/// Black with alpha rising from `radius` (0 = center, 1 = corner) outward,
/// reaching `strength` in the corners.
pub fn vignette_pixels(size: u32, strength: f32, radius: f32) -> Vec<u8> {
    let extent = size.to_f32();
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let u = (x.to_f32() + 0.5) / extent * 2.0 - 1.0;
            let v = (y.to_f32() + 0.5) / extent * 2.0 - 1.0;
            let distance = u.hypot(v) / std::f32::consts::SQRT_2;
            let alpha = strength * smoothstep(radius, 1.0, distance);
            pixels.extend_from_slice(&[0, 0, 0, alpha.to_channel()]);
        }
    }
    pixels
}

/// One dark row followed by `spacing - 1` clear rows, one pixel wide
pub fn scanline_pixels(spacing: u32, darkness: f32) -> Vec<u8> {
    (0..spacing)
        .flat_map(|row| {
            let alpha = if row == 0 { darkness.to_channel() } else { 0 };
            [0, 0, 0, alpha]
        })
        .collect()
}

/// Speckles of random brightness; `sample` yields values in [0, 1)
pub fn grain_pixels(size: u32, intensity: f32, mut sample: impl FnMut() -> f32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size * size {
        let shade = sample().to_channel();
        let alpha = (intensity * sample()).to_channel();
        pixels.extend_from_slice(&[shade, shade, shade, alpha]);
    }
    pixels
}

fn rgba_image(width: u32, height: u32, pixels: Vec<u8>) -> Image {
    let mut image = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    image
}

const fn overlay_visibility(enabled: bool) -> Visibility {
    if enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

fn spawn_overlays(
    mut commands: Commands,
    config: Res<PostProcessConfig>,
    mut images: ResMut<Assets<Image>>,
) {
    for overlay in Overlay::ALL {
        commands.spawn((
            Name::new(format!("{overlay:?}Overlay")),
            overlay,
            ImageNode {
                image: images.add(overlay.image(&config)),
                image_mode: overlay.image_mode(),
                ..default()
            },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            Pickable::IGNORE,
            GlobalZIndex(overlay.z_index()),
            overlay_visibility(config.enabled),
        ));
    }
}

fn update_overlays(
    config: Res<PostProcessConfig>,
    mut grain_timer: ResMut<GrainTimer>,
    mut images: ResMut<Assets<Image>>,
    mut overlays: Query<(&Overlay, &mut ImageNode, &mut Visibility)>,
) {
    if !config.is_changed() {
        return;
    }

    grain_timer
        .0
        .set_duration(Duration::from_secs_f32(config.grain_interval_secs.max(0.01)));

    for (overlay, mut node, mut visibility) in &mut overlays {
        *visibility = overlay_visibility(config.enabled);
        if config.enabled && *overlay != Overlay::Grain {
            node.image = images.add(overlay.image(&config));
        }
    }
}

fn refresh_grain(
    time: Res<Time>,
    config: Res<PostProcessConfig>,
    mut grain_timer: ResMut<GrainTimer>,
    mut images: ResMut<Assets<Image>>,
    mut overlays: Query<(&Overlay, &mut ImageNode)>,
) {
    if !config.enabled || !grain_timer.0.tick(time.delta()).just_finished() {
        return;
    }

    for (overlay, mut node) in &mut overlays {
        if *overlay == Overlay::Grain {
            node.image = images.add(overlay.image(&config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(pixels: &[u8], size: u32, x: u32, y: u32) -> u8 {
        pixels[((y * size + x) * 4 + 3) as usize]
    }

    #[test]
    fn vignette_is_clear_in_the_middle_and_dark_in_the_corners() {
        let size = 64;
        let pixels = vignette_pixels(size, 0.5, 0.5);
        assert_eq!(pixels.len(), (size * size * 4) as usize);
        assert_eq!(alpha_at(&pixels, size, size / 2, size / 2), 0);

        let corner = alpha_at(&pixels, size, 0, 0);
        assert!((i32::from(corner) - 128).abs() <= 3, "corner alpha {corner}");
        assert_eq!(corner, alpha_at(&pixels, size, size - 1, size - 1));
    }

    #[test]
    fn vignette_darkens_monotonically_toward_the_corner() {
        let size = 64;
        let pixels = vignette_pixels(size, 0.8, 0.3);
        let mut previous = 0;
        for i in size / 2..size {
            let alpha = alpha_at(&pixels, size, i, i);
            assert!(alpha >= previous);
            previous = alpha;
        }
    }

    #[test]
    fn zero_strength_vignette_is_invisible() {
        let pixels = vignette_pixels(16, 0.0, 0.5);
        assert!(pixels.chunks(4).all(|pixel| pixel[3] == 0));
    }

    #[test]
    fn scanlines_darken_one_row_per_period() {
        let pixels = scanline_pixels(4, 1.0);
        assert_eq!(pixels, vec![0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn grain_alpha_is_scaled_by_intensity() {
        let pixels = grain_pixels(8, 0.2, || 1.0);
        assert_eq!(pixels.len(), 8 * 8 * 4);
        assert!(pixels.chunks(4).all(|pixel| pixel == [255, 255, 255, 51]));

        let silent = grain_pixels(8, 0.0, rand::random::<f32>);
        assert!(silent.chunks(4).all(|pixel| pixel[3] == 0));
    }

    #[test]
    fn degenerate_smoothstep_is_a_step() {
        assert_eq!(smoothstep(1.0, 1.0, 0.99), 0.0);
        assert_eq!(smoothstep(1.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    }
}
