//! Door Gallery - page through a row of doors with a sliding camera, built with Bevy
//!
//! - Eased camera slides that bend smoothly when interrupted
//! - On-screen and keyboard navigation clamped to the door row
//! - An optional cosmetic pass: bloom, vignette, film grain and scanlines

mod camera;
mod gallery;
mod inspector;
mod navigation;
mod post_process;
mod scene;
mod schedule;
mod traits;

use bevy::prelude::*;
#[cfg(target_arch = "wasm32")]
use bevy::window::PresentMode;

use crate::camera::CameraPlugin;
use crate::gallery::GalleryPlugin;
use crate::inspector::InspectorPlugin;
use crate::navigation::NavigationPlugin;
use crate::post_process::PostProcessPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;

const WINDOW_TITLE: &str = "door gallery";

fn main() {
    let mut app = App::new();

    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            ..default()
        }),
        ..default()
    }));

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.to_string(),
            canvas: Some("#bevy".to_string()),
            fit_canvas_to_parent: true,
            present_mode: PresentMode::AutoNoVsync, // Reduces input lag.
            ..default()
        }),
        ..default()
    }));

    // the inspector brings in egui, which every ResourceInspectorPlugin expects to be present
    app.add_plugins(InspectorPlugin)
        .add_plugins((
            GalleryPlugin::default(),
            SchedulePlugin,
            CameraPlugin,
            NavigationPlugin,
            PostProcessPlugin,
            ScenePlugin,
        ))
        .run();
}
