//! Keyboard shortcuts. They step through the same clamped `Selection` as the
//! on-screen buttons, so they can never push the index out of range.

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::gallery::Selection;
use crate::gallery::SelectionChanged;
use crate::gallery::StepDirection;
use crate::gallery::navigate;
use crate::inspector::InspectorVisibility;
use crate::post_process::PostProcessConfig;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<GalleryControls>()
            .add_systems(Startup, spawn_gallery_controls)
            .add_observer(step_left)
            .add_observer(step_right)
            .add_observer(toggle_post_process)
            .add_observer(toggle_inspectors);
    }
}

#[derive(Component)]
pub struct GalleryControls;

#[derive(InputAction)]
#[action_output(bool)]
struct StepLeft;

#[derive(InputAction)]
#[action_output(bool)]
struct StepRight;

#[derive(InputAction)]
#[action_output(bool)]
struct TogglePostProcess;

#[derive(InputAction)]
#[action_output(bool)]
struct ToggleInspectors;

fn spawn_gallery_controls(mut commands: Commands) {
    commands.spawn((
        Name::new("GalleryControls"),
        GalleryControls,
        actions!(GalleryControls[
            (
                Action::<StepLeft>::new(),
                bindings![KeyCode::ArrowLeft, KeyCode::KeyA],
            ),
            (
                Action::<StepRight>::new(),
                bindings![KeyCode::ArrowRight, KeyCode::KeyD],
            ),
            (
                Action::<TogglePostProcess>::new(),
                bindings![KeyCode::KeyP],
            ),
            (
                Action::<ToggleInspectors>::new(),
                bindings![KeyCode::F1],
            ),
        ]),
    ));
}

fn step_left(
    _step: On<Start<StepLeft>>,
    mut selection: ResMut<Selection>,
    mut changes: MessageWriter<SelectionChanged>,
) {
    navigate(StepDirection::Left, &mut selection, &mut changes);
}

fn step_right(
    _step: On<Start<StepRight>>,
    mut selection: ResMut<Selection>,
    mut changes: MessageWriter<SelectionChanged>,
) {
    navigate(StepDirection::Right, &mut selection, &mut changes);
}

fn toggle_post_process(
    _toggle: On<Start<TogglePostProcess>>,
    mut config: ResMut<PostProcessConfig>,
) {
    config.enabled = !config.enabled;
    info!("post-processing {}", if config.enabled { "on" } else { "off" });
}

fn toggle_inspectors(
    _toggle: On<Start<ToggleInspectors>>,
    mut visibility: ResMut<InspectorVisibility>,
) {
    visibility.toggle();
    debug!("inspectors visible: {}", visibility.0);
}
