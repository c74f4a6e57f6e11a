use bevy::prelude::*;

use super::constants::BUTTON_BACKGROUND_ALPHA;
use super::constants::BUTTON_BORDER_ALPHA;
use super::constants::BUTTON_DISABLED_OPACITY;
use super::constants::BUTTON_EDGE_INSET;
use super::constants::BUTTON_GLYPH_SIZE;
use super::constants::BUTTON_SIZE;
use super::constants::INDICATOR_BOTTOM_INSET;
use super::constants::INDICATOR_FONT_SIZE;
use super::constants::NAVIGATION_Z_INDEX;
use crate::gallery::Selection;
use crate::gallery::SelectionChanged;
use crate::gallery::StepDirection;
use crate::gallery::navigate;
use crate::schedule::GallerySet;

pub struct ButtonsPlugin;

impl Plugin for ButtonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_navigation_buttons, spawn_position_indicator))
            .add_systems(Update, press_navigation_buttons.in_set(GallerySet::UserInput))
            .add_systems(
                Update,
                (update_button_availability, update_position_indicator)
                    .in_set(GallerySet::Presentation),
            );
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct NavigationButton {
    direction: StepDirection,
}

#[derive(Component, Debug, Clone, Copy)]
struct NavigationGlyph {
    direction: StepDirection,
}

#[derive(Component)]
struct PositionIndicator;

/// Opacity for a control that can or cannot step
const fn button_opacity(available: bool) -> f32 {
    if available {
        1.0
    } else {
        BUTTON_DISABLED_OPACITY
    }
}

fn indicator_text(selection: &Selection) -> String {
    format!("{} / {}", selection.index() + 1, selection.door_count())
}

fn spawn_navigation_buttons(mut commands: Commands, selection: Res<Selection>) {
    for (direction, glyph) in [(StepDirection::Left, "<"), (StepDirection::Right, ">")] {
        let opacity = button_opacity(selection.can_step(direction));
        let (left, right) = match direction {
            StepDirection::Left => (Val::Px(BUTTON_EDGE_INSET), Val::Auto),
            StepDirection::Right => (Val::Auto, Val::Px(BUTTON_EDGE_INSET)),
        };

        commands.spawn((
            Name::new(format!("NavigationButton{direction:?}")),
            Button,
            NavigationButton { direction },
            Node {
                position_type: PositionType::Absolute,
                left,
                right,
                top: Val::Percent(50.0),
                // centers the button on the vertical midline
                margin: UiRect::top(Val::Px(-BUTTON_SIZE / 2.0)),
                width: Val::Px(BUTTON_SIZE),
                height: Val::Px(BUTTON_SIZE),
                border: UiRect::all(Val::Px(1.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK.with_alpha(BUTTON_BACKGROUND_ALPHA * opacity)),
            BorderColor::all(Color::WHITE.with_alpha(BUTTON_BORDER_ALPHA * opacity)),
            GlobalZIndex(NAVIGATION_Z_INDEX),
            children![(
                NavigationGlyph { direction },
                Text::new(glyph),
                TextFont {
                    font_size: BUTTON_GLYPH_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE.with_alpha(opacity)),
            )],
        ));
    }
}

fn spawn_position_indicator(mut commands: Commands, selection: Res<Selection>) {
    commands.spawn((
        Name::new("PositionIndicator"),
        PositionIndicator,
        Text::new(indicator_text(&selection)),
        TextFont {
            font_size: INDICATOR_FONT_SIZE,
            ..default()
        },
        TextColor(Color::BLACK.with_alpha(0.6)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(INDICATOR_BOTTOM_INSET),
            justify_self: JustifySelf::Center,
            ..default()
        },
        GlobalZIndex(NAVIGATION_Z_INDEX),
    ));
}

// a disabled control still receives clicks - `Selection` turns them into no-ops
fn press_navigation_buttons(
    buttons: Query<(&NavigationButton, &Interaction), (Changed<Interaction>, With<Button>)>,
    mut selection: ResMut<Selection>,
    mut changes: MessageWriter<SelectionChanged>,
) {
    for (button, interaction) in &buttons {
        if *interaction == Interaction::Pressed {
            navigate(button.direction, &mut selection, &mut changes);
        }
    }
}

fn update_button_availability(
    selection: Res<Selection>,
    mut buttons: Query<(&NavigationButton, &mut BackgroundColor, &mut BorderColor)>,
    mut glyphs: Query<(&NavigationGlyph, &mut TextColor)>,
) {
    if !selection.is_changed() {
        return;
    }

    for (button, mut background, mut border) in &mut buttons {
        let opacity = button_opacity(selection.can_step(button.direction));
        background.0 = Color::BLACK.with_alpha(BUTTON_BACKGROUND_ALPHA * opacity);
        *border = BorderColor::all(Color::WHITE.with_alpha(BUTTON_BORDER_ALPHA * opacity));
    }
    for (glyph, mut color) in &mut glyphs {
        color.0 = Color::WHITE.with_alpha(button_opacity(selection.can_step(glyph.direction)));
    }
}

fn update_position_indicator(
    mut selection_changes: MessageReader<SelectionChanged>,
    selection: Res<Selection>,
    mut indicator: Single<&mut Text, With<PositionIndicator>>,
) {
    if selection_changes.read().last().is_none() {
        return;
    }
    indicator.0 = indicator_text(&selection);
}
