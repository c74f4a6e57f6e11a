use bevy::prelude::*;

use super::constants::DOOR_CENTER_HEIGHT;
use super::constants::DOOR_FACE_DEPTH;
use super::constants::DOOR_FRAME_COLOR;
use super::constants::DOOR_FRAME_SIZE;
use super::constants::DOOR_LABEL_COLOR;
use super::constants::DOOR_LABEL_HEIGHT;
use super::constants::DOOR_LABEL_SIZE;
use super::constants::DOOR_PANEL_COLOR;
use super::constants::DOOR_PANEL_SELECTED_COLOR;
use super::constants::DOOR_PANEL_SELECTED_EMISSIVE;
use super::constants::DOOR_PANEL_SIZE;
use super::constants::FLOOR_COLOR;
use super::constants::FLOOR_SIZE;
use crate::gallery::DoorPositions;
use crate::gallery::Selection;
use crate::gallery::SelectionChanged;
use crate::schedule::GallerySet;

pub struct DoorsPlugin;

impl Plugin for DoorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_floor, spawn_doors))
            .add_systems(Update, highlight_selected_panel.in_set(GallerySet::Presentation));
    }
}

/// Which door a panel belongs to
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct DoorPanel {
    pub index: usize,
}

/// Shared panel materials; panels swap handles instead of mutating assets
#[derive(Resource, Debug, Clone)]
struct PanelMaterials {
    idle:        Handle<StandardMaterial>,
    highlighted: Handle<StandardMaterial>,
}

impl PanelMaterials {
    fn for_panel(&self, panel: DoorPanel, selected: usize) -> Handle<StandardMaterial> {
        if panel.index == selected {
            self.highlighted.clone()
        } else {
            self.idle.clone()
        }
    }
}

fn matte(rgb: [u8; 3]) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(rgb[0], rgb[1], rgb[2]),
        perceptual_roughness: 0.9,
        ..default()
    }
}

fn spawn_floor(
    mut commands: Commands,
    doors: Res<DoorPositions>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(matte(FLOOR_COLOR))),
        Transform::from_xyz(doors.center(), 0.0, 0.0),
    ));
}

fn spawn_doors(
    mut commands: Commands,
    doors: Res<DoorPositions>,
    selection: Res<Selection>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let frame_mesh = meshes.add(Cuboid::from_size(DOOR_FRAME_SIZE));
    let panel_mesh = meshes.add(Cuboid::from_size(DOOR_PANEL_SIZE));
    let label_mesh = meshes.add(Cuboid::from_size(DOOR_LABEL_SIZE));

    let frame_material = materials.add(matte(DOOR_FRAME_COLOR));
    let label_material = materials.add(matte(DOOR_LABEL_COLOR));

    let mut highlighted = matte(DOOR_PANEL_SELECTED_COLOR);
    highlighted.emissive = LinearRgba::gray(DOOR_PANEL_SELECTED_EMISSIVE);
    let panel_materials = PanelMaterials {
        idle:        materials.add(matte(DOOR_PANEL_COLOR)),
        highlighted: materials.add(highlighted),
    };

    for (index, x) in doors.iter().enumerate() {
        let panel = DoorPanel { index };
        commands.spawn((
            Name::new(format!("Door{index}")),
            Transform::from_xyz(x, 0.0, 0.0),
            Visibility::default(),
            children![
                (
                    Name::new("Frame"),
                    Mesh3d(frame_mesh.clone()),
                    MeshMaterial3d(frame_material.clone()),
                    Transform::from_xyz(0.0, DOOR_CENTER_HEIGHT, 0.0),
                ),
                (
                    Name::new("Panel"),
                    panel,
                    Mesh3d(panel_mesh.clone()),
                    MeshMaterial3d(panel_materials.for_panel(panel, selection.index())),
                    Transform::from_xyz(0.0, DOOR_CENTER_HEIGHT, DOOR_FACE_DEPTH),
                ),
                (
                    Name::new("Label"),
                    Mesh3d(label_mesh.clone()),
                    MeshMaterial3d(label_material.clone()),
                    Transform::from_xyz(0.0, DOOR_LABEL_HEIGHT, DOOR_FACE_DEPTH),
                ),
            ],
        ));
    }

    commands.insert_resource(panel_materials);
}

fn highlight_selected_panel(
    mut selection_changes: MessageReader<SelectionChanged>,
    panel_materials: Option<Res<PanelMaterials>>,
    mut panels: Query<(&DoorPanel, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Some(change) = selection_changes.read().last() else {
        return;
    };
    let Some(panel_materials) = panel_materials else {
        return;
    };

    for (panel, mut material) in &mut panels {
        material.0 = panel_materials.for_panel(*panel, change.index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_selected_panel_is_highlighted() {
        let mut materials = Assets::<StandardMaterial>::default();
        let panel_materials = PanelMaterials {
            idle:        materials.add(matte(DOOR_PANEL_COLOR)),
            highlighted: materials.add(matte(DOOR_PANEL_SELECTED_COLOR)),
        };
        let selected = panel_materials.for_panel(DoorPanel { index: 1 }, 1);
        let other = panel_materials.for_panel(DoorPanel { index: 0 }, 1);
        assert_eq!(selected, panel_materials.highlighted);
        assert_eq!(other, panel_materials.idle);
    }
}
