mod door_positions;
mod selection;

use bevy::prelude::*;
use thiserror::Error;

pub use door_positions::DoorPositions;
pub use selection::Selection;
pub use selection::SelectionChanged;
pub use selection::StepDirection;
pub use selection::navigate;

/// Offsets used when no other row is configured
pub const DEFAULT_DOOR_OFFSETS: [f32; 3] = [0.0, 4.0, 8.0];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalleryError {
    #[error("the gallery needs at least one door")]
    NoDoors,
    #[error("door {index} has a non-finite offset ({offset})")]
    NonFiniteOffset { index: usize, offset: f32 },
    #[error("doors {first} and {second} share the offset {offset}")]
    DuplicateOffset {
        first:  usize,
        second: usize,
        offset: f32,
    },
}

/// Owns the door row and the selected index.
/// The row is fixed when the plugin is built.
pub struct GalleryPlugin {
    pub door_offsets: Vec<f32>,
}

impl Default for GalleryPlugin {
    fn default() -> Self {
        Self {
            door_offsets: DEFAULT_DOOR_OFFSETS.to_vec(),
        }
    }
}

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        let doors = resolve_doors(self.door_offsets.clone());
        info!("gallery initialized with {} door(s)", doors.len());

        app.insert_resource(Selection::new(&doors))
            .insert_resource(doors)
            .add_message::<SelectionChanged>();
    }
}

fn resolve_doors(offsets: Vec<f32>) -> DoorPositions {
    DoorPositions::new(offsets).unwrap_or_else(|error| {
        error!("rejected door configuration: {error}; falling back to a single door");
        DoorPositions::single()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_installs_selection_for_configured_row() {
        let mut app = App::new();
        app.add_plugins(GalleryPlugin {
            door_offsets: vec![-2.0, 2.0],
        });

        let doors = app.world().resource::<DoorPositions>();
        assert_eq!(doors.len(), 2);
        let selection = app.world().resource::<Selection>();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.door_count(), 2);
    }

    #[test]
    fn empty_configuration_clamps_to_one_door() {
        let mut app = App::new();
        app.add_plugins(GalleryPlugin {
            door_offsets: Vec::new(),
        });

        assert_eq!(
            app.world().resource::<DoorPositions>(),
            &DoorPositions::single()
        );
        assert_eq!(app.world().resource::<Selection>().door_count(), 1);
    }

    #[test]
    fn error_messages_name_the_offending_doors() {
        let error = DoorPositions::new(vec![1.0, 1.0]).unwrap_err();
        assert_eq!(error.to_string(), "doors 0 and 1 share the offset 1");
    }
}
