use bevy::prelude::*;

/// Frame ordering for the gallery.
///
/// `CameraMotion` advances the running transition before it retargets, so a
/// selection change always starts from the position written this frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum GallerySet {
    UserInput,
    CameraMotion,
    CameraAim,
    Presentation,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GallerySet::UserInput,
                GallerySet::CameraMotion,
                GallerySet::CameraAim,
                GallerySet::Presentation,
            )
                .chain(),
        );
    }
}
