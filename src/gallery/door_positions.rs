use bevy::prelude::*;

use super::GalleryError;

/// The horizontal offsets of every selectable door, in display order.
///
/// Built once at startup and never mutated afterwards. Always holds at least
/// one finite offset and no offset appears twice.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct DoorPositions {
    offsets: Vec<f32>,
}

impl DoorPositions {
    pub fn new(offsets: Vec<f32>) -> Result<Self, GalleryError> {
        if offsets.is_empty() {
            return Err(GalleryError::NoDoors);
        }

        for (index, offset) in offsets.iter().enumerate() {
            if !offset.is_finite() {
                return Err(GalleryError::NonFiniteOffset {
                    index,
                    offset: *offset,
                });
            }
            // lists are tiny - a quadratic scan is fine
            if let Some(first) = offsets[..index].iter().position(|other| other == offset) {
                return Err(GalleryError::DuplicateOffset {
                    first,
                    second: index,
                    offset: *offset,
                });
            }
        }

        Ok(Self { offsets })
    }

    /// A gallery with a single door at the origin, used when the configured
    /// list is rejected.
    pub fn single() -> Self {
        Self {
            offsets: vec![0.0],
        }
    }

    pub fn len(&self) -> usize { self.offsets.len() }

    pub fn last_index(&self) -> usize { self.offsets.len() - 1 }

    pub fn offset(&self, index: usize) -> Option<f32> { self.offsets.get(index).copied() }

    pub fn first(&self) -> f32 { self.offsets[0] }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ { self.offsets.iter().copied() }

    /// Midpoint between the outermost doors, used to center the floor
    pub fn center(&self) -> f32 {
        let (min, max) = self
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), x| {
                (min.min(x), max.max(x))
            });
        (min + max) / 2.0
    }
}

impl Default for DoorPositions {
    fn default() -> Self { Self::single() }
}
