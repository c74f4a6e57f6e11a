use bevy::prelude::*;

use super::DoorPositions;

/// Emitted whenever the selected door actually changes.
/// Rejected steps at either end of the row emit nothing.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub index: usize,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Left,
    Right,
}

/// Index of the door the camera is heading to.
///
/// Both steps clamp internally, so callers other than the on-screen buttons
/// (keyboard shortcuts for example) can never push the index out of range.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct Selection {
    index:      usize,
    last_index: usize,
}

impl Selection {
    pub fn new(doors: &DoorPositions) -> Self {
        Self {
            index:      0,
            last_index: doors.last_index(),
        }
    }

    pub const fn index(&self) -> usize { self.index }

    pub const fn door_count(&self) -> usize { self.last_index + 1 }

    pub const fn can_step_left(&self) -> bool { self.index > 0 }

    pub const fn can_step_right(&self) -> bool { self.index < self.last_index }

    pub const fn can_step(&self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Left => self.can_step_left(),
            StepDirection::Right => self.can_step_right(),
        }
    }

    /// Returns `true` if the index moved.
    pub const fn step_left(&mut self) -> bool {
        if self.can_step_left() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the index moved.
    pub const fn step_right(&mut self) -> bool {
        if self.can_step_right() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub const fn step(&mut self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Left => self.step_left(),
            StepDirection::Right => self.step_right(),
        }
    }
}

/// Applies a step from any input source and announces the change.
pub fn navigate(
    direction: StepDirection,
    selection: &mut Selection,
    changes: &mut MessageWriter<SelectionChanged>,
) {
    if selection.step(direction) {
        debug!("stepped {direction:?} to door {}", selection.index());
        changes.write(SelectionChanged {
            index: selection.index(),
        });
    } else {
        debug!(
            "ignored step {direction:?} at door {} of {}",
            selection.index(),
            selection.door_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_doors() -> Selection {
        Selection::new(&DoorPositions::new(vec![0.0, 4.0, 8.0]).unwrap())
    }

    #[test]
    fn starts_at_the_first_door() {
        let selection = three_doors();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.door_count(), 3);
        assert!(!selection.can_step_left());
        assert!(selection.can_step_right());
    }

    #[test]
    fn step_left_at_first_door_is_a_no_op() {
        let mut selection = three_doors();
        assert!(!selection.step_left());
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn step_right_stops_at_last_door() {
        let mut selection = three_doors();
        assert!(selection.step_right());
        assert!(selection.step_right());
        assert!(!selection.step_right());
        assert_eq!(selection.index(), 2);
        assert!(!selection.can_step_right());
        assert!(selection.can_step_left());
    }

    #[test]
    fn index_never_leaves_bounds_under_any_click_sequence() {
        let mut selection = three_doors();
        // deterministic pseudo-random walk that hammers both ends
        let pattern = [
            StepDirection::Left,
            StepDirection::Left,
            StepDirection::Right,
            StepDirection::Right,
            StepDirection::Right,
            StepDirection::Right,
            StepDirection::Left,
            StepDirection::Right,
            StepDirection::Right,
        ];
        for direction in pattern.iter().cycle().take(200) {
            let before = selection.index();
            let moved = selection.step(*direction);
            assert!(selection.index() <= 2);
            assert_eq!(moved, selection.index() != before);
        }
    }

    #[test]
    fn single_door_cannot_move() {
        let mut selection = Selection::new(&DoorPositions::single());
        assert!(!selection.step_left());
        assert!(!selection.step_right());
        assert_eq!(selection.index(), 0);
    }
}
