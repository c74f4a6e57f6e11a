//! Eased door-to-door camera slide.
//!
//! Only the horizontal axis animates. A selection change retargets the slide
//! from wherever the camera currently is, so rapid clicks bend the path
//! instead of snapping it.

use bevy::prelude::*;

use super::GalleryCamera;
use super::config::CameraConfig;
use crate::gallery::DoorPositions;
use crate::gallery::SelectionChanged;
use crate::schedule::GallerySet;

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (advance_camera_transition, retarget_camera_transition)
                .chain()
                .in_set(GallerySet::CameraMotion),
        );
    }
}

/// Symmetric cubic ease: `4t³` below the midpoint, `1 - (-2t + 2)³ / 2` above.
/// Point-symmetric about (0.5, 0.5) and monotonic on [0, 1].
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0f32).mul_add(t, 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Reflect, Default, Debug, PartialEq)]
enum TransitionState {
    Transitioning {
        start_x:  f32,
        progress: f32,
    },
    #[default]
    Idle,
}

/// Per-camera slide state. Owned by the camera entity and only touched by
/// the systems in this module.
#[derive(Component, Reflect, Clone, Debug, PartialEq)]
#[reflect(Component)]
pub struct CameraTransition {
    target_x:      f32,
    duration_secs: f32,
    state:         TransitionState,
}

impl CameraTransition {
    /// A camera resting at `x` with nothing in flight
    pub const fn settled_at(x: f32) -> Self {
        Self {
            target_x:      x,
            duration_secs: 0.0,
            state:         TransitionState::Idle,
        }
    }

    pub const fn target_x(&self) -> f32 { self.target_x }

    pub const fn is_idle(&self) -> bool { matches!(self.state, TransitionState::Idle) }

    /// Pre-easing progress in [0, 1]; 1 when idle
    pub const fn progress(&self) -> f32 {
        match self.state {
            TransitionState::Transitioning { progress, .. } => progress,
            TransitionState::Idle => 1.0,
        }
    }

    /// Where the camera is right now. Exactly the target once idle.
    pub fn current_x(&self) -> f32 {
        match self.state {
            TransitionState::Transitioning { start_x, progress } => {
                (self.target_x - start_x).mul_add(ease_in_out_cubic(progress), start_x)
            },
            TransitionState::Idle => self.target_x,
        }
    }

    /// Starts a new slide from `current_x`, which must be the camera's live
    /// position rather than the previous start or target.
    pub const fn retarget(&mut self, current_x: f32, target_x: f32, duration_secs: f32) {
        self.target_x = target_x;
        self.duration_secs = duration_secs;
        self.state = TransitionState::Transitioning {
            start_x:  current_x,
            progress: 0.0,
        };
    }

    /// Moves progress forward by `delta_secs` and returns the new position.
    /// Zero, negative and NaN deltas leave progress where it is.
    pub fn advance(&mut self, delta_secs: f32) -> f32 {
        let delta_secs = if delta_secs > 0.0 { delta_secs } else { 0.0 };

        if let TransitionState::Transitioning {
            ref mut progress, ..
        } = self.state
        {
            *progress = if self.duration_secs > 0.0 {
                (*progress + delta_secs / self.duration_secs).min(1.0)
            } else {
                1.0
            };

            if *progress >= 1.0 {
                self.state = TransitionState::Idle;
            }
        }

        self.current_x()
    }
}

fn advance_camera_transition(
    time: Res<Time>,
    camera_config: Res<CameraConfig>,
    mut camera: Single<(&mut Transform, &mut CameraTransition), With<GalleryCamera>>,
) {
    let (ref mut transform, ref mut transition) = *camera;
    let x = transition.advance(time.delta_secs());
    transform.translation = camera_config.eye(x);
}

fn retarget_camera_transition(
    mut selection_changes: MessageReader<SelectionChanged>,
    doors: Res<DoorPositions>,
    camera_config: Res<CameraConfig>,
    mut camera: Single<(&Transform, &mut CameraTransition), With<GalleryCamera>>,
) {
    // several clicks in one frame collapse into the last one
    let Some(change) = selection_changes.read().last() else {
        return;
    };
    let Some(target_x) = doors.offset(change.index) else {
        return;
    };

    let (transform, ref mut transition) = *camera;
    let from_x = transform.translation.x;
    if transition.is_idle() {
        debug!("camera slide {from_x:.3} -> {target_x:.3}");
    } else {
        debug!(
            "camera slide {from_x:.3} -> {target_x:.3}, interrupting at progress {:.2}",
            transition.progress()
        );
    }
    transition.retarget(from_x, target_x, camera_config.transition_duration_secs);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;

    const DURATION: f32 = 0.85;

    fn sliding(from: f32, to: f32) -> CameraTransition {
        let mut transition = CameraTransition::settled_at(from);
        transition.retarget(from, to, DURATION);
        transition
    }

    #[test]
    fn ease_hits_its_fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn ease_is_point_symmetric_and_monotonic() {
        let mut previous = ease_in_out_cubic(0.0);
        for step in 1..=1000_u16 {
            let t = f32::from(step) / 1000.0;
            let eased = ease_in_out_cubic(t);
            assert!(eased >= previous, "not monotonic at t = {t}");
            assert!((eased + ease_in_out_cubic(1.0 - t) - 1.0).abs() < 1e-5);
            previous = eased;
        }
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn starts_exactly_at_the_start() {
        let mut transition = sliding(0.0, 4.0);
        assert_eq!(transition.current_x(), 0.0);
        assert_eq!(transition.advance(0.0), 0.0);
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn half_duration_is_the_midpoint() {
        let mut transition = sliding(0.0, 4.0);
        assert_eq!(transition.advance(0.425), 2.0);
        assert!(!transition.is_idle());
    }

    #[test]
    fn full_duration_lands_exactly_and_holds() {
        let mut transition = sliding(0.1, 0.7);
        assert_eq!(transition.advance(DURATION), 0.7);
        assert!(transition.is_idle());
        for _ in 0..10 {
            assert_eq!(transition.advance(1.0 / 60.0), 0.7);
        }
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn overshooting_the_duration_clamps_to_target() {
        let mut transition = sliding(8.0, 4.0);
        assert_eq!(transition.advance(5.0), 4.0);
    }

    #[test]
    fn position_is_monotonic_without_overshoot() {
        for (from, to) in [(0.0, 4.0), (8.0, 4.0), (-3.0, 12.5)] {
            let mut transition = sliding(from, to);
            let mut previous = from;
            while !transition.is_idle() {
                let x = transition.advance(1.0 / 144.0);
                assert!((x - previous) * (to - from) >= 0.0, "moved backwards");
                assert!(x >= from.min(to) && x <= from.max(to), "overshot to {x}");
                previous = x;
            }
            assert_eq!(previous, to);
        }
    }

    #[test]
    fn negative_and_nan_deltas_do_not_move_the_camera() {
        let mut transition = sliding(0.0, 4.0);
        let x = transition.advance(0.2);
        assert_eq!(transition.advance(-0.5), x);
        assert_eq!(transition.advance(f32::NAN), x);
        assert_eq!(transition.advance(0.0), x);
    }

    #[test]
    fn interruption_starts_from_the_live_position() {
        let mut transition = sliding(0.0, 8.0);
        let live = transition.advance(0.3);
        assert!(live > 0.0 && live < 8.0);

        transition.retarget(transition.current_x(), 4.0, DURATION);

        // no jump at the moment of interruption
        assert_eq!(transition.current_x(), live);
        assert_eq!(transition.advance(0.0), live);
        assert_eq!(transition.target_x(), 4.0);
        assert_eq!(transition.advance(DURATION), 4.0);
    }

    #[test]
    fn zero_duration_completes_on_next_advance() {
        let mut transition = CameraTransition::settled_at(0.0);
        transition.retarget(0.0, 4.0, 0.0);
        assert_eq!(transition.current_x(), 0.0);
        assert_eq!(transition.advance(0.0), 4.0);
    }

    fn camera_app(frame: Duration) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
            .insert_resource(DoorPositions::new(vec![0.0, 4.0, 8.0]).unwrap())
            .init_resource::<CameraConfig>()
            .add_message::<SelectionChanged>()
            .add_plugins(TransitionPlugin);

        let config = CameraConfig::default();
        let camera = app
            .world_mut()
            .spawn((
                GalleryCamera,
                Transform::from_translation(config.eye(0.0)),
                CameraTransition::settled_at(0.0),
            ))
            .id();
        // first update only primes the clock
        app.update();
        (app, camera)
    }

    fn camera_x(app: &App, camera: Entity) -> f32 {
        app.world().get::<Transform>(camera).unwrap().translation.x
    }

    #[test]
    fn idle_camera_stays_put_across_frames() {
        let (mut app, camera) = camera_app(Duration::from_millis(100));
        for _ in 0..5 {
            app.update();
            assert_eq!(camera_x(&app, camera), 0.0);
        }
    }

    #[test]
    fn selection_change_slides_the_camera_to_the_new_door() {
        let (mut app, camera) = camera_app(Duration::from_millis(100));

        app.world_mut().write_message(SelectionChanged { index: 1 });
        app.update();
        // retargeted this frame, motion starts on the next
        assert_eq!(camera_x(&app, camera), 0.0);

        app.update();
        let early = camera_x(&app, camera);
        assert!(early > 0.0 && early < 2.0);

        for _ in 0..10 {
            app.update();
        }
        assert_eq!(camera_x(&app, camera), 4.0);
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert_eq!(transform.translation.y, 1.6);
        assert_eq!(transform.translation.z, 5.2);
    }

    #[test]
    fn reversing_mid_slide_never_jumps() {
        let (mut app, camera) = camera_app(Duration::from_millis(50));

        app.world_mut().write_message(SelectionChanged { index: 2 });
        for _ in 0..8 {
            app.update();
        }
        let before = camera_x(&app, camera);
        assert!(before > 0.0 && before < 8.0);

        app.world_mut().write_message(SelectionChanged { index: 1 });
        app.update();
        let transition = app.world().get::<CameraTransition>(camera).unwrap();
        // this frame's advance already ran before the retarget
        let start = camera_x(&app, camera);
        assert_eq!(transition.current_x(), start);
        assert_eq!(transition.target_x(), 4.0);
        assert!(start >= before && start < 8.0);

        for _ in 0..40 {
            app.update();
        }
        assert_eq!(camera_x(&app, camera), 4.0);
    }
}
