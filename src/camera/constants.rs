//! Constants for the camera module

/// Seconds for one door-to-door slide
pub const CAMERA_TRANSITION_DURATION_SECS: f32 = 0.85;

/// Eye height above the floor, unaffected by transitions
pub const CAMERA_HEIGHT: f32 = 1.6;

/// Distance from the door plane (z = 0) to the camera
pub const CAMERA_DEPTH: f32 = 5.2;

/// Height of the point the camera looks at on the door plane
pub const CAMERA_LOOK_AT_HEIGHT: f32 = 1.2;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
