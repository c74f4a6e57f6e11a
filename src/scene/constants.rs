//! Door geometry, colors and lighting

use bevy::math::Vec3;

/// Side length of the square floor plane
pub const FLOOR_SIZE: f32 = 60.0;

/// Outer frame of each door (width, height, depth)
pub const DOOR_FRAME_SIZE: Vec3 = Vec3::new(1.35, 2.35, 0.12);

/// Panel set into the frame, slightly proud of it
pub const DOOR_PANEL_SIZE: Vec3 = Vec3::new(1.15, 2.1, 0.05);

/// Name plate above the panel
pub const DOOR_LABEL_SIZE: Vec3 = Vec3::new(0.8, 0.18, 0.05);

/// Height of the frame and panel centers
pub const DOOR_CENTER_HEIGHT: f32 = 1.1;

pub const DOOR_LABEL_HEIGHT: f32 = 2.45;

/// Depth offset of panel and label in front of the frame
pub const DOOR_FACE_DEPTH: f32 = 0.07;

pub const FLOOR_COLOR: [u8; 3] = [0xff, 0xff, 0xff];
pub const DOOR_FRAME_COLOR: [u8; 3] = [0xef, 0xef, 0xef];
pub const DOOR_PANEL_COLOR: [u8; 3] = [0xf1, 0xf1, 0xf1];
pub const DOOR_PANEL_SELECTED_COLOR: [u8; 3] = [0xe6, 0xe6, 0xe6];
pub const DOOR_LABEL_COLOR: [u8; 3] = [0xff, 0xff, 0xff];

/// Emissive strength of the selected panel, picked up by bloom
pub const DOOR_PANEL_SELECTED_EMISSIVE: f32 = 0.35;

pub const SUN_POSITION: Vec3 = Vec3::new(5.0, 8.0, 5.0);

pub const SUN_ILLUMINANCE: f32 = 9_000.0;
