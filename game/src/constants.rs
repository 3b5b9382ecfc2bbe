use bevy::math::Vec3;

// ============================================================================
// Client Game Constants
// ============================================================================

pub const DEFAULT_LEVEL_PATH: &str = "assets/labyrinth.json";
pub const LOG_FILTER: &str = "wgpu=error,naga=warn";

// First-person view camera settings
pub const FPV_CAMERA_FOV_DEGREES: f32 = 90.0;

// Mouse sensitivity as radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// Player body (meters)
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_EYE_HEIGHT: f32 = 1.6;
pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, PLAYER_HEIGHT / 2.0, 0.3);

// Speeds (meters per second)
pub const SPEED_WALK: f32 = 3.0;
pub const SPEED_RUN: f32 = 6.0;

// Scene lighting
pub const LIGHT_DIRECTIONAL_BRIGHTNESS: f32 = 1500.0;
pub const FLOOR_COLOR: [f32; 3] = [0.25, 0.25, 0.27];

// Wall materials
pub const WALL_ABSORBING_COLOR: [f32; 3] = [0.05, 0.05, 0.06];
pub const WALL_REFLECTIVE_COLOR: [f32; 3] = [0.85, 0.87, 0.9];
pub const WALL_REFLECTIVE_ROUGHNESS: f32 = 0.05;
pub const WALL_TRANSPARENT_COLOR: [f32; 4] = [0.6, 0.8, 1.0, 0.3];

// Exit label texture
pub const LABEL_TEXTURE_SIZE: u32 = 256; // square, in pixels
pub const LABEL_FONT_SCALE: f32 = 12.0; // configured font size -> pixels on the label texture
pub const LABEL_BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

// Completion banner
pub const BANNER_TEXT: &str = "Maze completed!";
pub const BANNER_FONT_SIZE: f32 = 48.0;
