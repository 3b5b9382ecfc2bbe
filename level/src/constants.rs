// ============================================================================
// Grid Symbols
// ============================================================================

pub const SYMBOL_OPEN: char = '_';
pub const SYMBOL_EXIT: char = 'G';
pub const SYMBOL_ABSORBING: char = 'A';
pub const SYMBOL_REFLECTIVE: char = 'R';
pub const SYMBOL_TRANSPARENT: char = 'T';

// ============================================================================
// Grid & Walls
// ============================================================================

pub const CELL_SIZE: f32 = 2.0; // Corridor width in meters
pub const WALL_HEIGHT: f32 = 2.0;
pub const WALL_THICKNESS: f32 = 0.25;

// ============================================================================
// Exit Marker
// ============================================================================

pub const EXIT_TEXT: &str = "END";
pub const EXIT_LABEL_HEIGHT: f32 = 0.02; // Just above the floor to avoid z-fighting
pub const EXIT_EXTENT: f32 = 1.6; // Trigger and label size on X and Z (meters)
pub const EXIT_TRIGGER_HEIGHT: f32 = 0.2;
pub const EXIT_FONT_SIZE: f32 = 10.0;
pub const EXIT_COLOR: [f32; 3] = [1.0, 0.95, 0.2]; // Yellow

// Identity tag an entering body must carry to complete the level
pub const PLAYER_TAG: &str = "Player";

// ============================================================================
// Floor Lights
// ============================================================================

pub const LIGHT_KIND_POINT: &str = "Point";
pub const LIGHT_INTENSITY: f32 = 12000.0; // lumens
pub const LIGHT_RANGE_CELLS: f32 = 6.0; // range = cell size * this
pub const LIGHT_COLOR: [f32; 3] = [1.0, 0.93, 0.6];
pub const LIGHT_EMISSIVE_STRENGTH: f32 = 10.0;
pub const LIGHT_DISK_DIAMETER: f32 = 0.35;
pub const LIGHT_DISK_HEIGHT: f32 = 0.05;

// Draws allowed before light placement gives up
pub const LIGHT_PLACEMENT_ATTEMPTS: u32 = 1000;
