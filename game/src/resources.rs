use bevy::prelude::*;

// ============================================================================
// Client Resources
// ============================================================================

// Input settings from the command line
#[derive(Resource, Default)]
pub struct InputSettings {
    pub invert_pitch: bool,
}

// Current look direction of the local player
#[derive(Resource, Default)]
pub struct LocalPlayerView {
    pub yaw: f32,
    pub pitch: f32,
}

