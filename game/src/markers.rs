use bevy::prelude::*;

// ============================================================================
// Player Markers
// ============================================================================

// Marker component for the local player (also carries the main camera)
#[derive(Component)]
pub struct LocalPlayerMarker;

// ============================================================================
// Map Markers
// ============================================================================

// Marker component for walls
#[derive(Component)]
pub struct WallMarker;

// Marker component for exit labels
#[derive(Component)]
pub struct ExitLabelMarker;

// Marker component for floor point lights
#[derive(Component)]
pub struct FloorLightMarker;

// Marker component for the emissive disk under a floor light
#[derive(Component)]
pub struct LightDiskMarker;

// ============================================================================
// UI Markers
// ============================================================================

// Marker component for the completion banner
#[derive(Component)]
pub struct CompletionBannerMarker;
