use bevy::prelude::*;

use level::ExitZone;

// Trigger volume of an exit marker
#[derive(Component, Debug, Clone)]
pub struct ExitVolume(pub ExitZone);

// Box around a tagged body, relative to its transform
#[derive(Component, Debug, Clone, Copy)]
pub struct Body {
    pub center_offset: Vec3,
    pub half_extents: Vec3,
}

impl Body {
    #[must_use]
    pub fn center(&self, translation: Vec3) -> Vec3 {
        translation + self.center_offset
    }
}
