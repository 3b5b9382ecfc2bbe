use bevy_ecs::{message::Message, prelude::*};
use tracing::{debug, info};

use crate::constants::PLAYER_TAG;

// ============================================================================
// Components & Messages
// ============================================================================

/// Identity tag carried by bodies that can enter trigger volumes.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct BodyTag(pub String);

impl BodyTag {
    #[must_use]
    pub fn player() -> Self {
        Self(PLAYER_TAG.to_string())
    }
}

/// One-shot completion trigger owned by an exit zone. Never returns to `Armed`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExitTrigger {
    #[default]
    Armed,
    Fired,
}

// Emitted once per exit when the player first enters it
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompleted {
    pub row: usize,
    pub col: usize,
}

// ============================================================================
// State Machine
// ============================================================================

impl ExitTrigger {
    /// Apply an enter event from a body carrying `tag`. Returns the next state and
    /// whether this event fired the trigger.
    #[must_use]
    pub fn on_enter(self, tag: &str) -> (Self, bool) {
        match self {
            Self::Fired => (Self::Fired, false),
            Self::Armed if tag == PLAYER_TAG => (Self::Fired, true),
            Self::Armed => (Self::Armed, false),
        }
    }

    #[must_use]
    pub const fn is_fired(self) -> bool {
        matches!(self, Self::Fired)
    }
}

// Advance a trigger in place; returns true only on the firing event. A fired trigger
// ignores further events without logging them.
pub fn handle_enter(trigger: &mut ExitTrigger, tag: &str, name: &str) -> bool {
    if trigger.is_fired() {
        return false;
    }
    debug!("{name} entered by {tag}");
    let (next, fired) = trigger.on_enter(tag);
    *trigger = next;
    if fired {
        info!("maze completed at {name}");
    }
    fired
}
