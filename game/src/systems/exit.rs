use bevy::prelude::*;
use std::collections::HashSet;

use crate::components::{Body, ExitVolume};
use level::{BodyTag, ExitTrigger, LevelCompleted, trigger::handle_enter};

// ============================================================================
// Exit Trigger System
// ============================================================================

// Detect tagged bodies entering exit volumes and drive each exit's one-shot trigger.
// Only an outside -> inside transition counts as an enter event.
pub fn exit_trigger_system(
    bodies: Query<(Entity, &GlobalTransform, &Body, &BodyTag)>,
    mut exits: Query<(Entity, &ExitVolume, &mut ExitTrigger)>,
    mut inside: Local<HashSet<(Entity, Entity)>>,
    mut completed: MessageWriter<LevelCompleted>,
) {
    for (exit_entity, volume, mut trigger) in &mut exits {
        for (body_entity, transform, body, tag) in &bodies {
            let key = (exit_entity, body_entity);
            let center = body.center(transform.translation());

            if !volume.0.overlaps(center, body.half_extents) {
                inside.remove(&key);
                continue;
            }

            // Already inside since an earlier frame
            if !inside.insert(key) {
                continue;
            }

            if handle_enter(&mut trigger, &tag.0, &volume.0.name()) {
                completed.write(LevelCompleted {
                    row: volume.0.row,
                    col: volume.0.col,
                });
            }
        }
    }
}
