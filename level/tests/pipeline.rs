use bevy_math::Vec3;
use level::{
    Cell, ExitTrigger, LevelSettings, WallKind, constants::PLAYER_TAG, generate_level, is_central,
};
use rand::{SeedableRng, rngs::StdRng};

const OPEN_ROOM: &str = r#"{
    "grid": [
        "AAAAAAAAA",
        "A_______A",
        "A_______R",
        "A_______T",
        "A_______A",
        "AAAAGAAAA"
    ],
    "lights": { "count": 4, "type": "Point" }
}"#;

fn build(payload: &str, seed: u64) -> level::Level {
    generate_level(payload, &LevelSettings::default(), &mut StdRng::seed_from_u64(seed)).expect("valid level")
}

#[test]
fn every_wall_cell_yields_one_wall_at_its_cell() {
    let level = build(OPEN_ROOM, 5);
    let settings = LevelSettings::default();

    let wall_cells: Vec<_> = level
        .grid
        .iter()
        .filter(|(_, _, cell)| matches!(cell, Cell::Wall(_)))
        .collect();
    assert_eq!(level.walls.len(), wall_cells.len());

    for (wall, (row, col, cell)) in level.walls.iter().zip(wall_cells) {
        assert_eq!((wall.row, wall.col), (row, col));
        assert_eq!(Cell::Wall(wall.kind), cell);
        assert_eq!(
            wall.position,
            Vec3::new(
                col as f32 * settings.cell_size,
                settings.wall_height / 2.0,
                row as f32 * settings.cell_size
            )
        );
    }

    let reflective = level.walls.iter().filter(|w| w.kind == WallKind::Reflective).count();
    let transparent = level.walls.iter().filter(|w| w.kind == WallKind::Transparent).count();
    assert_eq!((reflective, transparent), (1, 1));
}

#[test]
fn exit_zone_and_lights_are_generated() {
    let level = build(OPEN_ROOM, 11);

    assert_eq!(level.exits.len(), 1);
    assert_eq!((level.exits[0].row, level.exits[0].col), (5, 4));
    assert_eq!(level.exits[0].position, Vec3::new(8.0, 0.02, 10.0));

    assert_eq!(level.requested_lights, 4);
    assert_eq!(level.lights.len(), 4);
    for light in &level.lights {
        assert!(is_central(&level.grid, light.row, light.col));
    }
}

#[test]
fn corridor_maze_under_places_lights_without_error() {
    let payload = r#"{"grid":["AAAAA","A___A","A_A_A","A___A","AAGAA"],"lights":{"count":3,"type":"Point"}}"#;
    let level = build(payload, 2);

    assert_eq!(level.requested_lights, 3);
    assert!(level.lights.is_empty());
}

#[test]
fn example_grid_matches_reference_positions() {
    let payload = r#"{"grid":["AAA","A_A","AGA"]}"#;
    let level = build(payload, 0);

    assert_eq!(level.walls.len(), 7);
    assert_eq!(level.exits.len(), 1);
    let exit = &level.exits[0];
    assert_eq!(exit.position.x, 2.0);
    assert_eq!(exit.position.z, 4.0);
}

#[test]
fn oversized_light_count_is_best_effort() {
    let payload = r#"{"grid":["_____","_____","_____","_____","_____"],"lights":{"count":9223372036854775807,"type":"Point"}}"#;
    let level = build(payload, 4);

    assert_eq!(level.requested_lights, usize::try_from(i64::MAX).expect("64-bit usize"));
    assert!(level.lights.len() <= LevelSettings::default().light_placement_attempts as usize);
    assert!(!level.lights.is_empty());
}

#[test]
fn ragged_and_empty_grids_abort_generation() {
    let settings = LevelSettings::default();
    let mut rng = StdRng::seed_from_u64(0);

    assert!(generate_level(r#"{"grid":["AAA","AA"]}"#, &settings, &mut rng).is_err());
    assert!(generate_level(r#"{"grid":[]}"#, &settings, &mut rng).is_err());
    assert!(generate_level("", &settings, &mut rng).is_err());
}

#[test]
fn each_exit_trigger_fires_once() {
    let level = build(r#"{"grid":["G_G"]}"#, 0);
    let mut triggers = vec![ExitTrigger::default(); level.exits.len()];

    let mut fired = 0;
    for _ in 0..3 {
        for trigger in &mut triggers {
            let (next, now) = trigger.on_enter(PLAYER_TAG);
            *trigger = next;
            fired += usize::from(now);
        }
    }

    assert_eq!(fired, 2);
}
