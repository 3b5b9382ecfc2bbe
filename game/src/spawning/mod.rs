pub mod exit;
pub mod lights;
pub mod player;
pub mod walls;

pub use exit::{setup_exit_label_rendering, spawn_exit};
pub use lights::{FloorLightAssets, spawn_floor_light};
pub use player::spawn_local_player;
pub use walls::{WallMaterials, spawn_wall};
