pub mod collision;
pub mod config;
pub mod constants;
pub mod grid;
pub mod layout;
pub mod lights;
pub mod pipeline;
pub mod trigger;

pub use collision::slide_body;
pub use config::{LevelSettings, load_level_file};
pub use grid::{Cell, Grid, LevelDescription, LightKind, LightSpec, WallKind, parse_level};
pub use layout::{ExitZone, LevelLayout, WallPiece, build_layout};
pub use lights::{PlacedLight, is_central, place_lights};
pub use pipeline::{Level, generate_level};
pub use trigger::{BodyTag, ExitTrigger, LevelCompleted};
