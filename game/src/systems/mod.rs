pub mod exit;
pub mod input;
pub mod map;
pub mod ui;
