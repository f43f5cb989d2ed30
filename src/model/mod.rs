pub mod event;
pub mod game;
pub mod game_type;
pub mod schedule;
pub mod status;
pub mod team;
