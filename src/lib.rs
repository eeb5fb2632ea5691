// Public API for integration tests and potential library usage

pub mod api;
pub mod bank;
pub mod config;
pub mod game;
pub mod ladder;
pub mod protocol;
pub mod random;
pub mod state;
pub mod types;
