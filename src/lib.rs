// Library exports for the Battlesnake bot
// This allows the server binary, the replay tool and the integration tests to share the core logic

#[macro_use]
extern crate rocket;

pub mod area;
pub mod board;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod handler;
pub mod replay;
pub mod safety;
pub mod selector;
pub mod server;
pub mod types;
