// extern crate definitions
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate strum_macros;

// internal mods
pub mod config;
pub mod history;
pub mod lol_api;
pub mod render;
pub mod server;
pub mod util;
mod errors;

pub use errors::*;
