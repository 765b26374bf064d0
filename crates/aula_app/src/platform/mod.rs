pub mod commands;
pub mod config;
pub mod effects;
mod input;
pub mod logging;
