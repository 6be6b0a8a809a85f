pub mod analysis;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod strategies;
