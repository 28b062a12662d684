pub mod core;
pub mod grid;
pub mod projection;
pub mod config;
pub mod render;
