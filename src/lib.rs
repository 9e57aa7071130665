pub mod config;
pub mod core;
pub mod enrollment;
pub mod errors;
pub mod extensions;
pub mod grid;
pub mod logging;
pub mod parser;
pub mod ui;
