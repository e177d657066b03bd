pub mod config;
pub mod household;
pub mod logging;
pub mod ui;
