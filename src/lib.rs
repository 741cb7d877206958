pub mod cli;
pub mod config;
pub mod fetch;
pub mod headless;
pub mod lifecycle;
pub mod logging;
pub mod ui;
