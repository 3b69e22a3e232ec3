mod app;
mod config;
mod effects;
mod event;
mod files;
mod input;
mod logging;
mod ui;

pub use app::run_app;
