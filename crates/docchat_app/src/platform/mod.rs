mod app;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;
