use dioxus_logger::tracing::Level;
use std::str::FromStr;

/// `LOG_LEVEL` ("debug", "warn", ...) overrides the default INFO level.
fn log_level() -> Level {
    std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| Level::from_str(level.trim()).ok())
        .unwrap_or(Level::INFO)
}

fn main() {
    dioxus_logger::init(log_level()).expect("failed to init logger");
    dioxus::launch(ui::App);
}
