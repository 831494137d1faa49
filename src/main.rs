use part_inspector::app::InspectorApp;
use part_inspector::config::Settings;
use part_inspector::error::AppError;
use tracing::Level;

fn init_logging(level: Level) {
    tracing_subscriber::fmt().with_max_level(level).init();
}

fn main() -> Result<(), AppError> {
    let settings = Settings::load()?;
    init_logging(settings.log_level()?);
    InspectorApp::start_gui(settings)
}
