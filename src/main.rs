//! TrayDrop entry point.
//!
//! Loads configuration, sets up logging, opens the record container and
//! hands over to the platform main loop.

use std::process::ExitCode;

use traydrop::storage::{load_or_default, RecordContainer};
use traydrop::{subscribe_upload_intake, AppContext, StartupError};

fn main() -> ExitCode {
    let (config, config_error) = load_or_default();

    let rust_log = std::env::var("RUST_LOG").ok();
    env_logger::Builder::new()
        .parse_filters(&traydrop::log_filter(&config.log_level, rust_log.as_deref()))
        .init();

    if let Some(e) = config_error {
        log::warn!("Using default configuration: {}", e);
    }

    let container = match RecordContainer::open_in(config.resolve_data_dir()) {
        Ok(container) => container,
        Err(e) => return fail(StartupError::from(e)),
    };

    let ctx = AppContext::new(config, container);
    subscribe_upload_intake(&ctx);

    match run(&ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

#[cfg(target_os = "macos")]
fn run(ctx: &AppContext) -> Result<(), StartupError> {
    traydrop::platform::run(ctx, traydrop::storage::config_path().ok())
}

#[cfg(not(target_os = "macos"))]
fn run(_ctx: &AppContext) -> Result<(), StartupError> {
    Err(StartupError::UnsupportedPlatform(std::env::consts::OS))
}

fn fail(e: StartupError) -> ExitCode {
    log::error!("Startup failed: {}", e);
    eprintln!("traydrop: {}", e);
    ExitCode::FAILURE
}
