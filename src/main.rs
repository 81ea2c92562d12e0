//! MyResidence headless shell.
//!
//! Resolves the session from the local data directory and drives it from a
//! line-based console on stdin.

mod console;

use mr_core::ports::AppDirsPort;
use mr_infra::DirsAppDirsAdapter;
use mr_shell::bootstrap::tracing::init_tracing_subscriber;
use mr_shell::bootstrap::{resolve_config, wire_dependencies};
use mr_shell::commands::session;
use mr_shell::AppRuntime;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let config = resolve_config(&app_dirs);

    init_tracing_subscriber(&app_dirs.logs_dir(), &config.log_level)?;
    info!(
        data_dir = %config.data_dir.display(),
        store_file = %config.store_file,
        "starting myresidence"
    );

    let deps = wire_dependencies(&config)?;
    let runtime = AppRuntime::new(deps, &config);

    let view = session::resolve_initial_state(&runtime)
        .await
        .map_err(anyhow::Error::msg)?;
    info!(state = %view.state, "session ready");

    console::run(&runtime, view).await
}
