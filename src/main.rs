use std::path::PathBuf;

use superapp::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging first: load_config warns about malformed files and those
    // warnings must not be dropped by an uninitialized facade.
    let root_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    logging::init(&root_dir);
    logging::setup_panic_hook(root_dir);

    let app_config = config::load_config();
    logging::set_verbose(app_config.verbose_logging);

    log::info!(
        "Starting Super App shell (mini apps dir: {:?})",
        app_config.miniapps_dir
    );

    server::serve(&app_config).await
}
