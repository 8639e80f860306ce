use anyhow::Context;
use clap::Parser;

use dsa_arcade::audio::TerminalBell;
use dsa_arcade::cli::{Cli, Command};
use dsa_arcade::config::{Config, ConfigStore};
use dsa_arcade::logging;
use dsa_arcade::shutdown::ShutdownHandle;
use dsa_arcade::ui::{self, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config, path).with_overrides(cli.overrides());
    let config = store.get();

    if let Some(Command::Trace(args)) = &cli.command {
        logging::init_stderr_tracing(&config.logging);
        let report = args.report()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let log_path = logging::init_file_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(log = %log_path.display(), config = %store.path().display(), "starting");

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let app = App::new(store, cli.sampler(), Box::new(TerminalBell));
    ui::run(app, cli.page, shutdown)?;
    Ok(())
}
