//! darwin-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use darwin_notify::cli::{
    app::{load_merged_config, resolve_options, run_notify, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use darwin_notify::infrastructure::XdgConfigStore;

// Current-thread runtime: the native backend pumps the main thread's run loop.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let presenter = Presenter::new().with_verbose(cli.verbose);

    if let Some(Commands::Config { action }) = cli.command.take() {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let config = load_merged_config(cli.to_config()).await;

    let options = match resolve_options(&cli, &config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_notify(options, &presenter).await
}
