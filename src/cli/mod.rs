pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;

/// Run the command-line interface and return the process exit code
pub async fn run() -> i32 {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);
    logging::configure_backtrace(cli.trace);

    let result = if cli.serve {
        commands::handle_serve_command(&cli.source, &cli.destination, &cli.address, cli.config.as_deref()).await
    } else {
        commands::handle_build_command(&cli.source, &cli.destination, cli.config.as_deref())
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
