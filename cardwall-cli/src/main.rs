use cardwall_cli::exit_codes::EXIT_ERROR;
use cardwall_cli::{logging, Cli};
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cardwall_config::load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(EXIT_ERROR);
        }
    };

    let level = logging::log_level(cli.verbose, cli.debug, cli.quiet, &config.log.level);
    logging::configure_logging(&level);

    let code = match cardwall_cli::execute(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };
    process::exit(code);
}
