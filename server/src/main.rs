mod llm;
mod logger;
mod move_api;
mod server_config;
mod web_server;

use clap::Parser;

use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML server config; defaults apply when the file is
    /// missing.
    #[arg(long, default_value = "server_config.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("MoveServer".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = ServerConfig::load(&args.config)?;
    crate::log!(
        "Starting with {:?} backend, default difficulty {:?}",
        config.backend,
        config.default_difficulty
    );

    web_server::run_web_server(config).await;

    crate::log!("Server shut down gracefully");
    Ok(())
}
