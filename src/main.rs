use clap::{Parser, Subcommand};
use tracing_subscriber;

mod application;
mod domain;
mod infrastructure;

use application::services::PluginService;
use domain::traits::CommandPort;
use infrastructure::adapters::command_port::TcpCommandPort;
use infrastructure::config::Config;

#[derive(Parser)]
#[command(name = "maya-portctl")]
#[command(about = "Load and unload Maya plugins over the command port", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the plugin and create its node in the running host
    Load {
        /// Command port override
        port: Option<u16>,
    },
    /// Discard the open scene and unload the plugin
    Unload {
        /// Command port override
        port: Option<u16>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

/// Which plugin lifecycle sequence to run
enum Action {
    Load,
    Unload,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { port } => run_session(&cli.config, port, Action::Load),
        Commands::Unload { port } => run_session(&cli.config, port, Action::Unload),
        Commands::Version => {
            println!("maya-portctl v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => init_config(&cli.config),
    }
}

/// Connect to the command port and run one load or unload sequence.
///
/// Sessions are best effort: the host may simply not be running, so every
/// failure is logged and the process still exits 0.
fn run_session(config_path: &str, port_override: Option<u16>, action: Action) {
    let config = load_config(config_path);
    let port = port_override.unwrap_or(config.host.command_port);
    let service = PluginService::new(&config.plugin);

    match action {
        Action::Load => tracing::info!("Loading plugin in Maya..."),
        Action::Unload => tracing::info!("Unloading plugin in Maya..."),
    }

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut conn = match TcpCommandPort::connect(&config.host.address, port).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!("{}", e);
                return;
            }
        };

        let result = match action {
            Action::Load => service.load(&mut conn).await,
            Action::Unload => service.unload(&mut conn).await,
        };
        if let Err(e) = result {
            tracing::warn!("{}", e);
        }

        if let Err(e) = conn.shutdown().await {
            tracing::debug!("Closing the command port failed: {}", e);
        }
    });
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    }
}

fn init_config(path: &str) {
    let config = Config::default();
    match config.save(path) {
        Ok(()) => tracing::info!("Wrote default config to {}", path),
        Err(e) => tracing::error!("Failed to write config: {}", e),
    }
}
