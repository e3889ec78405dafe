use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phoenix::config::{load_config, PhoenixConfig};
use phoenix::lifecycle::Shutdown;
use phoenix::subsystem::{ServerSubsystem, SubsystemRef, TimerSubsystem};
use phoenix::supervisor::{Role, Supervisor};

#[derive(Parser)]
#[command(name = "phoenix")]
#[command(about = "Self-reloading process supervisor", long_about = None)]
struct Cli {
    /// Process role. Spawned workers receive `--role worker`; leave unset
    /// when launching.
    #[arg(long, value_enum, default_value_t = Role::Root)]
    role: Role,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phoenix=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PhoenixConfig::default(),
    };

    tracing::info!(
        pid = std::process::id(),
        role = %cli.role,
        bind_address = %config.server.bind_address,
        interval_ms = config.timer.interval_ms,
        watch_path = %config.watch.path,
        "Configuration loaded"
    );

    // One signal per process, handed to every subsystem and the supervisor.
    let shutdown = Shutdown::new();

    let subsystems: Vec<SubsystemRef> = vec![
        Arc::new(ServerSubsystem::new(&config.server)),
        Arc::new(TimerSubsystem::new(&config.timer)),
    ];

    let supervisor = Supervisor::new(config, cli.config.clone(), shutdown, subsystems);
    supervisor.run(cli.role).await?;

    tracing::info!(pid = std::process::id(), "exiting");
    Ok(())
}
