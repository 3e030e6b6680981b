use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solver_account::AccountService;
use solver_config::{Config, ConfigLoader};
use solver_core::{SolverBuilder, SolverEngine, SolverError};
use std::path::PathBuf;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod implementations;

use implementations::{
	account::create_account, delivery::create_delivery, discovery::create_discovery,
	order::create_order, routing::create_route_query, settlement::create_settlement,
};

#[derive(Parser)]
#[command(name = "intent-solver")]
#[command(about = "Cross-chain intent solver", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	#[arg(short, long, value_name = "FILE", default_value = "config/solver.toml")]
	config: PathBuf,

	#[arg(long, env = "SOLVER_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the solver
	Start,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(&cli.log_level)?;

	match cli.command {
		Some(Commands::Start) | None => start_solver(cli).await,
		Some(Commands::Validate) => validate_config(cli).await,
	}
}

fn build_solver(config: Config) -> Result<SolverEngine, SolverError> {
	SolverBuilder::new(config)
		.with_account_factory(create_account)
		.with_delivery_factory(create_delivery)
		.with_discovery_factory(create_discovery)
		.with_order_factory(create_order)
		.with_settlement_factory(create_settlement)
		.with_route_query_factory(create_route_query)
		.build()
}

async fn start_solver(cli: Cli) -> Result<()> {
	info!("Loading configuration from: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	let solver = build_solver(config).context("Failed to build solver")?;

	let (stop_tx, stop_rx) = mpsc::channel(1);
	tokio::spawn(async move {
		shutdown_signal().await;
		info!("Shutdown signal received");
		let _ = stop_tx.send(()).await;
	});

	solver.run(stop_rx).await.context("Solver stopped with an error")?;

	info!("Solver stopped");
	Ok(())
}

async fn validate_config(cli: Cli) -> Result<()> {
	info!("Validating configuration file: {:?}", cli.config);

	let config = ConfigLoader::new()
		.with_file(&cli.config)
		.load()
		.await
		.context("Failed to load configuration")?;

	let account = AccountService::new(
		create_account(&config).context("Invalid account configuration")?,
	);
	let address = account
		.get_address()
		.await
		.context("Failed to derive solver address")?;

	info!("Configuration is valid");
	info!("Solver: {} ({})", config.solver.id, address);
	info!(
		"Network: chain {} via {}",
		config.network.chain_id, config.network.rpc_url
	);
	info!("IntentBox: {}", config.contracts.intent_box);
	info!("Registry: {}", config.contracts.registry);
	info!("Settlement: {}", config.contracts.settlement);
	match config.routing.pathfinder {
		Some(pathfinder) => info!("Pathfinder: {}", pathfinder),
		None => info!("Pathfinder: not configured, using local route table"),
	}

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.context("Failed to initialize tracing")?;

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(e) = signal::ctrl_c().await {
			tracing::error!("Failed to listen for Ctrl+C: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut sigterm) => {
				sigterm.recv().await;
			}
			Err(e) => {
				tracing::error!("Failed to install SIGTERM handler: {}", e);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
