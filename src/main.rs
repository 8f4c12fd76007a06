// Kestrel - control CLI for the kestreld supervision daemon
// Main entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

use kestrel::client::{ClientError, DaemonClient, DaemonConfig, HealthState};
use kestrel::config::load_config;
use kestrel::daemon::PidFile;
use kestrel::errors;

#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(about = "Control CLI for the kestreld supervision daemon", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Show daemon status
    Status {
        /// Print the raw JSON status instead of the formatted view
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    match args.command {
        Command::Status { json } => run_status(json).await,
    }
}

fn init_tracing() {
    // Default: WARN level, can be overridden with RUST_LOG env var
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}

async fn run_status(json: bool) -> Result<()> {
    let config = load_config()?;

    // Check if a daemon process exists before querying it
    let pidfile = PidFile::new()?;
    if !pidfile.is_running() {
        println!("\x1b[1;33m⚠ Daemon is not running\x1b[0m");
        println!("\nStart the daemon with:");
        println!(
            "  \x1b[1;36mkestreld --bind {}\x1b[0m",
            config.client.daemon_address
        );
        return Ok(());
    }
    let pid = pidfile.read_pid().ok();

    let daemon_config = DaemonConfig::from_client_config(&config.client);
    let client = DaemonClient::new(&daemon_config)?;

    let status = match client.global_status().await {
        Ok(status) => status,
        Err(err @ ClientError::Connection { .. }) => {
            eprintln!(
                "{}",
                errors::connection_refused_error(&config.client.daemon_address)
            );
            return Err(err.into());
        }
        Err(err @ ClientError::Decode { .. }) => {
            eprintln!("{}", errors::schema_mismatch_error(&err));
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    // Display status
    let verdict_color = if status.daemon == "OK" {
        "\x1b[1;32m"
    } else {
        "\x1b[1;33m"
    };

    println!("\x1b[1;32m✓ Daemon Status\x1b[0m");
    println!();
    println!("  Daemon:        {}{}\x1b[0m", verdict_color, status.daemon);
    if let Some(pid) = pid {
        println!("  PID:           {}", pid);
    }
    if let Some(uptime) = status.uptime_seconds {
        println!("  Uptime:        {}s", uptime);
    }
    println!("  Bind Address:  {}", config.client.daemon_address);

    if !status.subsystems.is_empty() {
        println!();
        println!("  Subsystems:");
        for (name, health) in &status.subsystems {
            let color = match health.state {
                HealthState::Ok => "\x1b[32m",
                HealthState::Degraded => "\x1b[33m",
                HealthState::Failure => "\x1b[31m",
                HealthState::Disabled => "\x1b[90m",
            };
            match &health.message {
                Some(msg) => println!(
                    "    {:<12} {}{}\x1b[0m ({})",
                    name,
                    color,
                    health.state.label(),
                    msg
                ),
                None => println!("    {:<12} {}{}\x1b[0m", name, color, health.state.label()),
            }
        }
    }
    println!();

    Ok(())
}
