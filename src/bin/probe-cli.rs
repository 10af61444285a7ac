use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use prober::client::{CheckReport, StatusClient};

#[derive(Parser)]
#[command(name = "probe-cli")]
#[command(about = "Query the healthy/ready endpoints of a running component", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(long, default_value = "/-/healthy")]
    healthy_path: String,

    #[arg(long, default_value = "/-/ready")]
    ready_path: String,

    /// Request timeout in seconds.
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the healthy endpoint; exits non-zero unless it answers 2xx
    Healthy,
    /// Probe the ready endpoint; exits non-zero unless it answers 2xx
    Ready,
    /// Probe both endpoints and print a JSON summary
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = StatusClient::new(&cli.url, Duration::from_secs(cli.timeout))?;

    let ok = match cli.command {
        Commands::Healthy => print_report(&client.check(&cli.healthy_path).await?),
        Commands::Ready => print_report(&client.check(&cli.ready_path).await?),
        Commands::Status => {
            let summary = client.summary(&cli.healthy_path, &cli.ready_path).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            summary.ok()
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_report(report: &CheckReport) -> bool {
    if report.ok {
        println!("{} {}", report.path, report.status);
    } else {
        eprintln!("{} {}", report.path, report.status);
    }
    report.ok
}
