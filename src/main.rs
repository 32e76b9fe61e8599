use clap::Parser;
use cryptobuzz::cli::commands::{Cli, Commands};
use cryptobuzz::config::AnalysisConfig;
use cryptobuzz::CryptoBuzz;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = set_global_default(subscriber) {
        eprintln!("Error installing logger: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AnalysisConfig::from_env()?;

    match cmd {
        Commands::Analyze { table, search, json } => {
            table.apply(&mut config)?;
            search.apply(&mut config)?;
            let analysis = CryptoBuzz::new(config)?.analyze().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", analysis.report);
            }
        }
        Commands::Mentions { search } => {
            search.apply(&mut config)?;
            let mentions = CryptoBuzz::new(config)?.fetch_mentions().await;
            println!("{}", serde_json::to_string_pretty(&mentions)?);
        }
        Commands::Load { table } => {
            table.apply(&mut config)?;
            let records = CryptoBuzz::new(config)?.load()?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
