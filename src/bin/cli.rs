use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vlr_overview::VlrClient;

#[derive(Parser)]
#[command(name = "vlr-overview")]
#[command(about = "Scrape vlr.gg match results and player overview statistics")]
struct Cli {
    /// Site to scrape
    #[arg(long, default_value = "https://www.vlr.gg", global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List completed matches on a results page as `id,slug` CSV
    Results {
        /// Results page number
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Scrape the overview tab of a match
    Overview {
        /// Numeric match id, e.g. 378662
        #[arg(long)]
        match_id: u32,
        /// Match slug, e.g. gen-g-vs-sentinels-valorant-champions-2024-opening-b
        #[arg(long)]
        slug: String,
        /// Directory to save `{match_id}_overview.csv` in (prints to stdout if omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = VlrClient::new().with_base_url(&cli.base_url);

    match cli.command {
        Commands::Results { page } => {
            let matches = client.list_completed_matches(page).await?;
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["id", "slug"])?;
            for item in &matches {
                wtr.write_record([&item.id, &item.slug])?;
            }
            wtr.flush()?;
        }
        Commands::Overview {
            match_id,
            slug,
            output_dir,
        } => {
            let overview = client
                .get_match_overview(match_id, &slug, output_dir.as_deref())
                .await?;
            if output_dir.is_none() {
                overview.write_csv(std::io::stdout())?;
            }
        }
    }

    Ok(())
}
