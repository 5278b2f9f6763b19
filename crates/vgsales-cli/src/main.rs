//! Video game sales dashboard CLI.

mod colors;
mod predict;
mod serve;
mod summary;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vgsales")]
#[command(about = "Explore and forecast historical video game sales")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive dashboard server
    Serve {
        /// Data directory holding the dataset and model files
        #[arg(default_value = ".")]
        data_dir: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Print the dataset analytics headlessly
    Summary {
        /// Data directory holding the dataset file
        #[arg(default_value = ".")]
        data_dir: String,
    },

    /// Predict global sales for a hypothetical title
    Predict {
        /// Data directory holding the dataset and model files
        #[arg(long, default_value = ".")]
        data_dir: String,

        /// Platform label, e.g. "Wii"
        #[arg(long)]
        platform: String,

        /// Genre label, e.g. "Sports"
        #[arg(long)]
        genre: String,

        /// Publisher label, e.g. "Nintendo"
        #[arg(long)]
        publisher: String,

        /// Hypothetical sales rank
        #[arg(long, default_value = "1")]
        rank: u32,

        /// Release year
        #[arg(long, default_value = "2021")]
        year: i32,

        /// North America sales, millions of units
        #[arg(long, default_value = "0.0")]
        na_sales: f64,

        /// Europe sales, millions of units
        #[arg(long, default_value = "0.0")]
        eu_sales: f64,

        /// Japan sales, millions of units
        #[arg(long, default_value = "0.0")]
        jp_sales: f64,

        /// Rest-of-world sales, millions of units
        #[arg(long, default_value = "0.0")]
        other_sales: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { data_dir, port } => {
            serve::execute(&data_dir, port).await?;
        }

        Commands::Summary { data_dir } => {
            summary::execute(&data_dir)?;
        }

        Commands::Predict {
            data_dir,
            platform,
            genre,
            publisher,
            rank,
            year,
            na_sales,
            eu_sales,
            jp_sales,
            other_sales,
        } => {
            let input = vgsales_core::PredictionInput {
                rank,
                platform,
                year,
                genre,
                publisher,
                na_sales,
                eu_sales,
                jp_sales,
                other_sales,
            };
            predict::execute(&data_dir, input)?;
        }
    }

    Ok(())
}
