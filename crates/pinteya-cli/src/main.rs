mod quick_view;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pinteya-cli")]
#[command(about = "Pinteya storefront quick-view command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve price, stock and image for a product selection
    QuickView(SelectionArgs),
    /// Assemble the cart line for a product selection
    AddToCart(SelectionArgs),
    /// Print the normalized token of each measure
    Normalize {
        /// Free-text measures, e.g. "4 Litros" "20KGS"
        #[arg(required = true)]
        measures: Vec<String>,
    },
}

/// Product id plus the selector values to apply after the data loads.
#[derive(Debug, Clone, Args)]
pub(crate) struct SelectionArgs {
    /// Product id as it appears in the storefront URL
    pub id: String,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub capacity: Option<String>,
    #[arg(long)]
    pub finish: Option<String>,
    #[arg(long)]
    pub width: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    #[arg(long)]
    pub grain: Option<String>,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { measures } => {
            init_tracing("info")?;
            for measure in measures {
                println!(
                    "{measure} -> {}",
                    pinteya_variants::normalize_measure(&measure)
                );
            }
        }
        Commands::QuickView(args) => {
            let config = pinteya_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            quick_view::run_quick_view(&config, &args).await?;
        }
        Commands::AddToCart(args) => {
            let config = pinteya_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            quick_view::run_add_to_cart(&config, &args).await?;
        }
    }

    Ok(())
}

/// Installs the fmt subscriber, preferring `RUST_LOG` over `fallback_level`.
fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
