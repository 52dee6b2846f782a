use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lectern::app::AppContext;
use lectern::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(None)?;

    match cli.command {
        Commands::Fetch { url } => {
            commands::fetch(&ctx, &url).await?;
        }
        Commands::List { recent } => {
            if recent {
                commands::list_recent(&ctx)?;
            } else {
                commands::list_pages(&ctx)?;
            }
        }
        Commands::Show { index } => {
            commands::show(&ctx, index)?;
        }
        Commands::Share { index } => {
            commands::share(&ctx, index)?;
        }
        Commands::Delete { index } => {
            commands::delete(&ctx, index)?;
        }
    }

    Ok(())
}
