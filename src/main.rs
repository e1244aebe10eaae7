use anyhow::Result;
use clap::{Parser, Subcommand};

/// recipehub - RecipeHub backend
#[derive(Parser)]
#[command(name = "recipehub")]
#[command(about = "Account and contact form backend for RecipeHub", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the database file and users table, then exit
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipehub::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipehub::observability::init_observability(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => recipehub::server::serve(config, host, port).await,
        Commands::InitDb => {
            let pool =
                recipehub::db::init(&config.database.url, config.database.max_connections).await?;
            pool.close().await;

            Ok(())
        }
    }
}
