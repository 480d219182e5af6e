use clap::{Parser, Subcommand};
use postbridge::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "postbridge")]
#[command(version = "0.1.0")]
#[command(about = "GraphQL gateway over a user store and a REST posts API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "postbridge.toml")]
        config: String,

        /// Server port (overrides the configured port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            cli::init::run(output)?;
        }
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
        Commands::Schema => {
            println!("{}", postbridge::schema::sdl());
        }
    }

    Ok(())
}
