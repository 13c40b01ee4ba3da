use clap::Parser;

use amparo_config::AmparoConfig;

mod cli;
mod commands;
mod context;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("amparo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = AmparoConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(&config)?;

    match cli.command {
        cli::Commands::Serve { port } => commands::serve::handle(port).await,
        cli::Commands::Login { email, password } => {
            commands::auth::login(&mut ctx, &email, &password).await
        }
        cli::Commands::Logout => commands::auth::logout(&mut ctx),
        cli::Commands::Status => commands::auth::status(&mut ctx).await,
        cli::Commands::List { collection } => commands::records::list(&mut ctx, collection).await,
        cli::Commands::Show { collection, id } => {
            commands::records::show(&mut ctx, collection, &id).await
        }
        cli::Commands::Remove {
            collection,
            id,
            yes,
        } => commands::records::remove(&mut ctx, collection, &id, yes).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AMPARO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
