use clap::Parser;

use moodtunes::{ApiClient, AppError, Config, Session, TokenStore};

mod cli;
mod handlers;

use cli::{Cli, Commands, JournalCommands};
use handlers::Output;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    if let Err(error) = run(cli).await {
        match error.downcast_ref::<AppError>() {
            Some(app) if app.requires_login() => {
                eprintln!("{}", app);
                eprintln!("Run `moodtunes token set <TOKEN>` after signing in.");
            }
            Some(AppError::Rejected(detail)) => {
                eprintln!("The server rejected the request:");
                eprintln!("{}", serde_json::to_string_pretty(detail).unwrap_or_default());
            }
            _ => eprintln!("moodtunes error: {:#}", error),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env();
    tracing::debug!(api = %config.api_base_url, token_path = %config.token_path.display(), "Loaded configuration");

    let session = Session::new(TokenStore::at(&config.token_path));
    let out = Output { json: cli.json };

    match &cli.command {
        Commands::Token { action } => return handlers::auth::handle(action, &session, out),
        Commands::Playlist { mood, uplift } => {
            return handlers::mood::playlist(mood, cli::playlist_kind(*uplift), out)
        }
        _ => {}
    }

    let client = ApiClient::new(&config, session)?;

    match cli.command {
        Commands::Analyze { text, save } => handlers::mood::analyze(&client, &text, save, out).await,
        Commands::Journal { action } => match action {
            JournalCommands::List => handlers::journal::list(&client, out).await,
            JournalCommands::Add {
                text,
                skip_analysis,
            } => handlers::journal::add(&client, &text, skip_analysis, out).await,
        },
        Commands::Trend { page } => {
            handlers::journal::trend(&client, page, config.page_size, out).await
        }
        Commands::Feedback { filter, export } => {
            handlers::feedback::history(&client, filter.into(), export.as_deref(), out).await
        }
        Commands::Token { .. } | Commands::Playlist { .. } => Ok(()),
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose { "moodtunes=debug" } else { "moodtunes=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
