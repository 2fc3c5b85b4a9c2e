use std::{path::PathBuf, time::Duration};

use ai_or_human::{catalog::Catalog, names, AppState, Settings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Public URL prefix used in challenge links.
    #[arg(long, env, default_value = "http://localhost:1414")]
    base_url: String,

    /// JSON file with quiz items. The built-in passages are used when unset.
    #[arg(long, env)]
    catalog: Option<PathBuf>,

    /// Items per difficulty tier in practice mode.
    #[arg(long, env, default_value_t = names::DEFAULT_TIER_SIZE)]
    tier_size: usize,

    /// Items in a single-difficulty practice round.
    #[arg(long, env, default_value_t = names::DEFAULT_ROUND_SIZE)]
    round_size: usize,

    /// Items in the daily challenge.
    #[arg(long, env, default_value_t = names::DEFAULT_DAILY_SIZE)]
    daily_size: usize,

    /// Mark cookies `Secure`. Enable when served over HTTPS.
    #[arg(long, env)]
    secure_cookies: bool,

    /// Minutes an unfinished or finished play is kept in memory.
    #[arg(long, env, default_value_t = 120)]
    play_ttl_minutes: u64,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,ai_or_human=debug,tower_http=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!("catalog has {} items", catalog.len());

    let settings = Settings {
        base_url: args.base_url,
        secure_cookies: args.secure_cookies,
        tier_size: args.tier_size,
        round_size: args.round_size,
        daily_size: args.daily_size,
    };
    let state = AppState::new(
        catalog,
        settings,
        Duration::from_secs(args.play_ttl_minutes * 60),
    );

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ai_or_human::router(state)).await?;

    Ok(())
}
