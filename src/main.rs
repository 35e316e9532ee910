use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use quizsmith::builder::BankBuilder;
use quizsmith::store::Store;
use quizsmith::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Directory where generated question banks are written.
    #[arg(short, long, env, default_value = "uploads")]
    output_dir: PathBuf,

    /// Set the Secure attribute on session cookies.
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracing=info,quizsmith=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    std::fs::create_dir_all(&args.output_dir)?;

    let state = AppState {
        builder: Arc::new(BankBuilder::new()),
        store: Store::seeded(),
        output_dir: args.output_dir,
        secure_cookies: args.secure_cookies,
    };
    let routes = quizsmith::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
