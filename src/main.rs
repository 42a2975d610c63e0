use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use football_gateway::app;
use football_gateway::config::Args;
use football_gateway::state::AppState;

// this is main async function with tokio
#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    // upstream credential; checked per request so the server still
    // starts (and /health answers) without it
    let api_key = std::env::var("APISPORTS_API_KEY").ok();
    if api_key.is_none() {
        eprintln!("Warning: APISPORTS_API_KEY not set, API requests will fail with 500");
    }

    // creating shared state
    let state = Arc::new(AppState::new(&args, api_key));

    let router = app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("Gateway running on http://localhost:{}", args.port);
    println!("Forwarding to {}", args.upstream_url);
    println!("Cache TTL: {} seconds", args.cache_ttl);
    println!(
        "Rate limit: {} requests per {} seconds per IP",
        args.rate_limit, args.rate_window
    );

    if let Err(e) = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
