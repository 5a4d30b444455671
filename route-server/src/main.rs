use std::net::SocketAddr;

use route_server::auth::UserStore;
use route_server::cache::{CacheConfig, CachedFeed};
use route_server::favorites::FavoriteStore;
use route_server::feed::{DemoFeed, FeedClient, FeedConfig, RouteFeed, SearchConfig};
use route_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Demo data shipped with the repository.
const DEFAULT_DEMO_DIR: &str = "data/demo_routes";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    // Pick the route feed: live API when configured, demo data otherwise.
    let feed = match std::env::var("ROUTE_FEED_URL") {
        Ok(url) => {
            let api_key = std::env::var("ROUTE_FEED_API_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: ROUTE_FEED_API_KEY not set. API calls will fail.");
                String::new()
            });
            let config = FeedConfig::new(&api_key).with_base_url(url);
            let client = FeedClient::new(config).expect("Failed to create feed client");
            tracing::info!("using live trip feed");
            RouteFeed::Api(client)
        }
        Err(_) => {
            let dir =
                std::env::var("DEMO_DATA_DIR").unwrap_or_else(|_| DEFAULT_DEMO_DIR.to_string());
            let demo = DemoFeed::load(&dir).expect("Failed to load demo route data");
            tracing::info!(dir = %dir, "using demo route data");
            RouteFeed::Demo(demo)
        }
    };
    let cached = CachedFeed::new(feed, &CacheConfig::default());

    // Favorites and users: file-backed when a path is configured.
    let favorites = match std::env::var("FAVORITES_FILE") {
        Ok(path) => FavoriteStore::load(&path).expect("Failed to load favorites file"),
        Err(_) => FavoriteStore::seeded(),
    };
    let users = match std::env::var("USERS_FILE") {
        Ok(path) => UserStore::load(&path).expect("Failed to load users file"),
        Err(_) => UserStore::empty(),
    };

    // Build app state
    let state = AppState::new(cached, favorites, users, SearchConfig::default());

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Bus Route Tracker listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                      - Health check");
    println!("  GET    /about                       - About page");
    println!("  GET    /search/routes?destination=  - Search route candidates");
    println!("  GET    /favorites                   - List favorite routes");
    println!("  POST   /favorites                   - Add a favorite route");
    println!("  GET    /favorites/routes            - Routes for every favorite");
    println!("  POST   /favorites/:id/destination   - Change a favorite's destination");
    println!("  DELETE /favorites/:id               - Remove a favorite");
    println!("  POST   /auth/signup                 - Create an account");
    println!("  POST   /auth/login                  - Sign in");
    println!("  POST   /auth/logout                 - Sign out");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
