use std::net::SocketAddr;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use departure_server::config::ServerConfig;
use departure_server::transperth::{DepartureSource, FetchStrategy, MockSource, TransperthClient};
use departure_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::queens_park();

    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(parsed) => config.port = parsed,
            Err(_) => eprintln!("Warning: ignoring unparseable PORT {port:?}"),
        }
    }

    if let Ok(strategy) = std::env::var("DEPARTURES_STRATEGY") {
        match FetchStrategy::from_str(&strategy) {
            Ok(parsed) => config.strategy = parsed,
            Err(_) => eprintln!("Warning: ignoring unknown DEPARTURES_STRATEGY {strategy:?}"),
        }
    }

    config.proxy_key = std::env::var("TRANSPERTH_PROXY_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    // Mock mode serves fixtures instead of hitting the provider.
    let source = match std::env::var("DEPARTURES_MOCK_DIR") {
        Ok(dir) => {
            let mock = MockSource::new(&dir).expect("Failed to load mock departure data");
            println!("Serving mock departures from {dir}");
            DepartureSource::Mock(mock)
        }
        Err(_) => {
            let client = TransperthClient::new(config.transperth())
                .expect("Failed to create Transperth client");
            DepartureSource::Live(client)
        }
    };

    let state = AppState::new(
        source,
        config.direction_rules(),
        config.limit,
        config.station.as_str(),
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("{} Departure API listening on http://{addr}", config.station);
    println!();
    println!("API Endpoints:");
    println!("  GET  /api/departures  - Departures split by direction");
    println!("  GET  /api/health      - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
