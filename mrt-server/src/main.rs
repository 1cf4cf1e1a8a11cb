use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mrt_server::config::ServerConfig;
use mrt_server::stations::StationService;
use mrt_server::upstream::{Fetcher, MockFetcher, UpstreamClient};
use mrt_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mrt_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    match &config.mock_data {
        Some(path) => {
            let mock = MockFetcher::from_file(path).unwrap_or_else(|e| {
                error!(path = %path.display(), "failed to load mock data: {e}");
                std::process::exit(1);
            });
            info!(path = %path.display(), "serving mock upstream data");
            serve(mock, config).await;
        }
        None => {
            let client =
                UpstreamClient::new(&config.upstream).expect("Failed to create HTTP client");
            serve(client, config).await;
        }
    }
}

async fn serve<F: Fetcher + 'static>(fetcher: F, config: ServerConfig) {
    let service = StationService::new(fetcher, &config.upstream, config.directions)
        .with_clock(config.clock);
    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        });

    info!(addr = %config.bind_addr, "MRT schedule server listening");
    info!(
        stations_url = %config.upstream.stations_url,
        schedules_url = %config.upstream.schedules_url,
        "upstream endpoints"
    );
    info!("  GET  /health        - Health check");
    info!("  GET  /stations      - All stations");
    info!("  GET  /stations/:id  - Upcoming departures from a station");

    axum::serve(listener, app).await.expect("server error");
}
