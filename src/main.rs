use room_gateway::config::GatewayConfig;
use room_gateway::dispatch::RequestDispatcher;
use room_gateway::gateway::handlers::router;
use room_gateway::gateway::FanOutAggregator;
use room_gateway::routing::PartitionScheme;
use room_gateway::topology::PartitionDirectory;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match GatewayConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "Usage: {} --bind <addr:port> --backend <url> --directory <url> \
                 [--service <name>] [--partitions <n>] [--range-width <n>]",
                args[0]
            );
            eprintln!(
                "Example: {} --bind 127.0.0.1:4000 --backend http://127.0.0.1:19081/rooms \
                 --directory http://127.0.0.1:19080",
                args[0]
            );
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Routing '{}' across {} partitions of width {} via {}",
        config.service_name,
        config.partition_count,
        config.range_width,
        config.backend_base
    );

    // 1. Partitioning scheme (must match the backend's provisioning):
    let scheme = Arc::new(PartitionScheme::new(
        config.partition_count,
        config.range_width,
    ));

    // 2. Collaborator clients:
    let directory = Arc::new(PartitionDirectory::new(&config.directory_base));
    let dispatcher = Arc::new(RequestDispatcher::new(&config.backend_base));

    // 3. Fan-out aggregation for listings:
    let aggregator = Arc::new(FanOutAggregator::new(
        Arc::clone(&directory),
        Arc::clone(&dispatcher),
        &config.service_name,
    ));

    // 4. HTTP surface:
    let app = router(scheme, dispatcher, aggregator);

    tracing::info!("Gateway listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
