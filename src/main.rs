use dynamo_reader::{
    web::{route, AppState, SharedState},
    Config,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new()?;
    let state: SharedState = Arc::new(AppState::from_config(&config).await);

    let table = config.table();
    match table.partition.as_ref() {
        Some(partition) => info!(
            "reading {} by batch get within {} = {}",
            table.name, partition.attribute, partition.value
        ),
        None => info!("reading {} by filtered scan on {}", table.name, table.key_attribute),
    }

    let app = route::router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Micros)
                    .include_headers(true),
            ),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port()));
    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
