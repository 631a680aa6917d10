use std::{io, sync::OnceLock};

use application::{
    map::{Position, TraceCanvas},
    notify::TraceNotifier,
    Args, Config, Page,
};
use service::{infra::transport, Service};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { server, map, service, log: log_config } =
        Config::new(&args.config).map_err(|e| {
            log::error!("failed to load `Config`: {e}");
        })?;

    LOG_LEVEL
        .set(log_config.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let transport = transport::Http::new(&server.into()).map_err(|e| {
        log::error!("failed to initialize HTTP transport: {e}");
    })?;
    let service = Service::new(service.into(), transport);

    log::info!(
        "map centered at {:.5}, {:.5} (zoom {})",
        map.lat,
        map.lng,
        map.zoom,
    );
    let marker = Position {
        lat: map.lat + map.marker_offset,
        lng: map.lng + map.marker_offset,
    };

    let mut page =
        Page::new(service, TraceCanvas::default(), TraceNotifier, marker);
    page.activate().await;

    if let Some(criteria) = args.criteria() {
        log::info!("applying the filter criteria given on the command line");
        page.apply_criteria(criteria);
    }

    Ok(())
}
