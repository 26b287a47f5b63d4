//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans carry method, URI and version at `INFO`. Responses are logged at `INFO`
/// with latency in milliseconds; 5xx responses (store outages) additionally at
/// `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/api/short version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// INFO request{method=GET uri=/%E3%81%82%E3%81%84 version=HTTP/1.1}: finished processing request latency=1 ms status=301
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
