use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Any origin (mirrored), any method and header, credentials allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
