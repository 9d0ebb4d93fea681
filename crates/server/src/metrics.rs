use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static HERO_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "heroes_requests_total",
        "Hero API requests by operation",
        &["op"]
    )
    .expect("register heroes_requests_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "heroes_store_errors_total",
        "Store operations that failed with a storage error"
    )
    .expect("register heroes_store_errors_total")
});

pub fn record_request(op: &str) {
    HERO_REQUESTS_TOTAL.with_label_values(&[op]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    // touch lazies so the families show up before the first request
    Lazy::force(&HERO_REQUESTS_TOTAL);
    Lazy::force(&STORE_ERRORS_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

pub async fn metrics_handler() -> (StatusCode, String) {
    encode_metrics()
}
