pub mod catalog;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod interaction;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod runtime;
pub mod source;
pub mod transport;

#[cfg(test)]
mod tests {
    mod query_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/query_latency_test.rs"
        ));
    }
}
