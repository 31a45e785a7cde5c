/// Error types shared across the recommender crates.
///
/// These errors represent failures while reading the catalog snapshot. Binary-specific
/// errors should be defined in each crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("catalog io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog json error at {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
