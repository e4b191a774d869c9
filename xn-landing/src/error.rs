use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot decode label {label:?}: {source}")]
    Decode {
        label: String,
        #[source]
        source: xn_label::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
