use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("missing or empty host header")]
    MissingHost,

    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid method: {method:?}")]
    InvalidMethod { method: String },

    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },

    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("http client error: {source}")]
    Client {
        #[from]
        source: reqwest::Error,
    },
}

impl TransportError {
    pub fn invalid_method<S: ToString>(method: S) -> Self {
        Self::InvalidMethod { method: method.to_string() }
    }

    pub fn invalid_url<S: ToString>(str: S) -> Self {
        Self::InvalidUrl { reason: str.to_string() }
    }

    pub fn invalid_header<N: ToString, S: ToString>(name: N, str: S) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: str.to_string(),
        }
    }
}
