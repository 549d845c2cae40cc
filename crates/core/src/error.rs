/// Failures talking to the remote service. These never reach the host's
/// matching workflow: `VgmdbSource` turns them into empty / not-found results.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {url} failed with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Album id {id} belongs to provider {provider}")]
    ProviderMismatch { provider: String, id: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

/// A record that cannot be mapped into an album. Only malformed data
/// triggers these.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("No names available for {0}")]
    EmptyNames(String),

    #[error("Album has no discs")]
    NoDiscs,

    #[error("Album has no performers, organizations or composers")]
    NoArtists,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
