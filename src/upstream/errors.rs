use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Timeout fetching page {0}")]
    Timeout(usize),

    #[error("Error fetching page {page}: {status}")]
    Status { page: usize, status: u16 },

    #[error("Exception fetching page {page}: {message}")]
    Transport { page: usize, message: String },

    #[error("Undecodable response for page {page}: {message}")]
    Decode { page: usize, message: String },

    #[error("Client error: {0}")]
    Client(String),
}
