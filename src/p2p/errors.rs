use thiserror::Error;

/// Rejections of a `/p2p` request. Raised before any upstream call is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    #[error("Sorry Max Limit Exceeded. Maximum limit is {0}.")]
    LimitExceeded(usize),

    #[error("Unsupported asset. Supported: {0}")]
    UnsupportedAsset(String),

    #[error("trade_type must be BUY or SELL")]
    InvalidTradeType,

    #[error("Unsupported pay_type. Supported: {0}")]
    UnsupportedPayType(String),

    #[error("Invalid pay_method for {pay_type}. Supported: {supported}")]
    InvalidPayMethod { pay_type: String, supported: String },
}

#[derive(Error, Debug)]
pub enum P2pError {
    #[error("Internal error: {0}")]
    Internal(String),
}
