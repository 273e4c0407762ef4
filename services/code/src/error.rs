use tonic::{Code, Status};

/// Code service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CodeServiceError {
    #[error("invalid code length range: min {min_length}, max {max_length}")]
    InvalidRange { min_length: u32, max_length: u32 },
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),
    #[error("code ttl must be non-zero")]
    InvalidTtl,
    #[error("code store failure")]
    Storage(#[source] anyhow::Error),
    #[error("code not found")]
    CodeNotFound,
    #[error("invalid code")]
    InvalidCode,
    #[error("invalid email")]
    InvalidEmail,
    #[error("email delivery failure")]
    Delivery(#[source] anyhow::Error),
    #[error("request cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl CodeServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::RandomSourceFailure(_) => "RANDOM_SOURCE_FAILURE",
            Self::InvalidTtl => "INVALID_TTL",
            Self::Storage(_) => "STORAGE_FAILURE",
            Self::CodeNotFound => "CODE_NOT_FOUND",
            Self::InvalidCode => "INVALID_CODE",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::Delivery(_) => "DELIVERY_FAILURE",
            Self::Cancelled => "CANCELLED",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
        }
    }

    pub fn code(&self) -> Code {
        match self {
            Self::InvalidRange { .. } | Self::RandomSourceFailure(_) | Self::InvalidTtl => {
                Code::Internal
            }
            Self::Storage(_) | Self::Delivery(_) => Code::Unavailable,
            Self::CodeNotFound => Code::NotFound,
            Self::InvalidCode | Self::InvalidEmail => Code::InvalidArgument,
            Self::Cancelled => Code::Cancelled,
            Self::DeadlineExceeded => Code::DeadlineExceeded,
        }
    }
}

impl From<CodeServiceError> for Status {
    fn from(err: CodeServiceError) -> Self {
        let code = err.code();
        // Client errors are expected; only server-side failures carry a cause
        // chain worth logging.
        if matches!(code, Code::Internal | Code::Unavailable) {
            tracing::error!(error = ?err, kind = err.kind(), "request failed");
        }
        Status::new(code, err.to_string())
    }
}
