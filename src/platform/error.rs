//! Platform error kinds.

use teloxide::{ApiError, RequestError};
use thiserror::Error;

/// Why a platform call failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// Bot blocked, kicked, or missing the rights for the action.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Chat or message no longer exists.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Network or I/O failure talking to the API.
    #[error("transport error: {0}")]
    Transport(String),

    /// Any other API rejection.
    #[error("api error: {0}")]
    Api(String),
}

impl PlatformError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::RateLimited(_) => "rate_limited",
            Self::Transport(_) => "transport",
            Self::Api(_) => "api",
        }
    }

    /// The destination will keep failing until someone re-adds the bot.
    pub fn is_stale_destination(&self) -> bool {
        matches!(self, Self::Forbidden(_) | Self::NotFound(_))
    }
}

impl From<RequestError> for PlatformError {
    fn from(err: RequestError) -> Self {
        let detail = err.to_string();
        match err {
            RequestError::Api(api) => match api {
                ApiError::BotBlocked
                | ApiError::BotKicked
                | ApiError::BotKickedFromSupergroup
                | ApiError::UserDeactivated
                | ApiError::CantInitiateConversation
                | ApiError::MessageCantBeDeleted => Self::Forbidden(detail),
                ApiError::ChatNotFound
                | ApiError::MessageToDeleteNotFound
                | ApiError::MessageToEditNotFound => Self::NotFound(detail),
                _ => Self::Api(detail),
            },
            RequestError::RetryAfter(_) => Self::RateLimited(detail),
            RequestError::Network(_) | RequestError::Io(_) => Self::Transport(detail),
            _ => Self::Api(detail),
        }
    }
}
