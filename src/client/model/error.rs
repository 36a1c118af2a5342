use thiserror::Error;

/// Flat client-side error: an HTTP status plus a message fit for display.
///
/// Status `0` means the request never produced a usable response (transport failure, or a body
/// that could not be parsed).
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Error raised before any request was sent, e.g. failed client-side validation.
    pub fn local(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
