use crate::error::AppError;
use crate::infrastructure::repositories::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Provider(ProviderError),
}

impl From<ProviderError> for TtsServiceError {
    fn from(err: ProviderError) -> Self {
        if err.is_credentials() {
            TtsServiceError::Unavailable(err.to_string())
        } else {
            TtsServiceError::Provider(err)
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            TtsServiceError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            TtsServiceError::Provider(e) => {
                AppError::ExternalService(format!("Error generating audio: {}", e))
            }
        }
    }
}
