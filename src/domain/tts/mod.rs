pub mod dto;
pub mod error;
pub mod sanitizer;
pub mod service;
pub mod ssml;

pub use dto::{SynthesizeRequest, VoiceResponse, VoicesResponse};
pub use error::TtsServiceError;
pub use sanitizer::clean;
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult, MAX_TEXT_CHARS};
