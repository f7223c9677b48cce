use super::dto::SynthesizeRequest;
use super::error::TtsServiceError;
use super::sanitizer::clean;
use crate::domain::voice::{VoiceService, VoiceServiceApi};
use crate::infrastructure::repositories::{SynthesisOptions, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub const MAX_TEXT_CHARS: usize = 5000;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice_id: String,
    pub char_count: usize,
    pub file_name: &'static str,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    voice_service: Arc<VoiceService>,
    clean_by_default: bool,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        voice_service: Arc<VoiceService>,
        clean_by_default: bool,
    ) -> Self {
        Self {
            tts_repo,
            voice_service,
            clean_by_default,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize one request into MP3 audio.
    ///
    /// Input is validated before any provider call; the provider is called
    /// at most once and its failures are returned, never retried.
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        // 1. Validate before touching the network
        let char_count = Self::validate_text(&request.text)?;
        Self::validate_speed(request.speed)?;

        tracing::info!(
            provider = self.tts_repo.name(),
            text_length = char_count,
            requested_voice = ?request.voice_id,
            speed = ?request.speed,
            "TTS synthesis request"
        );

        // 2. Clean the text if asked to
        let text = if request.clean.unwrap_or(self.clean_by_default) {
            let cleaned = clean(&request.text);
            tracing::info!(
                original_length = char_count,
                cleaned_length = cleaned.chars().count(),
                "Text cleaned"
            );
            if cleaned.is_empty() {
                return Err(TtsServiceError::Invalid(
                    "Text has nothing to speak after cleaning".to_string(),
                ));
            }
            // Spoken symbols lengthen the text; the provider limit applies to what is sent
            Self::check_length(cleaned.chars().count())?;
            cleaned
        } else {
            request.text
        };

        // 3. Resolve the voice
        let voice_id = self.resolve_voice(request.voice_id).await;
        let locale = self.catalogue_locale(&voice_id).await;

        // 4. Call the provider
        let options = SynthesisOptions {
            speed: request.speed,
            locale,
        };
        let audio_data = self
            .tts_repo
            .synthesize(&text, &voice_id, &options)
            .await
            .map_err(TtsServiceError::from)?;

        Ok(TtsSynthesisResult {
            audio_data,
            voice_id,
            char_count: text.chars().count(),
            file_name: self.tts_repo.audio_file_name(),
        })
    }
}

impl TtsService {
    fn validate_text(text: &str) -> Result<usize, TtsServiceError> {
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid(
                "Please enter some text to convert.".to_string(),
            ));
        }

        let char_count = text.chars().count();
        Self::check_length(char_count)?;

        Ok(char_count)
    }

    fn check_length(char_count: usize) -> Result<(), TtsServiceError> {
        if char_count > MAX_TEXT_CHARS {
            return Err(TtsServiceError::TooLarge(format!(
                "Text must be 5,000 characters or less (got {})",
                char_count
            )));
        }
        Ok(())
    }

    fn validate_speed(speed: Option<f32>) -> Result<(), TtsServiceError> {
        match speed {
            Some(speed) if !speed.is_finite() || !(MIN_SPEED..=MAX_SPEED).contains(&speed) => {
                Err(TtsServiceError::Invalid(format!(
                    "Speed must be between {} and {}",
                    MIN_SPEED, MAX_SPEED
                )))
            }
            _ => Ok(()),
        }
    }

    async fn resolve_voice(&self, requested: Option<String>) -> String {
        match requested.filter(|id| !id.trim().is_empty()) {
            Some(voice_id) => {
                if let Some(voices) = self.voice_service.cached_voices().await {
                    if !voices.iter().any(|v| v.id == voice_id) {
                        tracing::warn!(
                            voice = %voice_id,
                            "Requested voice is not in the current catalogue"
                        );
                    }
                }
                voice_id
            }
            None => self.voice_service.default_voice_id().await,
        }
    }

    async fn catalogue_locale(&self, voice_id: &str) -> Option<String> {
        self.voice_service
            .cached_voices()
            .await?
            .iter()
            .find(|v| v.id == voice_id)
            .and_then(|v| v.locale.clone())
    }
}
