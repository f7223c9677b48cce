use super::tts_repository::{error_body, ProviderError, SynthesisOptions, TtsRepository};
use crate::domain::voice::VoiceDescriptor;
use crate::infrastructure::config::ElevenLabsConfig;
use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

const PROVIDER: &str = "elevenlabs";

/// Voice used when the catalogue cannot be fetched
pub const ELEVENLABS_FALLBACK_VOICE_ID: &str = "KWlsl9PZDXTXVygIiX8y";

pub const ELEVENLABS_AUDIO_FILE_NAME: &str = "elevenlabs_audio.mp3";

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<ElevenLabsVoice>,
}

#[derive(Debug, Deserialize)]
struct ElevenLabsVoice {
    voice_id: String,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
}

impl From<ElevenLabsVoice> for VoiceDescriptor {
    fn from(voice: ElevenLabsVoice) -> Self {
        Self {
            display_name: voice.name.unwrap_or_else(|| voice.voice_id.clone()),
            id: voice.voice_id,
            category: voice.category.unwrap_or_else(|| "unknown".to_string()),
            locale: None,
            description: voice.description.filter(|d| !d.trim().is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<VoiceSettings>,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    speed: f32,
}

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    config: ElevenLabsConfig,
}

impl ElevenLabsTtsRepository {
    pub fn new(http_client: reqwest::Client, config: ElevenLabsConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn transport_error(e: reqwest::Error) -> ProviderError {
        ProviderError::Transport {
            provider: PROVIDER,
            detail: e.to_string(),
        }
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn supports_speed(&self) -> bool {
        true
    }

    fn fallback_voice_id(&self) -> &'static str {
        ELEVENLABS_FALLBACK_VOICE_ID
    }

    fn audio_file_name(&self) -> &'static str {
        ELEVENLABS_AUDIO_FILE_NAME
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, ProviderError> {
        tracing::info!(provider = PROVIDER, "Fetching voice catalogue");

        let response = self
            .http_client
            .get(self.url("/v1/voices"))
            .header("xi-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            tracing::error!(
                provider = PROVIDER,
                status = status.as_u16(),
                body = %body,
                "Voice catalogue request rejected"
            );
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let payload: VoicesResponse = response.json().await.map_err(|e| ProviderError::Decode {
            provider: PROVIDER,
            detail: e.to_string(),
        })?;

        let voices: Vec<VoiceDescriptor> = payload.voices.into_iter().map(Into::into).collect();
        tracing::debug!(provider = PROVIDER, voice_count = voices.len(), "Voice catalogue received");

        Ok(voices)
    }

    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        options: &SynthesisOptions,
    ) -> Result<Vec<u8>, ProviderError> {
        let start_time = std::time::Instant::now();

        let request = SpeechRequest {
            text,
            model_id: &self.config.model_id,
            voice_settings: options.speed.map(|speed| VoiceSettings { speed }),
        };

        tracing::info!(
            provider = PROVIDER,
            model = %self.config.model_id,
            voice = voice_id,
            output_format = %self.config.output_format,
            speed = ?options.speed,
            text_length = text.chars().count(),
            "Calling ElevenLabs text-to-speech"
        );

        let url = self.url(&format!(
            "/v1/text-to-speech/{}",
            urlencoding::encode(voice_id)
        ));

        let response = self
            .http_client
            .post(url)
            .query(&[("output_format", self.config.output_format.as_str())])
            .header("xi-api-key", &self.config.api_key)
            .header("Accept", "audio/mpeg")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice = voice_id, "ElevenLabs request failed");
                Self::transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            tracing::error!(
                provider = PROVIDER,
                status = status.as_u16(),
                body = %body,
                voice = voice_id,
                "ElevenLabs text-to-speech rejected"
            );
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        // The audio arrives in chunks; join them into one MP3 buffer
        let mut stream = response.bytes_stream();
        let mut audio_data = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ProviderError::Decode {
                provider: PROVIDER,
                detail: e.to_string(),
            })?;
            audio_data.extend_from_slice(&chunk);
        }

        tracing::info!(
            provider = PROVIDER,
            voice = voice_id,
            latency_ms = start_time.elapsed().as_millis() as u64,
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
