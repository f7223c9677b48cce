use super::tts_repository::{error_body, ProviderError, SynthesisOptions, TtsRepository};
use crate::domain::tts::ssml::{build_ssml, locale_from_voice_name, DEFAULT_SSML_LOCALE};
use crate::domain::voice::VoiceDescriptor;
use crate::infrastructure::config::AzureConfig;
use async_trait::async_trait;
use serde::Deserialize;

const PROVIDER: &str = "azure";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const USER_AGENT: &str = "tts-gateway";

pub const AZURE_FALLBACK_VOICE_ID: &str = "en-US-JennyNeural";

pub const AZURE_AUDIO_FILE_NAME: &str = "azure_audio.mp3";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AzureVoice {
    short_name: String,
    display_name: Option<String>,
    local_name: Option<String>,
    gender: Option<String>,
    locale: Option<String>,
    locale_name: Option<String>,
    voice_type: Option<String>,
}

impl From<AzureVoice> for VoiceDescriptor {
    fn from(voice: AzureVoice) -> Self {
        let description = match (voice.locale_name, voice.voice_type) {
            (Some(locale_name), Some(voice_type)) => Some(format!("{}, {}", locale_name, voice_type)),
            (Some(locale_name), None) => Some(locale_name),
            (None, voice_type) => voice_type,
        };

        Self {
            display_name: voice
                .display_name
                .or(voice.local_name)
                .unwrap_or_else(|| voice.short_name.clone()),
            id: voice.short_name,
            category: voice.gender.unwrap_or_else(|| "Unknown".to_string()),
            locale: voice.locale,
            description,
        }
    }
}

/// Azure Cognitive Services implementation of TTS repository
pub struct AzureTtsRepository {
    http_client: reqwest::Client,
    config: AzureConfig,
}

impl AzureTtsRepository {
    pub fn new(http_client: reqwest::Client, config: AzureConfig) -> Self {
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
impl TtsRepository for AzureTtsRepository {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn supports_speed(&self) -> bool {
        false
    }

    fn fallback_voice_id(&self) -> &'static str {
        AZURE_FALLBACK_VOICE_ID
    }

    fn audio_file_name(&self) -> &'static str {
        AZURE_AUDIO_FILE_NAME
    }

    async fn list_voices(&self) -> Result<Vec<VoiceDescriptor>, ProviderError> {
        tracing::info!(
            provider = PROVIDER,
            region = %self.config.region,
            "Fetching voice catalogue"
        );

        let response = self
            .http_client
            .get(self.url("/cognitiveservices/voices/list"))
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
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

        let payload: Vec<AzureVoice> = response.json().await.map_err(|e| ProviderError::Decode {
            provider: PROVIDER,
            detail: e.to_string(),
        })?;

        let voices: Vec<VoiceDescriptor> = payload.into_iter().map(Into::into).collect();
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

        if options.speed.is_some() {
            tracing::debug!(provider = PROVIDER, "Speed is not supported, ignoring");
        }

        let locale = options
            .locale
            .clone()
            .or_else(|| locale_from_voice_name(voice_id))
            .unwrap_or_else(|| DEFAULT_SSML_LOCALE.to_string());
        let ssml = build_ssml(text, voice_id, &locale);

        tracing::info!(
            provider = PROVIDER,
            region = %self.config.region,
            voice = voice_id,
            locale = %locale,
            output_format = %self.config.output_format,
            text_length = text.chars().count(),
            "Calling Azure text-to-speech"
        );

        let response = self
            .http_client
            .post(self.url("/cognitiveservices/v1"))
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header(OUTPUT_FORMAT_HEADER, &self.config.output_format)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .body(ssml)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice = voice_id, "Azure request failed");
                Self::transport_error(e)
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = error_body(response).await;
            tracing::error!(
                provider = PROVIDER,
                status = status.as_u16(),
                body = %body,
                voice = voice_id,
                "Azure text-to-speech rejected"
            );
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Decode {
                provider: PROVIDER,
                detail: e.to_string(),
            })?
            .to_vec();

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
