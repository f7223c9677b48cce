use crate::e2e::helpers;

use helpers::{assertions::assert_audio_response, fixtures, TestContext};
use hyper::StatusCode;
use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

const SYNTHESIZE: &str = "/api/tts/synthesize";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_with_requested_voice(ctx: &mut TestContext) {
    let mock = fixtures::mock_elevenlabs_speech(&mut ctx.provider, "v-roger").await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "Hello there", "voice_id": "v-roger"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_audio_response(&response, "elevenlabs_audio.mp3");
    response.assert_header("x-voice-id", "v-roger");
    response.assert_header("x-character-count", "11");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_default_voice_when_none_requested(ctx: &mut TestContext) {
    let voices = fixtures::mock_elevenlabs_voices(&mut ctx.provider).await;
    let speech = fixtures::mock_elevenlabs_speech(&mut ctx.provider, "v-aria").await;

    let response = ctx
        .client
        .post(SYNTHESIZE, &json!({"text": "Good morning"}))
        .await
        .unwrap();

    voices.assert_async().await;
    speech.assert_async().await;
    assert_audio_response(&response, "elevenlabs_audio.mp3");
    response.assert_header("x-voice-id", "v-aria");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_model_and_speed_to_elevenlabs(ctx: &mut TestContext) {
    let mock = ctx
        .provider
        .mock("POST", "/v1/text-to-speech/v-aria")
        .match_query(Matcher::UrlEncoded(
            "output_format".to_string(),
            "mp3_44100_128".to_string(),
        ))
        .match_body(Matcher::PartialJson(json!({
            "text": "Slow down",
            "model_id": "eleven_multilingual_v2",
            "voice_settings": {"speed": 0.75}
        })))
        .with_status(200)
        .with_body(fixtures::FAKE_MP3)
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "Slow down", "voice_id": "v-aria", "speed": 0.75}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clean_text_when_asked(ctx: &mut TestContext) {
    let mock = ctx
        .provider
        .mock("POST", "/v1/text-to-speech/v-aria")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "text": "Tom and Jerry at home 1"
        })))
        .with_status(200)
        .with_body(fixtures::FAKE_MP3)
        .create_async()
        .await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "Tom & Jerry @ home #1", "voice_id": "v-aria", "clean": true}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text_without_calling_provider(ctx: &mut TestContext) {
    let mocks = fixtures::mock_no_provider_calls(&mut ctx.provider).await;

    for text in ["", "   \n\t "] {
        let response = ctx
            .client
            .post(SYNTHESIZE, &json!({"text": text, "voice_id": "v-aria"}))
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Please enter some text");
    }

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_the_limit(ctx: &mut TestContext) {
    let mocks = fixtures::mock_no_provider_calls(&mut ctx.provider).await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "a".repeat(5001), "voice_id": "v-aria"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("5,000 characters");

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_text_at_the_limit(ctx: &mut TestContext) {
    let mock = fixtures::mock_elevenlabs_speech(&mut ctx.provider, "v-aria").await;

    // Multi-byte characters count once each
    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "é".repeat(5000), "voice_id": "v-aria"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_audio_response(&response, "elevenlabs_audio.mp3");
    response.assert_header("x-character-count", "5000");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_text_outside_the_basic_plane_at_the_limit(ctx: &mut TestContext) {
    let mock = fixtures::mock_elevenlabs_speech(&mut ctx.provider, "v-aria").await;

    // 5000 characters but 10000 UTF-16 units
    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "\u{1F600}".repeat(5000), "voice_id": "v-aria"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_audio_response(&response, "elevenlabs_audio.mp3");
    response.assert_header("x-character-count", "5000");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_lengthened_past_the_limit_by_cleaning(ctx: &mut TestContext) {
    let mocks = fixtures::mock_no_provider_calls(&mut ctx.provider).await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "&".repeat(2000), "voice_id": "v-aria", "clean": true}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("5,000 characters");

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_speed_out_of_range(ctx: &mut TestContext) {
    let mocks = fixtures::mock_no_provider_calls(&mut ctx.provider).await;

    for speed in [0.25, 2.5] {
        let response = ctx
            .client
            .post(
                SYNTHESIZE,
                &json!({"text": "Hello", "voice_id": "v-aria", "speed": speed}),
            )
            .await
            .unwrap();

        response
            .assert_status(StatusCode::BAD_REQUEST)
            .assert_error_message("Speed must be between");
    }

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_provider_failure_as_bad_gateway(ctx: &mut TestContext) {
    let mock = fixtures::mock_elevenlabs_speech_error(
        &mut ctx.provider,
        "v-aria",
        401,
        r#"{"detail":{"status":"invalid_api_key"}}"#,
    )
    .await;

    let response = ctx
        .client
        .post(SYNTHESIZE, &json!({"text": "Hello", "voice_id": "v-aria"}))
        .await
        .unwrap();

    mock.assert_async().await;
    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Error generating audio");
    response.assert_error_message("401");
    assert!(response.header("x-request-id").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_retry_failed_synthesis(ctx: &mut TestContext) {
    let mock = ctx
        .provider
        .mock("POST", "/v1/text-to-speech/v-aria")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let response = ctx
        .client
        .post(SYNTHESIZE, &json!({"text": "Hello", "voice_id": "v-aria"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_GATEWAY);
    mock.assert_async().await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &mut TestContext) {
    let mocks = fixtures::mock_no_provider_calls(&mut ctx.provider).await;

    let response = ctx
        .client
        .post_raw(SYNTHESIZE, "application/json", r#"{"text": "unterminated"#)
        .await
        .unwrap();

    assert!(
        response.status.is_client_error(),
        "Expected a client error, got {}",
        response.status
    );

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn it_should_synthesize_escaped_ssml_with_azure() {
    let mut ctx = TestContext::azure().await;
    let mock = fixtures::mock_azure_speech(
        &mut ctx.provider,
        Matcher::AllOf(vec![
            Matcher::Regex("xml:lang='es-ES'".to_string()),
            Matcher::Regex("name='es-ES-AlvaroNeural'".to_string()),
            Matcher::Regex("Fish &amp; chips &lt;3".to_string()),
        ]),
    )
    .await;

    let response = ctx
        .client
        .post(
            SYNTHESIZE,
            &json!({"text": "Fish & chips <3", "voice_id": "es-ES-AlvaroNeural", "speed": 1.5}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_audio_response(&response, "azure_audio.mp3");
    response.assert_header("x-voice-id", "es-ES-AlvaroNeural");
}

#[tokio::test]
async fn it_should_report_unavailable_without_credentials() {
    let ctx = TestContext::unconfigured().await;

    let response = ctx
        .client
        .post(SYNTHESIZE, &json!({"text": "Hello", "voice_id": "v-aria"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .assert_error_message("ELEVENLABS_API_KEY");
    assert_eq!(response.header("content-type").map(String::as_str), Some("application/json"));
}
