pub mod health;
pub mod page;
pub mod tts;
pub mod voices;
