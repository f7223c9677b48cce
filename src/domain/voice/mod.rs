pub mod cache;
pub mod model;
pub mod selection;
pub mod service;

pub use cache::VoiceCache;
pub use model::{VoiceCatalogue, VoiceDescriptor};
pub use selection::{resolve_voice_id, select_voice_index};
pub use service::{VoiceService, VoiceServiceApi};
