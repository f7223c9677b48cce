use super::model::VoiceDescriptor;

/// Pick the voice matching `preferred` from a catalogue.
///
/// An exact id match wins, then the first entry whose display name contains
/// `preferred` (case-insensitive), then the first entry. Returns `None` only
/// for an empty catalogue.
pub fn select_voice_index(voices: &[VoiceDescriptor], preferred: Option<&str>) -> Option<usize> {
    if voices.is_empty() {
        return None;
    }

    let preferred = preferred.map(str::trim).filter(|p| !p.is_empty());

    if let Some(preferred) = preferred {
        if let Some(index) = voices.iter().position(|v| v.id == preferred) {
            return Some(index);
        }

        let needle = preferred.to_lowercase();
        if let Some(index) = voices
            .iter()
            .position(|v| v.display_name.to_lowercase().contains(&needle))
        {
            return Some(index);
        }
    }

    Some(0)
}

/// Resolve the voice id to synthesize with, falling back to `fallback_id`
/// when the catalogue is empty.
pub fn resolve_voice_id(
    voices: &[VoiceDescriptor],
    preferred: Option<&str>,
    fallback_id: &str,
) -> String {
    select_voice_index(voices, preferred)
        .map(|index| voices[index].id.clone())
        .unwrap_or_else(|| fallback_id.to_string())
}
