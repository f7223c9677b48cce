/// Locale used when a voice name carries none
pub const DEFAULT_SSML_LOCALE: &str = "en-US";

/// Escape the five XML-reserved characters
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Derive `ll-CC` from an Azure short name such as `en-US-JennyNeural`
pub fn locale_from_voice_name(voice_name: &str) -> Option<String> {
    let mut parts = voice_name.splitn(3, '-');
    let language = parts.next()?;
    let region = parts.next()?;
    parts.next()?;

    let is_code = |s: &str| (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic());
    if is_code(language) && is_code(region) {
        Some(format!("{}-{}", language, region))
    } else {
        None
    }
}

/// Build the SSML document for a single-voice utterance.
/// Voice name and text are escaped before embedding.
pub fn build_ssml(text: &str, voice_name: &str, locale: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{locale}'>\
<voice xml:lang='{locale}' name='{voice}'>{text}</voice></speak>",
        locale = escape_xml(locale),
        voice = escape_xml(voice_name),
        text = escape_xml(text),
    )
}
