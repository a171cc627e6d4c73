use unicode_normalization::UnicodeNormalization;

/// Question and exclamation marks in both Spanish and English forms
const STRIPPED: [char; 4] = ['¿', '?', '¡', '!'];

/// Lowercased, composed form of the trimmed input, punctuation kept
pub(crate) fn lowercase(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Full normalization applied before any rule runs
pub fn normalize(text: &str) -> String {
    let lowered = lowercase(text);
    lowered.replace(STRIPPED, "").trim().to_string()
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
