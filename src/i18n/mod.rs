//! Internationalization module
//!
//! Provides translations for French (fr) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use std::collections::HashMap;

/// Internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("fr", "Fran\u{00E7}ais")]
    }
}

/// Detect system language
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    // "fr_FR.UTF-8" -> "fr"
    let lang_code = lang_env
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "fr" => "fr".to_string(),
        _ => "en".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_languages() {
        let en = I18n::new("en");
        assert_eq!(en.current_language(), "en");
        assert!(en.get("recommendation.efficient").contains("Efficient"));

        let fr = I18n::new("fr");
        assert_eq!(fr.current_language(), "fr");
        assert!(fr.get("recommendation.efficient").contains("Efficace"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
        assert!(i18n.get("recommendation.replace").contains("Consider replacing"));
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_both_languages_share_keys() {
        let mut en_keys: Vec<_> = en::get_translations().into_keys().collect();
        let mut fr_keys: Vec<_> = fr::get_translations().into_keys().collect();
        en_keys.sort();
        fr_keys.sort();
        assert_eq!(en_keys, fr_keys);
        assert_eq!(I18n::available_languages().len(), 2);
    }
}
