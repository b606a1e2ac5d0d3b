// src/i18n/resolver.rs

/// Raw language hints carried by one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageSignals<'a> {
    pub query: Option<&'a str>,
    pub cookie: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

/// Picks one response language per request.
///
/// Precedence, first match wins:
/// 1. non-empty `lang` query parameter, verbatim
/// 2. `lang` cookie, verbatim
/// 3. primary subtag of the first `Accept-Language` entry, if supported
/// 4. the default language
///
/// Steps 1 and 2 are not checked against the supported set. `q` weights in
/// `Accept-Language` are ignored; only the first entry counts.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    supported: Vec<String>,
    default: String,
}

impl LanguageResolver {
    pub fn new(supported: Vec<String>, default: impl Into<String>) -> Self {
        Self {
            supported,
            default: default.into(),
        }
    }

    pub fn resolve(&self, signals: LanguageSignals<'_>) -> String {
        resolve_language(
            signals.query,
            signals.cookie,
            signals.accept_language,
            &self.supported,
            &self.default,
        )
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.supported.iter().any(|s| s == lang)
    }

    /// Supported value or the default; used when persisting a user's choice.
    pub fn sanitize(&self, lang: Option<&str>) -> String {
        match lang {
            Some(lang) if self.is_supported(lang) => lang.to_string(),
            _ => self.default.clone(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }
}

pub fn resolve_language(
    query: Option<&str>,
    cookie: Option<&str>,
    accept_language: Option<&str>,
    supported: &[String],
    default: &str,
) -> String {
    if let Some(lang) = query.filter(|q| !q.is_empty()) {
        return lang.to_string();
    }

    if let Some(lang) = cookie {
        return lang.to_string();
    }

    if let Some(primary) = accept_language.and_then(primary_subtag) {
        if supported.iter().any(|s| s == primary) {
            return primary.to_string();
        }
    }

    default.to_string()
}

/// `"es-ES,en;q=0.9"` -> `"es"`.
fn primary_subtag(header: &str) -> Option<&str> {
    if header.is_empty() {
        return None;
    }
    header.split(',').next()?.split('-').next()
}
