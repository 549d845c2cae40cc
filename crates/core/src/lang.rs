//! Preferred-language name selection.

use crate::raw::LocalizedNames;

pub const DEFAULT_LANG_PRIORITY: &str = "ja, en, ja-latn";

/// Track names are keyed by label rather than by language code.
const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("ja", "Japanese"),
    ("en", "English"),
    ("ja-latn", "Romaji"),
];

pub fn language_label(code: &str) -> Option<&'static str> {
    LANGUAGE_LABELS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, label)| *label)
}

/// Ordered list of language codes, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangPriority(Vec<String>);

impl LangPriority {
    /// Parse a comma-separated list such as `"ja, en, ja-latn"`.
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(languages.into_iter().map(Into::into).collect())
    }

    pub fn languages(&self) -> &[String] {
        &self.0
    }

    /// Name in the first preferred language present, by code or by label.
    pub fn preferred<'a>(&self, names: &'a LocalizedNames) -> Option<&'a str> {
        self.0.iter().find_map(|lang| {
            names
                .get(lang)
                .or_else(|| language_label(lang).and_then(|label| names.get(label)))
        })
    }

    /// Preferred name, or the first name the service listed. `None` only when
    /// `names` holds nothing usable.
    pub fn resolve<'a>(&self, names: &'a LocalizedNames) -> Option<&'a str> {
        self.preferred(names).or_else(|| names.first())
    }
}

impl Default for LangPriority {
    fn default() -> Self {
        Self::parse(DEFAULT_LANG_PRIORITY)
    }
}
