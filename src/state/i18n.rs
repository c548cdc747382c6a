use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::state::data_model::Month;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Fr]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::Fr => "language.option.fr",
        }
    }
}

pub fn tr(language: Language, key: &'static str) -> &'static str {
    catalog(language)
        .get(key)
        .map(String::as_str)
        .or_else(|| catalog(Language::En).get(key).map(String::as_str))
        .unwrap_or(key)
}

/// Localized abbreviation for a calendar month, empty for months outside
/// 1..=12.
pub fn month_label(language: Language, month: Month) -> &'static str {
    match MONTH_KEYS.get(usize::from(month).wrapping_sub(1)).copied() {
        Some(key) => tr(language, key),
        None => "",
    }
}

const MONTH_KEYS: [&str; 12] = [
    "month.1", "month.2", "month.3", "month.4", "month.5", "month.6", "month.7", "month.8",
    "month.9", "month.10", "month.11", "month.12",
];

fn catalog(language: Language) -> &'static BTreeMap<String, String> {
    match language {
        Language::En => EN_CATALOG.get_or_init(|| parse_catalog(Language::En)),
        Language::Fr => FR_CATALOG.get_or_init(|| parse_catalog(Language::Fr)),
    }
}

fn parse_catalog(language: Language) -> BTreeMap<String, String> {
    let source = match language {
        Language::En => include_str!("../../assets/i18n/en.json"),
        Language::Fr => include_str!("../../assets/i18n/fr.json"),
    };

    serde_json::from_str(source).unwrap_or_else(|err| {
        panic!(
            "failed to parse i18n catalog for language '{}': {err}",
            language.code()
        )
    })
}

static EN_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
static FR_CATALOG: OnceLock<BTreeMap<String, String>> = OnceLock::new();
