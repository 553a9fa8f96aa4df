//! Localized text resources
//!
//! Messages are nested JSON trees addressed by dotted keys such as
//! `"login.title"`. Lookups fall back to English and finally to the key.

use crate::error::{CoreError, CoreResult};
use crate::flags::{FlagKeys, FlagStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Uz,
    Ru,
}

impl Locale {
    pub const FALLBACK: Locale = Locale::En;

    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Uz, Locale::Ru]
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Uz => "uz",
            Locale::Ru => "ru",
        }
    }

    /// Name of the language in its own script
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Uz => "O'zbekcha",
            Locale::Ru => "Русский",
        }
    }

    /// Parse a locale code, accepting region suffixes like `ru-RU`
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::En),
            "uz" => Some(Locale::Uz),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Locale stored by the language picker, or the fallback
    pub fn from_store<S: FlagStore + ?Sized>(store: &S) -> Self {
        match store.get(FlagKeys::LANGUAGE) {
            Some(code) => Self::from_code(&code).unwrap_or_else(|| {
                warn!(code = %code, "Unknown stored locale, using fallback");
                Self::FALLBACK
            }),
            None => Self::FALLBACK,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const EN_MESSAGES: &str = include_str!("../locales/en.json");
const UZ_MESSAGES: &str = include_str!("../locales/uz.json");
const RU_MESSAGES: &str = include_str!("../locales/ru.json");

/// Message trees per locale
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<Locale, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the bundled translations
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled locale file is not a JSON object
    pub fn builtin() -> CoreResult<Self> {
        let mut catalog = Self::new();
        catalog.load_json(Locale::En, EN_MESSAGES)?;
        catalog.load_json(Locale::Uz, UZ_MESSAGES)?;
        catalog.load_json(Locale::Ru, RU_MESSAGES)?;
        Ok(catalog)
    }

    /// Replace the messages of a locale with a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or not an object
    pub fn load_json(&mut self, locale: Locale, json: &str) -> CoreResult<()> {
        let tree: Value = serde_json::from_str(json)?;
        if !tree.is_object() {
            return Err(CoreError::serialization_error(format!(
                "messages for {locale} must be a JSON object"
            )));
        }
        debug!(%locale, "Loaded message catalog");
        self.messages.insert(locale, tree);
        Ok(())
    }

    /// Message for `key` in exactly this locale
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.messages.get(&locale)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }

    /// Message for `key`, falling back to English and then to the key
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::FALLBACK, key))
            .map_or_else(
                || {
                    debug!(%locale, key, "Missing translation");
                    key.to_string()
                },
                str::to_string,
            )
    }

    /// Translate and substitute `{name}` placeholders
    pub fn translate_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(locale, key), |message, (name, value)| {
                message.replace(&format!("{{{name}}}"), value)
            })
    }

    /// Keys present in the fallback locale but missing from `locale`
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(tree) = self.messages.get(&Locale::FALLBACK) {
            collect_keys(tree, "", &mut keys);
        }
        keys.retain(|key| self.lookup(locale, key).is_none());
        keys
    }
}

fn collect_keys(node: &Value, prefix: &str, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect_keys(child, &key, out);
            }
        }
        _ => out.push(prefix.to_string()),
    }
}
