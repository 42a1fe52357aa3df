use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Deserialize;
use thiserror::Error;
use toml::{Table, Value};

use crate::i18n::params::{ParamValue, Params};
use crate::i18n::{Locale, Translate};

/// Reserved table holding per-locale formatting data.
const META_TABLE: &str = "_meta";

/// Errors that can occur when loading string catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read locales directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read catalog '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Default locale '{locale}' has no catalog")]
    MissingDefaultLocale { locale: String },
}

/// Formatting data for dates and decimals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocaleMeta {
    pub months: Vec<String>,
    /// Pattern with `{day}`, `{month}` and `{year}`.
    pub date_format: String,
    pub decimal_separator: String,
}

impl Default for LocaleMeta {
    fn default() -> Self {
        Self {
            months: [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            date_format: "{month} {day}, {year}".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct LocaleStrings {
    strings: HashMap<String, String>,
    meta: LocaleMeta,
}

/// Read-only key → string catalog for every supported locale.
///
/// Lookups fall back from the requested locale to the default locale and
/// finally to the key itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_locale: Locale,
    locales: HashMap<Locale, LocaleStrings>,
}

impl Catalog {
    /// Empty catalog. Add namespaces with [`Catalog::insert_namespace`].
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            locales: HashMap::new(),
        }
    }

    /// Load `<dir>/<locale>/<namespace>.toml` for every locale directory.
    pub fn load(dir: &Path, default_locale: &Locale) -> Result<Self, I18nError> {
        let mut catalog = Self::new(default_locale.clone());

        let entries = fs::read_dir(dir).map_err(|e| I18nError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        for entry in entries.flatten() {
            let locale_dir = entry.path();
            if !locale_dir.is_dir() {
                continue;
            }
            let Some(tag) = locale_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let locale = Locale::new(tag);

            let files = fs::read_dir(&locale_dir).map_err(|e| I18nError::ReadDir {
                path: locale_dir.clone(),
                source: e,
            })?;

            for file in files.flatten() {
                let path = file.path();
                if path.extension().is_none_or(|ext| ext != "toml") {
                    continue;
                }
                let Some(namespace) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let source = fs::read_to_string(&path).map_err(|e| I18nError::ReadFile {
                    path: path.clone(),
                    source: e,
                })?;
                catalog.insert_namespace(&locale, namespace, &source)?;
            }
        }

        if !catalog.locales.contains_key(default_locale) {
            return Err(I18nError::MissingDefaultLocale {
                locale: default_locale.to_string(),
            });
        }

        tracing::info!(
            locales = ?catalog.supported(),
            default = %catalog.default_locale,
            "Loaded string catalogs"
        );
        Ok(catalog)
    }

    /// Parse one namespace file and merge it into `locale`.
    pub fn insert_namespace(
        &mut self,
        locale: &Locale,
        namespace: &str,
        source: &str,
    ) -> Result<(), I18nError> {
        let mut table: Table = toml::from_str(source).map_err(|e| I18nError::Parse {
            origin: format!("{}/{}", locale, namespace),
            source: e,
        })?;

        let entry = self.locales.entry(locale.clone()).or_default();

        if let Some(meta) = table.remove(META_TABLE) {
            entry.meta = meta.try_into().map_err(|e| I18nError::Parse {
                origin: format!("{}/{}#{}", locale, namespace, META_TABLE),
                source: e,
            })?;
        }

        flatten_into(&mut entry.strings, &format!("{namespace}:"), &table);
        Ok(())
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.locales.contains_key(locale)
    }

    /// Supported locale tags, sorted.
    pub fn supported(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(Locale::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Raw template for `key`, following the fallback chain.
    pub fn lookup(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|l| l.strings.get(key))
            .or_else(|| {
                self.locales
                    .get(&self.default_locale)
                    .and_then(|l| l.strings.get(key))
            })
            .map(String::as_str)
    }

    /// Pick the locale for a request.
    ///
    /// An explicit `?lang=` wins, then the first supported `Accept-Language`
    /// entry by quality (a region tag like `en-GB` matches `en`), then the
    /// default locale.
    pub fn negotiate(&self, requested: Option<&str>, accept_language: Option<&str>) -> Locale {
        if let Some(locale) = requested.and_then(|tag| self.match_tag(tag)) {
            return locale;
        }

        if let Some(header) = accept_language {
            let mut ranges: Vec<(&str, f32)> = header
                .split(',')
                .filter_map(|part| {
                    let mut pieces = part.split(';');
                    let tag = pieces.next()?.trim();
                    if tag.is_empty() {
                        return None;
                    }
                    let quality = pieces
                        .find_map(|p| p.trim().strip_prefix("q="))
                        .and_then(|q| q.parse::<f32>().ok())
                        .unwrap_or(1.0);
                    Some((tag, quality))
                })
                .collect();
            // Stable sort keeps header order among equal qualities.
            ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

            if let Some(locale) = ranges
                .iter()
                .filter(|(_, q)| *q > 0.0)
                .find_map(|(tag, _)| self.match_tag(tag))
            {
                return locale;
            }
        }

        self.default_locale.clone()
    }

    fn match_tag(&self, tag: &str) -> Option<Locale> {
        let exact = Locale::new(tag);
        if self.has_locale(&exact) {
            return Some(exact);
        }
        let primary = Locale::new(exact.as_str().split(['-', '_']).next().unwrap_or_default());
        self.has_locale(&primary).then_some(primary)
    }

    fn meta(&self, locale: &Locale) -> LocaleMeta {
        self.locales
            .get(locale)
            .or_else(|| self.locales.get(&self.default_locale))
            .map(|l| l.meta.clone())
            .unwrap_or_default()
    }
}

impl Translate for Catalog {
    fn translate(&self, locale: &Locale, key: &str, params: &Params) -> String {
        match self.lookup(locale, key) {
            Some(template) => interpolate(template, params, &self.meta(locale)),
            None => {
                tracing::debug!(%locale, key, "Missing localization key");
                key.to_string()
            }
        }
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, table: &Table) {
    for (name, value) in table {
        match value {
            Value::String(text) => {
                out.insert(format!("{prefix}{name}"), text.clone());
            }
            Value::Table(nested) => flatten_into(out, &format!("{prefix}{name}."), nested),
            other => {
                out.insert(format!("{prefix}{name}"), other.to_string());
            }
        }
    }
}

/// Replace `{{name}}` placeholders. Unknown names are left untouched.
fn interpolate(template: &str, params: &Params, meta: &LocaleMeta) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        match params.get(name) {
            Some(value) => out.push_str(&format_value(value, meta)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn format_value(value: &ParamValue, meta: &LocaleMeta) -> String {
    match value {
        ParamValue::Text(text) => text.clone(),
        ParamValue::Integer(n) => n.to_string(),
        ParamValue::Decimal(n) => n.to_string().replace('.', &meta.decimal_separator),
        ParamValue::Date(date) => {
            let month = meta
                .months
                .get(date.month0() as usize)
                .cloned()
                .unwrap_or_else(|| date.month().to_string());
            meta.date_format
                .replace("{day}", &date.day().to_string())
                .replace("{month}", &month)
                .replace("{year}", &date.year().to_string())
        }
    }
}
