//! Localized text lookup.
//!
//! Pages never read an ambient "current language": every render receives a
//! [`LocaleContext`] carrying the negotiated [`Locale`] and the provider to
//! resolve keys against. Keys are `namespace:dotted.path`; parameters are
//! interpolated into `{{name}}` placeholders.

mod catalog;
mod params;

pub use catalog::{Catalog, I18nError, LocaleMeta};
pub use params::{ParamValue, Params};

use std::fmt;

/// A locale tag such as `ca` or `en`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a key plus parameters to display text.
///
/// Implementations must tolerate any key: an unknown one resolves to some
/// fallback string rather than an error.
pub trait Translate: Send + Sync {
    fn translate(&self, locale: &Locale, key: &str, params: &Params) -> String;
}

/// Locale plus provider, threaded through every render call.
#[derive(Clone, Copy)]
pub struct LocaleContext<'a> {
    locale: &'a Locale,
    provider: &'a dyn Translate,
}

impl<'a> LocaleContext<'a> {
    pub fn new(locale: &'a Locale, provider: &'a dyn Translate) -> Self {
        Self { locale, provider }
    }

    pub fn locale(&self) -> &Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.provider.translate(self.locale, key, &Params::default())
    }

    pub fn t_with(&self, key: &str, params: &Params) -> String {
        self.provider.translate(self.locale, key, params)
    }
}
