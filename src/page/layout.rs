//! Presentational building blocks shared by every section.
//!
//! Children are passed in already rendered; each primitive escapes its own
//! text fields.

use askama::Template;

#[derive(Template)]
#[template(path = "layout/title.html")]
pub struct Title {
    pub text: String,
}

/// Full-width band holding one section.
#[derive(Template)]
#[template(path = "layout/block.html")]
pub struct Block {
    pub id: Option<&'static str>,
    pub colored: bool,
    pub title: Option<String>,
    pub body: String,
}

/// Responsive row; each entry becomes one column.
#[derive(Template)]
#[template(path = "layout/row.html")]
pub struct Row {
    pub class: &'static str,
    pub columns: Vec<String>,
}

/// Image with an optional caption. `reversed` puts the caption on top.
#[derive(Template)]
#[template(path = "layout/figure.html")]
pub struct Figure {
    pub src: String,
    pub caption: Option<String>,
    pub reversed: bool,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Inline,
    Help,
    Cta,
    Secondary,
}

impl LinkStyle {
    pub fn class(&self) -> &'static str {
        match self {
            LinkStyle::Inline => "link link--inline",
            LinkStyle::Help => "link link--help",
            LinkStyle::Cta => "button button--cta",
            LinkStyle::Secondary => "button button--secondary",
        }
    }
}

#[derive(Template)]
#[template(path = "layout/link.html")]
pub struct Link {
    pub href: String,
    pub label: String,
    pub style: LinkStyle,
    pub new_tab: bool,
    pub icon: Option<&'static str>,
}

impl Link {
    /// Link opening in a new tab.
    pub fn external(href: &str, label: String, style: LinkStyle) -> Self {
        Self {
            href: href.to_string(),
            label,
            style,
            new_tab: true,
            icon: None,
        }
    }

    /// Same-page link.
    pub fn local(href: &str, label: String, style: LinkStyle) -> Self {
        Self {
            href: href.to_string(),
            label,
            style,
            new_tab: false,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Website plus social handles of an artist.
#[derive(Template)]
#[template(path = "layout/social.html")]
pub struct ArtistSocial {
    pub website: &'static str,
    pub instagram: &'static str,
    pub twitter: Option<&'static str>,
}

/// Text run optionally followed by a rendered link.
pub struct Fragment {
    pub text: String,
    pub link: Option<String>,
}

impl Fragment {
    pub fn text(text: String) -> Self {
        Self { text, link: None }
    }

    pub fn linked(text: String, link: String) -> Self {
        Self {
            text,
            link: Some(link),
        }
    }
}
