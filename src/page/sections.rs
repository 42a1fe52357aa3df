//! Section bodies of the drop page, rendered inside a [`super::layout::Row`].

use askama::Template;

use crate::page::layout::Fragment;

#[derive(Template)]
#[template(path = "sections/intro.html")]
pub struct Intro {
    pub date_label: String,
    pub heading: String,
    pub figure: String,
    pub text: Vec<Fragment>,
    pub cta: String,
    pub help: Vec<String>,
}

#[derive(Template)]
#[template(path = "sections/grid.html")]
pub struct Grid {
    pub tiles: Vec<String>,
}

pub struct RankingRow {
    pub position: usize,
    pub name: String,
    pub amount: String,
}

#[derive(Template)]
#[template(path = "sections/ranking.html")]
pub struct Ranking {
    pub position_header: String,
    pub name_header: String,
    pub amount_header: String,
    pub rows: Vec<RankingRow>,
}

#[derive(Template)]
#[template(path = "sections/rationale.html")]
pub struct Rationale {
    pub paragraphs: Vec<String>,
    pub video_src: &'static str,
    pub video_title: String,
}

#[derive(Template)]
#[template(path = "sections/artist.html")]
pub struct ArtistBio {
    pub photo: String,
    pub title: String,
    pub description: String,
    pub social: String,
}

pub struct FaqEntry {
    pub summary: String,
    pub detail: Vec<Fragment>,
    pub open: bool,
}

#[derive(Template)]
#[template(path = "sections/faq.html")]
pub struct Faq {
    pub entries: Vec<FaqEntry>,
}

#[derive(Template)]
#[template(path = "sections/colophon.html")]
pub struct Colophon {
    pub title: String,
    pub text: String,
    pub links: Vec<String>,
}
