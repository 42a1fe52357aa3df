//! Page composition.
//!
//! Every page is a pure function of a [`LocaleContext`] and, for the drop
//! page, one [`FeedState`] snapshot plus the date shown in the header:
//! rendering the same inputs twice yields the same bytes. All strings are
//! resolved here and handed to the layout primitives as plain values.

pub mod layout;
pub mod links;
pub mod sections;

use askama::Template;
use chrono::NaiveDate;
use thiserror::Error;

use crate::feed::FeedState;
use crate::i18n::{LocaleContext, Params};
use crate::tiles::{self, Placeholder, Placeholders};

use layout::{ArtistSocial, Block, Figure, Fragment, Link, LinkStyle, Row, Title};
use sections::{ArtistBio, Colophon, Faq, FaqEntry, Grid, Intro, Ranking, RankingRow, Rationale};

/// Drop number shown in the intro heading.
const DROP_NUMBER: i64 = 1;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "nft.html")]
struct NftPage {
    lang: String,
    title: String,
    sections: Vec<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    lang: String,
    title: String,
    heading: String,
    drop_link: String,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    lang: &'static str,
    title: String,
    status: u16,
    message: String,
}

/// Render the drop page.
///
/// Sections come out in a fixed order: intro, NFT grid, ranking,
/// rationale, artists, FAQ with colophon. Only the ranking depends on
/// `feed`; a pending feed renders an empty table.
pub fn render_nft_page(
    ctx: &LocaleContext<'_>,
    feed: &FeedState,
    today: NaiveDate,
) -> Result<String, PageError> {
    let placeholders = Placeholders::default();
    let sections = vec![
        intro_section(ctx, today, &placeholders)?,
        grid_section(ctx, &placeholders)?,
        ranking_section(ctx, feed)?,
        rationale_section(ctx)?,
        artists_section(ctx)?,
        faq_section(ctx)?,
    ];

    let page = NftPage {
        lang: ctx.locale().to_string(),
        title: ctx.t("nft:meta.title"),
        sections,
    };
    Ok(page.render()?)
}

/// Render the landing page.
pub fn render_index_page(ctx: &LocaleContext<'_>) -> Result<String, PageError> {
    let drop_link = Link::local("/nft", ctx.t("index:link"), LinkStyle::Inline).render()?;
    let heading = ctx.t("index:1");
    let page = IndexPage {
        lang: ctx.locale().to_string(),
        title: heading.clone(),
        heading,
        drop_link,
    };
    Ok(page.render()?)
}

/// Render a bare error page; used where no locale has been negotiated.
pub fn render_error_page(status: u16, message: &str) -> Result<String, PageError> {
    let page = ErrorPage {
        lang: "en",
        title: format!("{status}"),
        status,
        message: message.to_string(),
    };
    Ok(page.render()?)
}

fn block(
    id: Option<&'static str>,
    colored: bool,
    title: Option<String>,
    rows: Vec<Row>,
) -> Result<String, askama::Error> {
    let title = title.map(|text| Title { text }.render()).transpose()?;
    let body = rows
        .into_iter()
        .map(|row| row.render())
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");
    Block {
        id,
        colored,
        title,
        body,
    }
    .render()
}

fn single_column(column: String) -> Row {
    Row {
        class: "",
        columns: vec![column],
    }
}

fn intro_section(
    ctx: &LocaleContext<'_>,
    today: NaiveDate,
    placeholders: &Placeholders,
) -> Result<String, askama::Error> {
    let coming_soon = |class: &'static str| {
        Figure {
            src: placeholders.get(Placeholder::Odd).to_string(),
            caption: Some(ctx.t("nft:intro.coming_soon")),
            reversed: false,
            class,
        }
        .render()
    };

    let faq_link = Link::external(links::FAQ_WIKI, ctx.t("nft:intro.link"), LinkStyle::Inline).render()?;
    let intro = Intro {
        date_label: ctx.t_with("nft:intro.date", &Params::new().date("date", today)),
        heading: ctx.t_with("nft:intro.label", &Params::new().int("n", DROP_NUMBER)),
        figure: coming_soon("figure--narrow")?,
        text: vec![
            Fragment::linked(ctx.t("nft:intro.text"), faq_link),
            Fragment::text(".".to_string()),
        ],
        cta: Link::external(links::MARKETPLACE, ctx.t("nft:intro.cta"), LinkStyle::Cta).render()?,
        help: vec![
            Link::external(
                links::PARTICIPATION_GUIDE,
                ctx.t("nft:intro.help.involvement"),
                LinkStyle::Help,
            )
            .with_icon("ℹ")
            .render()?,
            Link::local("#faq", ctx.t("nft:intro.help.faq"), LinkStyle::Help)
                .with_icon("❓")
                .render()?,
        ],
    };

    let row = Row {
        class: "",
        columns: vec![intro.render()?, coming_soon("only-wide")?],
    };
    block(None, false, None, vec![row])
}

fn grid_section(ctx: &LocaleContext<'_>, placeholders: &Placeholders) -> Result<String, askama::Error> {
    let tiles = tiles::grid(
        |index| {
            let params = Params::new().int("x", index as i64 + 1);
            Some(ctx.t_with("nft:listing.item.title", &params))
        },
        placeholders,
    )
    .into_iter()
    .map(|tile| {
        Figure {
            src: tile.src,
            caption: tile.caption,
            reversed: true,
            class: "tile",
        }
        .render()
    })
    .collect::<Result<Vec<_>, _>>()?;

    let grid = Grid { tiles }.render()?;
    block(None, true, Some(ctx.t("nft:listing.title")), vec![single_column(grid)])
}

fn ranking_section(ctx: &LocaleContext<'_>, feed: &FeedState) -> Result<String, askama::Error> {
    let rows = feed
        .rows()
        .iter()
        .enumerate()
        .map(|(i, buyer)| RankingRow {
            position: i + 1,
            name: buyer.name.clone(),
            amount: buyer.amount.to_string(),
        })
        .collect();

    let table = Ranking {
        position_header: ctx.t("nft:ranking.columns.position"),
        name_header: ctx.t("nft:ranking.columns.name"),
        amount_header: ctx.t("nft:ranking.columns.amount"),
        rows,
    }
    .render()?;
    block(None, false, Some(ctx.t("nft:ranking.title")), vec![single_column(table)])
}

fn rationale_section(ctx: &LocaleContext<'_>) -> Result<String, askama::Error> {
    let paragraphs = ["first", "second", "third", "fourth", "fith", "sixth"]
        .iter()
        .map(|n| ctx.t(&format!("nft:rationale.content.{n}")))
        .collect();

    let body = Rationale {
        paragraphs,
        video_src: links::RATIONALE_VIDEO,
        video_title: ctx.t("nft:rationale.video_title"),
    }
    .render()?;
    block(None, true, Some(ctx.t("nft:rationale.title")), vec![single_column(body)])
}

fn artists_section(ctx: &LocaleContext<'_>) -> Result<String, askama::Error> {
    let columns = links::ARTISTS
        .iter()
        .map(|artist| {
            ArtistBio {
                photo: Figure {
                    src: artist.photo.to_string(),
                    caption: None,
                    reversed: false,
                    class: "",
                }
                .render()?,
                title: ctx.t(&format!("nft:artists.{}.title", artist.key)),
                description: ctx.t(&format!("nft:artists.{}.description", artist.key)),
                social: ArtistSocial {
                    website: artist.website,
                    instagram: artist.instagram,
                    twitter: artist.twitter,
                }
                .render()?,
            }
            .render()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let row = Row {
        class: "artists",
        columns,
    };
    block(None, false, Some(ctx.t("nft:artists.title")), vec![row])
}

fn faq_section(ctx: &LocaleContext<'_>) -> Result<String, askama::Error> {
    let discord = || Link::external(links::DISCORD, "Discord".to_string(), LinkStyle::Inline).render();
    let plain = |n: &str| FaqEntry {
        summary: ctx.t(&format!("nft:faq.summary.{n}")),
        detail: vec![Fragment::text(ctx.t(&format!("nft:faq.detail.{n}")))],
        open: false,
    };

    let entries = vec![
        FaqEntry {
            summary: ctx.t("nft:faq.summary.first"),
            detail: vec![
                Fragment::linked(
                    ctx.t("nft:faq.detail.first.part1"),
                    Link::external(links::MANIFESTO, ctx.t("nft:faq.detail.first.link"), LinkStyle::Inline)
                        .render()?,
                ),
                Fragment::linked(format!(".{}", ctx.t("nft:faq.detail.first.part2")), discord()?),
            ],
            open: true,
        },
        plain("second"),
        plain("third"),
        plain("fourth"),
        FaqEntry {
            summary: ctx.t("nft:faq.summary.fith"),
            detail: vec![
                Fragment::linked(
                    ctx.t("nft:faq.detail.fith.part1"),
                    Link::external(links::POLYGON, "Polygon".to_string(), LinkStyle::Inline).render()?,
                ),
                Fragment::linked(ctx.t("nft:faq.detail.fith.part2"), discord()?),
                Fragment::text(ctx.t("nft:faq.detail.fith.part3")),
            ],
            open: false,
        },
    ];

    let colophon = Colophon {
        title: ctx.t("nft:colophon.title"),
        text: ctx.t("nft:colophon.text"),
        links: vec![
            Link::external(links::DISCORD_INVITE, ctx.t("nft:colophon.join.discord"), LinkStyle::Cta)
                .render()?,
            Link::external(links::FAQ_WIKI, ctx.t("nft:colophon.join.wiki"), LinkStyle::Secondary)
                .render()?,
        ],
    }
    .render()?;

    let faq = Faq { entries }.render()?;
    block(
        Some("faq"),
        true,
        Some(ctx.t("nft:faq.title")),
        vec![
            single_column(faq),
            Row {
                class: "colophon-row",
                columns: vec![colophon],
            },
        ],
    )
}
