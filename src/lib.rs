//! Informational site for the NFTs d'Advent drop.
//!
//! Serves a page listing the 24 pieces of the drop, a buyer ranking read
//! from a JSON feed on every view, the rationale behind the drop, artist
//! bios and a FAQ, all in the visitor's locale.

pub mod cli;
pub mod config;
pub mod feed;
pub mod i18n;
pub mod logging;
pub mod page;
pub mod server;
pub mod tiles;
