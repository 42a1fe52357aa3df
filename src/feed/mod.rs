//! Buyer ranking feed.
//!
//! One read-only GET per page view against a fixed address. The result is
//! exposed as a [`FeedState`] so that rendering never blocks on, or fails
//! because of, the feed: anything short of a decoded buyer list degrades to
//! [`FeedState::Pending`], which renders as an empty ranking table.

mod client;
mod error;
mod types;

pub use client::FeedClient;
pub use error::FeedError;
pub use types::{Amount, Buyer, FeedState};
