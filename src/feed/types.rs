use std::fmt;

use serde_json::{Map, Number, Value};

use crate::feed::error::FeedError;

/// Field names tried, in order, for the display identifier.
const NAME_FIELDS: [&str; 2] = ["name", "address"];
/// Field names tried, in order, for the amount.
const AMOUNT_FIELDS: [&str; 2] = ["amount", "total"];

/// One entry of the buyers feed.
///
/// Only the display identifier and the amount are read. Every other field
/// the feed sends, including an unused alias, is kept in `extra` and
/// ignored by rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Buyer {
    pub name: String,
    pub amount: Amount,
    pub extra: Map<String, Value>,
}

impl Buyer {
    pub fn new(name: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            extra: Map::new(),
        }
    }
}

impl TryFrom<Value> for Buyer {
    type Error = FeedError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(FeedError::Record {
                reason: "not an object",
            });
        };

        let name = take_first(&mut fields, &NAME_FIELDS)
            .and_then(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .ok_or(FeedError::Record {
                reason: "no name or address",
            })?;

        let amount = take_first(&mut fields, &AMOUNT_FIELDS)
            .map(Amount::from)
            .unwrap_or_default();

        Ok(Self {
            name,
            amount,
            extra: fields,
        })
    }
}

/// Remove and return the first non-null field of `keys`.
fn take_first(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    let key = keys
        .iter()
        .find(|k| fields.get(**k).is_some_and(|v| !v.is_null()))?;
    fields.remove(*key)
}

/// Amount exactly as the feed sent it.
///
/// Numbers keep their source text, so wei-sized integers are not rounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Amount {
    Number(Number),
    Text(String),
    #[default]
    Missing,
}

impl From<Value> for Amount {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Amount::Missing,
            Value::Number(n) => Amount::Number(n),
            Value::String(s) => Amount::Text(s),
            other => Amount::Text(other.to_string()),
        }
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value.into())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(s) => f.write_str(s),
            Amount::Missing => Ok(()),
        }
    }
}

/// Snapshot of the feed taken for one render.
///
/// `Pending` covers both "not answered yet" and "failed": in either case
/// the ranking table shows its empty default.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedState {
    #[default]
    Pending,
    Resolved(Vec<Buyer>),
}

impl FeedState {
    /// Rows to display, in feed order.
    pub fn rows(&self) -> &[Buyer] {
        match self {
            FeedState::Pending => &[],
            FeedState::Resolved(buyers) => buyers,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, FeedState::Resolved(_))
    }
}
