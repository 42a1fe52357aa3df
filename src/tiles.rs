//! NFT tile resolution for the reveal grid.

/// Number of pieces in the drop; the grid always renders this many tiles.
pub const GRID_SIZE: usize = 24;

/// Fallback artwork shown until a piece is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Even,
    Odd,
}

impl Placeholder {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Placeholder::Even
        } else {
            Placeholder::Odd
        }
    }
}

/// Image references for both placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub even: String,
    pub odd: String,
}

impl Placeholders {
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Even => &self.even,
            Placeholder::Odd => &self.odd,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            even: "/public/images/unveiled-tio2.jpeg".to_string(),
            odd: "/public/images/unveiled-tio1.jpeg".to_string(),
        }
    }
}

/// A renderable grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub src: String,
    pub caption: Option<String>,
}

/// Resolve one tile. An explicit image wins; otherwise the placeholder is
/// picked by the parity of `index`.
pub fn resolve_tile(
    index: usize,
    src: Option<&str>,
    caption: Option<String>,
    placeholders: &Placeholders,
) -> Tile {
    let src = match src {
        Some(src) => src.to_string(),
        None => placeholders.get(Placeholder::for_index(index)).to_string(),
    };
    Tile {
        index,
        src,
        caption,
    }
}

/// Build the full grid of [`GRID_SIZE`] unrevealed tiles.
pub fn grid<F>(caption: F, placeholders: &Placeholders) -> Vec<Tile>
where
    F: Fn(usize) -> Option<String>,
{
    (0..GRID_SIZE)
        .map(|index| resolve_tile(index, None, caption(index), placeholders))
        .collect()
}
