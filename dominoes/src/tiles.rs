use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The highest pip count on any tile end.
pub const MAX_PIPS: u8 = 6;

/// The number of tiles in a double-six set.
pub const NUM_TILES: usize = 28;

/// A domino tile: an unordered pair of pip counts in `0..=MAX_PIPS`.
///
/// Equality and hashing ignore the order of the two ends, so a tile compares
/// equal to its [inverted](Tile::inverted) form:
///
/// ```
/// # use dominoes::{tile, Tile};
/// assert_eq!(tile!("12"), tile!("21"));
/// assert!(tile!("25").contains(5));
/// ```
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub first: u8,
    pub second: u8,
}

impl Tile {
    /// Does this tile carry the same pip count on both ends?
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    /// The same tile with its two ends swapped.
    ///
    /// Used when placing a tile on the chain with its matching end away
    /// from the open value.
    pub fn inverted(self) -> Tile {
        Tile {
            first: self.second,
            second: self.first,
        }
    }

    /// Does either end of this tile show `pip`?
    pub fn contains(self, pip: u8) -> bool {
        self.first == pip || self.second == pip
    }

    /// The total pip count of both ends.
    pub fn pip_total(self) -> u32 {
        u32::from(self.first) + u32::from(self.second)
    }

    /// File name of the image asset for this tile in the given orientation.
    ///
    /// Assets are keyed by the two pip values in stored order plus the
    /// orientation tag, e.g. `34r.jpg` for `[3|4]` lying on its right side.
    pub fn asset_name(self, orientation: Orientation) -> String {
        format!("{}{}{}.jpg", self.first, self.second, orientation.tag())
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let (lo, hi) = if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        };
        (lo, hi).hash(state);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.first, self.second)
    }
}

/// How a tile image is rotated on the playing surface.
///
/// `Bottom` is the upright default; side hands and inline chain tiles use
/// the rotated variants. Each orientation maps to a distinct asset per tile,
/// looked up via [`Tile::asset_name`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orientation {
    /// The single-character tag used in asset file names.
    pub fn tag(self) -> char {
        match self {
            Orientation::Top => 't',
            Orientation::Bottom => 'b',
            Orientation::Left => 'l',
            Orientation::Right => 'r',
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Tile`].
#[derive(Clone, Copy, Debug)]
pub enum TileFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidPip,
}

impl FromStr for Tile {
    type Err = TileFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        let second_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(TileFromStrErr::MoreThanTwoChars);
        }
        let pip_of = |c: char| match c.to_digit(10) {
            Some(d) if d <= u32::from(MAX_PIPS) => Ok(d as u8),
            _ => Err(TileFromStrErr::InvalidPip),
        };
        Ok(Tile {
            first: pip_of(first_char)?,
            second: pip_of(second_char)?,
        })
    }
}

/// Shorthand for creating tiles from a two-digit string.
///
/// The first digit is one end's pip count, the second the other's.
///
/// This macro is just calling the [`FromStr`] instance of [`Tile`].
/// ```
/// # use dominoes::{tile, Tile};
/// assert_eq!(tile!("36"), Tile { first: 3, second: 6 });
/// ```
#[macro_export]
macro_rules! tile {
    ($ps:literal) => {
        <$crate::Tile as std::str::FromStr>::from_str($ps)
            .expect("Invalid tile code given to tile! macro")
    };
    ($ps:expr) => {
        <$crate::Tile as std::str::FromStr>::from_str($ps)
            .expect("Invalid tile code given to tile! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use tile;

/// The complete double-six set in canonical order.
pub static TILE_SET: [Tile; NUM_TILES] = [
    Tile {
        first: 0,
        second: 0,
    },
    Tile {
        first: 0,
        second: 1,
    },
    Tile {
        first: 0,
        second: 2,
    },
    Tile {
        first: 0,
        second: 3,
    },
    Tile {
        first: 0,
        second: 4,
    },
    Tile {
        first: 0,
        second: 5,
    },
    Tile {
        first: 0,
        second: 6,
    },
    Tile {
        first: 1,
        second: 1,
    },
    Tile {
        first: 1,
        second: 2,
    },
    Tile {
        first: 1,
        second: 3,
    },
    Tile {
        first: 1,
        second: 4,
    },
    Tile {
        first: 1,
        second: 5,
    },
    Tile {
        first: 1,
        second: 6,
    },
    Tile {
        first: 2,
        second: 2,
    },
    Tile {
        first: 2,
        second: 3,
    },
    Tile {
        first: 2,
        second: 4,
    },
    Tile {
        first: 2,
        second: 5,
    },
    Tile {
        first: 2,
        second: 6,
    },
    Tile {
        first: 3,
        second: 3,
    },
    Tile {
        first: 3,
        second: 4,
    },
    Tile {
        first: 3,
        second: 5,
    },
    Tile {
        first: 3,
        second: 6,
    },
    Tile {
        first: 4,
        second: 4,
    },
    Tile {
        first: 4,
        second: 5,
    },
    Tile {
        first: 4,
        second: 6,
    },
    Tile {
        first: 5,
        second: 5,
    },
    Tile {
        first: 5,
        second: 6,
    },
    Tile {
        first: 6,
        second: 6,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_end_order() {
        assert_eq!(tile!("25"), tile!("52"));
        assert_ne!(tile!("25"), tile!("55"));
    }

    #[test]
    fn hash_ignores_end_order() {
        let mut set = HashSet::new();
        set.insert(tile!("14"));
        assert!(set.contains(&tile!("41")));
    }

    #[test]
    fn tile_set_is_complete_and_distinct() {
        let distinct: HashSet<Tile> = TILE_SET.iter().copied().collect();
        assert_eq!(distinct.len(), NUM_TILES);
        for pips in 0..=MAX_PIPS {
            assert!(TILE_SET.contains(&Tile {
                first: pips,
                second: pips
            }));
        }
    }

    #[test]
    fn asset_names() {
        assert_eq!(tile!("34").asset_name(Orientation::Bottom), "34b.jpg");
        assert_eq!(tile!("60").asset_name(Orientation::Left), "60l.jpg");
    }

    #[test]
    fn from_str_rejects_bad_codes() {
        assert!(Tile::from_str("7").is_err());
        assert!(Tile::from_str("79").is_err());
        assert!(Tile::from_str("123").is_err());
        assert!(Tile::from_str("ab").is_err());
    }
}
