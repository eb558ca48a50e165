use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{EndsMismatch, Tile};

/// One of the two open ends of the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The sequence of played tiles forming the board.
///
/// Tiles are stored oriented: reading the chain from left to right,
/// connected ends always match. The left open value is therefore the first
/// tile's `first` pip, and the right open value the last tile's `second`
/// pip. The chain is created around its anchor (the starting double) and is
/// never empty.
///
/// ```
/// # use dominoes::{tile, Chain};
/// let mut chain = Chain::new(tile!("66"));
/// chain.add_right(tile!("26")).unwrap();
/// assert_eq!(chain.to_string(), "[6|6][6|2]");
/// assert_eq!((chain.left_end(), chain.right_end()), (6, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    tiles: VecDeque<Tile>,
    center: usize,
}

impl Chain {
    /// Creates a chain holding only the anchor tile.
    pub fn new(anchor: Tile) -> Self {
        Self {
            tiles: VecDeque::from([anchor]),
            center: 0,
        }
    }

    /// The outward-facing pip count on the left end.
    pub fn left_end(&self) -> u8 {
        self.tiles[0].first
    }

    /// The outward-facing pip count on the right end.
    pub fn right_end(&self) -> u8 {
        self.tiles[self.tiles.len() - 1].second
    }

    /// The outward-facing pip count on the given side.
    pub fn end(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left_end(),
            Side::Right => self.right_end(),
        }
    }

    /// Index of the anchor tile within the chain.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The number of tiles played so far, anchor included. Never zero.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn get(&self, idx: usize) -> Option<Tile> {
        self.tiles.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Extends the chain on the given side.
    pub fn add(&mut self, tile: Tile, side: Side) -> Result<(), EndsMismatch> {
        match side {
            Side::Left => self.add_left(tile),
            Side::Right => self.add_right(tile),
        }
    }

    /// Extends the chain leftwards, inverting the tile if its matching end
    /// is not already facing inwards. Shifts the center index by one.
    ///
    /// On a pip mismatch the chain is left unchanged.
    pub fn add_left(&mut self, tile: Tile) -> Result<(), EndsMismatch> {
        let open_end = self.left_end();
        if tile.second == open_end {
            self.tiles.push_front(tile);
        } else if tile.first == open_end {
            self.tiles.push_front(tile.inverted());
        } else {
            return Err(EndsMismatch {
                tile,
                side: Side::Left,
                open_end,
            });
        }
        self.center += 1;
        Ok(())
    }

    /// Extends the chain rightwards, inverting the tile if its matching end
    /// is not already facing inwards.
    ///
    /// On a pip mismatch the chain is left unchanged.
    pub fn add_right(&mut self, tile: Tile) -> Result<(), EndsMismatch> {
        let open_end = self.right_end();
        if tile.first == open_end {
            self.tiles.push_back(tile);
        } else if tile.second == open_end {
            self.tiles.push_back(tile.inverted());
        } else {
            return Err(EndsMismatch {
                tile,
                side: Side::Right,
                open_end,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
