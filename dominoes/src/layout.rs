use serde::{Deserialize, Serialize};

use crate::{Chain, Game, Orientation, Tile};

// Geometry of the playing surface, in pixels.
pub const SURFACE_WIDTH: i32 = 1366;
pub const SURFACE_HEIGHT: i32 = 620;
pub const CHAIN_ORIGIN_X: i32 = 660;
pub const CHAIN_ORIGIN_Y: i32 = 250;
/// Distance between successive tiles of a hand.
pub const HAND_SPACING: i32 = 40;

const BOTTOM_HAND_X: i32 = 540;
const BOTTOM_HAND_Y: i32 = 535;
const TOP_HAND_Y: i32 = 25;
const LEFT_HAND_X: i32 = 110;
const RIGHT_HAND_X: i32 = 1220;
const SIDE_HAND_Y: i32 = 150;

// A double stands perpendicular to the chain, so its footprint along the
// chain is about half that of an inline tile.
const DOUBLE_ADVANCE: i32 = 31;
const TILE_ADVANCE: i32 = 61;
// Inline tiles sit slightly below the doubles' baseline.
const TILE_DROP: i32 = 15;

// Once the running offset leaves this band, the rest of that direction
// drops to the next stage row.
const STAGE_LEFT_EDGE: i32 = 40;
const STAGE_RIGHT_EDGE: i32 = 1340;
const STAGE_ROW_HEIGHT: i32 = 130;

/// A tile positioned on the playing surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

/// Computes the position and orientation of every tile in the game: the
/// four hands in their fixed screen regions plus the chain. Pure function
/// of the game state.
pub fn layout(game: &Game) -> Vec<PlacedTile> {
    let mut placed = hands_layout(game);
    placed.extend(chain_layout(game.chain()));
    placed
}

/// Positions each hand in its fixed region: bottom and top hands run
/// horizontally, the side hands run vertically and are rotated.
pub fn hands_layout(game: &Game) -> Vec<PlacedTile> {
    let mut placed = Vec::new();
    for (player, hand) in game.hands().iter().enumerate() {
        for (i, &tile) in hand.iter().enumerate() {
            let offset = HAND_SPACING * i as i32;
            placed.push(match player {
                0 => PlacedTile {
                    tile,
                    x: BOTTOM_HAND_X + offset,
                    y: BOTTOM_HAND_Y,
                    orientation: Orientation::Bottom,
                },
                1 => PlacedTile {
                    tile,
                    x: LEFT_HAND_X,
                    y: SIDE_HAND_Y + offset,
                    orientation: Orientation::Right,
                },
                2 => PlacedTile {
                    tile,
                    x: BOTTOM_HAND_X + offset,
                    y: TOP_HAND_Y,
                    orientation: Orientation::Bottom,
                },
                _ => PlacedTile {
                    tile,
                    x: RIGHT_HAND_X,
                    y: SIDE_HAND_Y + offset,
                    orientation: Orientation::Right,
                },
            });
        }
    }
    placed
}

/// Positions the chain outward from its center tile in both directions,
/// accumulating a running offset per tile. Doubles stand upright with a
/// narrow footprint; inline tiles face away from the center.
pub fn chain_layout(chain: &Chain) -> Vec<PlacedTile> {
    let center = chain.center();
    let mut placed = Vec::with_capacity(chain.len());
    placed.push(PlacedTile {
        tile: chain.get(center).unwrap(),
        x: CHAIN_ORIGIN_X,
        y: CHAIN_ORIGIN_Y,
        orientation: Orientation::Bottom,
    });

    // Rightwards from the center
    let mut position = CHAIN_ORIGIN_X + DOUBLE_ADVANCE;
    let mut row = 0;
    for idx in center + 1..chain.len() {
        let tile = chain.get(idx).unwrap();
        let advance = advance_of(tile);
        if position + advance > STAGE_RIGHT_EDGE {
            row += 1;
            position = STAGE_LEFT_EDGE;
        }
        placed.push(place_inline(tile, position, row, Orientation::Right));
        position += advance;
    }

    // Leftwards from the center
    let mut position = CHAIN_ORIGIN_X;
    let mut row = 0;
    for idx in (0..center).rev() {
        let tile = chain.get(idx).unwrap();
        let advance = advance_of(tile);
        if position - advance < STAGE_LEFT_EDGE {
            row += 1;
            position = STAGE_RIGHT_EDGE;
        }
        position -= advance;
        placed.push(place_inline(tile, position, row, Orientation::Left));
    }

    placed
}

fn advance_of(tile: Tile) -> i32 {
    if tile.is_double() {
        DOUBLE_ADVANCE
    } else {
        TILE_ADVANCE
    }
}

fn place_inline(tile: Tile, x: i32, row: i32, orientation: Orientation) -> PlacedTile {
    if tile.is_double() {
        PlacedTile {
            tile,
            x,
            y: CHAIN_ORIGIN_Y + row * STAGE_ROW_HEIGHT,
            orientation: Orientation::Bottom,
        }
    } else {
        PlacedTile {
            tile,
            x,
            y: CHAIN_ORIGIN_Y + TILE_DROP + row * STAGE_ROW_HEIGHT,
            orientation,
        }
    }
}
