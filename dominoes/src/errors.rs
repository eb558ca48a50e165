use crate::{Side, Tile};

/// The error type for [`Chain::add_left()`](crate::Chain::add_left) and
/// [`Chain::add_right()`](crate::Chain::add_right), i.e. for placing a
/// single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndsMismatch {
    pub tile: Tile,
    pub side: Side,
    pub open_end: u8,
}

impl std::error::Error for EndsMismatch {}

impl std::fmt::Display for EndsMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cannot be added to the {} of the chain, whose open value is {}",
            self.tile, self.side, self.open_end
        )
    }
}

#[derive(Debug)]
/// The error type for one turn.
pub enum IllegalMove {
    GameOver,
    TileIndexOutOfRange {
        tile_idx: usize,
        hand_len: usize,
    },
    EndsMismatch {
        err: EndsMismatch,
    },
    PassWithMovesAvailable {
        num_moves: usize,
    },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::EndsMismatch { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "Tried to move after the game had ended"),
            IllegalMove::TileIndexOutOfRange { tile_idx, hand_len } => write!(
                f,
                "Tried to play tile {} of a hand holding only {} tiles",
                tile_idx, hand_len
            ),
            IllegalMove::EndsMismatch { err } => write!(
                f,
                "Tried to play {} on the {} end of the chain",
                err.tile, err.side
            ),
            IllegalMove::PassWithMovesAvailable { num_moves } => write!(
                f,
                "Tried to pass while {} legal moves remained",
                num_moves
            ),
        }
    }
}
