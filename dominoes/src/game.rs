use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{Chain, Hand, IllegalMove, Side, Tile, MAX_PIPS, NUM_TILES, TILE_SET};

/// The number of players around the table.
///
/// Players 0 and 2 form one team, players 1 and 3 the other.
pub const NUM_PLAYERS: usize = 4;

/// A candidate placement for the current player: an index into their hand
/// plus the chain end to extend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub tile_idx: usize,
    pub side: Side,
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player played their last tile. Their team scores all the pips
    /// left in the other hands.
    Won { player: usize, points: u32 },
    /// Four passes in a row: nobody can extend the chain. The team with
    /// fewer remaining pips scores both teams' totals; `None` means a tie.
    Stuck {
        winning_team: Option<usize>,
        points: u32,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { player, points } => {
                write!(f, "Player {} won and scored {} points!", player, points)
            }
            Outcome::Stuck {
                winning_team: Some(team),
                points,
            } => write!(f, "The game is stuck, team {} scored {} points!", team, points),
            Outcome::Stuck {
                winning_team: None, ..
            } => write!(f, "The game is stuck and neither team scored!"),
        }
    }
}

/// The state of one four-player game: four hands, the chain, and whose
/// turn it is.
///
/// Every tile is in exactly one hand or on the chain; the union of all
/// five is the complete double-six set.
///
/// ```
/// # use dominoes::Game;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut game = Game::new(&mut rng);
/// let moves = game.moves();
/// match moves.first() {
///     Some(mv) => game.play(mv.tile_idx, mv.side).unwrap(),
///     None => game.pass().unwrap(),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    hands: [Hand; NUM_PLAYERS],
    chain: Chain,
    turn: usize,
    consecutive_passes: usize,
    outcome: Option<Outcome>,
}

impl Game {
    /// Shuffles the full tile set and deals a fresh game.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut deck = TILE_SET;
        deck.shuffle(rng);
        Self::with_deck(deck)
    }

    /// Deals a game from an explicit tile order.
    ///
    /// Tiles are dealt round-robin. The double six does not go to a hand:
    /// it anchors the chain, and the player after its would-be owner moves
    /// first. Hand sizes are therefore 7, 7, 7 and 6.
    ///
    /// Panics if the deck does not contain the double six.
    pub fn with_deck(deck: [Tile; NUM_TILES]) -> Self {
        let mut hands: [Hand; NUM_PLAYERS] = Default::default();
        let mut chain = None;
        let mut turn = 0;
        for (i, &tile) in deck.iter().enumerate() {
            let player = i % NUM_PLAYERS;
            if tile.is_double() && tile.first == MAX_PIPS {
                chain = Some(Chain::new(tile));
                turn = (player + 1) % NUM_PLAYERS;
            } else {
                hands[player].push(tile);
            }
        }
        Self {
            hands,
            chain: chain.expect("Deck does not contain the double six"),
            turn,
            consecutive_passes: 0,
            outcome: None,
        }
    }

    /// The player whose turn it is.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn hand(&self, player: usize) -> &Hand {
        &self.hands[player]
    }

    pub fn hands(&self) -> &[Hand; NUM_PLAYERS] {
        &self.hands
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The (left, right) open pip values of the chain.
    pub fn open_ends(&self) -> (u8, u8) {
        (self.chain.left_end(), self.chain.right_end())
    }

    /// `Some` once the game has ended; `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every legal placement for the current player.
    ///
    /// A tile qualifies for the left end if either pip matches the left
    /// open value, and independently for the right end. A tile matching
    /// both ends yields two distinct candidates. Empty once the game has
    /// ended.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.outcome.is_some() {
            return moves;
        }
        let (left, right) = self.open_ends();
        for (tile_idx, tile) in self.hands[self.turn].iter().enumerate() {
            if tile.contains(left) {
                moves.push(Move {
                    tile_idx,
                    side: Side::Left,
                });
            }
            if tile.contains(right) {
                moves.push(Move {
                    tile_idx,
                    side: Side::Right,
                });
            }
        }
        moves
    }

    /// Plays the current player's tile at `tile_idx` onto the given end of
    /// the chain and advances the turn.
    ///
    /// On error the game is left unchanged.
    pub fn play(&mut self, tile_idx: usize, side: Side) -> Result<(), IllegalMove> {
        if self.outcome.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let hand_len = self.hands[self.turn].len();
        if tile_idx >= hand_len {
            return Err(IllegalMove::TileIndexOutOfRange { tile_idx, hand_len });
        }
        // Validate against the chain before touching the hand, so that a
        // rejected move leaves the game untouched.
        let tile = self.hands[self.turn][tile_idx];
        self.chain
            .add(tile, side)
            .map_err(|err| IllegalMove::EndsMismatch { err })?;
        self.hands[self.turn].take(tile_idx);
        self.consecutive_passes = 0;
        if self.hands[self.turn].is_empty() {
            self.outcome = Some(Outcome::Won {
                player: self.turn,
                points: self.remaining_points().iter().sum(),
            });
        }
        self.turn = (self.turn + 1) % NUM_PLAYERS;
        Ok(())
    }

    /// Skips the current player's turn.
    ///
    /// Only legal while no moves exist for them. Four accepted passes in a
    /// row mean no tile can ever be played again, which ends the game as
    /// stuck.
    pub fn pass(&mut self) -> Result<(), IllegalMove> {
        if self.outcome.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let num_moves = self.moves().len();
        if num_moves > 0 {
            return Err(IllegalMove::PassWithMovesAvailable { num_moves });
        }
        self.consecutive_passes += 1;
        if self.consecutive_passes == NUM_PLAYERS {
            self.outcome = Some(self.stuck_outcome());
        }
        self.turn = (self.turn + 1) % NUM_PLAYERS;
        Ok(())
    }

    /// Pip counts left in each hand.
    fn remaining_points(&self) -> [u32; NUM_PLAYERS] {
        let mut points = [0; NUM_PLAYERS];
        for (player, hand) in self.hands.iter().enumerate() {
            points[player] = hand.pip_total();
        }
        points
    }

    fn stuck_outcome(&self) -> Outcome {
        let points = self.remaining_points();
        let team_points = [points[0] + points[2], points[1] + points[3]];
        match team_points[0].cmp(&team_points[1]) {
            Ordering::Less => Outcome::Stuck {
                winning_team: Some(0),
                points: team_points[0] + team_points[1],
            },
            Ordering::Equal => Outcome::Stuck {
                winning_team: None,
                points: 0,
            },
            Ordering::Greater => Outcome::Stuck {
                winning_team: Some(1),
                points: team_points[0] + team_points[1],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;

    use crate::arbitrary::ShuffledDeck;
    use crate::tile;

    use super::*;

    /// The union of the four hands and the chain must be the full tile
    /// set, partitioned with no duplicates.
    fn partition_ok(game: &Game) -> bool {
        let mut seen = HashSet::new();
        let mut count = 0;
        for hand in game.hands() {
            for &tile in hand.iter() {
                seen.insert(tile);
                count += 1;
            }
        }
        for &tile in game.chain().iter() {
            seen.insert(tile);
            count += 1;
        }
        count == NUM_TILES && seen.len() == NUM_TILES
    }

    quickcheck! {
        fn deal_partitions_the_tile_set(deck: ShuffledDeck) -> bool {
            partition_ok(&Game::with_deck(deck.0))
        }

        fn moves_match_an_open_end(deck: ShuffledDeck) -> bool {
            let game = Game::with_deck(deck.0);
            let (left, right) = game.open_ends();
            game.moves().iter().all(|mv| {
                let tile = game.hand(game.turn())[mv.tile_idx];
                match mv.side {
                    Side::Left => tile.contains(left),
                    Side::Right => tile.contains(right),
                }
            })
        }

        fn play_updates_one_end_and_removes_one_tile(deck: ShuffledDeck, pick: usize) -> TestResult {
            let mut game = Game::with_deck(deck.0);
            let moves = game.moves();
            if moves.is_empty() {
                return TestResult::discard();
            }
            let mv = moves[pick % moves.len()];
            let player = game.turn();
            let hand_len_before = game.hand(player).len();
            let ends_before = game.open_ends();

            game.play(mv.tile_idx, mv.side).unwrap();

            let ends_after = game.open_ends();
            let one_end_updated = match mv.side {
                Side::Left => ends_before.1 == ends_after.1,
                Side::Right => ends_before.0 == ends_after.0,
            };
            TestResult::from_bool(
                one_end_updated
                    && game.hand(player).len() == hand_len_before - 1
                    && game.turn() == (player + 1) % NUM_PLAYERS
                    && partition_ok(&game),
            )
        }

        fn random_game_terminates_and_keeps_the_partition(seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(&mut rng);
            // 27 plays at most, and at most four passes between plays
            for _ in 0..NUM_TILES * 8 {
                if !partition_ok(&game) {
                    return false;
                }
                if let Some(outcome) = game.outcome() {
                    return outcome_consistent(&game, outcome);
                }
                let player = game.turn();
                match game.moves()[..].choose(&mut rng) {
                    Some(&mv) => game.play(mv.tile_idx, mv.side).unwrap(),
                    None => game.pass().unwrap(),
                }
                // Accepted moves and passes both cycle the turn
                if game.turn() != (player + 1) % NUM_PLAYERS {
                    return false;
                }
            }
            false
        }
    }

    fn outcome_consistent(game: &Game, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Won { player, .. } => game.hand(player).is_empty(),
            Outcome::Stuck { .. } => {
                // No tile anywhere may match either open end
                let (left, right) = game.open_ends();
                game.hands()
                    .iter()
                    .flat_map(|hand| hand.iter())
                    .all(|tile| !tile.contains(left) && !tile.contains(right))
            }
        }
    }

    #[test]
    fn identity_order_deal() {
        let game = Game::with_deck(TILE_SET);
        assert_eq!(game.chain().len(), 1);
        assert_eq!(game.chain().get(0), Some(tile!("66")));
        assert_eq!(game.open_ends(), (6, 6));
        // The double six falls to player 3, so player 0 moves first
        assert_eq!(game.turn(), 0);
        let sizes: Vec<usize> = game.hands().iter().map(|hand| hand.len()).collect();
        assert_eq!(sizes, vec![7, 7, 7, 6]);
    }

    #[test]
    fn pass_with_moves_available_is_rejected() {
        let mut game = Game::with_deck(TILE_SET);
        let before = game.clone();
        assert!(!game.moves().is_empty());
        let err = game.pass().unwrap_err();
        assert!(matches!(err, IllegalMove::PassWithMovesAvailable { .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn mismatched_play_is_rejected() {
        let mut game = Game::with_deck(TILE_SET);
        let before = game.clone();
        // Player 0's first tile is [0|0], which matches neither open six
        assert_eq!(game.hand(0)[0], tile!("00"));
        let err = game.play(0, Side::Left).unwrap_err();
        assert!(matches!(err, IllegalMove::EndsMismatch { .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut game = Game::with_deck(TILE_SET);
        let before = game.clone();
        let err = game.play(7, Side::Right).unwrap_err();
        assert!(matches!(
            err,
            IllegalMove::TileIndexOutOfRange {
                tile_idx: 7,
                hand_len: 7,
            }
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn double_qualifying_for_both_ends_yields_two_moves() {
        let game = Game::with_deck(TILE_SET);
        // Player 0 holds [1|6] and [4|6]; both chain ends are open at 6
        let moves = game.moves();
        let sides_per_idx = |idx: usize| {
            moves
                .iter()
                .filter(|mv| mv.tile_idx == idx)
                .map(|mv| mv.side)
                .collect::<Vec<_>>()
        };
        for (idx, tile) in game.hand(0).iter().enumerate() {
            if tile.contains(6) {
                assert_eq!(sides_per_idx(idx), vec![Side::Left, Side::Right]);
            } else {
                assert!(sides_per_idx(idx).is_empty());
            }
        }
    }

    #[test]
    fn winning_play_scores_the_remaining_pips() {
        // Play out seeded games until at least one ends with an emptied hand
        let mut saw_a_win = false;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new(&mut rng);
            while game.outcome().is_none() {
                match game.moves()[..].choose(&mut rng) {
                    Some(&mv) => game.play(mv.tile_idx, mv.side).unwrap(),
                    None => game.pass().unwrap(),
                }
            }
            if let Some(Outcome::Won { player, points }) = game.outcome() {
                saw_a_win = true;
                assert!(game.hand(player).is_empty());
                let expected: u32 = game.hands().iter().map(|hand| hand.pip_total()).sum();
                assert_eq!(points, expected);
            }
        }
        assert!(saw_a_win);
    }

    #[test]
    fn no_moves_after_the_game_ends() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(&mut rng);
        while game.outcome().is_none() {
            match game.moves()[..].choose(&mut rng) {
                Some(&mv) => game.play(mv.tile_idx, mv.side).unwrap(),
                None => game.pass().unwrap(),
            }
        }
        assert!(game.moves().is_empty());
        assert!(matches!(game.pass(), Err(IllegalMove::GameOver)));
        assert!(matches!(game.play(0, Side::Left), Err(IllegalMove::GameOver)));
    }
}
