use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Tile, NUM_TILES, TILE_SET};

/// A random permutation of the full tile set, for dealing test games.
#[derive(Clone, Debug)]
pub struct ShuffledDeck(pub [Tile; NUM_TILES]);

impl quickcheck::Arbitrary for ShuffledDeck {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut deck = TILE_SET;
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        deck.shuffle(&mut rng);
        ShuffledDeck(deck)
    }
}

impl quickcheck::Arbitrary for Tile {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Tile {
            first: *g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap(),
            second: *g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap(),
        }
    }
}
