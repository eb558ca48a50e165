use crate::Game;

/// Renders the whole game as a multi-line report: the chain, each hand
/// with its tile count, and whose turn it is (or how the game ended).
pub fn visualize_game(game: &Game) -> String {
    let mut result = format!("Chain: {}\n", game.chain());
    for (player, hand) in game.hands().iter().enumerate() {
        result += &format!("Player {}'s hand ({}): {}\n", player, hand.len(), hand);
    }
    match game.outcome() {
        None => result += &format!("Player {}'s turn", game.turn()),
        Some(outcome) => result += &outcome.to_string(),
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::{Game, TILE_SET};

    use super::*;

    #[test]
    fn fresh_deal_reports_the_turn() {
        let rendered = visualize_game(&Game::with_deck(TILE_SET));
        assert!(rendered.starts_with("Chain: [6|6]\n"));
        assert!(rendered.contains("Player 3's hand (6):"));
        assert!(rendered.ends_with("Player 0's turn"));
    }
}
