pub use chain::*;
pub use errors::*;
pub use game::*;
pub use hand::*;
pub use layout::*;
pub use tiles::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod chain;
mod errors;
mod game;
mod hand;
mod layout;
mod tiles;
mod visualization;
