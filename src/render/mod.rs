//! Html output. `match_card` draws a single match, `page` the shell around it.

pub mod match_card;
pub mod page;

pub use match_card::{render_match, MatchIcons};
