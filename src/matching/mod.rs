//! Heading matching: text similarity and greedy alignment.
//!
//! The matcher pairs template headings with target headings under a fuzzy
//! text-similarity score. It is deliberately greedy and template-order-first
//! rather than globally optimal; see [`find_best_matches`] for the exact
//! contract.

mod matcher;
mod similarity;

pub use matcher::{find_best_matches, HeadingMatch, MATCH_THRESHOLD};
pub use similarity::similarity;
