//! Bag containment rules ("light red bags contain 1 bright white bag, 2 muted yellow bags.")
//! and the two questions asked of them: which colors can end up holding a given bag, and how
//! many bags one bag of a color holds in total.

#[macro_use]
extern crate lazy_static;

mod bag;
mod error;
pub mod io;
mod rule;
mod rules;

pub use bag::{BagColor, Content};
pub use error::{ParseError, TooManyBags};
pub use rule::Rule;
pub use rules::RuleSet;
