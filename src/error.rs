use crate::bag::BagColor;
use thiserror::Error;

/// Why a line did not turn into a [`Rule`](crate::Rule).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty line")]
    Empty,
    #[error("Missing ` contain ` in `{0}`")]
    MissingSeparator(String),
    #[error("Expected `<descriptor> <color>` but found `{0}`")]
    MalformedColor(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Bags inside one {0} bag do not fit in usize")]
pub struct TooManyBags(pub BagColor);
