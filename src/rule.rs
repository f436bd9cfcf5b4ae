use crate::bag::{BagColor, Content};
use crate::error::ParseError;
use itertools::Itertools;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref TOP: Regex = Regex::new(r"^(.+?) contain (.*)$").unwrap();
}

/// A rule with no contents stands for "contains no other bags".
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rule {
    pub container: BagColor,
    pub contents: Vec<Content>,
}

impl Rule {
    pub fn new(container: BagColor, contents: Vec<Content>) -> Self {
        Rule {
            container,
            contents,
        }
    }

    pub fn contains(&self, color: &BagColor) -> bool {
        self.contents.iter().any(|c| &c.color == color)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let cap = TOP
            .captures(line)
            .ok_or_else(|| ParseError::MissingSeparator(line.to_string()))?;

        let container = cap[1].parse::<BagColor>()?;

        let contents = cap[2]
            .trim_end_matches('.')
            .split(',')
            .filter_map(parse_content)
            .collect();

        Ok(Rule {
            container,
            contents,
        })
    }
}

/// `"2 muted yellow bags"`; anything without a positive leading count, including
/// `"no other bags"`, is not a content.
fn parse_content(clause: &str) -> Option<Content> {
    let mut tokens = clause.split_whitespace();
    let count = tokens.next()?.parse::<usize>().ok().filter(|&n| n > 0)?;
    let color = BagColor::from_tokens(&mut tokens)?;
    Some(Content { count, color })
}

impl fmt::Display for Rule {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} bags contain ", self.container)?;
        if self.contents.is_empty() {
            write!(fmt, "no other bags.")
        } else {
            write!(fmt, "{}.", self.contents.iter().join(", "))
        }
    }
}
