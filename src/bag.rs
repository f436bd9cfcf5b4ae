use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone)]
pub struct BagColor {
    descriptor: String,
    color: String,
}

impl BagColor {
    pub fn new<D: Into<String>, C: Into<String>>(descriptor: D, color: C) -> Self {
        BagColor {
            descriptor: descriptor.into(),
            color: color.into(),
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    // leaves whatever follows the two tokens in `tokens`
    pub(crate) fn from_tokens<'a, I>(tokens: &mut I) -> Option<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        let descriptor = tokens.next()?;
        let color = tokens.next().filter(|&c| c != "bag" && c != "bags")?;
        Some(BagColor::new(descriptor, color))
    }
}

impl fmt::Display for BagColor {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} {}", self.descriptor, self.color)
    }
}

impl FromStr for BagColor {
    type Err = ParseError;

    // "shiny gold", optionally followed by "bag" or "bags"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let bag = BagColor::from_tokens(&mut tokens)
            .ok_or_else(|| ParseError::MalformedColor(s.to_string()))?;

        match tokens.next() {
            None | Some("bag") | Some("bags") if tokens.next().is_none() => Ok(bag),
            _ => Err(ParseError::MalformedColor(s.to_string())),
        }
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Content {
    pub count: usize,
    pub color: BagColor,
}

impl Content {
    pub fn new(count: usize, color: BagColor) -> Self {
        Content { count, color }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.count > 1 { "bags" } else { "bag" };
        write!(fmt, "{} {} {}", self.count, self.color, suffix)
    }
}

#[test]
fn color_from_str() {
    let expected = BagColor::new("shiny", "gold");
    assert_eq!("shiny gold".parse::<BagColor>().unwrap(), expected);
    assert_eq!("  shiny   gold bags ".parse::<BagColor>().unwrap(), expected);
    assert_eq!("shiny gold bag".parse::<BagColor>().unwrap(), expected);

    assert!("shiny".parse::<BagColor>().is_err());
    assert!("red bags".parse::<BagColor>().is_err());
    assert!("shiny gold box".parse::<BagColor>().is_err());
    assert!("shiny gold bags bags".parse::<BagColor>().is_err());
}

#[test]
fn content_pluralizes() {
    let one = Content::new(1, BagColor::new("bright", "white"));
    let many = Content::new(2, BagColor::new("muted", "yellow"));

    assert_eq!(one.to_string(), "1 bright white bag");
    assert_eq!(many.to_string(), "2 muted yellow bags");
}
