use crate::bag::{BagColor, Content};
use crate::error::TooManyBags;
use crate::io::OnePerLine;
use crate::rule::Rule;
use either::Either;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::iter::FromIterator;

/// All rules of one input, keyed by the container color.
///
/// Rules saying "no other bags" are not stored; a color without a rule holds nothing. When the
/// same container appears on more than one line, the last one with contents wins.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    rules: IndexMap<BagColor, Vec<Content>>,
}

impl RuleSet {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| match line.as_ref().parse::<Rule>() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::debug!("skipping line {}: {}", idx + 1, e);
                    None
                }
            })
            .collect()
    }

    /// Fails only on read errors; lines which are not rules or not UTF-8 are skipped.
    pub fn read<R: BufRead>(input: R) -> Result<Self, std::io::Error> {
        let mut lines = OnePerLine::<R, Rule>::new(input);
        let mut rules = Vec::new();

        while let Some(next) = lines.next() {
            match next {
                Ok(rule) => rules.push(rule),
                Err(Either::Left(e)) => {
                    log::debug!("skipping line {}: {}", lines.line_number(), e)
                }
                Err(Either::Right(e)) if e.kind() == std::io::ErrorKind::InvalidData => {
                    log::debug!("skipping line {}: {}", lines.line_number(), e)
                }
                Err(Either::Right(e)) => return Err(e),
            }
        }

        Ok(rules.into_iter().collect())
    }

    fn insert(&mut self, rule: Rule) {
        if rule.is_empty() {
            log::debug!("{} holds no other bags", rule.container);
            return;
        }

        if self.rules.contains_key(&rule.container) {
            log::warn!("duplicate rule for {}, keeping the last one", rule.container);
        }

        self.rules.insert(rule.container, rule.contents);
    }

    pub fn contents(&self, color: &BagColor) -> &[Content] {
        self.rules.get(color).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BagColor, &[Content])> + '_ {
        self.rules.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// `target` itself is only counted if the rules loop back to it.
    pub fn count_possible_containers(&self, target: &BagColor) -> usize {
        // only colors with rules can be containers, so the rule index doubles as the color id
        let mut found = bitvec::bitvec![0; self.rules.len()];
        let mut count = 0;

        let mut frontier = IndexSet::new();
        frontier.insert(target);

        while !frontier.is_empty() {
            let mut next = IndexSet::new();

            for (idx, (container, contents)) in self.rules.iter().enumerate() {
                if found[idx] {
                    continue;
                }

                if contents.iter().any(|c| frontier.contains(&c.color)) {
                    found.set(idx, true);
                    next.insert(container);
                    count += 1;
                }
            }

            frontier = next;
        }

        count
    }

    /// The rules are expected to be acyclic. Should a color turn out to hold itself, the
    /// repeated bags are counted without their contents.
    ///
    /// Errors when the total does not fit in `usize`.
    pub fn count_total_contained(&self, target: &BagColor) -> Result<usize, TooManyBags> {
        let mut completed = HashMap::new();
        let mut in_progress = HashSet::new();
        self.nested(target, &mut completed, &mut in_progress)
            .ok_or_else(|| TooManyBags(target.clone()))
    }

    fn nested<'a>(
        &'a self,
        color: &'a BagColor,
        completed: &mut HashMap<&'a BagColor, usize>,
        in_progress: &mut HashSet<&'a BagColor>,
    ) -> Option<usize> {
        if let Some(&count) = completed.get(color) {
            return Some(count);
        }

        if !in_progress.insert(color) {
            log::warn!("{} eventually contains itself", color);
            return Some(0);
        }

        let mut count = 0usize;
        for content in self.contents(color) {
            let inside = self.nested(&content.color, completed, in_progress)?;
            let subtotal = inside
                .checked_add(1)
                .and_then(|per_bag| per_bag.checked_mul(content.count))?;
            count = count.checked_add(subtotal)?;
        }

        in_progress.remove(color);
        completed.insert(color, count);
        Some(count)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        let mut set = RuleSet::default();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

    fn shiny_gold() -> BagColor {
        BagColor::new("shiny", "gold")
    }

    #[test]
    fn first_example() {
        let rules = RuleSet::from_lines(EXAMPLE.lines());
        assert_eq!(rules.len(), 7);
        assert_eq!(rules.count_possible_containers(&shiny_gold()), 4);
        assert_eq!(rules.count_total_contained(&shiny_gold()).unwrap(), 32);
    }

    #[test]
    fn read_matches_from_lines() {
        use std::io::Cursor;

        let read = RuleSet::read(Cursor::new(EXAMPLE)).unwrap();
        let from_lines = RuleSet::from_lines(EXAMPLE.lines());

        assert_eq!(
            read.iter().collect::<Vec<_>>(),
            from_lines.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty_rules_are_not_stored_but_still_referenced() {
        let rules = RuleSet::from_lines(EXAMPLE.lines());
        let faded_blue = BagColor::new("faded", "blue");

        assert!(rules.contents(&faded_blue).is_empty());
        assert!(rules.iter().all(|(color, _)| color != &faded_blue));
        assert_eq!(rules.count_total_contained(&faded_blue).unwrap(), 0);
        // muted yellow, light red, dark orange, shiny gold, bright white, dark olive, vibrant plum
        assert_eq!(rules.count_possible_containers(&faded_blue), 7);
    }

    #[test]
    fn one_level_multiplies_the_next() {
        let rules = RuleSet::from_lines(&[
            "shiny gold bags contain 2 dark red bags.",
            "dark red bags contain 3 dark orange bags.",
        ]);
        assert_eq!(rules.count_total_contained(&shiny_gold()).unwrap(), 2 + 2 * 3);
    }

    #[test]
    fn last_duplicate_wins() {
        let rules = RuleSet::from_lines(&[
            "shiny gold bags contain 2 dark red bags.",
            "shiny gold bags contain 5 dark red bags.",
            "shiny gold bags contain no other bags.",
        ]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.count_total_contained(&shiny_gold()).unwrap(), 5);
    }

    #[test]
    fn cycles_terminate() {
        let rules = RuleSet::from_lines(&[
            "shiny gold bags contain 2 dark red bags.",
            "dark red bags contain 3 shiny gold bags.",
            "plain tan bags contain 1 dark red bag.",
        ]);

        // dark red, shiny gold (through dark red) and plain tan
        assert_eq!(rules.count_possible_containers(&shiny_gold()), 3);
        // 2 dark red, each with 3 shiny gold which are not opened again
        assert_eq!(rules.count_total_contained(&shiny_gold()).unwrap(), 2 * (1 + 3));
    }

    #[test]
    fn too_many_bags_is_an_error() {
        let chain = (0..70)
            .map(|i| format!("c{} x bags contain 2 c{} x bags.", i, i + 1))
            .collect::<Vec<_>>();
        let rules = RuleSet::from_lines(&chain);
        let outermost = BagColor::new("c0", "x");

        assert_eq!(
            rules.count_total_contained(&outermost),
            Err(TooManyBags(outermost.clone()))
        );
        // the shorter end of the chain still fits
        assert_eq!(
            rules.count_total_contained(&BagColor::new("c66", "x")),
            Ok(2 + 4 + 8 + 16)
        );

        let huge = format!("a a bags contain {} b b bags, 1 c c bag.", usize::MAX);
        let rules = RuleSet::from_lines(&[huge]);
        assert!(rules.count_total_contained(&BagColor::new("a", "a")).is_err());
    }

    #[test]
    fn read_skips_lines_which_are_not_utf8() {
        use std::io::Cursor;

        let input: &[u8] = b"shiny gold bags contain 2 dark red bags.
\xff\xfe junk
dark red bags contain 3 dark orange bags.
";
        let rules = RuleSet::read(Cursor::new(input)).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.count_total_contained(&shiny_gold()).unwrap(), 2 + 2 * 3);
    }
}
