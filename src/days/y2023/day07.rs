use std::fmt;

use crate::{error::PuzzleError, puzzles::Options, report::Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::HighCard => "high card",
            Kind::OnePair => "one pair",
            Kind::TwoPair => "two pair",
            Kind::ThreeOfAKind => "three of a kind",
            Kind::FullHouse => "full house",
            Kind::FourOfAKind => "four of a kind",
            Kind::FiveOfAKind => "five of a kind",
        };
        f.write_str(name)
    }
}

const STANDARD: &[u8] = b"23456789TJQKA";
const JOKERS: &[u8] = b"J23456789TQKA";

struct Hand<'a> {
    cards: &'a str,
    bid: u64,
}

/// Sortable strength of a hand: its kind first, then card by card
type Strength = (Kind, [u8; 5]);

fn strength(cards: &str, jokers: bool) -> Option<Strength> {
    let order = if jokers { JOKERS } else { STANDARD };

    let mut values = [0u8; 5];
    let bytes = cards.as_bytes();
    if bytes.len() != 5 {
        return None;
    }
    for (value, card) in values.iter_mut().zip(bytes) {
        *value = order.iter().position(|c| c == card)? as u8;
    }

    let mut counts = [0u8; 13];
    let mut num_jokers = 0;
    for (&card, &value) in bytes.iter().zip(&values) {
        if jokers && card == b'J' {
            num_jokers += 1;
        } else {
            counts[value as usize] += 1;
        }
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));
    // A joker is always best spent on the most common card
    counts[0] += num_jokers;

    let kind = match (counts[0], counts[1]) {
        (5, _) => Kind::FiveOfAKind,
        (4, _) => Kind::FourOfAKind,
        (3, 2) => Kind::FullHouse,
        (3, _) => Kind::ThreeOfAKind,
        (2, 2) => Kind::TwoPair,
        (2, _) => Kind::OnePair,
        _ => Kind::HighCard,
    };

    Some((kind, values))
}

fn parse(input: &str) -> Result<Vec<Hand<'_>>, PuzzleError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let (cards, bid) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| PuzzleError::malformed(i, "expected `CARDS BID`"))?;
            if strength(cards, false).is_none() {
                return Err(PuzzleError::malformed(i, format!("invalid hand {cards:?}")));
            }
            let bid = bid
                .trim()
                .parse::<u64>()
                .map_err(|_| PuzzleError::malformed(i, format!("invalid bid {bid:?}")))?;
            Ok(Hand { cards, bid })
        })
        .collect()
}

/// Hands ranked weakest first, paired with their strength
fn ranked<'a>(hands: &'a [Hand<'a>], jokers: bool) -> Vec<(&'a Hand<'a>, Strength)> {
    let mut ranked = hands
        .iter()
        .filter_map(|hand| Some((hand, strength(hand.cards, jokers)?)))
        .collect::<Vec<_>>();
    ranked.sort_by_key(|(_, s)| *s);
    ranked
}

fn winnings(ranked: &[(&Hand, Strength)]) -> u64 {
    ranked
        .iter()
        .enumerate()
        .map(|(rank, (hand, _))| (rank as u64 + 1) * hand.bid)
        .sum()
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let hands = parse(input)?;

    let standard = ranked(&hands, false);
    let jokers = ranked(&hands, true);

    let mut report = Report::new();
    report
        .answer("Part 1", winnings(&standard))
        .answer("Part 2", winnings(&jokers));

    for (rank, (hand, (kind, _))) in jokers.iter().enumerate() {
        report.detail(format!(
            "{} (bid {}): rank {} as {kind} with jokers",
            hand.cards,
            hand.bid,
            rank + 1
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn test() {
        let report = solve(EXAMPLE, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("6440"));
        assert_eq!(report.get("Part 2"), Some("5905"));
    }

    #[test]
    fn kinds() {
        let kind = |cards, jokers| strength(cards, jokers).unwrap().0;

        assert_eq!(kind("AAAAA", false), Kind::FiveOfAKind);
        assert_eq!(kind("23332", false), Kind::FullHouse);
        assert_eq!(kind("23432", false), Kind::TwoPair);
        assert_eq!(kind("23456", false), Kind::HighCard);
        assert_eq!(kind("KTJJT", false), Kind::TwoPair);
        assert_eq!(kind("KTJJT", true), Kind::FourOfAKind);
        assert_eq!(kind("JJJJJ", true), Kind::FiveOfAKind);
        assert_eq!(kind("2345J", true), Kind::OnePair);

        // With jokers, J is the weakest single card
        assert!(strength("JKKK2", true) < strength("QQQQ2", true));
        assert_eq!(kind("JKKK2", false), Kind::ThreeOfAKind);
        assert!(strength("ZZZZZ", false).is_none());
    }
}
