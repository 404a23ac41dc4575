use fxhash::FxHashSet;

use crate::{error::PuzzleError, puzzles::Options, report::Report};

struct Card {
    id: u32,
    wins: usize,
}

fn parse(input: &str) -> Result<Vec<Card>, PuzzleError> {
    let numbers = |i: usize, s: &str| {
        s.split_whitespace()
            .map(|n| {
                n.parse::<u32>()
                    .map_err(|_| PuzzleError::malformed(i, format!("expected a number, found {n:?}")))
            })
            .collect::<Result<Vec<_>, _>>()
    };

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let (name, rest) = line
                .split_once(':')
                .ok_or_else(|| PuzzleError::malformed(i, "expected `Card N: ...`"))?;
            let id = name
                .trim()
                .strip_prefix("Card")
                .and_then(|n| n.trim().parse::<u32>().ok())
                .ok_or_else(|| PuzzleError::malformed(i, format!("bad card name {name:?}")))?;
            let (winning, ours) = rest
                .split_once('|')
                .ok_or_else(|| PuzzleError::malformed(i, "expected `|` between number lists"))?;

            let winning = numbers(i, winning)?.into_iter().collect::<FxHashSet<_>>();
            let wins = numbers(i, ours)?
                .into_iter()
                .filter(|n| winning.contains(n))
                .count();

            Ok(Card { id, wins })
        })
        .collect()
}

/// `None` once the doubling no longer fits
fn points(wins: usize) -> Option<u64> {
    match wins {
        0 => Some(0),
        n => 1u64.checked_shl(u32::try_from(n - 1).ok()?),
    }
}

/// Every card wins one copy of each of the next `wins` cards, copies
/// included. Copies never extend past the last card.
fn total_cards(cards: &[Card]) -> Result<Vec<u64>, PuzzleError> {
    let mut owned = vec![1u64; cards.len()];
    for (i, card) in cards.iter().enumerate() {
        for j in (i + 1)..(i + 1 + card.wins).min(cards.len()) {
            owned[j] = owned[j]
                .checked_add(owned[i])
                .ok_or_else(|| overflow("card count"))?;
        }
    }
    Ok(owned)
}

fn overflow(what: &str) -> PuzzleError {
    PuzzleError::NoSolution(format!("{what} overflows"))
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let cards = parse(input)?;
    let owned = total_cards(&cards)?;

    let mut score = 0u64;
    for card in &cards {
        score = points(card.wins)
            .and_then(|p| score.checked_add(p))
            .ok_or_else(|| overflow("score"))?;
    }
    let total = owned
        .iter()
        .try_fold(0u64, |sum, &n| sum.checked_add(n))
        .ok_or_else(|| overflow("card count"))?;

    let mut report = Report::new();
    report.answer("Part 1", score).answer("Part 2", total);

    for (card, n) in cards.iter().zip(&owned) {
        report.detail(format!(
            "Card {}: {} winning numbers, worth {} points, {n} owned",
            card.id,
            card.wins,
            points(card.wins).map_or("too many".to_string(), |p| p.to_string())
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        let input = "
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";
        let cards = parse(input).unwrap();
        assert_eq!(
            cards.iter().map(|c| c.wins).collect::<Vec<_>>(),
            vec![4, 2, 2, 1, 0, 0]
        );
        assert_eq!(total_cards(&cards).unwrap(), vec![1, 2, 4, 8, 14, 1]);

        let report = solve(input, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("13"));
        assert_eq!(report.get("Part 2"), Some("30"));
    }

    #[test]
    fn padded_card_names() {
        let cards = parse("Card   12: 1 2 | 2 1\n").unwrap();
        assert_eq!(cards[0].id, 12);
        assert_eq!(cards[0].wins, 2);
    }

    #[test]
    fn too_many_wins_for_the_score() {
        let numbers = (1..=70).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        let input = format!("Card 1: {numbers} | {numbers}\n");

        assert_eq!(parse(&input).unwrap()[0].wins, 70);
        assert_eq!(points(64), Some(1 << 63));
        assert_eq!(points(65), None);
        assert_eq!(
            solve(&input, &Options::default()),
            Err(PuzzleError::NoSolution("score overflows".into()))
        );
    }
}
