use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, space1, u32 as number},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::{error::PuzzleError, puzzles::Options, report::Report};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u64,
    green: u64,
    blue: u64,
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

impl Cubes {
    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(&self) -> Option<u128> {
        (self.red as u128)
            .checked_mul(self.green as u128)?
            .checked_mul(self.blue as u128)
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    /// Fewest cubes of each colour that make every reveal possible
    minimum: Cubes,
}

type Reveal<'a> = Vec<(u32, &'a str)>;

fn reveal(input: &str) -> IResult<&str, Reveal<'_>> {
    separated_list1(tag(", "), separated_pair(number, space1, alpha1))(input)
}

fn game_line(input: &str) -> IResult<&str, (u32, Vec<Reveal<'_>>)> {
    let (input, id) = delimited(tag("Game "), number, tag(": "))(input)?;
    let (input, reveals) = separated_list1(tag("; "), reveal)(input)?;
    Ok((input, (id, reveals)))
}

fn parse(input: &str) -> Result<Vec<Game>, PuzzleError> {
    let mut games = vec![];

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (_, (id, reveals)) = all_consuming(game_line)(line)
            .map_err(|e| PuzzleError::malformed(i, format!("could not read game: {e}")))?;

        let mut minimum = Cubes::default();
        for reveal in reveals {
            let mut shown = Cubes::default();
            for (n, colour) in reveal {
                match colour {
                    "red" => shown.red += u64::from(n),
                    "green" => shown.green += u64::from(n),
                    "blue" => shown.blue += u64::from(n),
                    _ => return Err(PuzzleError::malformed(i, format!("unknown colour {colour:?}"))),
                }
            }
            minimum = minimum.max(shown);
        }

        games.push(Game { id, minimum });
    }

    Ok(games)
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let games = parse(input)?;

    let possible = games
        .iter()
        .filter(|game| game.minimum.fits_in(&BAG))
        .map(|game| u64::from(game.id))
        .sum::<u64>();
    let power = games
        .iter()
        .try_fold(0u128, |sum, game| sum.checked_add(game.minimum.power()?))
        .ok_or_else(|| PuzzleError::NoSolution("sum of powers overflows".into()))?;

    let mut report = Report::new();
    report.answer("Part 1", possible).answer("Part 2", power);

    for game in &games {
        let Cubes { red, green, blue } = game.minimum;
        report.detail(format!(
            "Game #{}: red@{red} green@{green} blue@{blue} = {}{}",
            game.id,
            game.minimum.power().unwrap_or_default(),
            if game.minimum.fits_in(&BAG) { "" } else { " (impossible)" },
        ));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test() {
        let games = parse(EXAMPLE).unwrap();
        assert_eq!(games.len(), 5);
        assert_eq!(
            games[0].minimum,
            Cubes {
                red: 4,
                green: 2,
                blue: 6
            }
        );

        let report = solve(EXAMPLE, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("8"));
        assert_eq!(report.get("Part 2"), Some("2286"));
    }

    #[test]
    fn reports_the_bad_line() {
        let err = parse("Game 1: 3 blue\nGame 2: 3 purple\n").unwrap_err();
        assert_eq!(
            err,
            PuzzleError::Malformed {
                line: 2,
                reason: "unknown colour \"purple\"".into()
            }
        );
        assert!(matches!(
            parse("Game x: 3 blue"),
            Err(PuzzleError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn large_counts() {
        let report = solve(
            "Game 1: 4000000000 red, 4000000000 green, 4000000000 blue\n",
            &Options::default(),
        )
        .unwrap();
        assert_eq!(report.get("Part 1"), Some("0"));
        assert_eq!(report.get("Part 2"), Some("64000000000000000000000000000"));
    }
}
