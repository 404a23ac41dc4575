//! Which days exist and where their solvers live.
//!
//! This is only a lookup table for the web shell and the CLI. Each solver
//! parses and solves on its own; nothing here knows about puzzle formats.

use std::{fmt, ops::Range, str::FromStr, time::Instant};

use crate::{
    days::{y2022, y2023},
    error::PuzzleError,
    report::Report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }

    /// `2023.07`
    pub fn slug(&self) -> String {
        format!("{}.{:02}", self.year, self.day)
    }

    /// `/2023/07`
    pub fn path(&self) -> String {
        format!("/{}/{:02}", self.year, self.day)
    }

    pub fn puzzle_url(&self) -> String {
        format!("https://adventofcode.com/{}/day/{}", self.year, self.day)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.year, self.day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected YEAR.DAY (e.g. 2023.07), found {:?}", self.0)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for PuzzleId {
    type Err = ParseIdError;

    /// Accepts `2023.07`, `2023/07` and `2023/7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIdError(s.to_string());
        let (year, day) = s.trim().split_once(['.', '/']).ok_or_else(err)?;
        let year = year.parse::<u16>().map_err(|_| err())?;
        let day = day.parse::<u8>().map_err(|_| err())?;
        if !(1..=25).contains(&day) {
            return Err(err());
        }
        Ok(PuzzleId::new(year, day))
    }
}

/// The two free numeric form fields ("Input One", "Input Two"). What they
/// mean is up to the day; most ignore them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub first: Option<i64>,
    pub second: Option<i64>,
}

impl Options {
    /// Blank or unparseable fields count as absent
    pub fn from_fields(first: Option<&str>, second: Option<&str>) -> Self {
        let parse = |s: Option<&str>| s.and_then(|s| s.trim().parse::<i64>().ok());
        Self {
            first: parse(first),
            second: parse(second),
        }
    }

    /// Treats `first` as a start index and `second` as a count, clamped to
    /// `0..len`. Absent values select everything from the start on.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = self.first.map_or(0, |n| n.max(0) as usize).min(len);
        let count = self
            .second
            .map_or(len - start, |n| n.max(0) as usize)
            .min(len - start);
        start..start + count
    }
}

pub type Solver = fn(&str, &Options) -> Result<Report, PuzzleError>;

pub struct Day {
    pub id: PuzzleId,
    pub name: &'static str,
    /// Labels for the option fields this day reads, in order
    pub options: &'static [&'static str],
    solver: Solver,
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Day")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Day {
    pub fn title(&self) -> String {
        format!("Day {:02}: {}", self.id.day, self.name)
    }

    pub fn run(&self, input: &str, options: &Options) -> Result<Report, PuzzleError> {
        if input.trim().is_empty() {
            return Err(PuzzleError::Empty);
        }

        let t0 = Instant::now();
        let mut report = (self.solver)(input, options)?;
        report.set_elapsed(t0.elapsed());

        tracing::debug!(puzzle = %self.id, elapsed = ?t0.elapsed(), "solved");
        Ok(report)
    }
}

macro_rules! day {
    ($year:literal, $day:literal, $name:literal, $solve:path) => {
        day!($year, $day, $name, $solve, [])
    };
    ($year:literal, $day:literal, $name:literal, $solve:path, [$($opt:literal),*]) => {
        Day {
            id: PuzzleId::new($year, $day),
            name: $name,
            options: &[$($opt),*],
            solver: $solve,
        }
    };
}

pub static DAYS: &[Day] = &[
    day!(2022, 1, "Calorie Counting", y2022::day01::solve),
    day!(2023, 1, "Trebuchet?!", y2023::day01::solve),
    day!(2023, 2, "Cube Conundrum", y2023::day02::solve),
    day!(2023, 3, "Gear Ratios", y2023::day03::solve),
    day!(2023, 4, "Scratchcards", y2023::day04::solve),
    day!(2023, 5, "If You Give A Seed A Fertilizer", y2023::day05::solve),
    day!(2023, 6, "Wait For It", y2023::day06::solve),
    day!(2023, 7, "Camel Cards", y2023::day07::solve),
    day!(2023, 8, "Haunted Wasteland", y2023::day08::solve),
    day!(2023, 9, "Mirage Maintenance", y2023::day09::solve),
    day!(2023, 10, "Pipe Maze", y2023::day10::solve),
    day!(2023, 11, "Cosmic Expansion", y2023::day11::solve, ["Expansion factor"]),
    day!(2023, 12, "Hot Springs", y2023::day12::solve, ["First record", "Number of records"]),
    day!(2023, 13, "Point of Incidence", y2023::day13::solve, ["First pattern", "Number of patterns"]),
    day!(2023, 14, "Parabolic Reflector Dish", y2023::day14::solve, ["Spin cycles"]),
    day!(2023, 15, "Lens Library", y2023::day15::solve),
];

/// Years shown in the navigation, with the last day listed for each
pub const YEARS: &[(u16, u8)] = &[(2022, 1), (2023, 25)];

pub fn find(id: PuzzleId) -> Option<&'static Day> {
    DAYS.iter().find(|day| day.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slugs_and_paths() {
        assert_eq!("2023.07".parse::<PuzzleId>(), Ok(PuzzleId::new(2023, 7)));
        assert_eq!("2023/7".parse::<PuzzleId>(), Ok(PuzzleId::new(2023, 7)));
        assert!("2023.26".parse::<PuzzleId>().is_err());
        assert!("2023".parse::<PuzzleId>().is_err());

        let id = PuzzleId::new(2022, 1);
        assert_eq!(id.slug(), "2022.01");
        assert_eq!(id.path(), "/2022/01");
        assert_eq!(id.puzzle_url(), "https://adventofcode.com/2022/day/1");
    }

    #[test]
    fn option_fields() {
        let options = Options::from_fields(Some(" 3 "), Some("lots"));
        assert_eq!(options.first, Some(3));
        assert_eq!(options.second, None);

        assert_eq!(Options::default().window(10), 0..10);
        assert_eq!(options.window(10), 3..10);
        assert_eq!(Options::from_fields(Some("2"), Some("4")).window(10), 2..6);
        assert_eq!(Options::from_fields(Some("8"), Some("4")).window(10), 8..10);
        assert_eq!(Options::from_fields(Some("-1"), Some("20")).window(10), 0..10);
        assert_eq!(Options::from_fields(Some("12"), None).window(10), 10..10);
    }

    #[test]
    fn registry_is_sorted_and_unique() {
        let ids = DAYS.iter().map(|d| d.id).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);

        assert!(find(PuzzleId::new(2023, 15)).is_some());
        assert!(find(PuzzleId::new(2023, 16)).is_none());
    }

    #[test]
    fn empty_input_is_rejected_before_solving() {
        let day = find(PuzzleId::new(2023, 1)).unwrap();
        assert_eq!(day.run(" \n\n", &Options::default()), Err(PuzzleError::Empty));
    }
}
