use crate::{error::PuzzleError, puzzles::Options, report::Report};

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let mut report = Report::new();

    // The part two example has lines without any numeric digit, so part one
    // is allowed to come up empty without failing the whole page.
    match calibration_sum(input, false) {
        Ok(sum) => report.answer("Part 1", sum),
        Err(i) => report
            .answer("Part 1", "n/a")
            .detail(format!("line {} has no numeric digits", i + 1)),
    };

    let sum = calibration_sum(input, true)
        .map_err(|i| PuzzleError::malformed(i, "line has no digits"))?;
    report.answer("Part 2", sum);

    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(value) = calibration_value(line, true) {
            report.detail(format!("Found {value} for {line}"));
        }
    }

    Ok(report)
}

/// On failure, the index of the first line without a digit
fn calibration_sum(input: &str, spelled: bool) -> Result<u32, usize> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| calibration_value(line, spelled).ok_or(i))
        .sum()
}

fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    // Spelled digits may overlap ("eightwo"), so every offset is tried.
    let mut digits = line.char_indices().filter_map(|(i, c)| {
        let rest = &line[i..];
        if let Some(d) = c.to_digit(10) {
            return Some(d);
        }
        if !spelled {
            return None;
        }
        SPELLED
            .iter()
            .find_map(|(word, d)| rest.starts_with(word).then_some(*d))
    });

    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        let input = "
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
    "
        .trim();
        assert_eq!(calibration_sum(input, false), Ok(142));

        let input = "
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
    "
        .trim();
        assert_eq!(calibration_sum(input, true), Ok(281));
        assert_eq!(calibration_sum(input, false), Err(1));

        let report = solve(input, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("n/a"));
        assert_eq!(report.get("Part 2"), Some("281"));
    }

    #[test]
    fn overlapping_words() {
        assert_eq!(calibration_value("eighthree", true), Some(83));
        assert_eq!(calibration_value("sevenine", true), Some(79));
        assert_eq!(calibration_value("treb7uchet", false), Some(77));
        assert_eq!(calibration_value("nothing", true), None);
    }
}
