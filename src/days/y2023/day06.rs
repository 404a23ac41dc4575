use crate::{error::PuzzleError, puzzles::Options, report::Report};

/// Holding the button for `h` of `time` ms travels `h * (time - h)` mm. The
/// winning holds form one contiguous run around `time / 2`; its ends are
/// estimated from the quadratic and then nudged onto the exact integers.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let wins = |h: u64| h <= time && h as u128 * (time - h) as u128 > record as u128;

    let mid = time / 2;
    if !wins(mid) {
        return 0;
    }

    let t = time as f64;
    let disc = (t * t - 4.0 * record as f64).max(0.0).sqrt();

    let mut lo = (((t - disc) / 2.0).floor().max(0.0) as u64).min(mid);
    while !wins(lo) {
        lo += 1;
    }
    while lo > 0 && wins(lo - 1) {
        lo -= 1;
    }

    let mut hi = (((t + disc) / 2.0).ceil() as u64).clamp(mid, time);
    while !wins(hi) {
        hi -= 1;
    }
    while hi < time && wins(hi + 1) {
        hi += 1;
    }

    hi - lo + 1
}

fn numbers(i: usize, line: &str, label: &str) -> Result<Vec<u64>, PuzzleError> {
    line.trim()
        .strip_prefix(label)
        .ok_or_else(|| PuzzleError::malformed(i, format!("expected `{label} ...`")))?
        .split_whitespace()
        .map(|n| {
            n.parse::<u64>()
                .map_err(|_| PuzzleError::malformed(i, format!("expected a number, found {n:?}")))
        })
        .collect()
}

/// Part two reads each line as one number with the spacing removed
fn kerned(ns: &[u64]) -> Result<u64, PuzzleError> {
    ns.iter()
        .map(|n| n.to_string())
        .collect::<String>()
        .parse::<u64>()
        .map_err(|_| PuzzleError::NoSolution("kerned number does not fit".into()))
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (i, line) = lines.next().ok_or(PuzzleError::Empty)?;
    let times = numbers(i, line, "Time:")?;
    let (i, line) = lines
        .next()
        .ok_or_else(|| PuzzleError::Missing("`Distance:` line".into()))?;
    let records = numbers(i, line, "Distance:")?;

    if times.len() != records.len() {
        return Err(PuzzleError::malformed(
            i,
            format!("{} times but {} distances", times.len(), records.len()),
        ));
    }

    let mut report = Report::new();

    let mut product = 1;
    for (race, (&time, &record)) in times.iter().zip(&records).enumerate() {
        let ways = ways_to_win(time, record);
        product = ways
            .checked_mul(product)
            .ok_or_else(|| PuzzleError::NoSolution("product of ways to win overflows".into()))?;
        report.detail(format!(
            "Race #{}: {ways} ways to beat {record}mm in {time}ms",
            race + 1
        ));
    }

    let (time, record) = (kerned(&times)?, kerned(&records)?);
    report
        .answer("Part 1", product)
        .answer("Part 2", ways_to_win(time, record));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(71530, 940200), 71503);

        let input = "
Time:      7  15   30
Distance:  9  40  200
";
        let report = solve(input, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("288"));
        assert_eq!(report.get("Part 2"), Some("71503"));
    }

    #[test]
    fn unbeatable_races() {
        assert_eq!(ways_to_win(4, 4), 0);
        assert_eq!(ways_to_win(0, 0), 0);
        assert_eq!(ways_to_win(2, 0), 1);
    }

    #[test]
    fn long_races() {
        assert_eq!(ways_to_win(99999, 1), 99998);
        assert_eq!(ways_to_win(u64::MAX, u64::MAX), u64::MAX - 3);

        let report = solve("Time: 99999 99999\nDistance: 1 1\n", &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("9999600004"));

        assert_eq!(
            solve("Time: 9999999999 9999999999\nDistance: 1 1\n", &Options::default()),
            Err(PuzzleError::NoSolution("product of ways to win overflows".into()))
        );
    }
}
