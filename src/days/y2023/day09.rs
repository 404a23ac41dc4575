use crate::{error::PuzzleError, puzzles::Options, report::Report};

/// Extends the sequence by one value at each end, by repeatedly taking
/// differences until they are all zero.
fn extrapolate(values: &[i64]) -> (i64, i64) {
    if values.iter().all(|&v| v == 0) {
        return (0, 0);
    }

    let diffs = values.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
    let (before, after) = extrapolate(&diffs);

    (values[0] - before, values[values.len() - 1] + after)
}

fn parse(input: &str) -> Result<Vec<Vec<i64>>, PuzzleError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|n| {
                    n.parse::<i64>()
                        .map_err(|_| PuzzleError::malformed(i, format!("expected a number, found {n:?}")))
                })
                .collect()
        })
        .collect()
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let histories = parse(input)?;

    let mut report = Report::new();
    let (mut prev_sum, mut next_sum) = (0, 0);
    for history in &histories {
        let (prev, next) = extrapolate(history);
        prev_sum += prev;
        next_sum += next;
        report.detail(format!("{prev} <- {history:?} -> {next}"));
    }

    report.answer("Part 1", next_sum).answer("Part 2", prev_sum);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), (-3, 18));
        assert_eq!(extrapolate(&[1, 3, 6, 10, 15, 21]), (0, 28));
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), (5, 68));

        let input = "
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";
        let report = solve(input, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("114"));
        assert_eq!(report.get("Part 2"), Some("2"));
    }

    #[test]
    fn short_and_negative_histories() {
        assert_eq!(extrapolate(&[5]), (5, 5));
        assert_eq!(extrapolate(&[-2, -4, -6]), (0, -8));
    }
}
