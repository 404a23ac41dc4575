use crate::{error::PuzzleError, puzzles::Options, report::Report};

/// One pattern as bitmasks, `#` being a set bit
struct Pattern {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

fn parse(input: &str) -> Result<Vec<Pattern>, PuzzleError> {
    let mut patterns = vec![];
    let mut lines: Vec<(usize, &str)> = vec![];

    let mut flush = |lines: &mut Vec<(usize, &str)>| -> Result<(), PuzzleError> {
        if lines.is_empty() {
            return Ok(());
        }

        let w = lines[0].1.len();
        let mut rows = vec![];
        let mut cols = vec![0u64; w];
        for &(i, line) in lines.iter() {
            if line.len() != w {
                return Err(PuzzleError::malformed(i, "rows differ in length"));
            }
            if w > 64 || lines.len() > 64 {
                return Err(PuzzleError::malformed(i, "patterns are limited to 64x64"));
            }

            let mut row = 0;
            for (x, c) in line.bytes().enumerate() {
                let bit = match c {
                    b'#' => 1,
                    b'.' => 0,
                    _ => return Err(PuzzleError::malformed(i, format!("unknown tile {:?}", c as char))),
                };
                row = row << 1 | bit;
                cols[x] = cols[x] << 1 | bit;
            }
            rows.push(row);
        }

        patterns.push(Pattern { rows, cols });
        lines.clear();
        Ok(())
    };

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut lines)?;
        } else {
            lines.push((i, line));
        }
    }
    flush(&mut lines)?;

    Ok(patterns)
}

/// Number of lines before a mirror between two lines, such that the mirrored
/// halves differ in exactly `smudges` tiles
fn mirror(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&k| {
        let before = lines[..k].iter().rev();
        let after = lines[k..].iter();
        before.zip(after).map(|(a, b)| (a ^ b).count_ones()).sum::<u32>() == smudges
    })
}

fn summarize(pattern: &Pattern, smudges: u32) -> Option<usize> {
    mirror(&pattern.cols, smudges).or_else(|| mirror(&pattern.rows, smudges).map(|n| 100 * n))
}

pub fn solve(input: &str, options: &Options) -> Result<Report, PuzzleError> {
    let patterns = parse(input)?;
    let window = options.window(patterns.len());

    let mut report = Report::new();
    report.detail(format!(
        "Patterns {}..{} of {}",
        window.start,
        window.end,
        patterns.len()
    ));

    let (mut clean, mut smudged) = (0, 0);
    for (i, pattern) in patterns.iter().enumerate().take(window.end).skip(window.start) {
        let missing = |what| PuzzleError::NoSolution(format!("pattern {i} has no {what}"));
        let a = summarize(pattern, 0).ok_or_else(|| missing("reflection"))?;
        let b = summarize(pattern, 1).ok_or_else(|| missing("smudged reflection"))?;

        clean += a;
        smudged += b;
        report.detail(format!("Pattern {i}: {a}, with the smudge fixed {b}"));
    }

    report.answer("Part 1", clean).answer("Part 2", smudged);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..###
#.##..##.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn test() {
        let patterns = parse(EXAMPLE).unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].rows[0], 0b101100110);
        assert_eq!(patterns[0].cols.len(), 9);

        assert_eq!(summarize(&patterns[0], 0), Some(5));
        assert_eq!(summarize(&patterns[1], 0), Some(400));
        assert_eq!(summarize(&patterns[0], 1), Some(300));
        assert_eq!(summarize(&patterns[1], 1), Some(100));

        let report = solve(EXAMPLE, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("405"));
        assert_eq!(report.get("Part 2"), Some("400"));
    }

    #[test]
    fn window_of_patterns() {
        let report = solve(EXAMPLE, &Options::from_fields(Some("1"), None)).unwrap();
        assert_eq!(report.get("Part 1"), Some("400"));
        assert_eq!(report.get("Part 2"), Some("100"));
    }

    #[test]
    fn no_reflection() {
        assert_eq!(
            solve("#.\n..\n", &Options::default()).unwrap_err(),
            PuzzleError::NoSolution("pattern 0 has no reflection".into())
        );
    }
}
