use cached::proc_macro::cached;

use crate::{error::PuzzleError, puzzles::Options, report::Report};

struct Record<'a> {
    springs: &'a str,
    groups: Vec<usize>,
}

fn parse(input: &str) -> Result<Vec<Record<'_>>, PuzzleError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let (springs, groups) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| PuzzleError::malformed(i, "expected `SPRINGS GROUPS`"))?;
            if let Some(c) = springs.chars().find(|c| !matches!(c, '.' | '#' | '?')) {
                return Err(PuzzleError::malformed(i, format!("unknown spring {c:?}")));
            }
            let groups = groups
                .split(',')
                .map(|n| n.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| PuzzleError::malformed(i, format!("bad group sizes {groups:?}")))?;
            Ok(Record { springs, groups })
        })
        .collect()
}

/// Number of ways to fill in the `?`s so the damaged runs match `groups`
fn arrangements(springs: &str, groups: &[usize]) -> u64 {
    count(springs.to_string(), groups.to_vec())
}

#[cached(size = 100_000)]
fn count(springs: String, groups: Vec<usize>) -> u64 {
    let s = springs.as_bytes();
    let Some((&len, rest)) = groups.split_first() else {
        return u64::from(!s.contains(&b'#'));
    };

    let mut ways = 0;

    // Operational here
    if matches!(s.first(), Some(b'.' | b'?')) {
        ways += count(springs[1..].to_string(), groups.clone());
    }

    // Or the next group starts here, followed by an operational spring
    if s.len() >= len && !s[..len].contains(&b'.') && s.get(len) != Some(&b'#') {
        let next = (len + 1).min(s.len());
        ways += count(springs[next..].to_string(), rest.to_vec());
    }

    ways
}

fn unfold(record: &Record) -> (String, Vec<usize>) {
    let springs = vec![record.springs; 5].join("?");
    let groups = record.groups.repeat(5);
    (springs, groups)
}

pub fn solve(input: &str, options: &Options) -> Result<Report, PuzzleError> {
    let records = parse(input)?;
    let window = options.window(records.len());

    let mut report = Report::new();
    report.detail(format!(
        "Records {}..{} of {}",
        window.start,
        window.end,
        records.len()
    ));

    let (mut folded, mut unfolded) = (0, 0);
    for record in &records[window] {
        let n = arrangements(record.springs, &record.groups);
        let (springs, groups) = unfold(record);
        let m = arrangements(&springs, &groups);

        folded += n;
        unfolded += m;
        report.detail(format!("{} {:?}: {n}, unfolded {m}", record.springs, record.groups));
    }

    report.answer("Part 1", folded).answer("Part 2", unfolded);
    Ok(report)
}
