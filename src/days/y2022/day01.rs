use crate::{error::PuzzleError, puzzles::Options, report::Report};

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let totals = elf_totals(input)?;

    let mut ranked = totals.iter().copied().enumerate().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let Some(&(_, most)) = ranked.first() else {
        return Err(PuzzleError::NoSolution("no elves found".into()));
    };

    let mut report = Report::new();
    report
        .answer("Part 1", most)
        .answer("Part 2", ranked.iter().take(3).map(|(_, n)| n).sum::<u64>());

    for (elf, calories) in ranked {
        report.detail(format!("Elf #{}: {calories}", elf + 1));
    }

    Ok(report)
}

/// Calories carried per elf, in input order. Elves are separated by blank
/// lines.
fn elf_totals(input: &str) -> Result<Vec<u64>, PuzzleError> {
    let mut totals = vec![];
    let mut current = None;

    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            totals.extend(current.take());
            continue;
        }

        let calories = line
            .parse::<u64>()
            .map_err(|_| PuzzleError::malformed(i, format!("expected calories, found {line:?}")))?;
        *current.get_or_insert(0) += calories;
    }
    totals.extend(current);

    Ok(totals)
}
