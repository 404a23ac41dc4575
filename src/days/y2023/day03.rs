use fxhash::FxHashMap;

use crate::{error::PuzzleError, puzzles::Options, report::Report};

/// A run of digits on one row, `start..end` in columns
#[derive(Debug, PartialEq, Eq)]
struct PartNumber {
    value: u64,
    row: usize,
    start: usize,
    end: usize,
}

fn is_symbol(c: u8) -> bool {
    c != b'.' && !c.is_ascii_digit()
}

fn numbers(grid: &[&[u8]]) -> Result<Vec<PartNumber>, PuzzleError> {
    let mut found = vec![];

    for (row, line) in grid.iter().enumerate() {
        let mut x = 0;
        while x < line.len() {
            if !line[x].is_ascii_digit() {
                x += 1;
                continue;
            }

            let start = x;
            while x < line.len() && line[x].is_ascii_digit() {
                x += 1;
            }
            let value = std::str::from_utf8(&line[start..x])
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| PuzzleError::malformed(row, "number does not fit"))?;

            found.push(PartNumber {
                value,
                row,
                start,
                end: x,
            });
        }
    }

    Ok(found)
}

/// Every cell touching the number, diagonals included
fn surroundings<'a>(
    grid: &'a [&'a [u8]],
    n: &'a PartNumber,
) -> impl Iterator<Item = ((usize, usize), u8)> + 'a {
    let rows = n.row.saturating_sub(1)..=(n.row + 1).min(grid.len() - 1);
    rows.flat_map(move |y| {
        let line = grid[y];
        let cols = n.start.saturating_sub(1)..(n.end + 1).min(line.len());
        cols.filter(move |&x| y != n.row || x < n.start || x >= n.end)
            .map(move |x| ((y, x), line[x]))
    })
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let grid = input
        .lines()
        .map(|line| line.trim().as_bytes())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    let numbers = numbers(&grid)?;

    let mut part_sum = 0;
    let mut gears: FxHashMap<(usize, usize), Vec<u64>> = FxHashMap::default();
    let mut loose = vec![];

    for n in &numbers {
        let mut is_part = false;
        for (pos, c) in surroundings(&grid, n) {
            if is_symbol(c) {
                is_part = true;
            }
            if c == b'*' {
                gears.entry(pos).or_default().push(n.value);
            }
        }

        if is_part {
            part_sum += n.value;
        } else {
            loose.push(n.value);
        }
    }

    let mut gear_positions = gears
        .iter()
        .filter(|(_, ns)| ns.len() == 2)
        .collect::<Vec<_>>();
    gear_positions.sort();
    let gear_sum = gear_positions
        .iter()
        .map(|(_, ns)| ns[0] * ns[1])
        .sum::<u64>();

    let mut report = Report::new();
    report.answer("Part 1", part_sum).answer("Part 2", gear_sum);

    report.detail(format!(
        "{} numbers, {} not next to a symbol: {loose:?}",
        numbers.len(),
        loose.len()
    ));
    for ((y, x), ns) in gear_positions {
        report.detail(format!("Gear at l{y}c{x}: {} * {}", ns[0], ns[1]));
    }

    Ok(report)
}
