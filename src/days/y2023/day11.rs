use crate::{error::PuzzleError, puzzles::Options, report::Report};

const DEFAULT_EXPANSION: u64 = 1_000_000;

fn galaxies(input: &str) -> Vec<(usize, usize)> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .flat_map(|(y, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, c)| c == b'#')
                .map(move |(x, _)| (y, x))
        })
        .collect()
}

/// Sum of all pairwise differences along one axis, where every empty
/// coordinate counts `factor` times
fn axis_sum(mut coords: Vec<usize>, factor: u64) -> u64 {
    coords.sort_unstable();

    let mut expanded = Vec::with_capacity(coords.len());
    let mut shift = 0;
    for (i, &c) in coords.iter().enumerate() {
        if i > 0 {
            let gap = (c - coords[i - 1]).saturating_sub(1) as u64;
            shift += gap * (factor - 1);
        }
        expanded.push(c as u64 + shift);
    }

    // Each coordinate is subtracted from every one after it
    let mut prefix = 0;
    let mut sum = 0;
    for (i, &e) in expanded.iter().enumerate() {
        sum += e * i as u64 - prefix;
        prefix += e;
    }
    sum
}

fn total_distance(galaxies: &[(usize, usize)], factor: u64) -> u64 {
    let ys = galaxies.iter().map(|g| g.0).collect();
    let xs = galaxies.iter().map(|g| g.1).collect();
    axis_sum(ys, factor) + axis_sum(xs, factor)
}

pub fn solve(input: &str, options: &Options) -> Result<Report, PuzzleError> {
    let factor = match options.first {
        None => DEFAULT_EXPANSION,
        Some(n) if n >= 1 => n as u64,
        Some(n) => {
            return Err(PuzzleError::InvalidOption(format!(
                "expansion factor must be at least 1, got {n}"
            )))
        }
    };

    let galaxies = galaxies(input);

    let mut report = Report::new();
    report
        .answer("Part 1", total_distance(&galaxies, 2))
        .answer("Part 2", total_distance(&galaxies, factor));
    report.detail(format!(
        "{} galaxies, {} pairs, part 2 expands empty space {factor} times",
        galaxies.len(),
        galaxies.len() * galaxies.len().saturating_sub(1) / 2
    ));

    Ok(report)
}
