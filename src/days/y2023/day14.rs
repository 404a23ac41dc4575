use fxhash::FxHashMap;

use crate::{error::PuzzleError, puzzles::Options, report::Report};

const SPIN_CYCLES: usize = 1_000_000_000;

type Grid = Vec<Vec<u8>>;

fn parse(input: &str) -> Result<Grid, PuzzleError> {
    let grid = input
        .lines()
        .map(|line| line.trim().as_bytes().to_vec())
        .filter(|line| !line.is_empty())
        .collect::<Grid>();

    let Some(w) = grid.first().map(Vec::len) else {
        return Err(PuzzleError::Empty);
    };
    for (i, row) in grid.iter().enumerate() {
        if row.len() != w {
            return Err(PuzzleError::malformed(i, "rows differ in length"));
        }
        if let Some(&c) = row.iter().find(|c| !matches!(c, b'O' | b'#' | b'.')) {
            return Err(PuzzleError::malformed(i, format!("unknown tile {:?}", c as char)));
        }
    }

    Ok(grid)
}

fn render(grid: &Grid) -> String {
    grid.iter()
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

// Each tilt walks against the direction of travel, counting the free
// cells since the last cube rock, and drops round rocks that many cells.

fn tilt_north(grid: &mut Grid) {
    for x in 0..grid[0].len() {
        let mut num_empty = 0;
        for y in 0..grid.len() {
            match grid[y][x] {
                b'.' => num_empty += 1,
                b'#' => num_empty = 0,
                _ if num_empty > 0 => {
                    grid[y][x] = b'.';
                    grid[y - num_empty][x] = b'O';
                }
                _ => {}
            }
        }
    }
}

fn tilt_south(grid: &mut Grid) {
    let h = grid.len();
    for x in 0..grid[0].len() {
        let mut num_empty = 0;
        for y in (0..h).rev() {
            match grid[y][x] {
                b'.' => num_empty += 1,
                b'#' => num_empty = 0,
                _ if num_empty > 0 => {
                    grid[y][x] = b'.';
                    grid[y + num_empty][x] = b'O';
                }
                _ => {}
            }
        }
    }
}

fn tilt_west(grid: &mut Grid) {
    for row in grid.iter_mut() {
        let mut num_empty = 0;
        for x in 0..row.len() {
            match row[x] {
                b'.' => num_empty += 1,
                b'#' => num_empty = 0,
                _ if num_empty > 0 => {
                    row[x] = b'.';
                    row[x - num_empty] = b'O';
                }
                _ => {}
            }
        }
    }
}

fn tilt_east(grid: &mut Grid) {
    for row in grid.iter_mut() {
        let mut num_empty = 0;
        for x in (0..row.len()).rev() {
            match row[x] {
                b'.' => num_empty += 1,
                b'#' => num_empty = 0,
                _ if num_empty > 0 => {
                    row[x] = b'.';
                    row[x + num_empty] = b'O';
                }
                _ => {}
            }
        }
    }
}

fn spin(grid: &mut Grid) {
    tilt_north(grid);
    tilt_west(grid);
    tilt_south(grid);
    tilt_east(grid);
}

fn load(grid: &Grid) -> usize {
    grid.iter()
        .rev()
        .enumerate()
        .map(|(y, row)| (y + 1) * row.iter().filter(|&&c| c == b'O').count())
        .sum()
}

/// Load after `n` spin cycles. The platform falls into a loop long before a
/// billion spins, so once a state repeats the rest is just arithmetic.
fn load_after(mut grid: Grid, n: usize) -> (usize, Option<(usize, usize)>) {
    let mut seen = FxHashMap::default();
    let mut loads = vec![load(&grid)];
    seen.insert(grid.clone(), 0);

    for i in 1..=n {
        spin(&mut grid);
        if let Some(&first) = seen.get(&grid) {
            let period = i - first;
            let at = first + (n - first) % period;
            return (loads[at], Some((first, period)));
        }
        seen.insert(grid.clone(), i);
        loads.push(load(&grid));
    }

    (load(&grid), None)
}

pub fn solve(input: &str, options: &Options) -> Result<Report, PuzzleError> {
    let grid = parse(input)?;

    let cycles = match options.first {
        None => SPIN_CYCLES,
        Some(n) if n >= 0 => n as usize,
        Some(n) => {
            return Err(PuzzleError::InvalidOption(format!(
                "spin cycles cannot be negative, got {n}"
            )))
        }
    };

    let mut tilted = grid.clone();
    tilt_north(&mut tilted);

    let (spun, cycle) = load_after(grid, cycles);

    let mut report = Report::new();
    report.answer("Part 1", load(&tilted)).answer("Part 2", spun);

    if let Some((first, period)) = cycle {
        report.detail(format!(
            "State after {first} spins repeats every {period} spins"
        ));
    }
    report.detail(format!("After tilting north:\n{}", render(&tilted)));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn test() {
        let report = solve(EXAMPLE, &Options::default()).unwrap();
        assert_eq!(report.get("Part 1"), Some("136"));
        assert_eq!(report.get("Part 2"), Some("64"));
    }

    #[test]
    fn one_spin() {
        let mut grid = parse(EXAMPLE).unwrap();
        spin(&mut grid);
        assert_eq!(
            render(&grid),
            "
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
"
            .trim()
        );

        let grid = parse(EXAMPLE).unwrap();
        let (after_three, _) = load_after(grid.clone(), 3);
        let mut manual = grid;
        for _ in 0..3 {
            spin(&mut manual);
        }
        assert_eq!(after_three, load(&manual));
    }

    #[test]
    fn zero_spins_is_the_untouched_platform() {
        let grid = parse(EXAMPLE).unwrap();
        assert_eq!(load_after(grid.clone(), 0), (load(&grid), None));
    }
}
