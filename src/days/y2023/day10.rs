use crate::{error::PuzzleError, puzzles::Options, report::Report};

type Pos = (usize, usize);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    fn opposite(self) -> Dir {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    fn step(self, (y, x): Pos, h: usize, w: usize) -> Option<Pos> {
        match self {
            Up => y.checked_sub(1).map(|y| (y, x)),
            Down => (y + 1 < h).then_some((y + 1, x)),
            Left => x.checked_sub(1).map(|x| (y, x)),
            Right => (x + 1 < w).then_some((y, x + 1)),
        }
    }
}

/// The two sides a pipe opens to
fn exits(c: u8) -> Option<[Dir; 2]> {
    match c {
        b'|' => Some([Up, Down]),
        b'-' => Some([Left, Right]),
        b'L' => Some([Up, Right]),
        b'J' => Some([Up, Left]),
        b'7' => Some([Down, Left]),
        b'F' => Some([Down, Right]),
        _ => None,
    }
}

fn pipe(exit: [Dir; 2]) -> u8 {
    [b'|', b'-', b'L', b'J', b'7', b'F']
        .into_iter()
        .find(|&c| exits(c).is_some_and(|e| e.contains(&exit[0]) && e.contains(&exit[1])))
        .unwrap_or(b'.')
}

struct Maze {
    grid: Vec<Vec<u8>>,
    start: Pos,
}

impl Maze {
    fn parse(input: &str) -> Result<Maze, PuzzleError> {
        let grid = input
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        let w = grid.first().map_or(0, |row| row.len());
        if let Some(i) = grid.iter().position(|row| row.len() != w) {
            return Err(PuzzleError::malformed(i, "rows differ in length"));
        }

        let start = grid
            .iter()
            .enumerate()
            .find_map(|(y, row)| row.iter().position(|&c| c == b'S').map(|x| (y, x)))
            .ok_or_else(|| PuzzleError::NoSolution("starting point S not found".into()))?;

        Ok(Maze { grid, start })
    }

    fn h(&self) -> usize {
        self.grid.len()
    }

    fn w(&self) -> usize {
        self.grid[0].len()
    }

    fn get(&self, (y, x): Pos) -> u8 {
        self.grid[y][x]
    }

    /// Works out which pipe is hidden under S from the neighbours that
    /// connect back to it
    fn start_pipe(&self) -> Result<[Dir; 2], PuzzleError> {
        let connected = [Up, Right, Down, Left]
            .into_iter()
            .filter(|&d| {
                d.step(self.start, self.h(), self.w())
                    .and_then(|p| exits(self.get(p)))
                    .is_some_and(|e| e.contains(&d.opposite()))
            })
            .collect::<Vec<_>>();

        match connected[..] {
            [a, b] => Ok([a, b]),
            _ => Err(PuzzleError::NoSolution(format!(
                "S connects to {} pipes, expected 2",
                connected.len()
            ))),
        }
    }

    /// Positions on the loop, starting at S
    fn trail(&self, start_exits: [Dir; 2]) -> Result<Vec<Pos>, PuzzleError> {
        let (h, w) = (self.h(), self.w());
        let broken = || PuzzleError::NoSolution("the loop is broken".into());

        let mut trail = vec![self.start];
        let mut dir = start_exits[0];
        let mut at = dir.step(self.start, h, w).ok_or_else(broken)?;

        while at != self.start {
            if trail.len() > h * w {
                return Err(broken());
            }
            trail.push(at);

            let [a, b] = exits(self.get(at)).ok_or_else(broken)?;
            let entry = dir.opposite();
            dir = match (a == entry, b == entry) {
                (true, _) => b,
                (_, true) => a,
                _ => return Err(broken()),
            };
            at = dir.step(at, h, w).ok_or_else(broken)?;
        }

        Ok(trail)
    }
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let mut maze = Maze::parse(input)?;
    let start_exits = maze.start_pipe()?;
    let trail = maze.trail(start_exits)?;

    let (y, x) = maze.start;
    maze.grid[y][x] = pipe(start_exits);

    let mut on_loop = vec![vec![false; maze.w()]; maze.h()];
    for &(y, x) in &trail {
        on_loop[y][x] = true;
    }

    // Scanning a row left to right, a tile is inside when an odd number of
    // loop pipes with an upward exit have been crossed.
    let mut inside = 0;
    let mut picture = vec![];
    for (y, row) in maze.grid.iter().enumerate() {
        let mut crossings = 0;
        let mut line = String::with_capacity(row.len());
        for (x, &c) in row.iter().enumerate() {
            if on_loop[y][x] {
                if matches!(c, b'|' | b'L' | b'J') {
                    crossings += 1;
                }
                line.push(c as char);
            } else if crossings % 2 == 1 {
                inside += 1;
                line.push('@');
            } else {
                line.push('.');
            }
        }
        picture.push(line);
    }

    let mut report = Report::new();
    report
        .answer("Part 1", trail.len() / 2)
        .answer("Part 2", inside);
    report.detail(format!(
        "Start at {},{} is a {}",
        maze.start.1,
        maze.start.0,
        maze.get(maze.start) as char
    ));
    for line in picture {
        report.detail(line);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(input: &str) -> (String, String) {
        let report = solve(input, &Options::default()).unwrap();
        (
            report.get("Part 1").unwrap().to_string(),
            report.get("Part 2").unwrap().to_string(),
        )
    }

    #[test]
    fn test() {
        assert_eq!(
            answers(
                "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
    "
            ),
            ("8".into(), "1".into())
        );

        assert_eq!(
            answers(
                "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
    "
            ),
            ("23".into(), "4".into())
        );

        assert_eq!(
            answers(
                "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
    "
            ),
            ("70".into(), "8".into())
        );
    }

    #[test]
    fn start_is_replaced_by_its_pipe() {
        let maze = Maze::parse("-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n").unwrap();
        assert_eq!(maze.start_pipe().unwrap(), [Right, Down]);
        assert_eq!(pipe([Right, Down]), b'F');
    }

    #[test]
    fn without_start() {
        assert_eq!(
            solve("...\n.F.\n...", &Options::default()).unwrap_err(),
            PuzzleError::NoSolution("starting point S not found".into())
        );
    }
}
