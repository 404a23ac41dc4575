use fxhash::FxHashMap;
use nom::{
    bytes::complete::tag,
    character::complete::alphanumeric1,
    combinator::all_consuming,
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::{error::PuzzleError, puzzles::Options, report::Report};

type Node<'a> = (&'a str, (&'a str, &'a str));

fn node(input: &str) -> IResult<&str, Node<'_>> {
    separated_pair(
        alphanumeric1,
        tag(" = "),
        delimited(
            tag("("),
            separated_pair(alphanumeric1, tag(", "), alphanumeric1),
            tag(")"),
        ),
    )(input)
}

struct Network<'a> {
    /// `true` for right
    directions: Vec<bool>,
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
    /// Node names in input order
    order: Vec<&'a str>,
}

fn parse(input: &str) -> Result<Network<'_>, PuzzleError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (i, first) = lines.next().ok_or(PuzzleError::Empty)?;
    let directions = first
        .chars()
        .map(|c| match c {
            'L' => Ok(false),
            'R' => Ok(true),
            _ => Err(PuzzleError::malformed(i, format!("unknown direction {c:?}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut nodes = FxHashMap::default();
    let mut order = vec![];
    for (i, line) in lines {
        let (_, (name, next)) = all_consuming(node)(line)
            .map_err(|e| PuzzleError::malformed(i, format!("could not read node: {e}")))?;
        nodes.insert(name, next);
        order.push(name);
    }

    Ok(Network {
        directions,
        nodes,
        order,
    })
}

impl<'a> Network<'a> {
    /// Steps from `start` until a node satisfying `done` is reached. Gives up
    /// once every (node, direction index) state could have been visited.
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<u64, PuzzleError> {
        let limit = self.nodes.len() as u64 * self.directions.len() as u64 + 1;

        let mut at = start;
        for (steps, &right) in (0..limit).zip(self.directions.iter().cycle()) {
            if steps > 0 && done(at) {
                return Ok(steps);
            }
            let &(left, r) = self
                .nodes
                .get(at)
                .ok_or_else(|| PuzzleError::Missing(format!("node {at}")))?;
            at = if right { r } else { left };
        }

        if done(at) {
            return Ok(limit);
        }
        Err(PuzzleError::NoSolution(format!(
            "{start} loops forever without reaching the end"
        )))
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let network = parse(input)?;
    if network.directions.is_empty() {
        return Err(PuzzleError::Missing("directions".into()));
    }

    let mut report = Report::new();

    // The ghost example has no AAA at all
    if network.nodes.contains_key("AAA") {
        report.answer("Part 1", network.steps("AAA", |n| n == "ZZZ")?);
    } else {
        report.answer("Part 1", "n/a");
        report.detail("No AAA node, skipping the single walk");
    }

    let starts = network
        .order
        .iter()
        .copied()
        .filter(|n| n.ends_with('A'))
        .collect::<Vec<_>>();
    if starts.is_empty() {
        return Err(PuzzleError::Missing("nodes ending in A".into()));
    }

    // Every ghost walks a cycle whose length equals its first arrival time,
    // so they all line up at the least common multiple.
    let mut all = 1;
    for start in starts {
        let steps = network.steps(start, |n| n.ends_with('Z'))?;
        report.detail(format!("{start} reaches a Z node in {steps} steps"));
        all = lcm(all, steps);
    }
    report.answer("Part 2", all);

    Ok(report)
}
