use crate::{error::PuzzleError, puzzles::Options, report::Report};

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |cur, b| (cur + b as usize) * 17 % 256)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op<'a> {
    Insert(&'a str, u8),
    Remove(&'a str),
}

fn parse_step(i: usize, step: &str) -> Result<Op<'_>, PuzzleError> {
    let bad = |reason: &str| PuzzleError::Malformed {
        line: 1,
        reason: format!("step {} ({step:?}): {reason}", i + 1),
    };

    if let Some(label) = step.strip_suffix('-') {
        if label.is_empty() {
            return Err(bad("missing label"));
        }
        return Ok(Op::Remove(label));
    }

    let (label, focal) = step.split_once('=').ok_or_else(|| bad("expected `=` or `-`"))?;
    if label.is_empty() {
        return Err(bad("missing label"));
    }
    match focal.parse::<u8>() {
        Ok(focal @ 1..=9) => Ok(Op::Insert(label, focal)),
        _ => Err(bad("focal length must be 1-9")),
    }
}

fn focusing_power(ops: &[Op]) -> usize {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![vec![]; 256];

    for op in ops {
        match *op {
            Op::Insert(label, focal) => {
                let lenses = &mut boxes[hash(label)];
                match lenses.iter_mut().find(|(l, _)| *l == label) {
                    Some(lens) => lens.1 = focal,
                    None => lenses.push((label, focal)),
                }
            }
            Op::Remove(label) => {
                boxes[hash(label)].retain(|(l, _)| *l != label);
            }
        }
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
        })
        .sum()
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let sequence = input.replace(['\r', '\n'], "");
    let steps = sequence
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    let ops = steps
        .iter()
        .enumerate()
        .map(|(i, step)| parse_step(i, step))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = Report::new();
    report
        .answer("Part 1", steps.iter().map(|s| hash(s)).sum::<usize>())
        .answer("Part 2", focusing_power(&ops))
        .detail(format!("{} steps", steps.len()));

    Ok(report)
}
