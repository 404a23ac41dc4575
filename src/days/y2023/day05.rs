use crate::{error::PuzzleError, puzzles::Options, report::Report};

struct Rule {
    source: u64,
    dest: u64,
    num: u64,
}

struct Mapper {
    from: String,
    to: String,
    /// Sorted by `source`
    rules: Vec<Rule>,
}

impl Mapper {
    fn map(&self, n: u64) -> u64 {
        self.map_with_skip(n).0
    }

    /// Maps `n` and also says how many values starting at `n` map
    /// contiguously, so a whole seed range can be skipped through at once.
    fn map_with_skip(&self, n: u64) -> (u64, u64) {
        for rule in &self.rules {
            if n < rule.source {
                return (n, rule.source - n);
            }
            if n < rule.source + rule.num {
                return (rule.dest + (n - rule.source), rule.source + rule.num - n);
            }
        }

        (n, u64::MAX)
    }
}

struct Almanac {
    seeds: Vec<u64>,
    mappers: Vec<Mapper>,
}

fn parse(input: &str) -> Result<Almanac, PuzzleError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()));

    let (i, seeds_line) = lines
        .find(|(_, line)| !line.is_empty())
        .ok_or(PuzzleError::Empty)?;
    let seeds = seeds_line
        .strip_prefix("seeds:")
        .ok_or_else(|| PuzzleError::malformed(i, "expected `seeds: ...`"))?
        .split_whitespace()
        .map(|s| s.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| PuzzleError::malformed(i, "seeds must be numbers"))?;

    let mut mappers: Vec<Mapper> = vec![];
    for (i, line) in lines {
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_suffix(" map:") {
            let (from, to) = name
                .split_once("-to-")
                .ok_or_else(|| PuzzleError::malformed(i, format!("bad map name {name:?}")))?;
            let expected = mappers.last().map_or("seed", |m| m.to.as_str());
            if from != expected {
                return Err(PuzzleError::malformed(
                    i,
                    format!("expected a map from {expected}, found one from {from}"),
                ));
            }
            mappers.push(Mapper {
                from: from.to_string(),
                to: to.to_string(),
                rules: vec![],
            });
            continue;
        }

        let mapper = mappers
            .last_mut()
            .ok_or_else(|| PuzzleError::malformed(i, "range outside of a map"))?;
        let nums = line
            .split_whitespace()
            .map(|s| s.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PuzzleError::malformed(i, "ranges must be numbers"))?;
        let [dest, source, num] = nums[..] else {
            return Err(PuzzleError::malformed(i, "expected `dest source length`"));
        };
        if source.checked_add(num).is_none() || dest.checked_add(num).is_none() {
            return Err(PuzzleError::malformed(i, "range extends past the largest number"));
        }
        mapper.rules.push(Rule { source, dest, num });
    }

    for mapper in &mut mappers {
        mapper.rules.sort_by_key(|rule| rule.source);
    }

    Ok(Almanac { seeds, mappers })
}

impl Almanac {
    fn location(&self, seed: u64) -> u64 {
        self.mappers.iter().fold(seed, |n, mapper| mapper.map(n))
    }

    fn lowest_location(&self) -> Option<u64> {
        self.seeds.iter().map(|&seed| self.location(seed)).min()
    }

    /// Seeds read as `start length` pairs
    fn lowest_location_of_ranges(&self) -> Result<u64, PuzzleError> {
        if self.seeds.len() % 2 != 0 {
            return Err(PuzzleError::Missing("length for the last seed range".into()));
        }

        let mut loc: Option<u64> = None;
        for chunk in self.seeds.chunks_exact(2) {
            let mut seed = chunk[0];
            let end = chunk[0].saturating_add(chunk[1]);

            while seed < end {
                let mut n = seed;
                let mut skip = u64::MAX;
                for mapper in &self.mappers {
                    let (mapped, s) = mapper.map_with_skip(n);
                    n = mapped;
                    skip = skip.min(s);
                }

                loc = Some(loc.map_or(n, |loc| loc.min(n)));
                seed = seed.saturating_add(skip.max(1));
            }
        }

        loc.ok_or_else(|| PuzzleError::NoSolution("seed ranges are empty".into()))
    }
}

pub fn solve(input: &str, _options: &Options) -> Result<Report, PuzzleError> {
    let almanac = parse(input)?;

    let lowest = almanac
        .lowest_location()
        .ok_or_else(|| PuzzleError::Missing("seeds".into()))?;

    let mut report = Report::new();
    report
        .answer("Part 1", lowest)
        .answer("Part 2", almanac.lowest_location_of_ranges()?);

    let chain = almanac
        .mappers
        .iter()
        .map(|m| format!("{}-to-{}", m.from, m.to))
        .collect::<Vec<_>>();
    report.detail(format!("Maps: {}", chain.join(", ")));
    for &seed in &almanac.seeds {
        report.detail(format!("Seed {seed} -> location {}", almanac.location(seed)));
    }

    Ok(report)
}
