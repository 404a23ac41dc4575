//! Answers accepted on adventofcode.com for one set of personal inputs.
//!
//! Personal inputs may not be redistributed, so none are shipped. Drop yours
//! in as `inputs/<slug>/input.txt` and run `cargo test -- --ignored`; days
//! without an `input.txt` are skipped.

use std::path::Path;

use aoc_web::{
    input::SampleInputs,
    puzzles::{self, Options, PuzzleId},
};

const ACCEPTED: &[(&str, &str, &str)] = &[
    ("2023.01", "Part 1", "54338"),
    ("2023.01", "Part 2", "53389"),
    ("2023.03", "Part 1", "527144"),
    ("2023.03", "Part 2", "81463996"),
    ("2023.05", "Part 2", "77435348"),
    ("2023.07", "Part 1", "246409899"),
    ("2023.09", "Part 1", "1969958987"),
    ("2023.09", "Part 2", "1068"),
    ("2023.10", "Part 1", "6875"),
    ("2023.12", "Part 1", "8193"),
    ("2023.13", "Part 1", "36041"),
    ("2023.14", "Part 2", "102055"),
];

const PERSONAL_INPUT: &str = "input.txt";

#[test]
#[ignore = "needs personal puzzle inputs"]
fn personal_inputs_give_accepted_answers() {
    let samples = SampleInputs::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("inputs"));

    for &(slug, part, expected) in ACCEPTED {
        let id = slug.parse::<PuzzleId>().unwrap();
        if !samples.dir(id).join(PERSONAL_INPUT).is_file() {
            eprintln!("{slug}: no {PERSONAL_INPUT}, skipping");
            continue;
        }

        let input = samples.read(id, PERSONAL_INPUT).unwrap();
        let report = puzzles::find(id)
            .unwrap()
            .run(&input, &Options::default())
            .unwrap_or_else(|e| panic!("{slug}: {e}"));
        assert_eq!(report.get(part), Some(expected), "{slug} {part}");
    }
}
