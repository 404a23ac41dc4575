//! HTML for the layout shell and the day pages.
//!
//! Pages are small enough to be built with `write!` into a `String`; every
//! piece of user or file text goes through [`escape`].

use std::fmt::Write;

use crate::puzzles::{self, Day, PuzzleId, YEARS};

pub const BRAND: &str = "Advent of Code workbench";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = "
body { font-family: system-ui, sans-serif; line-height: 1.8; margin: 0 auto; max-width: 60rem; padding: 0 1rem; }
nav { display: flex; gap: 2rem; align-items: baseline; border-bottom: 1px solid #ccc; }
nav .brand { font-weight: 600; font-size: 1.25rem; text-decoration: none; color: inherit; }
details ul { position: absolute; background: #fff; border: 1px solid #ccc; list-style: none; margin: 0; padding: 0.5rem 1rem; }
form { display: flex; flex-direction: column; gap: 1rem; max-width: 28rem; }
textarea { width: 100%; font-family: monospace; }
.missing { color: #888; }
.error { color: #b00; }
";

fn nav() -> String {
    let mut html = format!("<nav><a class=\"brand\" href=\"/\">{BRAND}</a>");
    for &(year, last) in YEARS {
        let _ = write!(html, "<details><summary>{year}</summary><ul>");
        for day in 1..=last {
            let id = PuzzleId::new(year, day);
            let _ = write!(html, "<li><a href=\"{}\">Day {day:02}</a></li>", id.path());
        }
        html.push_str("</ul></details>");
    }
    html.push_str("</nav>");
    html
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{}\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        escape(title),
        nav(),
    )
}

pub fn index_page() -> String {
    let mut body = String::new();
    for &(year, last) in YEARS.iter().rev() {
        let _ = write!(body, "<h1>AoC {year}</h1><ul>");
        for n in 1..=last {
            let id = PuzzleId::new(year, n);
            match puzzles::find(id) {
                Some(day) => {
                    let _ = write!(
                        body,
                        "<li><a href=\"{}\">{}</a></li>",
                        id.path(),
                        escape(&day.title())
                    );
                }
                None => {
                    let _ = write!(body, "<li class=\"missing\">Day {n:02}</li>");
                }
            }
        }
        body.push_str("</ul>");
    }
    layout(BRAND, &body)
}

/// What the form was last submitted with, echoed back into the page
#[derive(Debug, Default)]
pub struct Submission<'a> {
    pub selected: Option<&'a str>,
    pub first: Option<&'a str>,
    pub second: Option<&'a str>,
    pub output: &'a str,
    pub raw_input: &'a str,
    pub failed: bool,
}

pub fn day_page(day: &Day, samples: &[String], submission: &Submission) -> String {
    let id = day.id;
    let mut body = format!(
        "<h1>{} <a href=\"{}\">Puzzle</a></h1>\n<h2>Input:</h2>\n<form method=\"post\" action=\"{}\">\n",
        escape(&day.title()),
        id.puzzle_url(),
        id.path(),
    );

    body.push_str("<label for=\"selected-input\">Available File Inputs:</label>\n");
    body.push_str("<select id=\"selected-input\" name=\"selected-input\">\n");
    for name in samples {
        let selected = if submission.selected == Some(name.as_str()) {
            " selected"
        } else {
            ""
        };
        let name = escape(name);
        let _ = writeln!(body, "<option value=\"{name}\"{selected}>{name}</option>");
    }
    body.push_str("</select>\n");

    body.push_str("<label for=\"raw-input\">Raw Text Input:</label>\n");
    body.push_str(
        "<textarea id=\"raw-input\" name=\"raw-input\" rows=\"4\" \
         placeholder=\"(optionally) provide raw input here\"></textarea>\n",
    );

    let fields = [
        ("input-one", submission.first),
        ("input-two", submission.second),
    ];
    for (label, (field, value)) in day.options.iter().zip(fields) {
        let _ = writeln!(
            body,
            "<label for=\"{field}\">{}:</label>\n<input id=\"{field}\" name=\"{field}\" type=\"number\" value=\"{}\">",
            escape(label),
            escape(value.unwrap_or("")),
        );
    }
    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n");

    let class = if submission.failed { " class=\"error\"" } else { "" };
    let _ = write!(
        body,
        "<h2>Output:</h2>\n<textarea id=\"output\"{class} readonly rows=\"10\">{}</textarea>\n\
         <h3>From input:</h3>\n<textarea id=\"from-input\" readonly rows=\"10\">{}</textarea>\n",
        escape(submission.output),
        escape(submission.raw_input),
    );

    layout(&day.title(), &body)
}

pub fn not_found_page(what: &str) -> String {
    let body = format!(
        "<h1>Not solved yet</h1>\n<p class=\"missing\">{} has no solution here.</p>\n<p><a href=\"/\">Back to all days</a></p>\n",
        escape(what)
    );
    layout("Not found", &body)
}
