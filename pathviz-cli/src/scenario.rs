//! Scenario file parsing.
//!
//! A scenario is a line-based script standing in for the interactive
//! surface of the original demo:
//!
//! ```text
//! # build the graph
//! edge A B 1
//! edge B C 2
//! edge A C 5
//!
//! # then query it
//! bfs A C
//! ucs A C
//! ```
//!
//! Blank lines and `#` comments are ignored. Node labels are passed
//! through as-is; the graph store normalizes them.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EDGE_RE: Regex = Regex::new(r"^edge\s+(\S+)\s+(\S+)\s+(\S+)$").expect("bad regexp");
    static ref QUERY_RE: Regex = Regex::new(r"^(bfs|ucs)\s+(\S+)\s+(\S+)$").expect("bad regexp");
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Line {0}: unrecognized directive: {1:?}")]
    BadDirective(usize, String),

    #[error("Line {0}: edge cost must be an integer, got {1:?}")]
    BadCost(usize, String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// One scenario directive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Directive {
    /// `edge FROM TO COST`
    Edge { from: String, to: String, cost: i64 },
    /// `bfs START GOAL`
    Bfs { start: String, goal: String },
    /// `ucs START GOAL`
    Ucs { start: String, goal: String },
}

/// A parsed scenario script.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Scenario {
    pub directives: Vec<Directive>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut directives = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            directives.push(Self::parse_line(index + 1, line)?);
        }
        Ok(Scenario { directives })
    }

    fn parse_line(lineno: usize, line: &str) -> Result<Directive> {
        if let Some(caps) = EDGE_RE.captures(line) {
            let cost = caps[3]
                .parse::<i64>()
                .map_err(|_| ScenarioError::BadCost(lineno, caps[3].to_string()))?;
            return Ok(Directive::Edge {
                from: caps[1].to_string(),
                to: caps[2].to_string(),
                cost,
            });
        }
        if let Some(caps) = QUERY_RE.captures(line) {
            let start = caps[2].to_string();
            let goal = caps[3].to_string();
            let directive = if &caps[1] == "bfs" {
                Directive::Bfs { start, goal }
            } else {
                Directive::Ucs { start, goal }
            };
            return Ok(directive);
        }
        Err(ScenarioError::BadDirective(lineno, line.to_string()))
    }
}
