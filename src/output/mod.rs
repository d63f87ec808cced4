use anyhow::*;

use crate::report::questions::QuestionSummary;
use crate::report::students::StudentRecord;

#[cfg(test)]
pub mod mock;
pub mod text;


/// Three-tier classification of a correctness percentage, used by renderers
/// for visual emphasis. The aggregation core never consumes this.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Red,
    Orange,
    Green,
}

impl Severity {
    pub fn from_percent(percent: f64) -> Severity {
        if percent >= 70.0 {
            Severity::Green
        } else if percent >= 40.0 {
            Severity::Orange
        } else {
            Severity::Red
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Title(String),
    Meta(String),
    Heading(String),
    Text(String),
    QuestionTable(Vec<QuestionSummary>),
    StudentTable(Vec<StudentRecord>),
}

pub trait DocumentSink {
    fn append(&mut self, block: Block) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}
