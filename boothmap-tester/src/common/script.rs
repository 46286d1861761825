//! Line-oriented cart scripts.
//!
//! ```text
//! # comment
//! add A2   => rejected
//! add A1   => total 53
//! add B1   => total 111
//! remove A1
//! checkout => empty
//! ```
use anyhow::{Result, bail, ensure};
use boothmap_core::{BookingDesk, DeskResult};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::common::scenario::{Scenario, ScenarioCtx};

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<cmd>add|remove|toggle|clear|checkout)(?:\s+(?P<id>[^\s=]+))?\s*(?:=>\s*(?P<expect>.+?))?\s*$",
    )
    .unwrap_or_else(|err| unreachable!("script pattern is valid: {err}"))
});

static EXPECT_TOTAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^total\s+(?P<amount>\d+)$")
        .unwrap_or_else(|err| unreachable!("expectation pattern is valid: {err}"))
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: cannot parse {text:?}")]
    Syntax { line: usize, text: String },
    #[error("line {line}: {command} needs a booth id")]
    MissingId { line: usize, command: String },
    #[error("line {line}: {command} takes no booth id")]
    UnexpectedId { line: usize, command: String },
    #[error("line {line}: unknown expectation {text:?}")]
    Expectation { line: usize, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(String),
    Toggle(String),
    Clear,
    Checkout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Ok,
    Rejected,
    Total(u64),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: Command,
    pub expect: Option<Expectation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub steps: Vec<ScriptStep>,
}

fn parse_expectation(line: usize, text: &str) -> Result<Expectation, ScriptError> {
    match text {
        "ok" => Ok(Expectation::Ok),
        "rejected" => Ok(Expectation::Rejected),
        "empty" => Ok(Expectation::Empty),
        _ => EXPECT_TOTAL
            .captures(text)
            .and_then(|caps| caps["amount"].parse().ok())
            .map(Expectation::Total)
            .ok_or_else(|| ScriptError::Expectation {
                line,
                text: text.to_string(),
            }),
    }
}

impl Script {
    /// Parse a script. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first malformed line.
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }
            let caps = LINE.captures(text).ok_or_else(|| ScriptError::Syntax {
                line,
                text: text.to_string(),
            })?;
            let cmd = &caps["cmd"];
            let id = caps.name("id").map(|m| m.as_str().to_string());
            let command = match (cmd, id) {
                ("add", Some(id)) => Command::Add(id),
                ("remove", Some(id)) => Command::Remove(id),
                ("toggle", Some(id)) => Command::Toggle(id),
                ("clear", None) => Command::Clear,
                ("checkout", None) => Command::Checkout,
                ("clear" | "checkout", Some(_)) => {
                    return Err(ScriptError::UnexpectedId {
                        line,
                        command: cmd.to_string(),
                    });
                }
                _ => {
                    return Err(ScriptError::MissingId {
                        line,
                        command: cmd.to_string(),
                    });
                }
            };
            let expect = caps
                .name("expect")
                .map(|m| parse_expectation(line, m.as_str()))
                .transpose()?;
            steps.push(ScriptStep {
                line,
                command,
                expect,
            });
        }
        Ok(Self {
            name: name.into(),
            steps,
        })
    }

    fn apply(desk: &mut BookingDesk, command: &Command) -> DeskResult {
        match command {
            Command::Add(id) => desk.add(id),
            Command::Remove(id) => desk.remove(id),
            Command::Toggle(id) => desk.toggle(id),
            Command::Clear => desk.clear(),
            Command::Checkout => desk.checkout(),
        }
    }

    /// Replay the script against a fresh desk.
    ///
    /// # Errors
    ///
    /// Returns the first unmet expectation or broken invariant.
    pub fn run_on(&self, desk: &mut BookingDesk) -> Result<()> {
        for step in &self.steps {
            let result = Self::apply(desk, &step.command);
            let line = step.line;
            match (step.expect, &result) {
                (None, _) => {}
                (Some(Expectation::Rejected), Err(_))
                | (Some(Expectation::Ok), Ok(_)) => {}
                (Some(Expectation::Rejected), Ok(change)) => {
                    bail!("line {line}: expected rejection, got {change:?}")
                }
                (Some(_), Err(rejection)) => bail!("line {line}: rejected: {rejection}"),
                (Some(Expectation::Total(want)), Ok(_)) => ensure!(
                    desk.total() == want,
                    "line {line}: expected total {want}, got {}",
                    desk.total()
                ),
                (Some(Expectation::Empty), Ok(_)) => ensure!(
                    desk.is_empty(),
                    "line {line}: expected an empty cart, {} lines left",
                    desk.cart().len()
                ),
            }
            if let Err(violation) = desk.verify() {
                bail!("line {line}: {violation}");
            }
        }
        Ok(())
    }
}

impl Scenario for Script {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        self.run_on(&mut BookingDesk::new(&ctx.config))
    }
}
