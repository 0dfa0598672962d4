use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// An external program invocation, configured as `["program", "arg", ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = AppError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        let mut parts = value.into_iter();
        match parts.next() {
            Some(program) if !program.trim().is_empty() => {
                Ok(Self { program, args: parts.collect() })
            }
            _ => Err(AppError::config_error("Command must name a program")),
        }
    }
}

impl From<CommandLine> for Vec<String> {
    fn from(value: CommandLine) -> Self {
        std::iter::once(value.program).chain(value.args).collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
