use std::collections::HashMap;

use crate::errors::CliError;

/// Options that take no value.
const SWITCHES: &[&str] = &["intercepted"];

/// Command arguments split into positionals, `--name value` options and switches.
#[derive(Debug, Default, Clone)]
pub struct Args {
    positional: Vec<String>,
    options: HashMap<String, String>,
    switches: Vec<String>,
}

impl Args {
    pub fn parse(tokens: &[String]) -> Result<Self, CliError> {
        let mut args = Args::default();
        let mut tokens = tokens.iter();
        while let Some(token) = tokens.next() {
            match token.strip_prefix("--") {
                Some(name) if SWITCHES.contains(&name) => args.switches.push(name.to_string()),
                Some(name) => {
                    let value = tokens
                        .next()
                        .ok_or_else(|| CliError::Usage(format!("option `--{name}` needs a value")))?;
                    args.options.insert(name.to_string(), value.clone());
                }
                None => args.positional.push(token.clone()),
            }
        }
        Ok(args)
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn require(&self, index: usize, usage: &str) -> Result<&str, CliError> {
        self.positional(index)
            .ok_or_else(|| CliError::Usage(format!("usage: {usage}")))
    }

    /// All positionals joined with spaces, for free text split by the shell.
    pub fn joined(&self) -> String {
        self.positional.join(" ")
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn switch(&self, name: &str) -> bool {
        self.switches.iter().any(|switch| switch == name)
    }
}
