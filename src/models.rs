use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declarative positional-argument metadata exposed by a generator.
///
/// Consumed by the CLI layer to build the generator's subcommand; the
/// generator itself never parses argv.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliArgument {
    pub name: String,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default = "default_nargs")]
    pub nargs: usize,
}

impl CliArgument {
    pub fn positional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            nargs: 1,
        }
    }
}

fn default_required() -> bool {
    true
}

fn default_nargs() -> usize {
    1
}

/// Declarative flag/option metadata exposed by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliOption {
    pub long: String,
    #[serde(default)]
    pub short: Option<char>,
    #[serde(default)]
    pub is_flag: bool,
    #[serde(default)]
    pub help: String,
}

impl CliOption {
    pub fn flag(long: &str, short: char, help: &str) -> Self {
        Self {
            long: long.to_string(),
            short: Some(short),
            is_flag: true,
            help: help.to_string(),
        }
    }
}

/// Per-invocation arguments collected from argv, merged over the render
/// context at call time. Call-site values win over context values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.as_str())
    }

    pub fn get_flag(&self, key: &str) -> bool {
        self.get(key).and_then(|value| value.as_bool()).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
