// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

use crate::DEFAULT_STATEMENT_LIMIT;

pub const DEFAULT_STEP_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub parser: ConfigSectionParser,
    pub interpreter: ConfigSectionInterpreter,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionParser {
    pub statement_limit: usize,
}

impl Default for ConfigSectionParser {
    fn default() -> Self {
        Self {
            statement_limit: DEFAULT_STATEMENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionInterpreter {
    pub step_limit: usize,

    /// Whether `catch` asks for its value before reading it.
    pub prompt: bool,
}

impl Default for ConfigSectionInterpreter {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            prompt: true,
        }
    }
}
