// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod interpreter;
mod scope;

pub use self::{
    config::{load_config, parse_config, ConfigError, CONFIG_FILE_NAME},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{run, Interpreter},
    scope::Scope,
};
