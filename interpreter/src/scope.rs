// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::HashMap;

use ozul::{Type, Value};

/// The variables of a single run.
#[derive(Default, Debug)]
pub struct Scope {
    pub variables: HashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, reference: &str) -> Option<&Value> {
        self.variables.get(reference)
    }

    pub fn type_of(&self, reference: &str) -> Option<Type> {
        self.find(reference).map(Value::typ)
    }

    /// Binds the name, replacing any earlier binding.
    pub fn declare(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Replaces the value of an existing binding, returning `false` if the
    /// name was never declared.
    pub fn overwrite(&mut self, reference: &str, new: Value) -> bool {
        if let Some(value) = self.variables.get_mut(reference) {
            *value = new;
            return true;
        }

        false
    }
}
