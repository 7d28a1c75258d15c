// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Translates an OZUL [`Program`] into a self-contained C program.

#![deny(elided_lifetimes_in_paths)]

mod c_type;
mod code_generator;
mod error;

use ozul::Program;

pub use self::{
    c_type::CType,
    code_generator::CodeGenerator,
    error::CodeGenError,
};

/// Generates the C translation unit of the program.
pub fn generate(program: &Program) -> Result<String, CodeGenError> {
    CodeGenerator::new().generate_program(program)
}
