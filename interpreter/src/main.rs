// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;
mod printer;

use std::{fmt::Display, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use colored::Colorize;
use log::{debug, LevelFilter};
use ozul::*;
use ozul_interpreter::{load_config, Interpreter};

use self::{
    logger::Logger,
    printer::{ErrorPrinter, Severity},
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The OZUL source file to run
    file: PathBuf,

    /// Translate the program to C instead of running it
    #[arg(short = 'c', long)]
    generate: bool,

    /// Where the generated C code is written, standard output if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the tokens and the syntax tree
    #[arg(short, long)]
    debug: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() {
    let args = Args::parse_args();
    Logger::initialize(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn });

    if let Err(e) = run(&args) {
        fatal("driver", format!("{e:#}"));
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source_code = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let directory = args.file.parent().unwrap_or(Path::new("."));
    let config = match load_config(directory) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "warning".yellow().bold(), e.to_string().bold());
            ConfigRoot::default()
        }
    };

    if config.log.debug {
        Logger::set_level(LevelFilter::Debug);
    }

    let tokens = lex(&args.file, &source_code, args.debug);

    let program = parse(&args.file, &source_code, &tokens, config.parser.statement_limit);
    if args.debug {
        for (idx, statement) in program.statements().iter().enumerate() {
            println!("Statement {idx}: {statement}");
        }
    }

    if args.generate {
        return generate(&program, args.output.as_deref());
    }

    let mut interpreter = Interpreter::stdio().with_config(&config.interpreter);
    if let Err(e) = interpreter.execute_program(&program) {
        let start = e.range.start();
        fatal("runtime", format_args!("{e} (at {}:{start})", args.file.display()));
    }

    Ok(())
}

fn lex(path: &Path, source_code: &str, dump: bool) -> Vec<Token> {
    let (tokens, diagnostics) = Lexer::new(source_code).collect_all();

    for diagnostic in &diagnostics {
        ErrorPrinter::new(path, source_code, diagnostic.location.as_zero_range(), diagnostic)
            .severity(Severity::Warning)
            .print();
    }

    if dump {
        for token in &tokens {
            println!("{}: {}", token.kind.name(), token.text);
        }
    }

    debug!("Lexed {} tokens", tokens.len());
    tokens
}

fn parse(path: &Path, source_code: &str, tokens: &[Token], statement_limit: usize) -> Program {
    let mut parser = Parser::new(tokens).with_statement_limit(statement_limit);
    let program = parser.parse_program();

    let diagnostics = parser.diagnostics();
    if diagnostics.is_empty() {
        return program;
    }

    for diagnostic in diagnostics {
        ErrorPrinter::new(path, source_code, diagnostic.range(), diagnostic).print();
    }

    if diagnostics.len() == 1 {
        eprintln!("1 parse error found");
    } else {
        eprintln!("{} parse errors found", diagnostics.len());
    }

    exit(1);
}

fn generate(program: &Program, output: Option<&Path>) -> anyhow::Result<()> {
    let code = match ozul_compiler::generate(program) {
        Ok(code) => code,
        Err(e) => fatal("codegen", e),
    };

    match output {
        Some(path) => {
            std::fs::write(path, code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("C code written to {}", path.display());
        }

        None => print!("{code}"),
    }

    Ok(())
}

fn fatal(stage: &str, message: impl Display) -> ! {
    eprintln!("{}", format!("{stage} error: {message}").red().bold());
    exit(2);
}
