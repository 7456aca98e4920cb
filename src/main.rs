// enumscan: extracts C++ enum declarations from source text

mod output;
mod parser;
mod report;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use parser::parse::Parser;

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("enumscan");

    let mut json = false;
    let mut input_file = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            _ => input_file = Some(arg.clone()),
        }
    }

    let Some(input_file) = input_file else {
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} [--json] <file>", program_name);
        eprintln!();
        eprintln!("Reads a C++ source or header file and prints every enum");
        eprintln!("declaration found in it. With --json, results are printed");
        eprintln!("as a JSON array instead.");
        return ExitCode::FAILURE;
    };

    if !Path::new(&input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(&input_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Failed to read '{}': {}", input_file, err);
            return ExitCode::FAILURE;
        }
    };

    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("{}", report::render(&source, &[], &err));
            return ExitCode::FAILURE;
        }
    };

    let enumerations = match parser.parse_enumerations() {
        Ok(enumerations) => enumerations,
        Err(err) => {
            eprintln!("{}", report::render(&source, parser.tokens(), &err));
            return ExitCode::FAILURE;
        }
    };

    if json {
        let value = output::enumerations_to_json(&enumerations);
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Error: Failed to serialize results: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for enumeration in &enumerations {
            println!("{}", enumeration);
        }
        eprintln!("Found {} enum declaration(s).", enumerations.len());
    }

    ExitCode::SUCCESS
}
