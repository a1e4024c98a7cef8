//! wrapgen CLI orchestrator
//!
//! This binary provides the main entry point for wrapgen: it reads a file
//! of method signatures, runs the generation pipeline, and prints the
//! service and client boilerplate to stdout.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use codegen::TemplateSet;
use config::Config;
use extract::{filter_matches, SignatureMatcher};
use pipeline::{GenerateRequest, Generator};
use signature::SignatureSet;

/// Bundled example of a valid signature file, shown with the usage text.
const EXAMPLE_FILE: &str = include_str!("../resources/example.txt");

fn main() {
    let args: Vec<String> = env::args().collect();

    // Bare invocation and help both print usage plus the bundled example.
    if args.len() == 1 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    // Handle dump-signatures subcommand
    if args.iter().any(|a| a == "dump-signatures") {
        if let Err(e) = run_dump_signatures(&args) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_generate(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("wrapgen");
    println!();
    println!("Generates RPC service/client boilerplate from a file of method signatures.");
    println!();
    println!("USAGE:");
    println!("    wrapgen [SUBCOMMAND] [FLAGS]");
    println!();
    println!("SUBCOMMANDS:");
    println!("    dump-signatures               Extract signatures only and write them as JSON");
    println!("    --help, -h                    Show this help message");
    println!("FLAGS:");
    println!("    --input <file>                File containing the object's method signatures [REQUIRED]");
    println!("    --object <name>               Only wrap methods of this receiver name");
    println!("    --object-type <type>          Only wrap methods of this receiver type");
    println!("    --service <name>              Name of the generated service (default: Service)");
    println!("    --client <name>               Name of the generated client (default: ServiceClient)");
    println!("    --templates <dir>             Load the six *.tmpl assets from <dir> instead of the bundled set");
    println!("    --config <file>               TOML config supplying defaults for the flags above");
    println!("    --output <file>               dump-signatures only: write JSON here instead of stdout");
    println!();
    println!("EXAMPLES:");
    println!("    wrapgen --input methods.txt --object kv --object-type KvStore --service KvService");
    println!("    wrapgen dump-signatures --input methods.txt --output signatures.json");
    println!();
    println!("Example of an '--input' file:");
    println!("{}", EXAMPLE_FILE);
}

/// Value of `<flag> <value>`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1))
}

/// Load configuration: an explicit `--config` file must exist and parse;
/// otherwise the user-level config file is used when present, and the
/// built-in defaults when not.
fn load_config(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(path) = flag_value(args, "--config") {
        return Ok(Config::from_file(path)?);
    }
    if let Ok(path) = Config::default_path() {
        if path.exists() {
            return Ok(Config::from_file(&path)?);
        }
    }
    Ok(Config::default())
}

/// Read the signature source named by `--input`.
fn read_input(args: &[String]) -> Result<String, Box<dyn std::error::Error>> {
    let input_path = flag_value(args, "--input")
        .ok_or("--input <file> is required; use 'wrapgen --help' for usage information")?;
    fs::read_to_string(input_path)
        .map_err(|e| format!("cannot read signature file '{}': {}", input_path, e).into())
}

fn run_generate(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    if config.logging.trace {
        logging::enable_trace();
    }

    let input = read_input(args)?;

    // Template assets: an explicit directory (flag or config) is loaded
    // from disk and must be complete; otherwise the bundled set applies.
    let template_dir =
        flag_value(args, "--templates").map(PathBuf::from).or(config.generation.template_dir);
    let templates = match template_dir {
        Some(dir) => TemplateSet::from_dir(&dir)?,
        None => TemplateSet::builtin()?,
    };

    let request = GenerateRequest {
        input,
        object_name: flag_value(args, "--object").cloned().unwrap_or_default(),
        object_type: flag_value(args, "--object-type").cloned().unwrap_or_default(),
        service_name: flag_value(args, "--service")
            .cloned()
            .unwrap_or(config.generation.service_name),
        client_name: flag_value(args, "--client").cloned().unwrap_or(config.generation.client_name),
    };

    let generator = Generator::new(templates)?;
    let output = generator.generate(&request)?;

    println!("{}", output.service);
    println!("{}", output.client);
    Ok(())
}

fn run_dump_signatures(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args)?;

    let matcher = SignatureMatcher::new()?;
    let matches = filter_matches(
        matcher.find_all(&input),
        flag_value(args, "--object").map(String::as_str).unwrap_or(""),
        flag_value(args, "--object-type").map(String::as_str).unwrap_or(""),
    );
    let set = SignatureSet::new(matches);

    match flag_value(args, "--output") {
        Some(path) => {
            set.to_file(Path::new(path))?;
            println!("{} signatures written to {}", set.len(), path);
        }
        None => println!("{}", set.to_json_pretty()?),
    }
    Ok(())
}
