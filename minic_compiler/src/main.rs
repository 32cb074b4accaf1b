use minic_compiler::config::runtime::RuntimeConfig;
use minic_compiler::{lexical, logging, pipeline, syntax, CompilationOutput};
use std::env;
use std::path::PathBuf;

/// Compiled when no input file is given
const SAMPLE_SOURCE: &str = "int main() { return 0; }";
const SAMPLE_NAME: &str = "<sample>";

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    input: Option<PathBuf>,
    config_path: Option<PathBuf>,
    strict: bool,
    reject_duplicates: bool,
    json: bool,
    quiet: bool,
    help: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("minic_compiler");

    let options = match parse_options(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} [OPTIONS] [FILE]", program_name);
            eprintln!("       {} --help", program_name);
            std::process::exit(1);
        }
    };

    if options.help {
        print_help(program_name);
        return Ok(());
    }

    let config = build_config(&options)?;
    logging::init_global_logging_with_preferences(config.logging.clone())?;
    lexical::init_lexical_analysis_logging()?;
    syntax::init_syntax_logging()?;

    let (source, name) = match &options.input {
        Some(path) => match pipeline::read_source(path) {
            Ok(source) => (source, path.display().to_string()),
            Err(error) => {
                eprint!("{}", pipeline::render_error(&error, "", &path.display().to_string()));
                std::process::exit(1);
            }
        },
        None => (SAMPLE_SOURCE.to_string(), SAMPLE_NAME.to_string()),
    };

    match pipeline::compile_source_with_config(&source, &name, &config) {
        Ok(output) => {
            if options.json {
                println!("{}", output.summary_json()?);
            } else {
                print!("{}", format_listing(&output));
            }
            logging::print_cargo_style_summary();
        }
        Err(error) => {
            eprint!("{}", pipeline::render_error(&error, &source, &name));
            logging::print_cargo_style_summary();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => options.help = true,
            "--strict" => options.strict = true,
            "--reject-duplicates" => options.reject_duplicates = true,
            "--json" => options.json = true,
            "--quiet" => options.quiet = true,
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            flag if flag.starts_with('-') => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("Unexpected extra argument '{}'", path));
                }
                options.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(options)
}

/// Runtime configuration with command-line flags layered on top
fn build_config(options: &CliOptions) -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    let mut config = match &options.config_path {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };

    if options.strict {
        config.analyzer.strict_mode = true;
    }
    if options.reject_duplicates {
        config.analyzer.reject_duplicate_functions = true;
    }
    if options.quiet {
        config.logging.enable_console_logging = false;
        config.logging.enable_cargo_style_output = false;
    }

    Ok(config)
}

/// Tokens, then recognized functions, then any diagnostics
fn format_listing(output: &CompilationOutput) -> String {
    let mut listing = String::new();

    for token in &output.tokens {
        listing.push_str(&format!("{}\n", token));
    }

    for function in output.program.functions() {
        listing.push_str(&format!("{}\n", function));
    }

    for diagnostic in &output.diagnostics {
        listing.push_str(&format!("{}\n", diagnostic));
    }
    if output.dropped_diagnostics > 0 {
        listing.push_str(&format!(
            "... {} more diagnostics not shown\n",
            output.dropped_diagnostics
        ));
    }

    listing
}

fn print_help(program_name: &str) {
    println!("minic compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexer and function-level grammar analyzer for a small C-like language");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [FILE]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    [FILE]    Source file to compile (default: built-in sample)");
    println!();
    println!("OPTIONS:");
    println!("    --help                Show this help message");
    println!("    --strict              Report skipped constructs; fail on unclosed blocks");
    println!("    --reject-duplicates   Fail when a function name is defined twice");
    println!("    --json                Print program, diagnostics and metrics as JSON");
    println!("    --quiet               Suppress console logging and the error summary");
    println!("    --config FILE         Load runtime preferences from a TOML file");
    println!();
    println!("EXAMPLES:");
    println!("    {}                    # Compile the built-in sample", program_name);
    println!("    {} main.c --strict    # Strict analysis of a file", program_name);
    println!("    {} main.c --json      # Machine-readable output", program_name);
}
