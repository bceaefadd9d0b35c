//! Models generator CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use mb_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mb_diagnostic::Diagnostic;
use mb_ir::Config;
use mb_parse::SourceFile;
use mbc::{
    check, generate, init_tracing, load_config, read_developer_files, DriverError, JsonSource,
};

/// Options shared by every command.
#[derive(Debug, Default)]
struct Options {
    types: Option<PathBuf>,
    src: Option<PathBuf>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Options::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            let slot = match arg {
                "--src" => &mut options.src,
                "--out" | "-o" => &mut options.out,
                "--config" => &mut options.config,
                _ if arg.starts_with('-') => return Err(format!("unknown option '{arg}'")),
                _ if options.types.is_none() => {
                    options.types = Some(PathBuf::from(arg));
                    i += 1;
                    continue;
                }
                _ => return Err(format!("unexpected argument '{arg}'")),
            };
            let Some(value) = args.get(i + 1) else {
                return Err(format!("missing value for '{arg}'"));
            };
            *slot = Some(PathBuf::from(value));
            i += 2;
        }
        Ok(options)
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if !matches!(command, "generate" | "check") {
        eprintln!("error: unknown command '{command}'");
        print_usage();
        return ExitCode::FAILURE;
    }

    let options = match Options::parse(&args[2..]) {
        Ok(options) if options.types.is_some() => options,
        Ok(_) => {
            eprintln!("error: missing content types file");
            print_usage();
            return ExitCode::FAILURE;
        }
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::<std::io::Stderr>::stderr(ColorMode::Auto, is_tty);
    let outcome = if command == "generate" {
        run_generate(&options)
    } else {
        run_check(&options)
    };

    match outcome {
        Ok(warnings) => {
            emitter.emit_all(&warnings);
            emitter.emit_summary(0, warnings.len());
            emitter.flush();
            ExitCode::SUCCESS
        }
        Err(error) => {
            let diagnostics = error.into_diagnostics();
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            emitter.emit_all(&diagnostics);
            emitter.emit_summary(errors.max(1), diagnostics.len() - errors);
            emitter.flush();
            ExitCode::FAILURE
        }
    }
}

fn inputs(options: &Options) -> Result<(JsonSource, Vec<SourceFile>, Config), DriverError> {
    let source = JsonSource::new(options.types.clone().unwrap_or_default());
    let developer = match &options.src {
        Some(dir) => read_developer_files(dir)?,
        None => Vec::new(),
    };
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    Ok((source, developer, config))
}

fn run_generate(options: &Options) -> Result<Vec<Diagnostic>, DriverError> {
    let (source, developer, config) = inputs(options)?;
    let models = generate(&source, &developer, &[], &config)?;
    let out = options
        .out
        .clone()
        .or_else(|| options.src.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let written = models.write_to(&out)?;
    println!("OK: {} files written to {}", written.len(), out.display());
    Ok(models.warnings)
}

fn run_check(options: &Options) -> Result<Vec<Diagnostic>, DriverError> {
    let (source, developer, config) = inputs(options)?;
    let model = check(&source, &developer, &[], &config)?;
    println!(
        "OK: {} content types, {} to generate",
        model.graph.len(),
        model.graph.live_types().count()
    );
    Ok(model.warnings)
}

fn print_usage() {
    println!("mbc - strongly typed models for content types");
    println!();
    println!("Usage: mbc <command> <types.json> [options]");
    println!();
    println!("Commands:");
    println!("  generate    Generate model files");
    println!("  check       Parse developer code and build the model, write nothing");
    println!();
    println!("Options:");
    println!("  --src <dir>       Developer code to honour (*.cs, generated files excluded)");
    println!("  --out <dir>       Where to write models (default: --src, else the current dir)");
    println!("  --config <file>   Generation settings as JSON");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=mb_build=debug) for tracing output.");
}
