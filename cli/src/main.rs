mod args;
mod error;
mod job;
mod settings;

use args::Args;
use ascii_txt::{AsciiConverter, LineEnding};
use clap::Parser;
use error::CliError;
use job::{Destination, JobReport};
use rayon::prelude::*;
use settings::FileSettings;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors and warnings by default, RUST_LOG=info for per-file progress
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every input converted successfully
fn run(args: &Args) -> Result<bool, CliError> {
    let settings = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let config = settings::resolve(args, &settings)?;

    let destination = destination_for(args)?;
    if destination == Destination::Derived {
        check_distinct_outputs(&args.inputs)?;
    }
    let ending = LineEnding::from(args.line_ending);
    let converter = AsciiConverter::new(config).map_err(CliError::Setting)?;

    log::info!(
        "converting {} file(s) at {} columns",
        args.inputs.len(),
        converter.config().output_width
    );

    // Each file is an independent conversion
    let results: Vec<Result<JobReport, CliError>> = args
        .inputs
        .par_iter()
        .map(|input| job::run(input, &destination, &converter, ending))
        .collect();

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let mut all_ok = true;

    for result in results {
        match result {
            Ok(report) => {
                if let Some(text) = &report.text {
                    stdout
                        .write_all(text.as_bytes())
                        .map_err(|e| CliError::Write {
                            path: "<stdout>".into(),
                            source: e.into(),
                        })?;
                }
                if let Some(output) = &report.output {
                    log::info!(
                        "'{}' -> '{}' ({}x{})",
                        report.input.display(),
                        output.display(),
                        report.columns,
                        report.rows
                    );
                }
            }
            Err(e) => {
                all_ok = false;
                log::error!("{}", e);
            }
        }
    }

    Ok(all_ok)
}

fn destination_for(args: &Args) -> Result<Destination, CliError> {
    if args.stdout {
        return Ok(Destination::Stdout);
    }
    match &args.output {
        Some(_) if args.inputs.len() > 1 => Err(CliError::Usage(
            "--output can only be used with a single input file".to_string(),
        )),
        Some(path) => Ok(Destination::File(path.clone())),
        None => Ok(Destination::Derived),
    }
}

/// Two inputs sharing a stem (`cat.png`, `cat.jpg`) would race on `cat.txt`
fn check_distinct_outputs<P: AsRef<Path>>(inputs: &[P]) -> Result<(), CliError> {
    let mut seen: HashMap<_, &Path> = HashMap::with_capacity(inputs.len());
    for input in inputs {
        let input = input.as_ref();
        let output = job::text_path(input);
        if let Some(first) = seen.insert(output.clone(), input) {
            return Err(CliError::Usage(format!(
                "'{}' and '{}' would both write '{}'",
                first.display(),
                input.display(),
                output.display()
            )));
        }
    }
    Ok(())
}
