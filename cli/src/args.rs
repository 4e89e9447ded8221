//! CLI argument parsing with clap.

use ascii_txt::LineEnding;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert images into plain-text ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-txt")]
#[command(version, about = "Convert images into plain-text ASCII art", long_about = None)]
pub struct Args {
    /// Image files to convert (JPEG, PNG, ...)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Characters per output line [default: 100]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Character ramp, densest glyph first [default: "@%#*+=-:. "]
    #[arg(short, long)]
    pub ramp: Option<String>,

    /// Font glyph width / height ratio [default: 0.6]
    #[arg(short, long, value_parser = parse_aspect)]
    pub aspect: Option<f64>,

    /// Write a per-sample trace next to each output (<name>.log)
    #[arg(short, long)]
    pub diagnostics: bool,

    /// Output file (only valid with a single input) [default: <input>.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the text to stdout instead of writing .txt files
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Line terminator for the text output
    #[arg(long, value_enum, default_value = "native")]
    pub line_ending: LineEndingArg,

    /// Config file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEndingArg {
    /// Platform default
    Native,
    /// \n
    Lf,
    /// \r\n
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

/// Parse a strictly positive, finite aspect ratio
fn parse_aspect(s: &str) -> Result<f64, String> {
    let ratio: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!("Aspect ratio must be greater than 0, got {}", s));
    }
    Ok(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ascii-txt", "cat.png"]).unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("cat.png")]);
        assert_eq!(args.width, None);
        assert_eq!(args.ramp, None);
        assert_eq!(args.aspect, None);
        assert!(!args.diagnostics);
        assert!(!args.stdout);
        assert_eq!(args.line_ending, LineEndingArg::Native);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "ascii-txt",
            "-w",
            "80",
            "-r",
            "#. ",
            "-a",
            "0.5",
            "-d",
            "-o",
            "out.txt",
            "--line-ending",
            "crlf",
            "cat.png",
        ])
        .unwrap();
        assert_eq!(args.width, Some(80));
        assert_eq!(args.ramp.as_deref(), Some("#. "));
        assert_eq!(args.aspect, Some(0.5));
        assert!(args.diagnostics);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(LineEnding::from(args.line_ending), LineEnding::CrLf);
    }

    #[test]
    fn test_requires_input() {
        assert!(Args::try_parse_from(["ascii-txt"]).is_err());
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(Args::try_parse_from(["ascii-txt", "-w", "0", "cat.png"]).is_err());
    }

    #[test]
    fn test_rejects_bad_aspect() {
        assert!(Args::try_parse_from(["ascii-txt", "-a", "0", "cat.png"]).is_err());
        assert!(Args::try_parse_from(["ascii-txt", "-a", "wide", "cat.png"]).is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(Args::try_parse_from(["ascii-txt", "--stdout", "-o", "x.txt", "cat.png"]).is_err());
    }

    #[test]
    fn test_parse_aspect() {
        assert_eq!(parse_aspect("0.6"), Ok(0.6));
        assert!(parse_aspect("-1").is_err());
        assert!(parse_aspect("inf").is_err());
    }
}
