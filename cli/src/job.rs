//! One input file in, one text file (and optionally a trace) out.

use ascii_txt::{AsciiConverter, LightnessMap, LineEnding, TraceWriter};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Where the converted text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Next to the input as `<stem>.txt`
    Derived,
    /// An explicit path
    File(PathBuf),
    /// Returned to the caller for printing
    Stdout,
}

/// What a finished job produced
#[derive(Debug)]
pub struct JobReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub trace: Option<PathBuf>,
    pub columns: u32,
    pub rows: u32,
    /// Text held back for stdout mode
    pub text: Option<String>,
}

/// `photos/cat.png` -> `photos/cat.txt`
pub fn text_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Trace file sitting beside the text output: `photos/cat.txt` -> `photos/cat.log`
pub fn trace_path(output: &Path) -> PathBuf {
    output.with_extension("log")
}

/// Decode `input`, convert it and write the results
///
/// The text is fully assembled before its destination file is created, so a
/// failed conversion never leaves a truncated `.txt` behind. Input that the
/// converter rejects outright leaves no `.log` either.
pub fn run(
    input: &Path,
    destination: &Destination,
    converter: &AsciiConverter,
    ending: LineEnding,
) -> Result<JobReport, CliError> {
    if !input.is_file() {
        return Err(CliError::NotFound(input.to_path_buf()));
    }

    let img = image::open(input).map_err(|e| CliError::Decode {
        path: input.to_path_buf(),
        source: e,
    })?;
    log::debug!("decoded '{}' ({}x{})", input.display(), img.width(), img.height());
    let lightness = LightnessMap::from(&img);

    let output = match destination {
        Destination::Derived => Some(text_path(input)),
        Destination::File(path) => Some(path.clone()),
        Destination::Stdout => None,
    };

    let (art, trace) = if converter.config().diagnostics {
        // Reject bad input before the trace file exists
        converter
            .geometry(&lightness)
            .map_err(|e| CliError::Convert {
                path: input.to_path_buf(),
                source: e,
            })?;
        let path = trace_path(output.as_deref().unwrap_or(&text_path(input)));
        let file = File::create(&path).map_err(|e| CliError::Write {
            path: path.clone(),
            source: e.into(),
        })?;
        let mut trace = TraceWriter::new(file);
        let art = converter
            .convert_traced(&lightness, &mut trace)
            .map_err(|e| CliError::Convert {
                path: input.to_path_buf(),
                source: e,
            })?;
        log::info!(
            "wrote {} trace lines to '{}'",
            trace.lines_written(),
            path.display()
        );
        (art, Some(path))
    } else {
        let art = converter
            .convert(&lightness)
            .map_err(|e| CliError::Convert {
                path: input.to_path_buf(),
                source: e,
            })?;
        (art, None)
    };

    let text = match &output {
        Some(path) => {
            art.save(path, ending).map_err(|e| CliError::Write {
                path: path.clone(),
                source: e,
            })?;
            None
        }
        None => Some(art.to_text(ending)),
    };

    Ok(JobReport {
        input: input.to_path_buf(),
        output,
        trace,
        columns: art.width(),
        rows: art.height(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascii_txt::{ConvertError, ConverterConfig, Ramp};
    use image::{Rgba, RgbaImage};

    fn converter(width: u32, diagnostics: bool) -> AsciiConverter {
        AsciiConverter::new(ConverterConfig {
            output_width: width,
            ramp: Ramp::new("#. ").unwrap(),
            font_aspect_ratio: 1.0,
            diagnostics,
        })
        .unwrap()
    }

    fn gray_png(dir: &Path, name: &str, size: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(size, size, Rgba([128, 128, 128, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_paths() {
        assert_eq!(text_path(Path::new("a/cat.png")), PathBuf::from("a/cat.txt"));
        assert_eq!(trace_path(Path::new("a/cat.txt")), PathBuf::from("a/cat.log"));
        assert_eq!(text_path(Path::new("noext")), PathBuf::from("noext.txt"));
    }

    #[test]
    fn test_writes_derived_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "gray.png", 4);

        let report = run(
            &input,
            &Destination::Derived,
            &converter(2, false),
            LineEnding::Lf,
        )
        .unwrap();

        let output = dir.path().join("gray.txt");
        assert_eq!(report.output.as_deref(), Some(output.as_path()));
        assert_eq!((report.columns, report.rows), (2, 2));
        assert!(report.trace.is_none());
        // 128/255 = 0.502 -> floor(1.506) = 1
        assert_eq!(std::fs::read_to_string(output).unwrap(), "..\n..\n");
        assert!(!dir.path().join("gray.log").exists());
    }

    #[test]
    fn test_diagnostics_write_log_beside_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "gray.png", 4);
        let target = dir.path().join("art.txt");

        let report = run(
            &input,
            &Destination::File(target.clone()),
            &converter(2, true),
            LineEnding::Lf,
        )
        .unwrap();

        let log = dir.path().join("art.log");
        assert_eq!(report.trace.as_deref(), Some(log.as_path()));
        let trace = std::fs::read_to_string(log).unwrap();
        assert!(trace.starts_with("image=4x4 output=2x2"));
        assert_eq!(trace.lines().count(), 1 + 4 * 7);
        assert!(target.exists());
    }

    #[test]
    fn test_stdout_returns_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "gray.png", 4);

        let report = run(
            &input,
            &Destination::Stdout,
            &converter(2, false),
            LineEnding::CrLf,
        )
        .unwrap();
        assert_eq!(report.text.as_deref(), Some("..\r\n..\r\n"));
        assert!(report.output.is_none());
        assert!(!dir.path().join("gray.txt").exists());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &dir.path().join("ghost.png"),
            &Destination::Derived,
            &converter(2, false),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.png");
        std::fs::write(&input, b"definitely not a png").unwrap();
        let err = run(
            &input,
            &Destination::Derived,
            &converter(2, false),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
    }

    #[test]
    fn test_width_larger_than_image_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "small.png", 4);
        let err = run(
            &input,
            &Destination::Derived,
            &converter(5, false),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert {
                source: ConvertError::InvalidInput(_),
                ..
            }
        ));
        assert!(!dir.path().join("small.txt").exists());
    }

    #[test]
    fn test_invalid_width_with_diagnostics_leaves_no_log() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "small.png", 4);
        let err = run(
            &input,
            &Destination::Derived,
            &converter(5, true),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Convert {
                source: ConvertError::InvalidInput(_),
                ..
            }
        ));
        assert!(!dir.path().join("small.log").exists());
        assert!(!dir.path().join("small.txt").exists());
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let input = gray_png(dir.path(), "gray.png", 4);
        let target = dir.path().join("no-such-dir").join("out.txt");
        let err = run(
            &input,
            &Destination::File(target),
            &converter(2, false),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Write {
                source: ConvertError::SinkWrite(_),
                ..
            }
        ));
    }
}
