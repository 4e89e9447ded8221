//! Diagnostic trace of a conversion
//!
//! A [`DiagnosticSink`] sees every step the converter takes: the grid it
//! derived, each cell it visits, every pixel it samples, the averaged
//! brightness and the ramp index it picked. Events arrive in program order
//! and never influence the result.

use crate::geometry::Geometry;
use std::fmt;
use std::io::{self, Write};

/// One step of a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// Emitted once, before the first cell
    Geometry(Geometry),
    /// A new cell; `row` and `column` are zero-based
    Cell {
        row: u32,
        column: u32,
        /// Exact cell corner before truncation
        offset_x: f64,
        offset_y: f64,
        /// First sampled pixel
        left: u32,
        top: u32,
    },
    /// An in-bounds pixel included in the current cell
    Sample { x: u32, y: u32 },
    /// Averaged brightness of the current cell
    Brightness { value: f64 },
    /// Ramp slot chosen for the current cell
    Index { index: usize, ramp_len: usize },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Geometry(geo) => write!(
                f,
                "image={}x{} output={}x{} cell={}x{}",
                geo.image_width,
                geo.image_height,
                geo.output_width,
                geo.output_height,
                geo.cell_width,
                geo.cell_height
            ),
            TraceEvent::Cell {
                row,
                column,
                offset_x,
                offset_y,
                left,
                top,
            } => write!(
                f,
                "row={row} col={column} offset={offset_x}x{offset_y} left={left} top={top}"
            ),
            TraceEvent::Sample { x, y } => write!(f, "  x={x} y={y}"),
            TraceEvent::Brightness { value } => write!(f, "  brightness={value}"),
            TraceEvent::Index { index, ramp_len } => {
                write!(f, "  index={index} (len={ramp_len})")
            }
        }
    }
}

/// Receiver for trace events
pub trait DiagnosticSink {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()>;
}

/// Collects events in memory
impl DiagnosticSink for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// Writes one line per event and flushes after each one
///
/// Eager flushing keeps the trace on disk up to the last event even if the
/// process dies mid-conversion.
pub struct TraceWriter<W: Write> {
    inner: W,
    lines: u64,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Number of events written so far
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DiagnosticSink for TraceWriter<W> {
    fn record(&mut self, event: &TraceEvent) -> io::Result<()> {
        writeln!(self.inner, "{event}")?;
        self.inner.flush()?;
        self.lines += 1;
        Ok(())
    }
}
