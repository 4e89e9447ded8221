use crate::art::AsciiArt;
use crate::brightness::BrightnessSource;
use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::geometry::Geometry;
use crate::trace::{DiagnosticSink, TraceEvent};

/// Converts brightness sources into text grids
///
/// Holds only its configuration; every call is independent, so one
/// converter can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AsciiConverter {
    config: ConverterConfig,
}

impl AsciiConverter {
    /// Create a converter, validating the image-independent parameters
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Grid this converter would lay over `image`, without reading any pixel
    ///
    /// Fails with the same `InvalidInput` that [`convert`](Self::convert)
    /// would return.
    pub fn geometry<I: BrightnessSource + ?Sized>(&self, image: &I) -> Result<Geometry> {
        plan(image, &self.config)
    }

    /// Convert `image` into lines of ramp characters
    pub fn convert<I: BrightnessSource + ?Sized>(&self, image: &I) -> Result<AsciiArt> {
        render(image, &self.config, None)
    }

    /// Same as [`convert`](Self::convert), reporting every step to `sink`
    ///
    /// The returned grid is identical to the untraced one. A failing sink
    /// aborts the conversion with `SinkWrite`.
    pub fn convert_traced<I: BrightnessSource + ?Sized>(
        &self,
        image: &I,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<AsciiArt> {
        render(image, &self.config, Some(sink))
    }
}

/// Convert an image with the given configuration
///
/// # Arguments
/// * `image` - Source of per-pixel brightness
/// * `config` - Output width, ramp and font aspect ratio
///
/// # Returns
/// `output_height` lines of exactly `output_width` characters each
///
/// # Errors
/// `InvalidInput` when the parameters cannot form a grid over this image.
/// Nothing is read from the image in that case.
pub fn convert<I: BrightnessSource + ?Sized>(
    image: &I,
    config: &ConverterConfig,
) -> Result<AsciiArt> {
    render(image, config, None)
}

/// [`convert`] with a diagnostic sink attached
pub fn convert_traced<I: BrightnessSource + ?Sized>(
    image: &I,
    config: &ConverterConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<AsciiArt> {
    render(image, config, Some(sink))
}

fn emit(
    sink: &mut Option<&mut dyn DiagnosticSink>,
    event: impl FnOnce() -> TraceEvent,
) -> Result<()> {
    if let Some(sink) = sink.as_deref_mut() {
        sink.record(&event())?;
    }
    Ok(())
}

fn plan<I: BrightnessSource + ?Sized>(image: &I, config: &ConverterConfig) -> Result<Geometry> {
    config.validate()?;
    Geometry::new(
        image.width(),
        image.height(),
        config.output_width,
        config.font_aspect_ratio,
    )
}

fn render<I: BrightnessSource + ?Sized>(
    image: &I,
    config: &ConverterConfig,
    mut sink: Option<&mut dyn DiagnosticSink>,
) -> Result<AsciiArt> {
    let geo = plan(image, config)?;

    log::debug!(
        "converting {}x{} image to {}x{} chars (cell {:.3}x{:.3})",
        geo.image_width,
        geo.image_height,
        geo.output_width,
        geo.output_height,
        geo.cell_width,
        geo.cell_height
    );
    emit(&mut sink, || TraceEvent::Geometry(geo))?;

    let ramp = &config.ramp;
    let across = geo.samples_across();
    let down = geo.samples_down();
    let mut lines = Vec::with_capacity(geo.output_height as usize);

    for row in 0..geo.output_height {
        let mut line = String::with_capacity(geo.output_width as usize);

        for column in 0..geo.output_width {
            let (offset_x, offset_y) = geo.cell_offset(row, column);
            let (left, top) = geo.cell_origin(row, column);
            emit(&mut sink, || TraceEvent::Cell {
                row,
                column,
                offset_x,
                offset_y,
                left,
                top,
            })?;

            let mut sum = 0.0;
            let mut count = 0u32;

            // Samples below the image on the last row are skipped
            for dx in 0..across {
                for dy in 0..down {
                    let x = left + dx;
                    let y = top + dy;
                    if geo.contains(x, y) {
                        sum += image.brightness_at(x, y);
                        count += 1;
                        emit(&mut sink, || TraceEvent::Sample { x, y })?;
                    }
                }
            }

            if count == 0 {
                return Err(ConvertError::EmptyCellSample { row, column });
            }

            let value = sum / count as f64;
            emit(&mut sink, || TraceEvent::Brightness { value })?;

            let index = ramp.index_for(value);
            emit(&mut sink, || TraceEvent::Index {
                index,
                ramp_len: ramp.len(),
            })?;

            line.push(ramp.chars()[index]);
        }

        lines.push(line);
    }

    Ok(AsciiArt::new(geo.output_width, lines))
}
