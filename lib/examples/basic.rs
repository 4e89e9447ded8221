/// Basic example: Convert a synthetic test image to text
///
/// This draws a bright circle over a vertical gradient and prints the result
use ascii_txt::{AsciiConverter, ConverterConfig, LineEnding, TraceWriter};
use image::{Rgba, RgbaImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ASCII Text - Basic Example");
    println!("==========================\n");

    let width = 320;
    let height = 240;
    let mut img = RgbaImage::new(width, height);

    // Dark-to-light vertical gradient
    for y in 0..height {
        let gray = (y * 255 / height) as u8;
        for x in 0..width {
            img.put_pixel(x, y, Rgba([gray, gray, gray, 255]));
        }
    }

    // White circle in the center with a black rim
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 70.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 6.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = ConverterConfig {
        output_width: 80,
        ..Default::default()
    };

    println!("Converting with config:");
    println!("  - Output width: {}", config.output_width);
    println!("  - Ramp: {:?}", config.ramp.to_string());
    println!("  - Font aspect ratio: {}", config.font_aspect_ratio);
    println!();

    let converter = AsciiConverter::new(config)?;

    // Trace into a sink that discards it; only the event count is reported
    let mut trace = TraceWriter::new(std::io::sink());
    let art = converter.convert_traced(&img, &mut trace)?;

    print!("{}", art.to_text(LineEnding::Native));
    println!();
    println!(
        "✓ {}x{} characters, {} trace events",
        art.width(),
        art.height(),
        trace.lines_written()
    );

    Ok(())
}
