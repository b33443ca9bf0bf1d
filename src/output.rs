//! Image output.
//!
//! Quantizes the linear f32 framebuffer to 8 bits per channel (gamma 2.2,
//! clamp to [0, 0.999], scale by 256) and writes it as ASCII PPM (P3) and
//! as PNG. Both writers share the quantization, so the two files hold
//! identical pixel values.

use std::fs::File;
use std::io::{BufWriter, Write};

use image::{ImageBuffer, Rgb};
use log::{info, warn};

use crate::interval::Interval;

/// Display gamma applied when quantizing linear radiance.
const GAMMA: f32 = 2.2;

/// Quantize one linear channel to an integer in [0, 255].
fn to_byte(linear: f32) -> u8 {
    let intensity = Interval::new(0.0, 0.999);
    let gamma_corrected = linear.max(0.0).powf(1.0 / GAMMA);
    (256.0 * intensity.clamp(gamma_corrected)) as u8
}

/// Save the image as ASCII PPM (P3).
///
/// Header `P3\n<width> <height>\n255\n`, then one `R G B` triplet per
/// pixel, scanlines top to bottom. I/O failures are logged, not raised.
pub fn save_image_as_ppm(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    match write_ppm(image, output_path) {
        Ok(()) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save {}: {}", output_path, e),
    }
}

fn write_ppm(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) -> std::io::Result<()> {
    let (width, height) = image.dimensions();
    let mut out = BufWriter::new(File::create(output_path)?);

    writeln!(out, "P3\n{} {}\n255", width, height)?;
    for pixel in image.pixels() {
        writeln!(
            out,
            "{} {} {}",
            to_byte(pixel[0]),
            to_byte(pixel[1]),
            to_byte(pixel[2])
        )?;
    }
    out.flush()
}

/// Save the image as PNG, quantized through the same pipeline as the PPM
/// writer. I/O failures are logged, not raised.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])])
    });

    match u8_image.save(output_path) {
        Ok(()) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save {}: {}", output_path, e),
    }
}
