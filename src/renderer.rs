//! Parallel render loop.
//!
//! Samples jittered camera rays per pixel, averages them through the
//! integrator, and collects the result into a linear f32 framebuffer.
//! Scanlines render in parallel; every pixel owns a generator derived from
//! the image seed and its coordinates, so the output is byte-identical
//! across runs and thread counts.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::integrator;
use crate::random;
use crate::scene::Scene;

/// Settings for a single render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Rendered image width in pixel count
    pub width: u32,
    /// Rendered image height in pixel count
    pub height: u32,
    /// Number of random samples averaged per pixel (anti-aliasing)
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces (recursion depth limit)
    pub max_depth: u32,
    /// Base seed for the per-pixel random streams
    pub seed: u64,
}

/// Render `scene` through `camera`, returning linear HDR RGB values.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
    let RenderSettings {
        width,
        height,
        samples_per_pixel,
        max_depth,
        seed,
    } = *settings;
    let sample_scale = 1.0 / samples_per_pixel as f32;

    info!("Rendering using {} CPU cores...", rayon::current_num_threads());
    let render_start = std::time::Instant::now();
    let pb = ProgressBar::new(height as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    let rows: Vec<Vec<Rgb<f32>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let row = (0..width)
                .map(|x| {
                    let mut rng = random::pixel_rng(seed, x, y);
                    let mut pixel_color = Vec3A::ZERO;

                    // Jittered samples inside the pixel footprint. Image
                    // row 0 is the top scanline, so flip y for the
                    // bottom-up viewport coordinate.
                    for _ in 0..samples_per_pixel {
                        let s = (x as f32 + rng.random::<f32>()) / (width - 1) as f32;
                        let t = ((height - 1 - y) as f32 + rng.random::<f32>())
                            / (height - 1) as f32;
                        let ray = camera.get_ray(s, t);
                        pixel_color += integrator::ray_color(
                            &ray,
                            &scene.world,
                            &scene.lights,
                            max_depth,
                            &mut rng,
                        );
                    }

                    pixel_color *= sample_scale;
                    Rgb([pixel_color.x, pixel_color.y, pixel_color.z])
                })
                .collect();
            pb.inc(1);
            row
        })
        .collect();

    pb.finish();
    info!("Image rendered in {:.2?}", render_start.elapsed());

    let mut image = ImageBuffer::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            image.put_pixel(x as u32, y as u32, *pixel);
        }
    }
    image
}
