use clap::Parser;
use glam::Vec3A;
use log::info;

use lumapath::camera::Camera;
use lumapath::output::{save_image_as_png, save_image_as_ppm};
use lumapath::renderer::{self, RenderSettings};
use lumapath::scene::simple_scene;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Fixed output aspect ratio (width over height).
const ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Create the camera for the reference scene.
fn create_camera() -> Camera {
    Camera::new(
        Vec3A::new(3.0, 3.0, 2.0),
        Vec3A::new(0.0, 0.0, -1.0),
        Vec3A::new(0.0, 1.0, 0.0),
        20.0,
        ASPECT_RATIO,
    )
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("LumaPath - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let height = ((args.width as f32 / ASPECT_RATIO) as u32).max(1);
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, height, args.samples, args.depth
    );

    let scene = simple_scene();
    let camera = create_camera();

    let settings = RenderSettings {
        width: args.width,
        height,
        samples_per_pixel: args.samples,
        max_depth: args.depth,
        seed: args.seed,
    };
    let image = renderer::render(&scene, &camera, &settings);

    save_image_as_ppm(&image, &format!("{}.ppm", args.out));
    save_image_as_png(&image, &format!("{}.png", args.out));
}
