use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod clock;
mod config;
mod constants;
mod palette;
mod rotation;
mod state;
mod texture_loader;
mod ticker;
mod watchface;

use crate::config::Config;
use crate::constants::*;
use crate::palette::Palette;
use crate::texture_loader::load_image_set;
use crate::ticker::{MinuteTicker, SimulatedClock, SystemClock, WallClock};
use crate::watchface::{FaceState, Watchface};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse().validate()?;

    // --- Time Source ---
    // Either the real wall clock or an accelerated one to watch rotations happen
    let mut clock: Box<dyn WallClock> = match config.speed {
        Some(speed) => {
            let start = SystemClock.now();
            info!("Simulating time at {}x from {}", speed, start.format("%H:%M:%S"));
            Box::new(SimulatedClock::new(start, speed))
        }
        None => Box::new(SystemClock),
    };

    // Fixed seed gives a reproducible rotation sequence
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH * config.scale, RENDER_HEIGHT * config.scale)
        .title("Watchface")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Resources ---
    let images = load_image_set(&mut rl, &thread, &config.image_dir)
        .with_context(|| format!("Error loading images from '{}'", config.image_dir.display()))?;

    let font = match &config.font {
        Some(path) => {
            let path_str = path.to_str().ok_or_else(|| anyhow!("Font path is not valid UTF-8: {:?}", path))?;
            match rl.load_font(&thread, path_str) {
                Ok(font) => Some(font),
                Err(e) => {
                    warn!("Falling back to the default font, could not load {}: {}", path.display(), e);
                    None
                }
            }
        }
        None => None,
    };

    let palette = Palette::for_display(config.display_kind());
    info!(
        "Loaded {} images, {} palette colors, {:?} clock",
        images.len(),
        palette.len(),
        config.clock_style()
    );

    // --- Watchface State ---
    // Seeds the first color and image and renders the current time before any tick
    let face = FaceState::new(palette, images.len(), config.clock_style(), rng, clock.now());
    let mut watchface = Watchface::new(images, font, face);
    let mut ticker = MinuteTicker::new();

    // Fixed watch-sized render target, scaled to the window every frame
    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        // 1. Deliver one tick per minute boundary crossed since the last frame
        ticker.poll(clock.now(), &mut watchface);

        // 2. Render the watch screen into the framebuffer
        watchface.render_frame(&mut rl, &thread, &mut framebuffer);

        // 3. Scale the framebuffer up to the window (flipped, render textures are stored upside down)
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Window closed");
    Ok(())
}
