use std::path::PathBuf;
use anyhow::{Result, bail};
use clap::Parser;
use crate::clock::ClockStyle;
use crate::constants::*;
use crate::palette::DisplayKind;

/// Desktop simulator for the rotating-image watchface.
#[derive(Parser, Debug)]
#[command(name = "watchface", version)]
pub struct Config {
    /// Directory holding the background images
    pub image_dir: PathBuf,

    /// Render with the single-color monochrome palette
    #[arg(long)]
    pub monochrome: bool,

    /// Show the time in 12-hour style
    #[arg(long)]
    pub twelve_hour: bool,

    /// TTF/OTF font for the time
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Window pixels per watch pixel
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: i32,

    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Simulated seconds per real second (system clock when absent)
    #[arg(long)]
    pub speed: Option<f64>,

    /// Seed for the rotation RNG
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(self) -> Result<Self> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            bail!("--scale must be between 1 and {}, got {}", MAX_SCALE, self.scale);
        }
        if self.fps == 0 {
            bail!("--fps must be at least 1");
        }
        if let Some(speed) = self.speed {
            if !(speed > 0.0 && speed.is_finite()) {
                bail!("--speed must be a positive number, got {}", speed);
            }
        }
        Ok(self)
    }

    pub fn display_kind(&self) -> DisplayKind {
        if self.monochrome { DisplayKind::Monochrome } else { DisplayKind::Color }
    }

    pub fn clock_style(&self) -> ClockStyle {
        if self.twelve_hour { ClockStyle::TwelveHour } else { ClockStyle::TwentyFourHour }
    }
}
