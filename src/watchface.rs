use chrono::NaiveTime;
use log::{debug, info};
use rand::rngs::StdRng;
use raylib::prelude::*;
use crate::clock::{ClockStyle, format_clock};
use crate::constants::*;
use crate::palette::Palette;
use crate::rotation::RotationScheduler;
use crate::ticker::{Tick, TickHandler};

/// Everything the watchface shows, minus the GPU resources.
pub struct FaceState {
    palette: Palette,
    clock_style: ClockStyle,
    scheduler: RotationScheduler<StdRng>,
    time_text: String,
}

impl FaceState {
    pub fn new(palette: Palette, image_count: usize, clock_style: ClockStyle, rng: StdRng, now: NaiveTime) -> Self {
        let scheduler = RotationScheduler::new(rng, palette.len(), image_count);
        let tick = Tick::from_time(now);
        Self {
            palette,
            clock_style,
            scheduler,
            time_text: format_clock(tick.hour, tick.minute, clock_style),
        }
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn background_color(&self) -> Color {
        self.palette.color(self.scheduler.state().current_color_index)
    }

    pub fn image_index(&self) -> usize {
        self.scheduler.state().current_image_index
    }
}

impl TickHandler for FaceState {
    fn handle_tick(&mut self, tick: &Tick) {
        self.time_text = format_clock(tick.hour, tick.minute, self.clock_style);
        debug!("Tick {:02}:{:02}:{:02}", tick.hour, tick.minute, tick.second);

        let was_initialized = self.scheduler.state().is_initialized();
        let outcome = self.scheduler.on_tick(tick);
        if !was_initialized {
            debug!("First tick, rotation armed");
            return;
        }

        let state = self.scheduler.state();
        if outcome.color_changed() {
            info!("Background color -> {}", state.current_color_index);
        }
        if outcome.image_changed() {
            info!("Image -> {}", state.current_image_index);
        }
    }
}

/// The watchface with its loaded textures and font; both are released on drop.
pub struct Watchface {
    images: Vec<Texture2D>,
    font: Option<Font>,
    face: FaceState,
}

impl Watchface {
    pub fn new(images: Vec<Texture2D>, font: Option<Font>, face: FaceState) -> Self {
        Self { images, font, face }
    }

    fn time_text_width(&self, text: &str) -> i32 {
        match &self.font {
            Some(font) => measure_text_ex(font, text, TIME_FONT_SIZE as f32, 1.0).x as i32,
            None => measure_text(text, TIME_FONT_SIZE),
        }
    }

    pub fn render_frame(&self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let text = self.face.time_text();
        let text_x = TIME_BOX_X + (TIME_BOX_WIDTH - self.time_text_width(text)) / 2;
        let image = self.images.get(self.face.image_index());

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            // --- Background image ---
            // Drawn at native size from the top-left corner, like the watch does
            if let Some(image) = image {
                d.draw_texture(image, 0, 0, Color::WHITE);
            }

            // --- Time box ---
            // The colored box sits one pixel lower than the text to tune its position
            d.draw_rectangle(TIME_BOX_X, TIME_BG_Y, TIME_BOX_WIDTH, TIME_BOX_HEIGHT, self.face.background_color());

            // White time text centered over the box, custom font when one was loaded
            match &self.font {
                Some(font) => d.draw_text_ex(
                    font,
                    text,
                    Vector2::new(text_x as f32, TIME_TEXT_Y as f32),
                    TIME_FONT_SIZE as f32,
                    1.0,
                    Color::WHITE,
                ),
                None => d.draw_text(text, text_x, TIME_TEXT_Y, TIME_FONT_SIZE, Color::WHITE),
            }
        });
    }
}

impl TickHandler for Watchface {
    fn handle_tick(&mut self, tick: &Tick) {
        self.face.handle_tick(tick);
    }
}
