pub const RENDER_WIDTH: i32 = 144;            // Width of the watch screen
pub const RENDER_HEIGHT: i32 = 168;           // Height of the watch screen
pub const DEFAULT_SCALE: i32 = 3;             // Window pixels per watch pixel
pub const MAX_SCALE: i32 = 16;                // Largest accepted --scale
pub const DEFAULT_FPS: u32 = 30;              // Frames per second

pub const TIME_BOX_WIDTH: i32 = 120;          // Width of the time text box
pub const TIME_BOX_HEIGHT: i32 = 50;          // Height of the time text box
pub const TIME_BOX_X: i32 = RENDER_WIDTH / 2 - TIME_BOX_WIDTH / 2;
pub const TIME_TEXT_Y: i32 = RENDER_HEIGHT / 2 - TIME_BOX_HEIGHT / 2 - 1; // Text sits one pixel above its box
pub const TIME_BG_Y: i32 = RENDER_HEIGHT / 2 - TIME_BOX_HEIGHT / 2;
pub const TIME_FONT_SIZE: i32 = 40;

pub const IMAGE_SET_SIZE: usize = 3;          // Number of images kept in rotation
pub const COLOR_ROTATION_SECOND: u32 = 0;     // Color changes on the minute
pub const IMAGE_ROTATION_MINUTES: u32 = 5;    // Image changes every 5 minutes
