pub const RENDER_WIDTH: i32 = 1280;            // Default window width
pub const RENDER_HEIGHT: i32 = 720;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const FLASH_DELAY: f32 = 0.1;              // Delay between a step request and the index commit (seconds)
pub const FLASH_FADE: f32 = 0.2;               // Fade-out of the flash overlay after the commit (seconds)
pub const INTENSE_FLASH_FADE: f32 = 0.35;      // Fade-out of the intense flash variant (seconds)

pub const FIRST_SLIDE_PARTICLES: usize = 100;  // Particle count on the opening slide
pub const SLIDE_PARTICLES: usize = 50;         // Particle count on every other slide
pub const MIRROR_GLINTS: usize = 15;           // Pulsing glints on mirror-effect slides

pub const TITLE_FONT_SIZE: i32 = 72;
pub const SUBTITLE_FONT_SIZE: i32 = 36;
pub const CONTENT_FONT_SIZE: i32 = 30;

pub const ARROW_BUTTON_SIZE: f32 = 48.0;       // Side length of the on-screen prev/next buttons
pub const ARROW_MARGIN: f32 = 24.0;            // Distance between a button and the screen edge
pub const DOT_RADIUS: f32 = 5.0;               // Radius of one slide indicator dot
pub const DOT_GAP: f32 = 18.0;                 // Center-to-center spacing of indicator dots
pub const DOT_BOTTOM_MARGIN: f32 = 32.0;       // Distance of the dot row from the bottom edge
pub const DOT_HIT_PADDING: f32 = 4.0;          // Extra clickable area around each dot
