use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod constants;
mod controller;
mod deck;
mod effects;
mod nav;
mod render;
mod slide;
mod state;

use crate::constants::*;
use crate::controller::DeckController;
use crate::deck::Deck;
use crate::effects::SlideEffects;
use crate::nav::{NavAction, NavLayout};

#[derive(Parser)]
#[command(name = "pitchdeck", about = "Full-screen pitch deck player")]
struct Args {
    /// Deck definition file (TOML). Uses the built-in deck when omitted.
    deck: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let deck = match &args.deck {
        Some(path) => Deck::from_path(path)
            .with_context(|| format!("loading deck from {}", path.display()))?,
        None => Deck::builtin(),
    };
    info!("loaded deck with {} slides", deck.len());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Pitch Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Decorative layers are seeded once per slide, up front
    let mut effects: Vec<SlideEffects> = deck
        .slides()
        .iter()
        .map(|slide| SlideEffects::for_slide(slide, args.width as f32, args.height as f32))
        .collect();

    let mut controller = DeckController::new(deck);
    let mut slide_age = 0.0f32;
    let mut last_index = controller.current_index();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_w = rl.get_screen_width();
        let screen_h = rl.get_screen_height();

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            controller.go_to_previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            controller.go_to_next();
        }

        let layout = NavLayout::new(screen_w as f32, screen_h as f32, controller.len());
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(action) = layout.hit(rl.get_mouse_position()) {
                match action {
                    NavAction::Previous => controller.go_to_previous(),
                    NavAction::Next => controller.go_to_next(),
                    NavAction::Select(index) => controller.go_to_index(index),
                }
            }
        }

        // --- Update ---
        controller.update(dt);
        if controller.current_index() != last_index {
            last_index = controller.current_index();
            slide_age = 0.0;
        } else {
            slide_age += dt;
        }
        effects[controller.current_index()].update(dt);

        // --- Render ---
        let slide = controller.current_slide();
        let mut d = rl.begin_drawing(&thread);
        render::draw_background(&mut d, slide, screen_w, screen_h);
        effects[controller.current_index()].draw(&mut d);
        render::draw_content(&mut d, slide, slide_age, screen_w, screen_h);
        layout.draw(
            &mut d,
            controller.current_index(),
            controller.at_first(),
            controller.at_last(),
        );
        render::draw_flash(
            &mut d,
            controller.flash_alpha(),
            controller.flash_intense(),
            screen_w,
            screen_h,
        );
    }

    Ok(())
}
