//! Native windowed frontend. A minifb window supplies frame timing,
//! pointer input and the raster presentation for one match.

mod audio;
mod error;

use audio::ServeSound;
use error::Error;
use game_core::{Config, Game};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use std::time::Instant;

const TITLE: &str = "Volley";

fn main() -> Result<(), Error> {
    env_logger::init();

    let config = Config::new();
    let width = config.surface_width as usize;
    let height = config.surface_height as usize;

    let mut window = Window::new(TITLE, width, height, WindowOptions::default())
        .map_err(|e| Error::WindowInit(e.to_string()))?;
    window.set_target_fps(60);

    let mut game = Game::new(config, Box::new(ServeSound::default()));
    let start = Instant::now();
    let mut was_down = false;

    log::info!("match started, click to serve");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // The local paddle follows the cursor's height
        if let Some((_x, y)) = window.get_mouse_pos(MouseMode::Clamp) {
            game.pointer_moved(y / height as f32);
        }

        // A fresh press arms the serve
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !was_down {
            game.click();
        }
        was_down = down;

        game.on_frame(start.elapsed().as_secs_f64() * 1000.0);

        if game.events().scored_by.is_some() {
            window.set_title(&format!("{} {} : {}", TITLE, game.score(0), game.score(1)));
        }

        let surface = game.surface();
        window
            .update_with_buffer(&surface.pixels, surface.width, surface.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
    }

    Ok(())
}
