// main.rs

mod core;
mod render;

use std::thread;
use std::time::{Duration, Instant};

use log::info;
use raylib::prelude::*;

use crate::core::process_events::process_events;
use crate::core::world::World;
use crate::render::framebuffer::Framebuffer;
use crate::render::scene::render_scene;

// Tamaño de celda en píxeles (coherente con los sprites)
pub const BLOCK: i32 = 40;

const CANVAS_WIDTH: i32 = 800;
const CANVAS_HEIGHT: i32 = 600;
// franja inferior para el texto de estado
const STATUS_BAR_HEIGHT: i32 = 40;

// cuánto tiempo queda visible el aviso de visita
const NOTICE_SECS: f32 = 2.5;

fn main() {
    env_logger::init();

    let (mut window, raylib_thread) = raylib::init()
        .size(CANVAS_WIDTH, CANVAS_HEIGHT + STATUS_BAR_HEIGHT)
        .title("Theme Park")
        .build();

    let mut framebuffer = Framebuffer::new(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    framebuffer.set_background_color(Color::WHITE);

    // dimensiones de la grilla derivadas del canvas
    let mut world = World::new(CANVAS_WIDTH / BLOCK, CANVAS_HEIGHT / BLOCK);

    // último aviso de visita, visible unos segundos en el HUD
    let mut notice: Option<(String, Instant)> = None;

    while !window.window_should_close() {
        // Entrada: cada flecha corre mover → chequear; el resto se ignora
        let events = process_events(&window, &mut world);
        for event in &events {
            info!("visited {}", event.name);
            notice = Some((format!("You have reached the {}!", event.name), Instant::now()));
        }

        render_scene(&mut framebuffer, &world, BLOCK);

        let status = world.status_text();
        let notice_expired = notice
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed().as_secs_f32() > NOTICE_SECS);
        if notice_expired {
            notice = None;
        }

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::WHITE);

            // Dibujar el framebuffer en pantalla
            for y in 0..framebuffer.height {
                for x in 0..framebuffer.width {
                    let color = framebuffer.color_buffer[(y * framebuffer.width + x) as usize];
                    if color != framebuffer.background_color {
                        d.draw_pixel(x as i32, y as i32, color);
                    }
                }
            }

            // Estado en la franja inferior
            d.draw_text(&status, 10, CANVAS_HEIGHT + 12, 20, Color::DARKGRAY);

            // Aviso de visita
            if let Some((text, _)) = &notice {
                d.draw_text(text, 10, 10, 20, Color::MAROON);
            }
        }

        // ~60 FPS (16 ms)
        thread::sleep(Duration::from_millis(16));
    }
}
