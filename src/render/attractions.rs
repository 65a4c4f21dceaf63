//! Sprites dibujados a mano: las tres atracciones y el jugador.
//!
//! Cada rutina es función pura de (celda, tamaño de celda); los offsets son
//! fracciones fijas de la celda. Solo cosmético, sin estado ni animación.

use raylib::prelude::*;

use crate::core::attraction::{Attraction, AttractionKind};
use crate::render::framebuffer::Framebuffer;
use crate::render::shapes;

pub const PLAYER_SPRITE_SIZE: i32 = 30;

#[inline]
fn frac(block: i32, f: f32) -> i32 {
    (block as f32 * f).round() as i32
}

/// Despacho por variante: una rutina fija por tipo de atracción.
pub fn draw_attraction(fb: &mut Framebuffer, attraction: &Attraction, block: i32) {
    let px = attraction.x * block;
    let py = attraction.y * block;
    match attraction.kind {
        AttractionKind::FerrisWheel => draw_ferris_wheel(fb, px, py, block),
        AttractionKind::Carousel => draw_carousel(fb, px, py, block),
        AttractionKind::RollerCoaster => draw_roller_coaster(fb, px, py, block),
    }
}

fn draw_ferris_wheel(fb: &mut Framebuffer, px: i32, py: i32, block: i32) {
    // base
    fb.set_current_color(Color::GRAY);
    shapes::rect_fill(
        fb,
        px + frac(block, 0.3),
        py + frac(block, 0.8),
        frac(block, 0.4),
        frac(block, 0.2),
    );

    // rueda: aro rojo con borde interior negro
    let cx = px + block / 2;
    let cy = py + block / 2;
    let r = frac(block, 0.4);
    fb.set_current_color(Color::RED);
    shapes::circle(fb, cx, cy, r);
    fb.set_current_color(Color::BLACK);
    shapes::circle(fb, cx, cy, frac(block, 0.38));

    // ocho rayos y ocho cabinas sobre el aro
    for i in 0..8 {
        let angle = (i as f32 / 8.0) * std::f32::consts::TAU;
        let ex = cx + (angle.cos() * r as f32).round() as i32;
        let ey = cy + (angle.sin() * r as f32).round() as i32;
        fb.set_current_color(Color::BLACK);
        shapes::line(fb, cx, cy, ex, ey);
        fb.set_current_color(Color::BLUE);
        shapes::circle_fill(fb, ex, ey, frac(block, 0.05));
        fb.set_current_color(Color::BLACK);
        shapes::circle(fb, ex, ey, frac(block, 0.05));
    }
}

fn draw_carousel(fb: &mut Framebuffer, px: i32, py: i32, block: i32) {
    // base
    fb.set_current_color(Color::YELLOW);
    shapes::rect_fill(
        fb,
        px + frac(block, 0.3),
        py + frac(block, 0.7),
        frac(block, 0.4),
        frac(block, 0.3),
    );

    // techo triangular
    let left = (px + frac(block, 0.3), py + frac(block, 0.7));
    let apex = (px + frac(block, 0.5), py + frac(block, 0.5));
    let right = (px + frac(block, 0.7), py + frac(block, 0.7));
    fb.set_current_color(Color::RED);
    shapes::triangle_fill(fb, left, apex, right);
    fb.set_current_color(Color::BLACK);
    shapes::line(fb, left.0, left.1, apex.0, apex.1);
    shapes::line(fb, apex.0, apex.1, right.0, right.1);
    shapes::line(fb, right.0, right.1, left.0, left.1);

    // postes
    fb.set_current_color(Color::BLACK);
    for fx in [0.4, 0.6] {
        let x = px + frac(block, fx);
        shapes::line(fb, x, py + frac(block, 0.7), x, py + frac(block, 0.8));
    }
}

fn draw_roller_coaster(fb: &mut Framebuffer, px: i32, py: i32, block: i32) {
    // base
    fb.set_current_color(Color::BLUE);
    shapes::rect_fill(
        fb,
        px + frac(block, 0.2),
        py + frac(block, 0.8),
        frac(block, 0.6),
        frac(block, 0.2),
    );

    // riel: curva cuadrática entre los extremos de la base
    fb.set_current_color(Color::RED);
    shapes::quad_bezier(
        fb,
        (px + frac(block, 0.2), py + frac(block, 0.8)),
        (px + frac(block, 0.5), py),
        (px + frac(block, 0.8), py + frac(block, 0.8)),
    );

    // soportes
    fb.set_current_color(Color::GRAY);
    for fx in [0.4, 0.6] {
        let x = px + frac(block, fx);
        shapes::line(fb, x, py + frac(block, 0.8), x, py);
    }
}

/// Monigote del jugador: cabeza azul, cuerpo y piernas en negro. Sprite de
/// 30 px anclado a la esquina de la celda.
pub fn draw_player(fb: &mut Framebuffer, cell_x: i32, cell_y: i32, block: i32) {
    let px = cell_x * block;
    let py = cell_y * block;
    let s = PLAYER_SPRITE_SIZE;

    fb.set_current_color(Color::BLUE);
    shapes::circle_fill(fb, px + s / 2, py + s / 2, s / 4);

    fb.set_current_color(Color::BLACK);
    let mid = px + s / 2;
    shapes::line(fb, mid, py + frac(s, 0.75), mid, py + s);
    let hip = py + frac(s, 0.85);
    let foot = py + frac(s, 0.95);
    shapes::line(fb, mid, hip, px + frac(s, 0.65), foot);
    shapes::line(fb, mid, hip, px + frac(s, 0.35), foot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::Framebuffer;

    const BLOCK: i32 = 40;

    fn lit_pixels(fb: &Framebuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..fb.height as i32 {
            for x in 0..fb.width as i32 {
                if fb.get_pixel(x, y) != fb.background_color {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn draws_inside_cell(kind: AttractionKind) {
        let mut fb = Framebuffer::new(160, 160);
        let attraction = Attraction::new(2, 2, "test", kind);
        draw_attraction(&mut fb, &attraction, BLOCK);
        let lit = lit_pixels(&fb);
        assert!(!lit.is_empty(), "{kind:?} drew nothing");
        for (x, y) in lit {
            assert!(
                (80..120).contains(&x) && (80..120).contains(&y),
                "{kind:?} drew at ({x},{y}) outside cell (2,2)"
            );
        }
    }

    #[test]
    fn ferris_wheel_stays_in_its_cell() {
        draws_inside_cell(AttractionKind::FerrisWheel);
    }

    #[test]
    fn carousel_stays_in_its_cell() {
        draws_inside_cell(AttractionKind::Carousel);
    }

    #[test]
    fn roller_coaster_stays_in_its_cell() {
        draws_inside_cell(AttractionKind::RollerCoaster);
    }

    #[test]
    fn player_sprite_stays_in_its_cell() {
        let mut fb = Framebuffer::new(160, 160);
        draw_player(&mut fb, 1, 1, BLOCK);
        let lit = lit_pixels(&fb);
        assert!(!lit.is_empty());
        for (x, y) in lit {
            assert!((40..80).contains(&x) && (40..80).contains(&y));
        }
    }
}
