//! Integer shape rasterization over the framebuffer.
//!
//! Exposes:
//! - `line`: Bresenham integer line drawing
//! - `circle` / `circle_fill`: midpoint circle
//! - `rect_fill` / `rect_stroke`: axis-aligned rectangles
//! - `triangle_fill`: scanline-filled triangle
//! - `quad_bezier`: quadratic curve approximated with line segments

use crate::render::framebuffer::Framebuffer;

pub fn line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        fb.set_pixel(x, y);
        if x == x1 && y == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x += sx; }
        if e2 <= dx { err += dx; y += sy; }
    }
}

pub fn circle(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32) {
    if r <= 0 {
        fb.set_pixel(cx, cy);
        return;
    }
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;
    while x >= y {
        for (px, py) in [
            (cx + x, cy + y), (cx - x, cy + y), (cx + x, cy - y), (cx - x, cy - y),
            (cx + y, cy + x), (cx - y, cy + x), (cx + y, cy - x), (cx - y, cy - x),
        ] {
            fb.set_pixel(px, py);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

pub fn circle_fill(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                fb.set_pixel(cx + dx, cy + dy);
            }
        }
    }
}

pub fn rect_fill(fb: &mut Framebuffer, x: i32, y: i32, w: i32, h: i32) {
    for py in y..y + h {
        for px in x..x + w {
            fb.set_pixel(px, py);
        }
    }
}

pub fn rect_stroke(fb: &mut Framebuffer, x: i32, y: i32, w: i32, h: i32) {
    line(fb, x, y, x + w - 1, y);
    line(fb, x, y + h - 1, x + w - 1, y + h - 1);
    line(fb, x, y, x, y + h - 1);
    line(fb, x + w - 1, y, x + w - 1, y + h - 1);
}

/// Relleno por scanline: para cada fila entre el vértice más alto y el más
/// bajo, pinta el span entre las intersecciones con los lados.
pub fn triangle_fill(fb: &mut Framebuffer, v0: (i32, i32), v1: (i32, i32), v2: (i32, i32)) {
    let y_min = v0.1.min(v1.1).min(v2.1);
    let y_max = v0.1.max(v1.1).max(v2.1);
    let edges = [(v0, v1), (v1, v2), (v2, v0)];
    for y in y_min..=y_max {
        let mut xs: Vec<i32> = Vec::new();
        for &((ax, ay), (bx, by)) in &edges {
            if ay == by {
                if ay == y {
                    xs.push(ax);
                    xs.push(bx);
                }
                continue;
            }
            let (lo, hi) = if ay < by { (ay, by) } else { (by, ay) };
            if y < lo || y > hi {
                continue;
            }
            let t = (y - ay) as f32 / (by - ay) as f32;
            xs.push((ax as f32 + t * (bx - ax) as f32).round() as i32);
        }
        if let (Some(&x0), Some(&x1)) = (xs.iter().min(), xs.iter().max()) {
            for x in x0..=x1 {
                fb.set_pixel(x, y);
            }
        }
    }
}

pub fn quad_bezier(
    fb: &mut Framebuffer,
    p0: (i32, i32),
    control: (i32, i32),
    p1: (i32, i32),
) {
    const STEPS: i32 = 24;
    let at = |t: f32| -> (i32, i32) {
        let u = 1.0 - t;
        let x = u * u * p0.0 as f32 + 2.0 * u * t * control.0 as f32 + t * t * p1.0 as f32;
        let y = u * u * p0.1 as f32 + 2.0 * u * t * control.1 as f32 + t * t * p1.1 as f32;
        (x.round() as i32, y.round() as i32)
    };
    let mut prev = at(0.0);
    for i in 1..=STEPS {
        let next = at(i as f32 / STEPS as f32);
        line(fb, prev.0, prev.1, next.0, next.1);
        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Color;

    fn fb() -> Framebuffer {
        let mut fb = Framebuffer::new(32, 32);
        fb.set_current_color(Color::WHITE);
        fb
    }

    fn lit(fb: &Framebuffer) -> Vec<(i32, i32)> {
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

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = fb();
        line(&mut fb, 2, 3, 10, 7);
        assert_ne!(fb.get_pixel(2, 3), fb.background_color);
        assert_ne!(fb.get_pixel(10, 7), fb.background_color);
    }

    #[test]
    fn circle_stays_on_radius() {
        let mut fb = fb();
        circle(&mut fb, 16, 16, 6);
        for (x, y) in lit(&fb) {
            let d2 = (x - 16).pow(2) + (y - 16).pow(2);
            assert!((25..=49).contains(&d2), "pixel ({x},{y}) off the rim");
        }
    }

    #[test]
    fn rect_fill_covers_exact_area() {
        let mut fb = fb();
        rect_fill(&mut fb, 4, 5, 3, 2);
        assert_eq!(lit(&fb).len(), 6);
        assert_ne!(fb.get_pixel(4, 5), fb.background_color);
        assert_ne!(fb.get_pixel(6, 6), fb.background_color);
        assert_eq!(fb.get_pixel(7, 5), fb.background_color);
    }

    #[test]
    fn triangle_fill_covers_interior_and_vertices() {
        let mut fb = fb();
        triangle_fill(&mut fb, (8, 4), (4, 12), (12, 12));
        assert_ne!(fb.get_pixel(8, 4), fb.background_color);
        assert_ne!(fb.get_pixel(8, 10), fb.background_color);
        assert_eq!(fb.get_pixel(2, 8), fb.background_color);
    }

    #[test]
    fn bezier_hits_endpoints() {
        let mut fb = fb();
        quad_bezier(&mut fb, (2, 20), (16, 2), (30, 20));
        assert_ne!(fb.get_pixel(2, 20), fb.background_color);
        assert_ne!(fb.get_pixel(30, 20), fb.background_color);
    }
}
