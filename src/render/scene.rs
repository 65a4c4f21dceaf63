//! Redibujado completo de la escena: grilla, atracciones y jugador.

use raylib::prelude::*;

use crate::core::world::World;
use crate::render::attractions::{draw_attraction, draw_player};
use crate::render::framebuffer::Framebuffer;
use crate::render::shapes;

const GRID_LINE_COLOR: Color = Color::new(204, 204, 204, 255);

fn draw_grid(fb: &mut Framebuffer, world: &World, block: i32) {
    fb.set_current_color(GRID_LINE_COLOR);
    for cy in 0..world.rows {
        for cx in 0..world.cols {
            shapes::rect_stroke(fb, cx * block, cy * block, block, block);
        }
    }
}

/// Redibujo total en cada frame; sin rectángulos sucios ni doble buffer propio.
pub fn render_scene(fb: &mut Framebuffer, world: &World, block: i32) {
    fb.clear();
    draw_grid(fb, world, block);
    for attraction in &world.attractions {
        draw_attraction(fb, attraction, block);
    }
    draw_player(fb, world.player.x, world.player.y, block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::{Direction, World};

    const BLOCK: i32 = 40;

    #[test]
    fn grid_corners_are_stroked() {
        let mut fb = Framebuffer::new(800, 600);
        let world = World::new(20, 15);
        render_scene(&mut fb, &world, BLOCK);
        assert_eq!(fb.get_pixel(0, 0), GRID_LINE_COLOR);
        assert_eq!(fb.get_pixel(799, 599), GRID_LINE_COLOR);
        assert_eq!(fb.get_pixel(BLOCK, BLOCK), GRID_LINE_COLOR);
    }

    #[test]
    fn player_cell_follows_movement() {
        let mut fb = Framebuffer::new(800, 600);
        let mut world = World::new(20, 15);
        world.move_player(Direction::Right);
        render_scene(&mut fb, &world, BLOCK);
        // cabeza azul en el centro del sprite, celda (1,0)
        assert_eq!(fb.get_pixel(BLOCK + 15, 15), Color::BLUE);
    }

    #[test]
    fn attraction_cells_contain_their_sprites() {
        let mut fb = Framebuffer::new(800, 600);
        let world = World::new(20, 15);
        render_scene(&mut fb, &world, BLOCK);
        // la rueda de la fortuna en (5,5) deja aro rojo en su celda
        let mut has_red = false;
        for y in 5 * BLOCK..6 * BLOCK {
            for x in 5 * BLOCK..6 * BLOCK {
                if fb.get_pixel(x, y) == Color::RED {
                    has_red = true;
                }
            }
        }
        assert!(has_red);
    }
}
