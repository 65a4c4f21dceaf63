//! Input handling: arrow keys -> movement + interaction check.

use raylib::prelude::*;

use crate::core::world::{Direction, VisitEvent, World};

fn direction_for_key(key: KeyboardKey) -> Option<Direction> {
    match key {
        KeyboardKey::KEY_UP => Some(Direction::Up),
        KeyboardKey::KEY_DOWN => Some(Direction::Down),
        KeyboardKey::KEY_LEFT => Some(Direction::Left),
        KeyboardKey::KEY_RIGHT => Some(Direction::Right),
        // cualquier otra tecla se ignora
        _ => None,
    }
}

/// Procesa las teclas presionadas este frame. Cada flecha corre el pipeline
/// completo mover → chequear antes de la siguiente.
pub fn process_events(window: &RaylibHandle, world: &mut World) -> Vec<VisitEvent> {
    let mut events = Vec::new();
    for key in [
        KeyboardKey::KEY_UP,
        KeyboardKey::KEY_DOWN,
        KeyboardKey::KEY_LEFT,
        KeyboardKey::KEY_RIGHT,
    ] {
        if window.is_key_pressed(key) {
            if let Some(dir) = direction_for_key(key) {
                world.move_player(dir);
                events.extend(world.check_interactions());
            }
        }
    }
    events
}
