//! World state and the move → interact pipeline.

use crate::core::attraction::{Attraction, AttractionKind};
use crate::core::player::Player;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Emitido una sola vez por atracción, en la primera coincidencia de celda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitEvent {
    pub name: &'static str,
}

pub struct World {
    pub cols: i32,
    pub rows: i32,
    pub player: Player,
    pub attractions: Vec<Attraction>,
}

impl World {
    /// Parque fijo: tres atracciones, jugador en (0,0). Nada se agrega ni se
    /// mueve después de esto.
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            player: Player::new(0, 0),
            attractions: vec![
                Attraction::new(5, 5, "Ferris Wheel", AttractionKind::FerrisWheel),
                Attraction::new(10, 8, "Carousel", AttractionKind::Carousel),
                Attraction::new(15, 12, "Roller Coaster", AttractionKind::RollerCoaster),
            ],
        }
    }

    /// Mueve una celda en el eje indicado, con clamp a los bordes. En el borde
    /// la coordenada no cambia (no envuelve, no falla).
    pub fn move_player(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.player.y = (self.player.y - 1).max(0),
            Direction::Down => self.player.y = (self.player.y + 1).min(self.rows - 1),
            Direction::Left => self.player.x = (self.player.x - 1).max(0),
            Direction::Right => self.player.x = (self.player.x + 1).min(self.cols - 1),
        }
    }

    /// Marca como visitada toda atracción no visitada en la celda del jugador.
    /// Si varias comparten celda, todas disparan en el mismo chequeo, en orden
    /// de lista.
    pub fn check_interactions(&mut self) -> Vec<VisitEvent> {
        let mut events = Vec::new();
        for attraction in &mut self.attractions {
            if !attraction.visited
                && attraction.x == self.player.x
                && attraction.y == self.player.y
            {
                attraction.visited = true;
                events.push(VisitEvent { name: attraction.name });
            }
        }
        events
    }

    pub fn visited_count(&self) -> usize {
        self.attractions.iter().filter(|a| a.visited).count()
    }

    pub fn status_text(&self) -> String {
        format!("You have visited {} attractions.", self.visited_count())
    }
}
