//! Attraction data: fixed cell, display name, visual kind, one-shot visited flag.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttractionKind {
    FerrisWheel,
    Carousel,
    RollerCoaster,
}

pub struct Attraction {
    pub x: i32,
    pub y: i32,
    pub name: &'static str,
    pub kind: AttractionKind,
    pub visited: bool,
}

impl Attraction {
    pub fn new(x: i32, y: i32, name: &'static str, kind: AttractionKind) -> Self {
        Self { x, y, name, kind, visited: false }
    }
}
