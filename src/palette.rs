use raylib::prelude::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DisplayKind {
    Monochrome,
    Color,
}

/// Background colors for the time box. Fixed once built.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn for_display(kind: DisplayKind) -> Self {
        let colors = match kind {
            DisplayKind::Monochrome => vec![Color::BLACK],
            DisplayKind::Color => vec![
                Color::BLACK,
                Color::ORANGE,
                Color::GREEN,
                Color::MAGENTA,
                Color::RED,
                Color::BLUE,
            ],
        };
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Out-of-range indices fall back to the first color.
    pub fn color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(self.colors[0])
    }
}
