use std::fmt;

/// Identifies a figure for its whole life, including while it is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(u64);

impl FigureId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The colors offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Red,
    Blue,
    Purple,
    #[default]
    Gray,
}

impl Color {
    pub const PALETTE: [Self; 4] = [Self::Red, Self::Blue, Self::Purple, Self::Gray];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// The part of a figure the settings panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FigureStyle {
    pub color: Color,
    pub corner_radius: f32,
}

impl FigureStyle {
    #[must_use]
    pub fn color_differs(&self, other: &Self) -> bool {
        self.color != other.color
    }

    #[must_use]
    pub fn radius_differs(&self, other: &Self) -> bool {
        (self.corner_radius - other.corner_radius).abs() > f32::EPSILON
    }

    /// Undo label for going from `self` to `after`, or `None` if nothing changed.
    #[must_use]
    pub fn change_label(&self, after: &Self) -> Option<&'static str> {
        match (self.color_differs(after), self.radius_differs(after)) {
            (true, true) => Some("Change Color and Radius"),
            (true, false) => Some("Change Color"),
            (false, true) => Some("Change Radius"),
            (false, false) => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub id: FigureId,
    pub center: Point,
    pub style: FigureStyle,
}

impl Figure {
    #[must_use]
    pub fn new(id: FigureId, center: Point) -> Self {
        Self {
            id,
            center,
            style: FigureStyle::default(),
        }
    }
}
