use crate::foundation::core::Rgba8;

/// Arrow colors in the order moves use them.
pub const DEFAULT_PALETTE: [(&str, Rgba8); 8] = [
    ("red", Rgba8::rgb(255, 0, 0)),
    ("blue", Rgba8::rgb(0, 0, 255)),
    ("green", Rgba8::rgb(0, 128, 0)),
    ("orange", Rgba8::rgb(255, 165, 0)),
    ("purple", Rgba8::rgb(128, 0, 128)),
    ("cyan", Rgba8::rgb(0, 255, 255)),
    ("magenta", Rgba8::rgb(255, 0, 255)),
    ("yellow", Rgba8::rgb(255, 255, 0)),
];

/// Ordered, non-empty list of arrow colors that wraps around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|(_, c)| *c).collect(),
        }
    }
}

impl Palette {
    /// Build a palette; returns `None` when `colors` is empty.
    pub fn new(colors: Vec<Rgba8>) -> Option<Self> {
        (!colors.is_empty()).then_some(Self { colors })
    }

    /// Color for the move at 0-based position `index`.
    pub fn color_for(&self, index: usize) -> Rgba8 {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct entries before colors repeat.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors (never true for a constructed palette).
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
