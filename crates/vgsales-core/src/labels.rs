//! Label encoder tables.
//!
//! The regression model was fit on label-encoded categorical columns. These
//! tables reproduce that encoding: each label's position is its integer
//! code, in the encoder's lexicographic order. They are used bidirectionally:
//! the picklists shown to the user come from the same tables that produce
//! the codes fed to the model, which is what makes an unmapped label inside
//! the prediction path a programming error rather than a user error.

/// A fixed, bidirectional label ↔ code table for one categorical column.
#[derive(Debug, Clone, Copy)]
pub struct LabelMap {
    column: &'static str,
    labels: &'static [&'static str],
}

impl LabelMap {
    const fn new(column: &'static str, labels: &'static [&'static str]) -> Self {
        Self { column, labels }
    }

    /// The encoded value of a label, if the label is in the table.
    pub fn code(&self, label: &str) -> Option<u32> {
        self.labels.iter().position(|l| *l == label).map(|i| i as u32)
    }

    /// The label carrying a code, if the code is in range.
    pub fn label(&self, code: u32) -> Option<&'static str> {
        self.labels.get(code as usize).copied()
    }

    /// Every label in code order, the picklist shown to the user.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// The encoded value of a label taken from this table's own picklist.
    ///
    /// # Panics
    /// Panics when the label is not in the table. The picklist is generated
    /// from the table itself, so that is an invariant violation, not a user
    /// error.
    pub fn require_code(&self, label: &str) -> u32 {
        match self.code(label) {
            Some(code) => code,
            None => panic!("{} label not in encoder table: {label:?}", self.column),
        }
    }
}

/// Platform encoder table.
pub static PLATFORMS: LabelMap = LabelMap::new(
    "platform",
    &[
        "2600", "3DO", "3DS", "DC", "DS", "GB", "GBA", "GC", "GEN", "GG", "N64", "NES", "NG",
        "PC", "PCFX", "PS", "PS2", "PS3", "PS4", "PSP", "PSV", "SAT", "SCD", "SNES", "TG16",
        "WS", "Wii", "WiiU", "X360", "XB", "XOne",
    ],
);

/// Genre encoder table.
pub static GENRES: LabelMap = LabelMap::new(
    "genre",
    &[
        "Action",
        "Adventure",
        "Fighting",
        "Misc",
        "Platform",
        "Puzzle",
        "Racing",
        "Role-Playing",
        "Shooter",
        "Simulation",
        "Sports",
        "Strategy",
    ],
);

/// Publisher encoder table.
pub static PUBLISHERS: LabelMap = LabelMap::new(
    "publisher",
    &[
        "505 Games",
        "Acclaim Entertainment",
        "Activision",
        "Atari",
        "Bethesda Softworks",
        "Capcom",
        "Codemasters",
        "Deep Silver",
        "Disney Interactive Studios",
        "Eidos Interactive",
        "Electronic Arts",
        "Konami Digital Entertainment",
        "LucasArts",
        "Microsoft Game Studios",
        "Midway Games",
        "Namco Bandai Games",
        "Nintendo",
        "Sega",
        "Sony Computer Entertainment",
        "Square Enix",
        "THQ",
        "Take-Two Interactive",
        "Tecmo Koei",
        "Ubisoft",
        "Vivendi Games",
        "Warner Bros. Interactive Entertainment",
    ],
);
