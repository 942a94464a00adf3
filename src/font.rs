//! Faces and metrics of the standard Helvetica family, which every PDF reader provides without
//! embedding.

/// Widths of the printable ASCII characters (`' '..='~'`) of Helvetica, in thousandths of an em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Same as [HELVETICA_WIDTHS], for Helvetica-Bold.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

const CAP_HEIGHT: f64 = 0.718;
const DESCENT: f64 = 0.207;

/// Characters WinAnsiEncoding places in `0x80..=0x9F`, where Latin-1 has control codes.
#[rustfmt::skip]
const WIN_ANSI_EXTRAS: [(char, u8); 27] = [
    ('€', 0x80), ('‚', 0x82), ('ƒ', 0x83), ('„', 0x84), ('…', 0x85), ('†', 0x86), ('‡', 0x87),
    ('ˆ', 0x88), ('‰', 0x89), ('Š', 0x8A), ('‹', 0x8B), ('Œ', 0x8C), ('Ž', 0x8E), ('‘', 0x91),
    ('’', 0x92), ('“', 0x93), ('”', 0x94), ('•', 0x95), ('–', 0x96), ('—', 0x97), ('˜', 0x98),
    ('™', 0x99), ('š', 0x9A), ('›', 0x9B), ('œ', 0x9C), ('ž', 0x9E), ('Ÿ', 0x9F),
];

/// Encodes `text` for a font declared with `WinAnsiEncoding`. Characters the encoding lacks
/// become `?`.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x00..=0x7F | 0xA0..=0xFF) => code as u8,
            _ => WIN_ANSI_EXTRAS
                .iter()
                .find(|(extra, _)| *extra == c)
                .map_or(b'?', |(_, byte)| *byte),
        })
        .collect()
}

/// Whether a face is upright or slanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slant {
    /// Upright.
    Normal,
    /// Slanted. Helvetica only comes in an oblique.
    Italic,
}

/// Stroke weight of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    /// Regular weight.
    Normal,
    /// Bold weight.
    Bold,
}

/// A font face of the Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontFace {
    /// Upright or oblique.
    pub slant: Slant,
    /// Regular or bold.
    pub weight: Weight,
}

impl FontFace {
    /// Helvetica.
    pub const REGULAR: FontFace = FontFace {
        slant: Slant::Normal,
        weight: Weight::Normal,
    };
    /// Helvetica-Bold.
    pub const BOLD: FontFace = FontFace {
        slant: Slant::Normal,
        weight: Weight::Bold,
    };
    /// Helvetica-Oblique.
    pub const ITALIC: FontFace = FontFace {
        slant: Slant::Italic,
        weight: Weight::Normal,
    };
    /// Helvetica-BoldOblique.
    pub const BOLD_ITALIC: FontFace = FontFace {
        slant: Slant::Italic,
        weight: Weight::Bold,
    };

    /// Every face, in the order they are registered in a document.
    pub const ALL: [FontFace; 4] = [
        FontFace::REGULAR,
        FontFace::BOLD,
        FontFace::ITALIC,
        FontFace::BOLD_ITALIC,
    ];

    /// PostScript name of the face.
    pub fn base_font(&self) -> &'static str {
        match (self.slant, self.weight) {
            (Slant::Normal, Weight::Normal) => "Helvetica",
            (Slant::Normal, Weight::Bold) => "Helvetica-Bold",
            (Slant::Italic, Weight::Normal) => "Helvetica-Oblique",
            (Slant::Italic, Weight::Bold) => "Helvetica-BoldOblique",
        }
    }

    /// Resource name the face is registered under in a page's font dictionary.
    pub fn resource_name(&self) -> &'static str {
        match (self.slant, self.weight) {
            (Slant::Normal, Weight::Normal) => "F1",
            (Slant::Normal, Weight::Bold) => "F2",
            (Slant::Italic, Weight::Normal) => "F3",
            (Slant::Italic, Weight::Bold) => "F4",
        }
    }

    // obliques share the widths of their upright faces
    fn char_width(&self, c: char) -> u16 {
        let widths = match self.weight {
            Weight::Normal => &HELVETICA_WIDTHS,
            Weight::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        (c as usize)
            .checked_sub(' ' as usize)
            .and_then(|i| widths.get(i))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }

    /// Measures `text` set in this face at `size`.
    pub fn text_extents(&self, text: &str, size: f64) -> TextExtents {
        if text.is_empty() {
            return TextExtents::default();
        }
        let em: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        let descends = text.chars().any(|c| "gjpqy,;()[]{}|".contains(c));
        let height = if descends {
            CAP_HEIGHT + DESCENT
        } else {
            CAP_HEIGHT
        };
        TextExtents {
            width: f64::from(em) * size / 1000.0,
            height: height * size,
        }
    }
}

/// Size of a piece of text on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtents {
    /// Advance width.
    pub width: f64,
    /// Ink height, from the lowest descender to the cap height.
    pub height: f64,
}
