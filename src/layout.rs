//! Per-resolution layout tables.
//!
//! Each supported panel resolution carries a fixed set of anchor
//! coordinates for the clock screen plus the font ids to use for text and
//! for the large time digits.

/// Anchor coordinates for the clock screen elements.
#[derive(Clone, Copy, Debug)]
pub struct Anchors {
    pub date: (i32, i32),
    pub link: (i32, i32),
    pub power: (i32, i32),
    pub time: (i32, i32),
    pub lunar: (i32, i32),
    pub solar_term: (i32, i32),
    pub holiday: (i32, i32),
    pub meridiem: (i32, i32),
}

#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Font id for general text.
    pub font_char: usize,
    /// Font id for the large time digits.
    pub font_digits: usize,
    pub anchors: Anchors,
}

pub static LAYOUTS: [Layout; 3] = [
    Layout {
        width: 212,
        height: 104,
        font_char: 0,
        font_digits: 1,
        anchors: Anchors {
            date: (15, 6),
            link: (172, 7),
            power: (190, 14),
            time: (16, 27),
            lunar: (12, 82),
            solar_term: (98, 82),
            holiday: (150, 82),
            meridiem: (12, 44),
        },
    },
    Layout {
        width: 250,
        height: 122,
        font_char: 2,
        font_digits: 3,
        anchors: Anchors {
            date: (15, 6),
            link: (206, 8),
            power: (210, 98),
            time: (12, 28),
            lunar: (12, 98),
            solar_term: (118, 98),
            holiday: (176, 98),
            meridiem: (15, 50),
        },
    },
    Layout {
        width: 296,
        height: 128,
        font_char: 2,
        font_digits: 3,
        anchors: Anchors {
            date: (15, 6),
            link: (246, 8),
            power: (268, 15),
            time: (30, 30),
            lunar: (12, 102),
            solar_term: (140, 102),
            holiday: (220, 102),
            meridiem: (15, 52),
        },
    },
];

/// Index of the layout matching the given resolution exactly, or `None`
/// (callers keep their previous selection on no match).
pub fn select_layout(width: u32, height: u32) -> Option<usize> {
    LAYOUTS
        .iter()
        .position(|l| l.width == width && l.height == height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_resolution_match_selects_an_entry() {
        assert_eq!(select_layout(212, 104), Some(0));
        assert_eq!(select_layout(250, 122), Some(1));
        assert_eq!(select_layout(296, 128), Some(2));
    }

    #[test]
    fn unknown_resolution_matches_nothing() {
        assert_eq!(select_layout(212, 122), None);
        assert_eq!(select_layout(0, 0), None);
    }
}
