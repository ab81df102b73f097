//! Static font-metric tables for the two report font variants.
//!
//! The report is set in the PDF base-14 Helvetica family, so no font program is
//! embedded and widths come straight from the Adobe AFM files (units of 1/1000 em).
//! Text is written with `WinAnsiEncoding`; every character is measured as the
//! byte it will be encoded to, so layout and rendering can never disagree.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters). Index = byte - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font variant enum
// ────────────────────────────────────────────────────────────────────────────

/// The two font variants a report may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontVariant {
    /// Helvetica — body text.
    Regular,
    /// Helvetica-Bold — headings.
    Bold,
}

impl FontVariant {
    /// PDF base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name the font is registered under on every page.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static glyph-width table for one font variant.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// WinAnsi punctuation above 0x7F that generated prose uses often.
    extended: &'static [(u8, u16)],
    /// Width for any other byte above 0x7F (accented Latin letters, symbols).
    pub fallback_width: u16,
}

impl FontMetricTable {
    /// Width of a single encoded byte in 1/1000 em.
    fn byte_width(&self, byte: u8) -> u16 {
        match byte {
            32..=126 => self.widths[(byte - 32) as usize],
            _ => self
                .extended
                .iter()
                .find(|(b, _)| *b == byte)
                .map(|(_, w)| *w)
                .unwrap_or(self.fallback_width),
        }
    }

    /// Measures the rendered width of a string in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| self.byte_width(win_ansi_byte(c)) as u32)
            .sum();
        units as f32 * size_pt / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WinAnsi encoding
// ────────────────────────────────────────────────────────────────────────────

/// Maps a character to its WinAnsi (CP1252) byte. Unmappable characters become `?`.
pub fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\t' => b' ',
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Encodes a string for a `WinAnsiEncoding` font.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    extended: &[
        (0x85, 1000),
        (0x91, 222),
        (0x92, 222),
        (0x93, 333),
        (0x94, 333),
        (0x95, 350),
        (0x96, 556),
        (0x97, 1000),
        (0xA0, 278),
    ],
    fallback_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    extended: &[
        (0x85, 1000),
        (0x91, 278),
        (0x92, 278),
        (0x93, 500),
        (0x94, 500),
        (0x95, 350),
        (0x96, 556),
        (0x97, 1000),
        (0xA0, 278),
    ],
    fallback_width: 611,
};

/// Returns the static metric table for a given font variant.
pub fn get_metrics(variant: FontVariant) -> &'static FontMetricTable {
    match variant {
        FontVariant::Regular => &HELVETICA_TABLE,
        FontVariant::Bold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
