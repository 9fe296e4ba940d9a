// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in single-stroke font.
//
// Glyphs are polylines on a 5 x 7 grid: x in 0..=4, y in 0..=6 measured
// upwards from the baseline (6 is the cap height), with descenders down to
// -1. A polyline of one repeated point is a dot.

/// Polylines making up one glyph.
pub(crate) type Glyph = &'static [&'static [(i8, i8)]];

/// Cap height in grid units.
pub(crate) const CAP_HEIGHT: f64 = 6.0;

/// Horizontal advance per character in grid units.
pub(crate) const ADVANCE: f64 = 6.0;

/// Height factor for lowercase letters, which render as small capitals.
pub(crate) const SMALL_CAPS: f64 = 2.0 / 3.0;

const SPACE: Glyph = &[];

const A: Glyph = &[&[(0, 0), (0, 4), (2, 6), (4, 4), (4, 0)], &[(0, 3), (4, 3)]];
const B: Glyph = &[
    &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
    &[(3, 3), (4, 2), (4, 1), (3, 0), (0, 0)],
];
const C: Glyph = &[&[(4, 5), (3, 6), (1, 6), (0, 5), (0, 1), (1, 0), (3, 0), (4, 1)]];
const D: Glyph = &[&[(0, 0), (0, 6), (2, 6), (4, 4), (4, 2), (2, 0), (0, 0)]];
const E: Glyph = &[&[(4, 6), (0, 6), (0, 0), (4, 0)], &[(0, 3), (3, 3)]];
const F: Glyph = &[&[(4, 6), (0, 6), (0, 0)], &[(0, 3), (3, 3)]];
const G: Glyph = &[&[
    (4, 5),
    (3, 6),
    (1, 6),
    (0, 5),
    (0, 1),
    (1, 0),
    (3, 0),
    (4, 1),
    (4, 3),
    (2, 3),
]];
const H: Glyph = &[&[(0, 0), (0, 6)], &[(4, 0), (4, 6)], &[(0, 3), (4, 3)]];
const I: Glyph = &[&[(1, 6), (3, 6)], &[(2, 6), (2, 0)], &[(1, 0), (3, 0)]];
const J: Glyph = &[&[(4, 6), (4, 1), (3, 0), (1, 0), (0, 1)]];
const K: Glyph = &[&[(0, 0), (0, 6)], &[(4, 6), (0, 2)], &[(1, 3), (4, 0)]];
const L: Glyph = &[&[(0, 6), (0, 0), (4, 0)]];
const M: Glyph = &[&[(0, 0), (0, 6), (2, 3), (4, 6), (4, 0)]];
const N: Glyph = &[&[(0, 0), (0, 6), (4, 0), (4, 6)]];
const O: Glyph = &[&[
    (1, 0),
    (0, 1),
    (0, 5),
    (1, 6),
    (3, 6),
    (4, 5),
    (4, 1),
    (3, 0),
    (1, 0),
]];
const P: Glyph = &[&[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)]];
const Q: Glyph = &[
    &[(1, 0), (0, 1), (0, 5), (1, 6), (3, 6), (4, 5), (4, 1), (3, 0), (1, 0)],
    &[(2, 2), (4, 0)],
];
const R: Glyph = &[
    &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
    &[(2, 3), (4, 0)],
];
const S: Glyph = &[&[
    (4, 5),
    (3, 6),
    (1, 6),
    (0, 5),
    (0, 4),
    (1, 3),
    (3, 3),
    (4, 2),
    (4, 1),
    (3, 0),
    (1, 0),
    (0, 1),
]];
const T: Glyph = &[&[(0, 6), (4, 6)], &[(2, 6), (2, 0)]];
const U: Glyph = &[&[(0, 6), (0, 1), (1, 0), (3, 0), (4, 1), (4, 6)]];
const V: Glyph = &[&[(0, 6), (2, 0), (4, 6)]];
const W: Glyph = &[&[(0, 6), (1, 0), (2, 3), (3, 0), (4, 6)]];
const X: Glyph = &[&[(0, 6), (4, 0)], &[(0, 0), (4, 6)]];
const Y: Glyph = &[&[(0, 6), (2, 3), (4, 6)], &[(2, 3), (2, 0)]];
const Z: Glyph = &[&[(0, 6), (4, 6), (0, 0), (4, 0)]];

const DIGIT_0: Glyph = &[
    &[(1, 0), (0, 1), (0, 5), (1, 6), (3, 6), (4, 5), (4, 1), (3, 0), (1, 0)],
    &[(0, 1), (4, 5)],
];
const DIGIT_1: Glyph = &[&[(1, 5), (2, 6), (2, 0)], &[(1, 0), (3, 0)]];
const DIGIT_2: Glyph = &[&[(0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (0, 0), (4, 0)]];
const DIGIT_3: Glyph = &[
    &[(0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (3, 3), (1, 3)],
    &[(3, 3), (4, 2), (4, 1), (3, 0), (1, 0), (0, 1)],
];
const DIGIT_4: Glyph = &[&[(3, 0), (3, 6), (0, 2), (4, 2)]];
const DIGIT_5: Glyph = &[&[(4, 6), (0, 6), (0, 3), (3, 3), (4, 2), (4, 1), (3, 0), (0, 0)]];
const DIGIT_6: Glyph = &[&[
    (4, 5),
    (3, 6),
    (1, 6),
    (0, 5),
    (0, 1),
    (1, 0),
    (3, 0),
    (4, 1),
    (4, 2),
    (3, 3),
    (0, 3),
]];
const DIGIT_7: Glyph = &[&[(0, 6), (4, 6), (1, 0)]];
const DIGIT_8: Glyph = &[
    &[(1, 3), (0, 4), (0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (3, 3), (1, 3)],
    &[(1, 3), (0, 2), (0, 1), (1, 0), (3, 0), (4, 1), (4, 2), (3, 3)],
];
const DIGIT_9: Glyph = &[&[
    (4, 3),
    (1, 3),
    (0, 4),
    (0, 5),
    (1, 6),
    (3, 6),
    (4, 5),
    (4, 1),
    (3, 0),
    (1, 0),
    (0, 1),
]];

const PERIOD: Glyph = &[&[(2, 0), (2, 0)]];
const COMMA: Glyph = &[&[(2, 1), (2, 0), (1, -1)]];
const EXCLAMATION: Glyph = &[&[(2, 6), (2, 2)], &[(2, 0), (2, 0)]];
const QUESTION: Glyph = &[
    &[(0, 5), (1, 6), (3, 6), (4, 5), (4, 4), (2, 3), (2, 2)],
    &[(2, 0), (2, 0)],
];
const HYPHEN: Glyph = &[&[(1, 3), (3, 3)]];
const PLUS: Glyph = &[&[(0, 3), (4, 3)], &[(2, 1), (2, 5)]];
const EQUALS: Glyph = &[&[(0, 2), (4, 2)], &[(0, 4), (4, 4)]];
const COLON: Glyph = &[&[(2, 4), (2, 4)], &[(2, 1), (2, 1)]];
const SEMICOLON: Glyph = &[&[(2, 4), (2, 4)], &[(2, 1), (2, 0), (1, -1)]];
const APOSTROPHE: Glyph = &[&[(2, 6), (2, 4)]];
const QUOTE: Glyph = &[&[(1, 6), (1, 4)], &[(3, 6), (3, 4)]];
const SLASH: Glyph = &[&[(0, 0), (4, 6)]];
const BACKSLASH: Glyph = &[&[(0, 6), (4, 0)]];
const LEFT_PAREN: Glyph = &[&[(3, 6), (2, 5), (2, 1), (3, 0)]];
const RIGHT_PAREN: Glyph = &[&[(1, 6), (2, 5), (2, 1), (1, 0)]];
const LEFT_BRACKET: Glyph = &[&[(3, 6), (2, 6), (2, 0), (3, 0)]];
const RIGHT_BRACKET: Glyph = &[&[(1, 6), (2, 6), (2, 0), (1, 0)]];
const UNDERSCORE: Glyph = &[&[(0, -1), (4, -1)]];
const ASTERISK: Glyph = &[&[(2, 1), (2, 5)], &[(0, 2), (4, 4)], &[(0, 4), (4, 2)]];
const HASH: Glyph = &[
    &[(1, 0), (1, 6)],
    &[(3, 0), (3, 6)],
    &[(0, 2), (4, 2)],
    &[(0, 4), (4, 4)],
];
const LESS: Glyph = &[&[(4, 5), (0, 3), (4, 1)]];
const GREATER: Glyph = &[&[(0, 5), (4, 3), (0, 1)]];
const PERCENT: Glyph = &[&[(0, 0), (4, 6)], &[(0, 6), (0, 5)], &[(4, 1), (4, 0)]];

/// Strokes for `c`. Lowercase letters share the uppercase strokes (the
/// caller shrinks them); anything without a glyph renders as `?`.
pub(crate) fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        ' ' => SPACE,
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '5' => DIGIT_5,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        '.' => PERIOD,
        ',' => COMMA,
        '!' => EXCLAMATION,
        '-' => HYPHEN,
        '+' => PLUS,
        '=' => EQUALS,
        ':' => COLON,
        ';' => SEMICOLON,
        '\'' => APOSTROPHE,
        '"' => QUOTE,
        '/' => SLASH,
        '\\' => BACKSLASH,
        '(' => LEFT_PAREN,
        ')' => RIGHT_PAREN,
        '[' => LEFT_BRACKET,
        ']' => RIGHT_BRACKET,
        '_' => UNDERSCORE,
        '*' => ASTERISK,
        '#' => HASH,
        '<' => LESS,
        '>' => GREATER,
        '%' => PERCENT,
        _ => QUESTION,
    }
}
