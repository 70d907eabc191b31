//! The X11 `rgb.txt` color set.
//!
//! X11 and CSS share most of their names. The X11 table is derived from the
//! CSS one: the web-only additions are dropped and the four names whose X11
//! values differ are overridden, then the X11-only names are added.

use crate::Rgb8;

/// CSS names that never made it into the classic X11 `rgb.txt`.
pub(crate) static WEB_ONLY: &[&str] = &[
    "aqua",
    "crimson",
    "fuchsia",
    "indigo",
    "lime",
    "olive",
    "rebeccapurple",
    "silver",
    "teal",
];

/// Names whose X11 value differs from CSS, plus X11-only names.
pub(crate) static OVERRIDES: &[(&str, Rgb8)] = &[
    ("gray", [190, 190, 190]),
    ("grey", [190, 190, 190]),
    ("green", [0, 255, 0]),
    ("maroon", [176, 48, 96]),
    ("purple", [160, 32, 240]),
    ("lightgoldenrod", [238, 221, 130]),
    ("lightslateblue", [132, 112, 255]),
    ("navyblue", [0, 0, 128]),
    ("violetred", [208, 32, 144]),
    ("webgray", [128, 128, 128]),
    ("webgreen", [0, 128, 0]),
    ("webmaroon", [128, 0, 0]),
    ("webpurple", [128, 0, 128]),
];
