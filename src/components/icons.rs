//! Inline Lucide Icons
//!
//! The subset of the Lucide icon set used across the app, rendered as inline
//! SVG so glyphs inherit `currentColor` from the surrounding text.

use dioxus::prelude::*;

/// Wrap icon geometry in the standard Lucide svg frame
fn glyph(size: u32, body: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {body}
        }
    }
}

pub fn check_circle(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        },
    )
}

pub fn x_circle(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m15 9-6 6" }
            path { d: "m9 9 6 6" }
        },
    )
}

pub fn x(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    )
}

pub fn flame(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
        },
    )
}

pub fn trending_up(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
    )
}

pub fn trash(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M3 6h18" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" }
            path { d: "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
            line { x1: "10", x2: "10", y1: "11", y2: "17" }
            line { x1: "14", x2: "14", y1: "11", y2: "17" }
        },
    )
}

pub fn coins(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            circle { cx: "8", cy: "8", r: "6" }
            path { d: "M18.09 10.37A6 6 0 1 1 10.34 18" }
            path { d: "M7 6h1v4" }
            path { d: "m16.71 13.88.7.71-2.82 2.82" }
        },
    )
}

pub fn sparkles(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        },
    )
}

pub fn package(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "m7.5 4.27 9 5.15" }
            path { d: "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" }
            path { d: "m3.3 7 8.7 5 8.7-5" }
            path { d: "M12 22V12" }
        },
    )
}

pub fn crown(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M11.562 3.266a.5.5 0 0 1 .876 0L15.39 8.87a1 1 0 0 0 1.516.294L21.183 5.5a.5.5 0 0 1 .798.519l-2.834 10.246a1 1 0 0 1-.956.735H5.81a1 1 0 0 1-.957-.735L2.02 6.02a.5.5 0 0 1 .798-.519l4.276 3.664a1 1 0 0 0 1.516-.294z" }
            path { d: "M5 21h14" }
        },
    )
}

pub fn help_circle(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
            path { d: "M12 17h.01" }
        },
    )
}

pub fn sword(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            polyline { points: "14.5 17.5 3 6 3 3 6 3 17.5 14.5" }
            line { x1: "13", x2: "19", y1: "19", y2: "13" }
            line { x1: "16", x2: "20", y1: "16", y2: "20" }
            line { x1: "19", x2: "21", y1: "21", y2: "19" }
        },
    )
}

pub fn target(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "12", r: "6" }
            circle { cx: "12", cy: "12", r: "2" }
        },
    )
}

pub fn zap(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
    )
}

pub fn folder_kanban(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z" }
            path { d: "M8 10v4" }
            path { d: "M12 10v2" }
            path { d: "M16 10v6" }
        },
    )
}

pub fn timer(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            line { x1: "10", x2: "14", y1: "2", y2: "2" }
            line { x1: "12", x2: "15", y1: "14", y2: "11" }
            circle { cx: "12", cy: "14", r: "8" }
        },
    )
}

pub fn heart(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
    )
}

pub fn store(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7" }
            path { d: "M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8" }
            path { d: "M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4" }
            path { d: "M2 7h20" }
            path { d: "M22 7v3a2 2 0 0 1-2 2 2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 16 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 12 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 8 12a2.7 2.7 0 0 1-1.59-.63.7.7 0 0 0-.82 0A2.7 2.7 0 0 1 4 12a2 2 0 0 1-2-2V7" }
        },
    )
}

pub fn tree_deciduous(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M8 19a4 4 0 0 1-2.24-7.32A3.5 3.5 0 0 1 9 6.03V6a3 3 0 1 1 6 0v.04a3.5 3.5 0 0 1 3.24 5.65A4 4 0 0 1 16 19Z" }
            path { d: "M12 19v3" }
        },
    )
}

pub fn trophy(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M6 9H4.5a2.5 2.5 0 0 1 0-5H6" }
            path { d: "M18 9h1.5a2.5 2.5 0 0 0 0-5H18" }
            path { d: "M4 22h16" }
            path { d: "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" }
            path { d: "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" }
            path { d: "M18 2H6v7a6 6 0 0 0 12 0V2Z" }
        },
    )
}

pub fn bar_chart(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            path { d: "M3 3v18h18" }
            path { d: "M18 17V9" }
            path { d: "M13 17V5" }
            path { d: "M8 17v-3" }
        },
    )
}

pub fn star(size: u32) -> Element {
    glyph(
        size,
        rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
    )
}
