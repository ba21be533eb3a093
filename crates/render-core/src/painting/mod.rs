//! Stateless drawing primitives.
//!
//! Every function paints at absolute page coordinates and leaves the layout
//! cursor alone; callers measure, reserve space and advance.

pub mod badge;
pub mod glyphs;
pub mod markers;
pub mod ornaments;
pub mod rules;
pub mod shapes;
pub mod text;

pub use badge::{PILL_GAP, pill, pill_height, pill_width};
pub use glyphs::{clock, heart, spice, spice_row};
pub use markers::{NUMBER_RADIUS, accent_bar, accordion_arrow, numbered_circle};
pub use ornaments::{Motif, motif, ornament_line};
pub use rules::{MIN_LEADER_GAP, dotted_separator, leader_dots, solid_separator};
pub use shapes::{FrameStyle, card, circle, frame, image_placeholder, rect, rounded_rect};
pub use text::{baseline, centered_baseline, draw_aligned, draw_block};

#[cfg(test)]
mod painting_test;
