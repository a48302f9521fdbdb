//! The single-row grid that places icon, text and button.
//!
//! Seven column tracks, left to right:
//!
//! | # | track         | width                          |
//! |---|---------------|--------------------------------|
//! | 1 | icon offset   | `input-icon-starting-offset`   |
//! | 2 | icon          | `input-icon-width`             |
//! | 3 | icon gap      | `input-icon-content-gap`       |
//! | 4 | content       | `minmax(0, 1fr)`               |
//! | 5 | button gap    | `input-button-content-gap`     |
//! | 6 | button        | `input-button-width`           |
//! | 7 | button offset | `input-button-ending-offset`   |
//!
//! Tracks of an absent feature are zero wide. The surface spans every
//! track; its padding keeps text clear of the icon and button.

use tokenfield_style::style::ComputedStyle;
use tokenfield_style::types::{GridArea, LengthValue};

use crate::state::InputVariant;
use crate::tokens::InputTokens;

/// Number of column tracks.
pub const TRACK_COUNT: usize = 7;

/// Named grid areas.
pub mod areas {
    /// The leading icon (track 2).
    pub const ICON: &str = "input-icon";
    /// The flexible text track (track 4).
    pub const CONTENT: &str = "content";
    /// The trailing button (track 6).
    pub const BUTTON: &str = "input-button";
}

/// Sizing of one column track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Fixed width. Negative widths clamp to zero.
    Fixed(LengthValue),
    /// `minmax(0, 1fr)`: takes the remaining space, never below zero.
    Flexible,
}

/// Column template of the input grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTemplate {
    tracks: [Track; TRACK_COUNT],
}

impl GridTemplate {
    /// Template for an input of `variant`.
    pub fn input(tokens: &InputTokens, variant: &InputVariant) -> Self {
        let fixed = |present: bool, length: LengthValue| {
            Track::Fixed(if present { length } else { LengthValue::Zero })
        };

        Self {
            tracks: [
                fixed(variant.has_icon, tokens.input_icon_starting_offset),
                fixed(variant.has_icon, tokens.input_icon_width),
                fixed(variant.has_icon, tokens.input_icon_content_gap),
                Track::Flexible,
                fixed(variant.has_button, tokens.input_button_content_gap),
                fixed(variant.has_button, tokens.input_button_width),
                fixed(variant.has_button, tokens.input_button_ending_offset),
            ],
        }
    }

    /// The tracks, left to right.
    pub fn tracks(&self) -> &[Track; TRACK_COUNT] {
        &self.tracks
    }

    /// Resolve track widths for a container `width` pixels wide.
    ///
    /// Fixed tracks get their size first; flexible tracks share what is
    /// left. When fixed tracks overflow the container, flexible tracks are
    /// zero and the grid is wider than the container.
    pub fn resolve(&self, width: f32, font_size: f32, root_font_size: f32) -> GridColumns {
        let available = non_negative(width);

        let mut widths = [0.0; TRACK_COUNT];
        for (slot, track) in widths.iter_mut().zip(&self.tracks) {
            if let Track::Fixed(length) = track {
                *slot = non_negative(length.to_px(font_size, available, root_font_size));
            }
        }

        let fixed_total: f32 = widths.iter().sum();
        let flexible = self
            .tracks
            .iter()
            .filter(|track| matches!(track, Track::Flexible))
            .count();
        if flexible > 0 {
            let share = non_negative(available - fixed_total) / flexible as f32;
            for (slot, track) in widths.iter_mut().zip(&self.tracks) {
                if matches!(track, Track::Flexible) {
                    *slot = share;
                }
            }
        }

        let mut positions = [0.0; TRACK_COUNT];
        let mut x = 0.0;
        for (position, width) in positions.iter_mut().zip(widths) {
            *position = x;
            x += width;
        }

        GridColumns { widths, positions }
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Horizontal extent of a placed item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Left edge, relative to the grid.
    pub x: f32,
    /// Width.
    pub width: f32,
}

/// Resolved track geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct GridColumns {
    widths: [f32; TRACK_COUNT],
    positions: [f32; TRACK_COUNT],
}

impl GridColumns {
    /// Track widths, left to right.
    pub fn widths(&self) -> &[f32; TRACK_COUNT] {
        &self.widths
    }

    /// Left edge of every track.
    pub fn positions(&self) -> &[f32; TRACK_COUNT] {
        &self.positions
    }

    /// Width of the whole grid.
    pub fn total_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    /// Extent of a grid area. `None` for unknown names or empty spans.
    pub fn area(&self, area: &GridArea) -> Option<Span> {
        let (start, end) = match area {
            GridArea::Named(name) => {
                let track = match name.as_str() {
                    areas::ICON => 1,
                    areas::CONTENT => 3,
                    areas::BUTTON => 5,
                    _ => return None,
                };
                (track, track + 1)
            }
            GridArea::Columns { start, end } => (line_index(*start)?, line_index(*end)?),
        };

        if start >= end || end > TRACK_COUNT {
            return None;
        }
        Some(Span {
            x: self.positions[start],
            width: self.widths[start..end].iter().sum(),
        })
    }

    /// Place an element by its computed `grid-area`.
    pub fn place(&self, style: &ComputedStyle) -> Option<Span> {
        self.area(style.grid_area.as_ref()?)
    }
}

/// Convert a 1-based (or negative, from the end) grid line to a track index.
fn line_index(line: i16) -> Option<usize> {
    let lines = TRACK_COUNT as i16 + 1;
    let line = if line < 0 { lines + 1 + line } else { line };
    if (1..=lines).contains(&line) {
        Some(line as usize - 1)
    } else {
        None
    }
}
