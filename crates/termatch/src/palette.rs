//! The fixed candidate palette: terminal colors 16 through 255.
//!
//! Terminal emulators hardcode the extended palette as a 6×6×6 color cube
//! (216 entries) followed by a 24-step grayscale ramp. The channel levels
//! and the ramp step are a compatibility contract with that numbering, not
//! tuning parameters. Colors 0-15 are user-configured and never candidates.
//!
//! The table is generated once per process and shared read-only; each entry
//! carries its Lab conversion so distance computation never re-converts a
//! candidate.

use once_cell::sync::Lazy;

use crate::color::{Lab, Rgb};
use crate::colorspace::rgb_to_lab;

/// The six channel levels of the color cube, in cube order.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Number of candidate entries (216 cube + 24 grayscale).
pub const CANDIDATE_COUNT: usize = 240;

/// Terminal color number of the first candidate.
pub const FIRST_INDEX: u8 = 16;

/// One entry of the candidate palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Terminal color number, 16..=255.
    pub index: u8,
    /// The entry's RGB value.
    pub rgb: Rgb,
    /// Lab conversion of `rgb`, precomputed at table build time.
    pub lab: Lab,
}

static CANDIDATES: Lazy<Vec<Candidate>> = Lazy::new(build_candidates);

/// Returns the candidate palette, generated on first use.
///
/// Entries are ordered by terminal color number: the cube first (red
/// channel outermost, blue innermost), then the grayscale ramp.
pub fn candidates() -> &'static [Candidate] {
    CANDIDATES.as_slice()
}

fn build_candidates() -> Vec<Candidate> {
    let mut entries: Vec<Candidate> = Vec::with_capacity(CANDIDATE_COUNT);
    let push = |entries: &mut Vec<Candidate>, rgb: Rgb| {
        let index = FIRST_INDEX + entries.len() as u8;
        entries.push(Candidate {
            index,
            rgb,
            lab: rgb_to_lab(rgb),
        });
    };

    // 6×6×6 cube. The nesting order fixes the index alignment.
    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                push(&mut entries, Rgb(r, g, b));
            }
        }
    }

    // Grayscale ramp: 8, 18, .., 238.
    for step in 0..24u8 {
        let v = 8 + 10 * step;
        push(&mut entries, Rgb(v, v, v));
    }

    entries
}
