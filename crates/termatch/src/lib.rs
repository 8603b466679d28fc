//! Termatch - perceptual matching of colors onto the terminal palette.
//!
//! Terminal emulators expose 256 colors; the first 16 are user-configured
//! and the remaining 240 (a 6×6×6 color cube plus a 24-step grayscale ramp)
//! are fixed by convention. Termatch maps a small set of input colors, for
//! example the 16 bases of a base16 scheme, onto those 240 fixed entries:
//!
//! - Every input gets a **distinct** palette entry, so two scheme colors
//!   never collapse into the same terminal number.
//! - Distances are measured with **CIEDE2000** over CIE L\*a\*b\*, not raw
//!   RGB, so "closest" means perceptually closest.
//! - The assignment is **globally optimal** (Hungarian algorithm), not
//!   greedy: the total perceptual drift over the whole set is minimized.
//!
//! # Quick Start
//!
//! ```rust
//! use termatch::{xterm_approx, Rgb};
//!
//! // A few scheme colors, parsed from hex upstream.
//! let colors = vec![
//!     Rgb::from_hex("#181818").unwrap(),
//!     Rgb::from_hex("#ab4642").unwrap(),
//!     Rgb::from_hex("#f8f8f8").unwrap(),
//! ];
//!
//! let assigned = xterm_approx(&colors).unwrap();
//!
//! // One terminal color number per input, in input order, all distinct.
//! assert_eq!(assigned.len(), colors.len());
//! assert!(assigned.iter().all(|&n| n >= 16));
//! ```
//!
//! # Pipeline
//!
//! The stages are independently usable:
//!
//! 1. [`rgb_to_lab`] converts sRGB to CIE L\*a\*b\* (D65).
//! 2. [`delta_e2000`] scores two Lab colors perceptually.
//! 3. [`candidates`] enumerates the fixed 240-entry palette with terminal
//!    numbers 16..=255.
//! 4. [`CostMatrix::build`] scores every input against every candidate.
//! 5. [`solve`] finds the minimum-cost assignment of rows to distinct
//!    columns.
//!
//! [`xterm_approx`] chains the whole pipeline.
//!
//! # Concurrency
//!
//! Everything here is pure computation over immutable data; the only
//! process-wide state is the lazily built candidate table. Calls may run
//! from any number of threads without locking.

mod approx;
mod color;
mod colorspace;
mod deltae;
mod error;
mod hungarian;
mod matrix;
mod palette;

// Re-export public API
pub use approx::xterm_approx;
pub use color::{Lab, Rgb};
pub use colorspace::rgb_to_lab;
pub use deltae::delta_e2000;
pub use error::{MatchError, Result};
pub use hungarian::solve;
pub use matrix::CostMatrix;
pub use palette::{candidates, Candidate, CANDIDATE_COUNT, CUBE_LEVELS, FIRST_INDEX};
