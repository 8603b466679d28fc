//! End-to-end approximation of input colors to terminal palette entries.

use crate::color::Rgb;
use crate::error::Result;
use crate::hungarian;
use crate::matrix::CostMatrix;
use crate::palette::FIRST_INDEX;

/// Assigns each input color a distinct terminal color number in 16..=255,
/// minimizing the total CIEDE2000 difference across the whole palette.
///
/// Output order follows input order: `result[i]` is the terminal color for
/// `colors[i]`. The assignment is globally optimal rather than greedy, so
/// two near-identical inputs both land on close palette entries instead of
/// the second one being pushed far away.
///
/// # Errors
///
/// [`MatchError::TooManyColors`](crate::MatchError::TooManyColors) when
/// more than 240 colors are given; the palette cannot host them distinctly.
///
/// # Example
///
/// ```rust
/// use termatch::{xterm_approx, Rgb};
///
/// let assigned = xterm_approx(&[Rgb(0, 0, 0), Rgb(255, 255, 255)]).unwrap();
/// assert_eq!(assigned, vec![16, 231]);
/// ```
pub fn xterm_approx(colors: &[Rgb]) -> Result<Vec<u8>> {
    let matrix = CostMatrix::build(colors);
    let assignment = hungarian::solve(&matrix)?;
    Ok(assignment
        .into_iter()
        .map(|col| FIRST_INDEX + col as u8)
        .collect())
}
