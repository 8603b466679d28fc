//! CIEDE2000 perceptual color difference.
//!
//! Implements the ΔE00 formula of CIE Technical Report 142-2001 over
//! [`Lab`] colors: chroma-dependent G correction near the gray axis,
//! lightness/chroma/hue weighting functions, and the rotation term that
//! compensates for the chroma-hue interaction in the blue region.
//!
//! Degenerate geometry is part of the contract, not an error surface:
//! neutral colors have undefined hue, so their hue angle is taken as 0°
//! and hue deltas involving them collapse to 0.

use std::f64::consts::PI;

use crate::color::Lab;

/// 25⁷, shared by the G correction and the R_C term.
const POW7_25: f64 = 6_103_515_625.0;

/// Computes the CIEDE2000 difference between two Lab colors.
///
/// The score is 0 for identical inputs, non-negative otherwise, and grows
/// with perceived difference. The parametric factors k_L, k_C, k_H are
/// fixed at 1, the reference viewing condition.
///
/// # Example
///
/// ```rust
/// use termatch::{delta_e2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((delta_e2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn delta_e2000(first: Lab, second: Lab) -> f64 {
    // Step 1: raw chroma and its mean.
    let c1 = first.a.hypot(first.b);
    let c2 = second.a.hypot(second.b);
    let c_mean = (c1 + c2) / 2.0;

    // Step 2: G correction, applied to a*. Pulls near-neutral colors
    // toward the gray axis before chroma and hue are recomputed.
    let c_mean_pow7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_pow7 / (c_mean_pow7 + POW7_25)).sqrt());

    let a1_prime = first.a * (1.0 + g);
    let a2_prime = second.a * (1.0 + g);
    let c1_prime = a1_prime.hypot(first.b);
    let c2_prime = a2_prime.hypot(second.b);
    let h1_prime = hue_degrees(a1_prime, first.b);
    let h2_prime = hue_degrees(a2_prime, second.b);

    // Step 3: deltas. The hue delta takes the shorter angular path, and
    // collapses to 0 when either chroma vanishes (hue undefined).
    let delta_l = second.l - first.l;
    let delta_c = c2_prime - c1_prime;

    let delta_h = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let raw = h2_prime - h1_prime;
        if raw > 180.0 {
            raw - 360.0
        } else if raw < -180.0 {
            raw + 360.0
        } else {
            raw
        }
    };

    // Step 4: ΔH', the hue difference scaled by the geometric mean chroma.
    let delta_h_big = 2.0 * (c1_prime * c2_prime).sqrt() * (delta_h.to_radians() / 2.0).sin();

    // Step 5: means. The mean hue needs the same wraparound care as the
    // delta, plus the degenerate-chroma fallback (plain sum).
    let l_mean = (first.l + second.l) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;

    let h_mean = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else {
        let sum = h1_prime + h2_prime;
        if (h1_prime - h2_prime).abs() <= 180.0 {
            sum / 2.0
        } else if sum < 360.0 {
            (sum + 360.0) / 2.0
        } else {
            (sum - 360.0) / 2.0
        }
    };

    // Step 6: weighting functions and the blue-region rotation term.
    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l_minus_50_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let s_l = 1.0 + (0.015 * l_minus_50_sq) / (20.0 + l_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_prime_mean;
    let s_h = 1.0 + 0.015 * c_prime_mean * t;

    let delta_theta = 30.0 * (-((h_mean - 275.0) / 25.0) * ((h_mean - 275.0) / 25.0)).exp();
    let c_prime_mean_pow7 = c_prime_mean.powi(7);
    let r_c = 2.0 * (c_prime_mean_pow7 / (c_prime_mean_pow7 + POW7_25)).sqrt();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    // Step 7: combine. k_L = k_C = k_H = 1.
    let term_l = delta_l / s_l;
    let term_c = delta_c / s_c;
    let term_h = delta_h_big / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}

/// Hue angle of (a, b) in degrees, normalized to [0, 360).
///
/// Neutral colors (a = b = 0) have no hue; 0° is the conventional stand-in.
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a) * 180.0 / PI;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}
