//! sRGB to CIE L\*a\*b\* conversion.
//!
//! The conversion runs sRGB → linear RGB → XYZ → Lab with the D65 reference
//! white. Lab is the input domain of the CIEDE2000 metric in [`crate::deltae`];
//! distances taken there approximate human-perceived color difference far
//! better than distances over raw RGB.

use crate::color::{Lab, Rgb};

/// D65 reference white point for the XYZ → Lab step.
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Converts an sRGB component (0–255) to linear light (0.0–1.0).
///
/// Standard sRGB companding: a linear segment below 0.04045, the 2.4
/// power law above it.
fn srgb_to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// CIE transfer function applied to each normalized XYZ component.
///
/// Cube root above the (6/29)³ threshold, linear continuation below it.
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Converts an [`Rgb`] color to [`Lab`] via XYZ (D65 illuminant).
///
/// Pure and total over all 16,777,216 inputs.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.0);
    let g = srgb_to_linear(rgb.1);
    let b = srgb_to_linear(rgb.2);

    // Linear RGB → XYZ using the standard sRGB/D65 matrix.
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
