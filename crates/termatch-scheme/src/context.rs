//! Template variable expansion.
//!
//! Turns a [`Scheme`] into the flat key/value map a template renderer
//! consumes. Each base contributes its hex form, per-channel hex and
//! decimal splits, unit-interval channel values, and the approximated
//! terminal color number from [`termatch::xterm_approx`].

use std::collections::BTreeMap;

use termatch::{xterm_approx, Rgb};

use crate::error::Result;
use crate::scheme::Scheme;

/// Expands `scheme` into template variables.
///
/// Keys follow the base16 template convention: `scheme-name`,
/// `scheme-author`, `scheme-slug`, and for each base `XX` (hex digits,
/// uppercase):
///
/// - `baseXX-hex`: six lowercase hex digits, no `#`
/// - `baseXX-hex-r` / `-hex-g` / `-hex-b`: two hex digits per channel
/// - `baseXX-rgb-r` / `-rgb-g` / `-rgb-b`: decimal 0-255
/// - `baseXX-dec-r` / `-dec-g` / `-dec-b`: channel / 255 as a float
/// - `baseXX-xterm`: the assigned terminal color number, 16-255
///
/// The 16 xterm numbers come from one optimal assignment over all bases
/// together, so they are pairwise distinct.
pub fn template_context(scheme: &Scheme) -> Result<BTreeMap<String, String>> {
    let mut ctx = BTreeMap::new();
    ctx.insert("scheme-name".to_string(), scheme.name().to_string());
    ctx.insert("scheme-author".to_string(), scheme.author().to_string());
    ctx.insert("scheme-slug".to_string(), scheme.slug().to_string());

    let terminal = xterm_approx(scheme.bases())?;

    for (i, (&rgb, &number)) in scheme.bases().iter().zip(&terminal).enumerate() {
        let Rgb(r, g, b) = rgb;
        let base = format!("base{:02X}", i);

        ctx.insert(format!("{base}-hex"), format!("{r:02x}{g:02x}{b:02x}"));
        ctx.insert(format!("{base}-hex-r"), format!("{r:02x}"));
        ctx.insert(format!("{base}-hex-g"), format!("{g:02x}"));
        ctx.insert(format!("{base}-hex-b"), format!("{b:02x}"));
        ctx.insert(format!("{base}-rgb-r"), r.to_string());
        ctx.insert(format!("{base}-rgb-g"), g.to_string());
        ctx.insert(format!("{base}-rgb-b"), b.to_string());
        ctx.insert(format!("{base}-dec-r"), (r as f64 / 255.0).to_string());
        ctx.insert(format!("{base}-dec-g"), (g as f64 / 255.0).to_string());
        ctx.insert(format!("{base}-dec-b"), (b as f64 / 255.0).to_string());
        ctx.insert(format!("{base}-xterm"), number.to_string());
    }

    Ok(ctx)
}
