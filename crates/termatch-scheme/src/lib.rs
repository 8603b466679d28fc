//! Base16 scheme support for termatch.
//!
//! This crate turns a base16 scheme document into the flat variable map
//! that template renderers consume, with terminal-palette approximations
//! computed by [`termatch`]. File discovery, template rendering, and output
//! management stay with the caller; this crate only owns the scheme data
//! model and its expansion.
//!
//! # Quick Start
//!
//! ```rust
//! use termatch_scheme::{template_context, Scheme};
//!
//! let yaml = "
//! scheme: Ocean
//! author: Chris Kempson
//! base00: '2b303b'
//! base01: '343d46'
//! base02: '4f5b66'
//! base03: '65737e'
//! base04: 'a7adba'
//! base05: 'c0c5ce'
//! base06: 'dfe1e8'
//! base07: 'eff1f5'
//! base08: 'bf616a'
//! base09: 'd08770'
//! base0A: 'ebcb8b'
//! base0B: 'a3be8c'
//! base0C: '96b5b4'
//! base0D: '8fa1b3'
//! base0E: 'b48ead'
//! base0F: 'ab7967'
//! ";
//!
//! let scheme = Scheme::from_yaml_str(yaml).unwrap();
//! let ctx = template_context(&scheme).unwrap();
//!
//! assert_eq!(ctx["scheme-slug"], "ocean");
//! assert_eq!(ctx["base08-hex"], "bf616a");
//! // Every base gets a distinct terminal color number.
//! let n: u16 = ctx["base08-xterm"].parse().unwrap();
//! assert!((16..=255).contains(&n));
//! ```

mod context;
mod error;
mod scheme;

// Re-export public API
pub use context::template_context;
pub use error::{Result, SchemeError};
pub use scheme::{slugify, Scheme, BASE_COUNT};
