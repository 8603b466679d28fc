//! Base16 scheme data model.
//!
//! A scheme is a name, an author, and 16 base colors `base00` through
//! `base0F`. Scheme documents are flat YAML maps; reading them from disk is
//! the caller's concern, this module only parses document content.

use std::collections::BTreeMap;

use serde::Deserialize;
use termatch::Rgb;

use crate::error::{Result, SchemeError};

/// Number of base colors in a base16 scheme.
pub const BASE_COUNT: usize = 16;

/// Raw document shape: the two metadata keys plus the base color map.
#[derive(Debug, Deserialize)]
struct RawScheme {
    scheme: String,
    author: String,
    #[serde(flatten)]
    bases: BTreeMap<String, String>,
}

/// A parsed base16 color scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheme {
    name: String,
    author: String,
    slug: String,
    bases: [Rgb; BASE_COUNT],
}

impl Scheme {
    /// Parses a scheme from YAML source.
    ///
    /// The document must carry `scheme`, `author`, and all 16 `baseXX`
    /// keys with hex color values. The slug defaults to the slugified
    /// scheme name; use [`with_slug`](Self::with_slug) to override it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termatch_scheme::Scheme;
    ///
    /// let yaml = "
    /// scheme: Ocean
    /// author: Chris Kempson
    /// base00: '2b303b'
    /// base01: '343d46'
    /// base02: '4f5b66'
    /// base03: '65737e'
    /// base04: 'a7adba'
    /// base05: 'c0c5ce'
    /// base06: 'dfe1e8'
    /// base07: 'eff1f5'
    /// base08: 'bf616a'
    /// base09: 'd08770'
    /// base0A: 'ebcb8b'
    /// base0B: 'a3be8c'
    /// base0C: '96b5b4'
    /// base0D: '8fa1b3'
    /// base0E: 'b48ead'
    /// base0F: 'ab7967'
    /// ";
    ///
    /// let scheme = Scheme::from_yaml_str(yaml).unwrap();
    /// assert_eq!(scheme.name(), "Ocean");
    /// assert_eq!(scheme.slug(), "ocean");
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let raw: RawScheme = serde_yaml::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Parses a scheme from an already-decoded YAML value.
    pub fn from_value(value: serde_yaml::Value) -> Result<Self> {
        let raw: RawScheme = serde_yaml::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawScheme) -> Result<Self> {
        let mut bases = [Rgb(0, 0, 0); BASE_COUNT];
        for (i, base) in bases.iter_mut().enumerate() {
            let key = format!("base{:02X}", i);
            let hex = raw
                .bases
                .get(&key)
                .ok_or_else(|| SchemeError::MissingField(key.clone()))?;
            *base = Rgb::from_hex(hex).map_err(|source| SchemeError::InvalidColor {
                field: key,
                source,
            })?;
        }

        Ok(Self {
            slug: slugify(&raw.scheme),
            name: raw.scheme,
            author: raw.author,
            bases,
        })
    }

    /// Overrides the slug, for callers that derive it from something other
    /// than the scheme name (the scheme file name, typically).
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// The scheme's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scheme's author line.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The scheme's slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The 16 base colors, `base00` first.
    pub fn bases(&self) -> &[Rgb; BASE_COUNT] {
        &self.bases
    }

    /// A single base color by position (0 for `base00` .. 15 for `base0F`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 16 or more.
    pub fn base(&self, index: usize) -> Rgb {
        self.bases[index]
    }
}

/// Derives a slug from a scheme name: lowercased, with every run of
/// non-alphanumeric characters collapsed into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    slug
}
