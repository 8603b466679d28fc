//! Integration tests: full scheme documents through parsing and expansion.

use termatch_scheme::{template_context, Scheme, SchemeError};

const DEFAULT_DARK: &str = "
scheme: Default Dark
author: Chris Kempson (http://chriskempson.com)
base00: '181818'
base01: '282828'
base02: '383838'
base03: '585858'
base04: 'b8b8b8'
base05: 'd8d8d8'
base06: 'e8e8e8'
base07: 'f8f8f8'
base08: 'ab4642'
base09: 'dc9656'
base0A: 'f7ca88'
base0B: 'a1b56c'
base0C: '86c1b9'
base0D: '7cafc2'
base0E: 'ba8baf'
base0F: 'a16946'
";

#[test]
fn default_dark_parses_and_slugifies() {
    let scheme = Scheme::from_yaml_str(DEFAULT_DARK).unwrap();
    assert_eq!(scheme.name(), "Default Dark");
    assert_eq!(scheme.author(), "Chris Kempson (http://chriskempson.com)");
    assert_eq!(scheme.slug(), "default-dark");
}

#[test]
fn default_dark_xterm_numbers_match_the_oracle() {
    let scheme = Scheme::from_yaml_str(DEFAULT_DARK).unwrap();
    let ctx = template_context(&scheme).unwrap();

    // Precomputed optimal assignment for this scheme. The gray bases climb
    // the grayscale ramp, base07 hits the white cube corner, and the six
    // accent colors land in the cube.
    let expected = [
        234, 235, 237, 240, 250, 188, 254, 231, 131, 215, 222, 107, 116, 74, 139, 130,
    ];
    for (i, number) in expected.iter().enumerate() {
        let key = format!("base{:02X}-xterm", i);
        assert_eq!(ctx[&key], number.to_string(), "mismatch at {}", key);
    }
}

#[test]
fn expansion_runs_on_a_custom_slug() {
    let scheme = Scheme::from_yaml_str(DEFAULT_DARK)
        .unwrap()
        .with_slug("default-dark-256");
    let ctx = template_context(&scheme).unwrap();
    assert_eq!(ctx["scheme-slug"], "default-dark-256");
}

#[test]
fn truncated_document_fails_cleanly() {
    let truncated: String = DEFAULT_DARK
        .lines()
        .take(10)
        .collect::<Vec<_>>()
        .join("\n");
    let err = Scheme::from_yaml_str(&truncated).unwrap_err();
    assert!(matches!(err, SchemeError::MissingField(_)));
}
