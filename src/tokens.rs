//! Design tokens: the single source of truth for site styling.
//!
//! Tokens are grouped into four categories, each a map from a semantic name to
//! a concrete CSS value:
//!
//! ```toml
//! [colors]
//! primary = "#2D5A4A"
//!
//! [fonts]
//! heading = "'Playfair Display', Georgia, serif"
//!
//! [spacing]
//! md = "1rem"
//!
//! [max_width]
//! content = "1200px"
//! ```
//!
//! ## Loading
//!
//! Stock defaults are built in. A `theme.toml` in the config directory is
//! merged on top key by key, so a file only needs the values it changes:
//!
//! ```toml
//! [colors]
//! primary = "#1E4034"   # everything else keeps its default
//! ```
//!
//! Unknown sections are rejected to catch typos early. New names inside a
//! known section are allowed and become extra tokens. Names are limited to
//! `[a-z0-9_-]+` and values may not contain `<`, `;`, `{` or `}`, since both
//! are written verbatim into the inline stylesheet.
//!
//! Tokens are read-only once loaded; lookups never mutate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Name of the theme file looked up in the config directory.
pub const THEME_FILENAME: &str = "theme.toml";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown design token '{name}' in category '{category}'")]
    UnknownToken { category: String, name: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    Color,
    Font,
    Spacing,
    MaxWidth,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 4] = [
        TokenCategory::Color,
        TokenCategory::Font,
        TokenCategory::Spacing,
        TokenCategory::MaxWidth,
    ];

    /// Section name in `theme.toml`.
    pub fn section(self) -> &'static str {
        match self {
            TokenCategory::Color => "colors",
            TokenCategory::Font => "fonts",
            TokenCategory::Spacing => "spacing",
            TokenCategory::MaxWidth => "max_width",
        }
    }

    /// Prefix of the CSS custom properties generated for this category.
    fn css_prefix(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Font => "font",
            TokenCategory::Spacing => "space",
            TokenCategory::MaxWidth => "max-width",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Color => "color",
            TokenCategory::Font => "font",
            TokenCategory::Spacing => "spacing",
            TokenCategory::MaxWidth => "maxWidth",
        };
        f.write_str(name)
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" | "colors" => Ok(TokenCategory::Color),
            "font" | "fonts" => Ok(TokenCategory::Font),
            "spacing" => Ok(TokenCategory::Spacing),
            "maxWidth" | "max_width" | "max-width" => Ok(TokenCategory::MaxWidth),
            _ => Err(TokenError::UnknownToken {
                category: s.to_string(),
                name: String::new(),
            }),
        }
    }
}

/// One resolved token, as yielded by [`DesignTokens::iter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignToken<'a> {
    pub category: TokenCategory,
    pub name: &'a str,
    pub value: &'a str,
}

/// The full token set.
///
/// Map storage keeps names unique within a category and gives a stable,
/// sorted iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignTokens {
    pub colors: BTreeMap<String, String>,
    pub fonts: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub max_width: BTreeMap<String, String>,
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            colors: table(&[
                ("primary", "#2D5A4A"),
                ("secondary", "#C9A96E"),
                ("background", "#FAF8F5"),
                ("surface", "#FFFFFF"),
                ("text", "#1F2A27"),
                ("muted", "#6B7A75"),
                ("border", "#E4DED4"),
            ]),
            fonts: table(&[
                ("heading", "'Playfair Display', Georgia, serif"),
                ("body", "'Inter', system-ui, sans-serif"),
            ]),
            spacing: table(&[
                ("xs", "0.25rem"),
                ("sm", "0.5rem"),
                ("md", "1rem"),
                ("lg", "2rem"),
                ("xl", "4rem"),
            ]),
            max_width: table(&[("content", "1200px")]),
        }
    }
}

/// Tokens the embedded base stylesheet refers to. A theme missing any of
/// these would render with unresolved `var()` references.
const REQUIRED_TOKENS: &[(TokenCategory, &str)] = &[
    (TokenCategory::Color, "primary"),
    (TokenCategory::Color, "secondary"),
    (TokenCategory::Color, "background"),
    (TokenCategory::Color, "surface"),
    (TokenCategory::Color, "text"),
    (TokenCategory::Color, "muted"),
    (TokenCategory::Color, "border"),
    (TokenCategory::Font, "heading"),
    (TokenCategory::Font, "body"),
    (TokenCategory::Spacing, "sm"),
    (TokenCategory::Spacing, "md"),
    (TokenCategory::Spacing, "lg"),
    (TokenCategory::Spacing, "xl"),
    (TokenCategory::MaxWidth, "content"),
];

/// Characters that would end a declaration, a rule block or the inline
/// `<style>` element the token CSS is written into.
const FORBIDDEN_VALUE_CHARS: &[char] = &['<', ';', '{', '}'];

/// Names become CSS custom property names, so they are limited to `[a-z0-9_-]+`.
fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

impl DesignTokens {
    fn category(&self, category: TokenCategory) -> &BTreeMap<String, String> {
        match category {
            TokenCategory::Color => &self.colors,
            TokenCategory::Font => &self.fonts,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::MaxWidth => &self.max_width,
        }
    }

    /// Look up a token value.
    pub fn get(&self, category: TokenCategory, name: &str) -> Result<&str, TokenError> {
        self.category(category)
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| TokenError::UnknownToken {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// String-keyed lookup, e.g. `get_token("color", "primary")`.
    ///
    /// An unrecognized category is reported as an unknown token too.
    pub fn get_token(&self, category: &str, name: &str) -> Result<&str, TokenError> {
        let parsed: TokenCategory = category.parse().map_err(|_| TokenError::UnknownToken {
            category: category.to_string(),
            name: name.to_string(),
        })?;
        self.get(parsed, name)
    }

    /// Every token, ordered by category then name.
    pub fn iter(&self) -> impl Iterator<Item = DesignToken<'_>> {
        TokenCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |(name, value)| DesignToken {
                    category,
                    name: name.as_str(),
                    value: value.as_str(),
                })
        })
    }

    pub fn len(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject malformed names, empty or CSS-breaking values, malformed colors
    /// and missing required tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for token in self.iter() {
            if !is_token_name(token.name) {
                return Err(ConfigError::Validation(format!(
                    "{}: token name '{}' must be non-empty and use only a-z, 0-9, '_' or '-'",
                    token.category.section(),
                    token.name
                )));
            }
            if token.value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{}.{} must not be empty",
                    token.category.section(),
                    token.name
                )));
            }
            if let Some(c) = token.value.chars().find(|c| FORBIDDEN_VALUE_CHARS.contains(c)) {
                return Err(ConfigError::Validation(format!(
                    "{}.{} must not contain '{}'",
                    token.category.section(),
                    token.name,
                    c
                )));
            }
            if token.category == TokenCategory::Color && !token.value.starts_with('#') {
                return Err(ConfigError::Validation(format!(
                    "colors.{} must be a hex color starting with '#', got '{}'",
                    token.name, token.value
                )));
            }
        }
        for (category, name) in REQUIRED_TOKENS {
            if self.get(*category, name).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{}.{} is required by the stylesheet",
                    category.section(),
                    name
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Theme loading, merging, and validation
// =============================================================================

/// The stock tokens as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(DesignTokens::default()).expect("default tokens must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `theme.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` when the directory has no theme file.
pub fn load_raw_theme(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(THEME_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_tokens(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<DesignTokens, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let tokens: DesignTokens = merged.try_into()?;
    tokens.validate()?;
    Ok(tokens)
}

/// Load the token set for a config directory: stock defaults plus `theme.toml`.
pub fn load_tokens(dir: &Path) -> Result<DesignTokens, ConfigError> {
    resolve_tokens(stock_defaults_value(), load_raw_theme(dir)?)
}

/// A fully-commented stock `theme.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Mavera Hall Theme
# =================
# All settings are optional. Values shown below are the defaults.
# Each section only needs the keys it wants to override; extra names
# become additional tokens (available as CSS custom properties).
# Unknown sections will cause an error.

# ---------------------------------------------------------------------------
# Colors -> --color-<name>
# ---------------------------------------------------------------------------
[colors]
primary = "#2D5A4A"       # Headings, nav, accents
secondary = "#C9A96E"     # Highlights and fact labels
background = "#FAF8F5"
surface = "#FFFFFF"       # Cards
text = "#1F2A27"
muted = "#6B7A75"         # Secondary text
border = "#E4DED4"

# ---------------------------------------------------------------------------
# Fonts -> --font-<name>
# ---------------------------------------------------------------------------
[fonts]
heading = "'Playfair Display', Georgia, serif"
body = "'Inter', system-ui, sans-serif"

# ---------------------------------------------------------------------------
# Spacing scale -> --space-<name>
# ---------------------------------------------------------------------------
[spacing]
xs = "0.25rem"
sm = "0.5rem"
md = "1rem"
lg = "2rem"
xl = "4rem"

# ---------------------------------------------------------------------------
# Layout widths -> --max-width-<name>
# ---------------------------------------------------------------------------
[max_width]
content = "1200px"
"##
}

/// Generate a `:root` block declaring one CSS custom property per token.
pub fn generate_token_css(tokens: &DesignTokens) -> String {
    let mut css = String::from(":root {\n");
    for token in tokens.iter() {
        css.push_str(&format!(
            "    --{}-{}: {};\n",
            token.category.css_prefix(),
            token.name.replace('_', "-"),
            token.value
        ));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn primary_color_lookup() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.get_token("color", "primary").unwrap(), "#2D5A4A");
        assert_eq!(tokens.get(TokenCategory::Color, "primary").unwrap(), "#2D5A4A");
    }

    #[test]
    fn unknown_token_is_error() {
        let tokens = DesignTokens::default();
        let err = tokens.get_token("color", "nonexistent").unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownToken {
                category: "color".to_string(),
                name: "nonexistent".to_string(),
            }
        );
    }

    #[test]
    fn unknown_category_is_unknown_token() {
        let tokens = DesignTokens::default();
        let err = tokens.get_token("shadow", "card").unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownToken {
                category: "shadow".to_string(),
                name: "card".to_string(),
            }
        );
    }

    #[test]
    fn category_aliases_resolve() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.get_token("maxWidth", "content").unwrap(), "1200px");
        assert_eq!(tokens.get_token("max_width", "content").unwrap(), "1200px");
        assert_eq!(tokens.get_token("fonts", "body").unwrap(), "'Inter', system-ui, sans-serif");
        assert_eq!(tokens.get_token("spacing", "lg").unwrap(), "2rem");
    }

    #[test]
    fn same_name_in_different_categories_is_distinct() {
        let tokens = DesignTokens::default();
        // "text" is a color, not a font
        assert!(tokens.get(TokenCategory::Color, "text").is_ok());
        assert!(tokens.get(TokenCategory::Font, "text").is_err());
    }

    #[test]
    fn iter_orders_by_category_then_name() {
        let tokens = DesignTokens::default();
        let all: Vec<_> = tokens.iter().collect();
        assert_eq!(all.len(), tokens.len());
        assert_eq!(all.first().unwrap().category, TokenCategory::Color);
        assert_eq!(all.first().unwrap().name, "background");
        assert_eq!(all.last().unwrap().category, TokenCategory::MaxWidth);
        assert_eq!(all.last().unwrap().name, "content");
    }

    #[test]
    fn default_tokens_are_valid() {
        DesignTokens::default().validate().unwrap();
    }

    #[test]
    fn stock_toml_matches_defaults() {
        let parsed: DesignTokens = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, DesignTokens::default());
    }

    #[test]
    fn token_css_declares_custom_properties() {
        let css = generate_token_css(&DesignTokens::default());
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #2D5A4A;"));
        assert!(css.contains("--font-heading: 'Playfair Display', Georgia, serif;"));
        assert!(css.contains("--space-md: 1rem;"));
        assert!(css.contains("--max-width-content: 1200px;"));
    }

    #[test]
    fn token_css_converts_underscores() {
        let mut tokens = DesignTokens::default();
        tokens
            .colors
            .insert("primary_dark".to_string(), "#1E4034".to_string());
        assert!(generate_token_css(&tokens).contains("--color-primary-dark: #1E4034;"));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_rejects_non_hex_color() {
        let mut tokens = DesignTokens::default();
        tokens.colors.insert("primary".to_string(), "green".to_string());
        assert!(matches!(tokens.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_empty_value() {
        let mut tokens = DesignTokens::default();
        tokens.spacing.insert("md".to_string(), "  ".to_string());
        let err = tokens.validate().unwrap_err();
        assert!(err.to_string().contains("spacing.md"));
    }

    #[test]
    fn validate_rejects_missing_required_token() {
        let mut tokens = DesignTokens::default();
        tokens.fonts.remove("heading");
        let err = tokens.validate().unwrap_err();
        assert!(err.to_string().contains("fonts.heading"));
    }

    #[test]
    fn validate_rejects_malformed_name() {
        let mut tokens = DesignTokens::default();
        tokens
            .colors
            .insert("bad name;}".to_string(), "#fff".to_string());
        let err = tokens.validate().unwrap_err();
        assert!(err.to_string().contains("bad name;}"));

        let mut tokens = DesignTokens::default();
        tokens.spacing.insert("Huge".to_string(), "8rem".to_string());
        assert!(matches!(tokens.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_accepts_dashed_and_underscored_names() {
        let mut tokens = DesignTokens::default();
        tokens
            .colors
            .insert("primary_dark".to_string(), "#1E4034".to_string());
        tokens.spacing.insert("2xl".to_string(), "6rem".to_string());
        tokens
            .max_width
            .insert("narrow-text".to_string(), "65ch".to_string());
        tokens.validate().unwrap();
    }

    #[test]
    fn validate_rejects_values_that_break_out_of_css() {
        for value in [
            "serif</style><script>alert(1)</script>",
            "serif; color: red",
            "serif } body {",
            "{",
        ] {
            let mut tokens = DesignTokens::default();
            tokens.fonts.insert("body".to_string(), value.to_string());
            let err = tokens.validate().unwrap_err();
            assert!(err.to_string().contains("fonts.body"), "{value}: {err}");
        }
    }

    #[test]
    fn load_tokens_rejects_style_injection() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(THEME_FILENAME),
            "[fonts]\nbody = \"serif</style><script>alert(1)</script>\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_tokens(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // load_tokens
    // =========================================================================

    #[test]
    fn load_tokens_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let tokens = load_tokens(tmp.path()).unwrap();
        assert_eq!(tokens, DesignTokens::default());
    }

    #[test]
    fn load_tokens_merges_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(THEME_FILENAME),
            r##"
[colors]
primary = "#1E4034"
accent = "#B5543C"
"##,
        )
        .unwrap();

        let tokens = load_tokens(tmp.path()).unwrap();
        assert_eq!(tokens.get_token("color", "primary").unwrap(), "#1E4034");
        assert_eq!(tokens.get_token("color", "accent").unwrap(), "#B5543C");
        // Untouched values keep their defaults
        assert_eq!(tokens.get_token("color", "secondary").unwrap(), "#C9A96E");
        assert_eq!(tokens.get_token("maxWidth", "content").unwrap(), "1200px");
    }

    #[test]
    fn load_tokens_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(THEME_FILENAME), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_tokens(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_tokens_rejects_unknown_section() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(THEME_FILENAME),
            "[shadows]\ncard = \"0 1px 2px #0002\"\n",
        )
        .unwrap();
        assert!(matches!(load_tokens(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_tokens_validates_merged_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(THEME_FILENAME),
            "[colors]\nprimary = \"teal\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_tokens(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn merge_toml_overlay_wins_and_base_is_kept() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }
}
