//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Presentation
//! settings live here; page copy and asset lists live in `content.toml`
//! (see [`crate::content`]).
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # Presentation settings (optional)
//! ├── content.toml     # Page copy and asset lists (optional)
//! ├── assets/          # Logo, favicon → copied to output root
//! ├── team/
//! ├── events/
//! └── partners/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"        # Copied verbatim to the output root
//!
//! [colors]
//! brand = "#6B21F8"            # Buttons, accents, wordmark
//! brand_hover = "#5B11E8"
//! background = "#ffffff"
//! surface = "#faf5ff"          # Tinted section backgrounds
//! text = "#111827"
//! text_muted = "#4b5563"
//! footer_background = "#111827"
//! footer_text = "#9ca3af"
//! whatsapp = "#25D366"
//!
//! [theme]
//! container_width = "72rem"
//! card_radius = "1rem"
//! avatar_gradients = ["linear-gradient(135deg, #e9d5ff, #c084fc)", ...]
//!
//! [theme.section_padding_y]
//! size = "8vw"
//! min = "3rem"
//! max = "5rem"
//!
//! [header]
//! scroll_threshold = 20        # Pixels scrolled before the header turns solid
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [colors]
//! brand = "#0f766e"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory of static files copied to the output root.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Page color palette.
    pub colors: ColorConfig,
    /// Layout sizes and avatar gradients.
    pub theme: ThemeConfig,
    /// Sticky header behavior.
    pub header: HeaderConfig,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.avatar_gradients.is_empty() {
            return Err(ConfigError::Validation(
                "theme.avatar_gradients must not be empty".into(),
            ));
        }
        if let Some(name) = self.colors.first_empty() {
            return Err(ConfigError::Validation(format!(
                "colors.{name} must not be empty"
            )));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Sticky header settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Vertical scroll offset in pixels after which the header gets a solid
    /// background and shadow.
    pub scroll_threshold: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 20,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"3rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"5rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Max width of the centered content column.
    pub container_width: String,
    /// Vertical padding of each page section.
    pub section_padding_y: ClampSize,
    /// Corner radius of cards and gallery tiles.
    pub card_radius: String,
    /// Backgrounds behind team avatars, cycled by roster position.
    pub avatar_gradients: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            container_width: "72rem".to_string(),
            section_padding_y: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "5rem".to_string(),
            },
            card_radius: "1rem".to_string(),
            avatar_gradients: vec![
                "linear-gradient(135deg, #e9d5ff, #c084fc)".to_string(),
                "linear-gradient(135deg, #bfdbfe, #60a5fa)".to_string(),
                "linear-gradient(135deg, #fbcfe8, #f472b6)".to_string(),
            ],
        }
    }
}

impl ThemeConfig {
    /// Avatar background for the roster entry at `index`.
    pub fn avatar_gradient(&self, index: usize) -> &str {
        match self.avatar_gradients.len() {
            0 => "none",
            n => &self.avatar_gradients[index % n],
        }
    }
}

/// Page color palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Primary brand color: buttons, accents, wordmark.
    pub brand: String,
    /// Brand color on hover.
    pub brand_hover: String,
    /// Page background.
    pub background: String,
    /// Tinted background for alternating sections.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text color (intros, captions, roles).
    pub text_muted: String,
    /// Footer background.
    pub footer_background: String,
    /// Footer text.
    pub footer_text: String,
    /// WhatsApp call-to-action buttons.
    pub whatsapp: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            brand: "#6B21F8".to_string(),
            brand_hover: "#5B11E8".to_string(),
            background: "#ffffff".to_string(),
            surface: "#faf5ff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            footer_background: "#111827".to_string(),
            footer_text: "#9ca3af".to_string(),
            whatsapp: "#25D366".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("brand", self.brand.as_str()),
            ("brand_hover", self.brand_hover.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("footer_background", self.footer_background.as_str()),
            ("footer_text", self.footer_text.as_str()),
            ("whatsapp", self.whatsapp.as_str()),
        ]
    }

    fn first_empty(&self) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Landing Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Page copy, team/event/partner lists and their metadata live in
# content.toml (see `simple-landing gen-content`).
#
# Unknown keys will cause an error.

# Directory of static files (logo, favicon) copied to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
brand = "#6B21F8"             # Buttons, accents, wordmark
brand_hover = "#5B11E8"
background = "#ffffff"
surface = "#faf5ff"           # Tinted section backgrounds
text = "#111827"
text_muted = "#4b5563"        # Intros, captions, roles
footer_background = "#111827"
footer_text = "#9ca3af"
whatsapp = "#25D366"          # WhatsApp buttons

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Max width of the centered content column (CSS value).
container_width = "72rem"

# Corner radius of cards and gallery tiles (CSS value).
card_radius = "1rem"

# Backgrounds behind team avatars, cycled by roster position.
avatar_gradients = [
    "linear-gradient(135deg, #e9d5ff, #c084fc)",
    "linear-gradient(135deg, #bfdbfe, #60a5fa)",
    "linear-gradient(135deg, #fbcfe8, #f472b6)",
]

# Vertical padding of each section, as CSS clamp(min, size, max).
[theme.section_padding_y]
size = "8vw"
min = "3rem"
max = "5rem"

# ---------------------------------------------------------------------------
# Header
# ---------------------------------------------------------------------------
[header]
# Pixels scrolled before the header gets a solid background and shadow.
scroll_threshold = 20
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-brand: {brand};
    --color-brand-hover: {brand_hover};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-footer-bg: {footer_background};
    --color-footer-text: {footer_text};
    --color-whatsapp: {whatsapp};
}}"#,
        brand = colors.brand,
        brand_hover = colors.brand_hover,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        footer_background = colors.footer_background,
        footer_text = colors.footer_text,
        whatsapp = colors.whatsapp,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --container-width: {container_width};
    --section-padding-y: {section_padding_y};
    --card-radius: {card_radius};
}}"#,
        container_width = theme.container_width,
        section_padding_y = theme.section_padding_y.to_css(),
        card_radius = theme.card_radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_brand_colors() {
        let config = SiteConfig::default();
        assert_eq!(config.colors.brand, "#6B21F8");
        assert_eq!(config.colors.brand_hover, "#5B11E8");
        assert_eq!(config.colors.whatsapp, "#25D366");
    }

    #[test]
    fn default_config_has_assets_dir() {
        let config = SiteConfig::default();
        assert_eq!(config.assets_dir, "assets");
    }

    #[test]
    fn default_config_has_theme_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.container_width, "72rem");
        assert_eq!(config.theme.avatar_gradients.len(), 3);
        assert_eq!(
            config.theme.section_padding_y.to_css(),
            "clamp(3rem, 8vw, 5rem)"
        );
        assert_eq!(config.header.scroll_threshold, 20);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
brand = "#0f766e"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.brand, "#0f766e");
        // Default values preserved
        assert_eq!(config.colors.brand_hover, "#5B11E8");
        assert_eq!(config.theme.card_radius, "1rem");
    }

    #[test]
    fn parse_header_settings() {
        let toml = r#"
[header]
scroll_threshold = 64
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.header.scroll_threshold, 64);
    }

    #[test]
    fn avatar_gradient_cycles_by_index() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.avatar_gradient(0), theme.avatar_gradient(3));
        assert_eq!(theme.avatar_gradient(1), theme.avatar_gradient(4));
        assert_ne!(theme.avatar_gradient(0), theme.avatar_gradient(1));
    }

    #[test]
    fn avatar_gradient_empty_list_is_none() {
        let theme = ThemeConfig {
            avatar_gradients: vec![],
            ..ThemeConfig::default()
        };
        assert_eq!(theme.avatar_gradient(5), "none");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorConfig {
            brand: "#123456".to_string(),
            ..ColorConfig::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-brand: #123456"));
        assert!(css.contains("--color-whatsapp: #25D366"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-brand:",
            "--color-brand-hover:",
            "--color-bg:",
            "--color-surface:",
            "--color-text:",
            "--color-text-muted:",
            "--color-footer-bg:",
            "--color-footer-text:",
            "--color-whatsapp:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn generate_theme_css_includes_layout_variables() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--container-width: 72rem"));
        assert!(css.contains("--section-padding-y: clamp(3rem, 8vw, 5rem)"));
        assert!(css.contains("--card-radius: 1rem"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.colors.brand, "#6B21F8");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
assets_dir = "static"

[colors]
text = "#000000"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.assets_dir, "static");
        assert_eq!(config.colors.text, "#000000");
        // Unspecified values should be defaults
        assert_eq!(config.colors.brand, "#6B21F8");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_overlay_replaces_gradient_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[theme]
avatar_gradients = ["#eee"]
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.theme.avatar_gradients, vec!["#eee"]);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"threshold = 20"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"threshold = 40"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("threshold").unwrap().as_integer(), Some(40));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[theme.section_padding_y]
size = "8vw"
min = "3rem"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[theme.section_padding_y]
size = "10vw"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let padding = merged.get("theme").unwrap().get("section_padding_y").unwrap();
        assert_eq!(padding.get("size").unwrap().as_str(), Some("10vw"));
        assert_eq!(padding.get("min").unwrap().as_str(), Some("3rem"));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r##"
[colors]
brnad = "#000"
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[images]\nquality = 90");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[header]\nthreshold = 3\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_gradients() {
        let mut config = SiteConfig::default();
        config.theme.avatar_gradients.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("avatar_gradients"));
    }

    #[test]
    fn validate_empty_color() {
        let mut config = SiteConfig::default();
        config.colors.surface = " ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.surface"));
    }

    #[test]
    fn validate_empty_assets_dir() {
        let config = SiteConfig {
            assets_dir: String::new(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[theme]\navatar_gradients = []\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // resolve_config / stock tests
    // =========================================================================

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config.header.scroll_threshold, 20);
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str("[header]\nscroll_threshold = 5\n").unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.header.scroll_threshold, 5);
        assert_eq!(config.colors.brand, "#6B21F8");
    }

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.colors.brand, defaults.colors.brand);
        assert_eq!(config.colors.footer_text, defaults.colors.footer_text);
        assert_eq!(config.theme.avatar_gradients, defaults.theme.avatar_gradients);
        assert_eq!(
            config.theme.section_padding_y.to_css(),
            defaults.theme.section_padding_y.to_css()
        );
        assert_eq!(config.header.scroll_threshold, defaults.header.scroll_threshold);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[colors]"));
        assert!(content.contains("[theme]"));
        assert!(content.contains("[theme.section_padding_y]"));
        assert!(content.contains("[header]"));
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("colors").is_some());
        assert!(val.get("theme").is_some());
        assert!(val.get("header").is_some());
    }
}
