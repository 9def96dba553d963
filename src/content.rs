//! Page content loaded from `content.toml`.
//!
//! Everything the page says lives in one data file, separate from the
//! rendering code: section copy, navigation, social links, and the three asset
//! sections (team, events, partners) with their metadata tables.
//!
//! ## Resolution
//!
//! - `<source>/content.toml` if it exists, parsed as a complete document
//!   (no merging with the stock content, so metadata tables never mix).
//! - Otherwise the stock content embedded in the binary
//!   (`simple-landing gen-content` prints it).
//!
//! ## Lifecycle
//!
//! The CLI loads content once and hands it to [`install`], which stores it in
//! a process-wide [`OnceLock`]. After that the value is immutable for the rest
//! of the run and is never torn down. Library callers and tests can skip the
//! global and pass a [`SiteContent`] around directly.

use crate::metadata::{EventMeta, MetaTable, PartnerMeta, PersonMeta};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
    #[error("Site content is already installed")]
    AlreadyInstalled,
}

const STOCK_CONTENT: &str = include_str!("../static/content.toml");

static INSTALLED: OnceLock<SiteContent> = OnceLock::new();

/// The whole page, section by section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub nav: Vec<NavLink>,
    pub socials: Vec<Social>,
    pub hero: Hero,
    pub about: About,
    pub programs: Vec<Program>,
    pub team: TeamSection,
    pub events: EventsSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    pub partners: PartnersSection,
    pub cta: CallToAction,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Organization name, used in `<title>` and image alt text.
    pub name: String,
    /// Wordmark shown next to the logo.
    pub brand: String,
    /// Logo path relative to the assets directory.
    pub logo: String,
    pub tagline: String,
    pub copyright: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            brand: String::new(),
            logo: "logo.png".to_string(),
            tagline: String::new(),
            copyright: String::new(),
        }
    }
}

/// An in-page anchor link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    /// Section id without the leading `#`.
    pub target: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    X,
    Whatsapp,
    Instagram,
    Tiktok,
    #[default]
    Other,
}

impl SocialKind {
    /// Short glyph shown inside the round social button.
    pub fn glyph(self) -> &'static str {
        match self {
            SocialKind::X => "𝕏",
            SocialKind::Whatsapp => "WA",
            SocialKind::Instagram => "IG",
            SocialKind::Tiktok => "TT",
            SocialKind::Other => "↗",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SocialKind::X => "social-x",
            SocialKind::Whatsapp => "social-whatsapp",
            SocialKind::Instagram => "social-instagram",
            SocialKind::Tiktok => "social-tiktok",
            SocialKind::Other => "social-other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    /// Accessible label, e.g. `"Instagram"`.
    pub label: String,
    #[serde(default)]
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Hero {
    pub heading: String,
    /// Second heading line in the brand color.
    pub highlight: String,
    pub lead: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    pub heading: String,
    /// Markdown.
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramIcon {
    #[default]
    Code,
    Rocket,
    Users,
    Book,
}

impl ProgramIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ProgramIcon::Code => "</>",
            ProgramIcon::Rocket => "🚀",
            ProgramIcon::Users => "👥",
            ProgramIcon::Book => "📖",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Program {
    pub title: String,
    #[serde(default)]
    pub icon: ProgramIcon,
    /// Markdown.
    pub body: String,
}

/// Where an asset section's images come from.
///
/// Implemented by the three asset sections so scan can resolve their tokens
/// the same way.
pub trait AssetSection {
    /// Section name used in messages (`"team"`, `"events"`, `"partners"`).
    fn name(&self) -> &'static str;
    /// Sub-directory of the content root holding the images.
    fn dir(&self) -> &str;
    /// Explicit ordered token list, if given.
    fn files(&self) -> Option<&[String]>;
    /// Keys of the metadata table.
    fn meta_keys(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamSection {
    pub heading: String,
    pub intro: String,
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    pub meta: MetaTable<PersonMeta>,
}

impl Default for TeamSection {
    fn default() -> Self {
        Self {
            heading: String::new(),
            intro: String::new(),
            dir: "team".to_string(),
            files: None,
            meta: MetaTable::new(),
        }
    }
}

impl AssetSection for TeamSection {
    fn name(&self) -> &'static str {
        "team"
    }
    fn dir(&self) -> &str {
        &self.dir
    }
    fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }
    fn meta_keys(&self) -> Vec<&str> {
        self.meta.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsSection {
    pub heading: String,
    pub intro: String,
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    pub meta: MetaTable<EventMeta>,
    /// Card shown beside the first event image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<FeaturedEvent>,
    pub past_heading: String,
    /// How many images after the first make up the past gallery.
    pub past_limit: usize,
}

impl Default for EventsSection {
    fn default() -> Self {
        Self {
            heading: String::new(),
            intro: String::new(),
            dir: "events".to_string(),
            files: None,
            meta: MetaTable::new(),
            featured: None,
            past_heading: String::new(),
            past_limit: 6,
        }
    }
}

impl AssetSection for EventsSection {
    fn name(&self) -> &'static str {
        "events"
    }
    fn dir(&self) -> &str {
        &self.dir
    }
    fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }
    fn meta_keys(&self) -> Vec<&str> {
        self.meta.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturedEvent {
    pub badge: String,
    pub title: String,
    pub body: String,
    pub instructor: Option<String>,
    pub instructor_url: Option<String>,
    pub cta_label: String,
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Schedule {
    pub heading: String,
    pub intro: String,
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub facts: Vec<ScheduleFact>,
    pub learn_heading: String,
    pub learn: Vec<String>,
    pub reserve_label: String,
    pub reserve_url: Option<String>,
    pub join_label: String,
    pub join_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleFact {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartnersSection {
    pub heading: String,
    pub intro: String,
    pub dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    pub meta: MetaTable<PartnerMeta>,
    pub cta_prompt: String,
    pub cta_label: String,
}

impl Default for PartnersSection {
    fn default() -> Self {
        Self {
            heading: String::new(),
            intro: String::new(),
            dir: "partners".to_string(),
            files: None,
            meta: MetaTable::new(),
            cta_prompt: String::new(),
            cta_label: String::new(),
        }
    }
}

impl AssetSection for PartnersSection {
    fn name(&self) -> &'static str {
        "partners"
    }
    fn dir(&self) -> &str {
        &self.dir
    }
    fn files(&self) -> Option<&[String]> {
        self.files.as_deref()
    }
    fn meta_keys(&self) -> Vec<&str> {
        self.meta.keys().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CallToAction {
    pub heading: String,
    pub body: String,
    pub label: String,
    pub url: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub quick_links_heading: String,
    pub quick_links: Vec<NavLink>,
    pub connect_heading: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SiteContent {
    /// Check the values the renderer relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.site.name.trim().is_empty() {
            return Err(ContentError::Validation("site.name must not be empty".into()));
        }
        if self.events.past_limit == 0 {
            return Err(ContentError::Validation(
                "events.past_limit must be at least 1".into(),
            ));
        }
        let sections: [&dyn AssetSection; 3] = [&self.team, &self.events, &self.partners];
        for section in sections {
            if section.dir().trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "{}.dir must not be empty",
                    section.name()
                )));
            }
            if let Some(files) = section.files()
                && files.iter().any(|f| f.trim().is_empty())
            {
                return Err(ContentError::Validation(format!(
                    "{}.files must not contain empty entries",
                    section.name()
                )));
            }
        }
        if let Some(social) = self.socials.iter().find(|s| s.url.trim().is_empty()) {
            return Err(ContentError::Validation(format!(
                "socials entry '{}' has an empty url",
                social.label
            )));
        }
        Ok(())
    }
}

/// Parse and validate a content document.
pub fn parse_content(text: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = toml::from_str(text)?;
    content.validate()?;
    Ok(content)
}

/// The content embedded in the binary.
pub fn stock_content() -> SiteContent {
    parse_content(STOCK_CONTENT).expect("stock content must parse")
}

/// The stock `content.toml`, printed by `gen-content`.
pub fn stock_content_toml() -> &'static str {
    STOCK_CONTENT
}

/// Load `content.toml` from the content root, falling back to stock content.
pub fn load_content(root: &Path) -> Result<SiteContent, ContentError> {
    let path = root.join("content.toml");
    if !path.exists() {
        tracing::info!(path = %path.display(), "no content.toml, using stock content");
        return Ok(stock_content());
    }
    let text = fs::read_to_string(&path)?;
    parse_content(&text)
}

/// Store the content for the rest of the process. Fails if called twice.
pub fn install(content: SiteContent) -> Result<&'static SiteContent, ContentError> {
    INSTALLED
        .set(content)
        .map_err(|_| ContentError::AlreadyInstalled)?;
    INSTALLED.get().ok_or(ContentError::AlreadyInstalled)
}
