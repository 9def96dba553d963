//! HTML page generation.
//!
//! Stage 2 of the Simple Landing build pipeline. Takes the scan manifest and
//! writes a single static landing page plus its images.
//!
//! ## Page Sections
//!
//! In document order, each with the anchor id the navigation links to:
//!
//! | Section | Id | Source |
//! |---------|----|--------|
//! | Header | | logo, wordmark, `[[nav]]`, checkbox-driven mobile menu |
//! | Hero | `home` | `[hero]`, `[[socials]]` |
//! | About | `about` | `[about]` (markdown) |
//! | Programs | `programs` | `[[programs]]` |
//! | Team | `team` | sorted roster |
//! | Events | `events` | featured card + past gallery |
//! | Schedule | `schedule` | `[schedule]`, omitted when absent |
//! | Partners | `partners` | partner logos in source order |
//! | Join | `join` | `[cta]` |
//! | Footer | `contact` | `[contact]`, `[[socials]]` |
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # The page
//! ├── logo.png            # Everything from <source>/assets/
//! ├── team/               # Copied from <source>/team/
//! ├── events/
//! └── partners/
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into the page:
//! - `static/style.css`: Base styles (colors and sizes injected from config)
//! - `static/nav.js`: Header scroll state and mobile menu closing
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text is escaped; only markdown bodies rendered by
//! pulldown-cmark are inserted pre-escaped.

use crate::config::{self, SiteConfig};
use crate::content::{Contact, FeaturedEvent, NavLink, Schedule, SiteContent, Social};
use crate::scan::Manifest;
use crate::types::{EventGallery, EventRecord, PartnerRecord, PersonRecord};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What generate wrote.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub index: PathBuf,
    /// Files copied into the output directory, relative to it.
    pub copied: Vec<String>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/nav.js");

/// Files that live next to the images but are never published.
const SKIPPED_EXTENSIONS: &[&str] = &["toml", "json"];

pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_from_manifest(&manifest, source_root, output_dir)
}

/// Render and copy from an in-memory manifest.
pub fn generate_from_manifest(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut copied = copy_assets(
        &source_root.join(&manifest.config.assets_dir),
        output_dir,
        output_dir,
    )?;
    let content = &manifest.content;
    for dir in [&content.team.dir, &content.events.dir, &content.partners.dir] {
        copied.extend(copy_assets(
            &source_root.join(dir),
            &output_dir.join(dir),
            output_dir,
        )?);
    }

    let css = build_css(&manifest.config);
    let page = render_page(manifest, &css);
    let index = output_dir.join("index.html");
    fs::write(&index, page.into_string())?;
    tracing::info!(path = %index.display(), "wrote page");

    Ok(GenerateReport { index, copied })
}

/// Color and theme variables followed by the static stylesheet.
pub fn build_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Copy every publishable file under `src` into `dst`.
///
/// A missing `src` copies nothing. Returned paths are relative to `out_root`.
fn copy_assets(src: &Path, dst: &Path, out_root: &Path) -> Result<Vec<String>, GenerateError> {
    if !src.is_dir() {
        tracing::debug!(path = %src.display(), "asset directory missing, nothing to copy");
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        let skipped = entry
            .path()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| SKIPPED_EXTENSIONS.contains(&e.as_str()));
        if skipped {
            continue;
        }
        fs::copy(entry.path(), &target)?;
        tracing::debug!(from = %entry.path().display(), to = %target.display(), "copied");
        if let Ok(out_rel) = target.strip_prefix(out_root) {
            copied.push(out_rel.to_string_lossy().to_string());
        }
    }
    Ok(copied)
}

/// Image path relative to the page: `<dir>/<file>`.
fn asset_src(dir: &str, file: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), file)
}

/// Absolute URLs pass through; anything else is a path under the output root.
fn image_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("./{path}")
    }
}

fn render_markdown(text: &str) -> Markup {
    let parser = Parser::new(text);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(content: &SiteContent, css: &str, scroll_threshold: u32, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !content.site.tagline.is_empty() {
                    meta name="description" content=(content.site.tagline);
                }
                title { (content.site.name) }
                style { (PreEscaped(css)) }
            }
            body data-scroll-threshold=(scroll_threshold) {
                (body)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the sticky header with logo, wordmark and anchor navigation
fn site_header(content: &SiteContent) -> Markup {
    html! {
        header.site-header {
            div.container.header-inner {
                a.brand href="#home" {
                    img.brand-logo src=(image_url(&content.site.logo)) alt=(content.site.name);
                    span.brand-name { (content.site.brand) }
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.site-nav {
                    (render_nav(&content.nav))
                }
            }
        }
    }
}

/// Renders in-page anchor links
pub fn render_nav(items: &[NavLink]) -> Markup {
    html! {
        ul {
            @for item in items {
                li { a href={ "#" (item.target) } { (item.label) } }
            }
        }
    }
}

fn render_socials(socials: &[Social]) -> Markup {
    html! {
        @if !socials.is_empty() {
            div.socials {
                @for social in socials {
                    a class={ "social-link " (social.kind.css_class()) }
                        href=(social.url) aria-label=(social.label)
                        target="_blank" rel="noopener" {
                        (social.kind.glyph())
                    }
                }
            }
        }
    }
}

fn section_heading(heading: &str, intro: &str) -> Markup {
    html! {
        div.section-heading {
            h2 { (heading) }
            @if !intro.is_empty() {
                p.section-intro { (intro) }
            }
        }
    }
}

// ============================================================================
// Page Sections
// ============================================================================

fn render_hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    html! {
        section.hero id="home" {
            div.container {
                h1 {
                    (hero.heading)
                    @if !hero.highlight.is_empty() {
                        br;
                        span.highlight { (hero.highlight) }
                    }
                }
                @if !hero.lead.is_empty() {
                    p.lead { (hero.lead) }
                }
                (render_socials(&content.socials))
                @if !hero.cta_label.is_empty() {
                    a.button.button-primary href="#join" { (hero.cta_label) }
                }
            }
        }
    }
}

fn render_about(content: &SiteContent) -> Markup {
    html! {
        section.about id="about" {
            div.container {
                h2 { (content.about.heading) }
                div.prose { (render_markdown(&content.about.body)) }
            }
        }
        @if !content.programs.is_empty() {
            section.programs id="programs" {
                div.container {
                    div.program-grid {
                        @for program in &content.programs {
                            article.card.program-card {
                                span.program-icon aria-hidden="true" { (program.icon.glyph()) }
                                h3 { (program.title) }
                                div.prose { (render_markdown(&program.body)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_team(manifest: &Manifest) -> Markup {
    let team = &manifest.content.team;
    html! {
        section.team id="team" {
            div.container {
                (section_heading(&team.heading, &team.intro))
                div.team-grid {
                    @for (index, person) in manifest.team.iter().enumerate() {
                        (render_person(person, &team.dir, manifest.config.theme.avatar_gradient(index)))
                    }
                }
            }
        }
    }
}

/// One roster card. Placeholder links still render, with `href="#"`.
fn render_person(person: &PersonRecord, dir: &str, gradient: &str) -> Markup {
    html! {
        article.card.team-card data-tier=(person.tier.rank()) {
            div.avatar style={ "background: " (gradient) } {
                img src=(asset_src(dir, &person.file)) alt=(person.display_name) loading="lazy";
            }
            h3.person-name { (person.display_name) }
            p.person-role { (person.role) }
            div.person-links {
                a.person-link.link-x href=(person.x.href()) aria-label={ (person.display_name) " on X" }
                    target=[(!person.x.is_placeholder()).then_some("_blank")] rel="noopener" {
                    "𝕏"
                }
                a.person-link.link-linkedin href=(person.linkedin.href())
                    aria-label={ (person.display_name) " on LinkedIn" }
                    target=[(!person.linkedin.is_placeholder()).then_some("_blank")] rel="noopener" {
                    "in"
                }
            }
        }
    }
}

fn render_events(manifest: &Manifest) -> Markup {
    let events = &manifest.content.events;
    let gallery: &EventGallery = &manifest.events;
    html! {
        section.events id="events" {
            div.container {
                (section_heading(&events.heading, &events.intro))
                @if let Some(record) = &gallery.featured {
                    (render_featured(record, events.featured.as_ref(), &events.dir))
                }
                @if !gallery.past.is_empty() {
                    h3.past-heading { (events.past_heading) }
                    div.event-grid {
                        @for record in &gallery.past {
                            (render_event_card(record, &events.dir))
                        }
                    }
                }
            }
        }
    }
}

/// The first event image next to the ongoing event card.
fn render_featured(record: &EventRecord, card: Option<&FeaturedEvent>, dir: &str) -> Markup {
    html! {
        div.featured-event {
            img.featured-image src=(asset_src(dir, &record.file)) alt=(record.title);
            div.card.featured-card {
                @match card {
                    Some(card) => {
                        @if !card.badge.is_empty() {
                            span.badge { (card.badge) }
                        }
                        h3 { (card.title) }
                        p { (card.body) }
                        @if let Some(instructor) = &card.instructor {
                            p.instructor {
                                "Instructor: "
                                @match &card.instructor_url {
                                    Some(url) => {
                                        a href=(url) target="_blank" rel="noopener" { (instructor) }
                                    }
                                    None => { (instructor) }
                                }
                            }
                        }
                        @if let Some(url) = &card.cta_url {
                            a.button.button-primary href=(url) target="_blank" rel="noopener" { (card.cta_label) }
                        }
                    }
                    None => {
                        h3 { (record.title) }
                        p { (record.description) }
                    }
                }
            }
        }
    }
}

fn render_event_card(record: &EventRecord, dir: &str) -> Markup {
    html! {
        figure.event-card {
            img src=(asset_src(dir, &record.file)) alt=(record.title) loading="lazy";
            figcaption {
                h4 { (record.title) }
                p { (record.description) }
            }
        }
    }
}

fn render_schedule(schedule: &Schedule) -> Markup {
    html! {
        section.schedule id="schedule" {
            div.container {
                (section_heading(&schedule.heading, &schedule.intro))
                article.card.schedule-card {
                    @if !schedule.badge.is_empty() {
                        span.badge { (schedule.badge) }
                    }
                    h3 { (schedule.title) }
                    @if !schedule.subtitle.is_empty() {
                        p.subtitle { (schedule.subtitle) }
                    }
                    dl.facts {
                        @for fact in &schedule.facts {
                            dt { (fact.label) }
                            dd {
                                @match &fact.url {
                                    Some(url) => {
                                        a href=(url) target="_blank" rel="noopener" { (fact.value) }
                                    }
                                    None => { (fact.value) }
                                }
                            }
                        }
                    }
                    @if !schedule.learn.is_empty() {
                        h4 { (schedule.learn_heading) }
                        ul.learn-list {
                            @for item in &schedule.learn {
                                li { (item) }
                            }
                        }
                    }
                    div.schedule-actions {
                        @if !schedule.reserve_label.is_empty() {
                            a.button.button-primary href=(schedule.reserve_url.as_deref().unwrap_or("#join")) {
                                (schedule.reserve_label)
                            }
                        }
                        @if let Some(url) = &schedule.join_url {
                            a.button.button-whatsapp href=(url) target="_blank" rel="noopener" {
                                (schedule.join_label)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_partners(manifest: &Manifest) -> Markup {
    let partners = &manifest.content.partners;
    html! {
        section.partners id="partners" {
            div.container {
                (section_heading(&partners.heading, &partners.intro))
                div.partner-grid {
                    @for partner in &manifest.partners {
                        (render_partner(partner, &partners.dir))
                    }
                }
                @if !partners.cta_label.is_empty() {
                    div.partner-cta {
                        p { (partners.cta_prompt) }
                        a.button.button-primary href="#contact" { (partners.cta_label) }
                    }
                }
            }
        }
    }
}

/// A partner without an X link gets no icon at all.
fn render_partner(partner: &PartnerRecord, dir: &str) -> Markup {
    html! {
        article.card.partner-card {
            img.partner-logo src=(asset_src(dir, &partner.file)) alt=(partner.display_name) loading="lazy";
            h3 { (partner.display_name) }
            p { (partner.description) }
            @if !partner.x.is_placeholder() {
                a.person-link.link-x href=(partner.x.href())
                    aria-label={ (partner.display_name) " on X" } target="_blank" rel="noopener" {
                    "𝕏"
                }
            }
        }
    }
}

fn render_join(content: &SiteContent) -> Markup {
    let cta = &content.cta;
    let style = cta
        .background_image
        .as_deref()
        .map(|img| format!("background-image: url('{}')", image_url(img)));
    html! {
        section.join id="join" style=[style] {
            div.container {
                h2 { (cta.heading) }
                p { (cta.body) }
                @if let Some(url) = &cta.url {
                    a.button.button-light href=(url) target="_blank" rel="noopener" { (cta.label) }
                }
            }
        }
    }
}

fn render_footer(content: &SiteContent) -> Markup {
    let contact: &Contact = &content.contact;
    html! {
        footer.site-footer id="contact" {
            div.container.footer-grid {
                div.footer-brand {
                    span.brand-name { (content.site.brand) }
                    p { (content.site.tagline) }
                }
                div.footer-links {
                    h4 { (contact.quick_links_heading) }
                    (render_nav(&contact.quick_links))
                }
                div.footer-connect {
                    h4 { (contact.connect_heading) }
                    @if let Some(email) = &contact.email {
                        p { a href={ "mailto:" (email) } { (email) } }
                    }
                    @if let Some(phone) = &contact.phone {
                        p { a href={ "tel:" (phone.replace(' ', "")) } { (phone) } }
                    }
                    (render_socials(&content.socials))
                }
            }
            p.copyright { (content.site.copyright) }
        }
    }
}

/// Renders the whole landing page
pub fn render_page(manifest: &Manifest, css: &str) -> Markup {
    let content = &manifest.content;
    let body = html! {
        (site_header(content))
        main {
            (render_hero(content))
            (render_about(content))
            (render_team(manifest))
            (render_events(manifest))
            @if let Some(schedule) = &content.schedule {
                (render_schedule(schedule))
            }
            (render_partners(manifest))
            (render_join(content))
        }
        (render_footer(content))
    };
    base_document(content, css, manifest.config.header.scroll_threshold, body)
}

// ============================================================================
// Tests
// ============================================================================
