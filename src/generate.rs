//! HTML site generation.
//!
//! Renders every page, composes its content tree with the design tokens and
//! writes a static HTML site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Home (About content)
//! ├── about.html
//! ├── faqs.html
//! ├── gallery.html
//! ├── hall-details.html
//! └── content.json        # Content trees of all pages, for inspection
//! ```
//!
//! ## CSS
//!
//! Each document inlines its stylesheet: the `:root` custom properties
//! generated from the tokens, followed by the embedded `static/style.css`,
//! which only refers to tokens through `var(--…)`.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All text content is escaped automatically.

use crate::diagnostics::DiagnosticSink;
use crate::pages;
use crate::tokens::{self, DesignTokens};
use crate::types::{ContentNode, PageContent, PageId};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One page written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPage {
    pub page: PageId,
    /// File name relative to the output directory.
    pub path: String,
    /// Extra files holding the same document.
    pub aliases: Vec<String>,
    pub node_count: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const SITE_NAME: &str = "Mavera Hall";
/// Page served as `index.html`.
const HOME_PAGE: PageId = PageId::About;

/// Full stylesheet for a token set.
pub fn site_css(tokens: &DesignTokens) -> String {
    format!("{}\n\n{}", tokens::generate_token_css(tokens), CSS_STATIC)
}

/// Render all pages and write the site into `output_dir`.
///
/// Each page is rendered once, so `sink` receives exactly one event per page.
pub fn generate(
    output_dir: &Path,
    tokens: &DesignTokens,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<GeneratedPage>, GenerateError> {
    let css = site_css(tokens);
    fs::create_dir_all(output_dir)?;

    let contents = pages::render_all(sink);
    let mut generated = Vec::with_capacity(contents.len());

    for content in &contents {
        let document = render_page(content, &css).into_string();
        let path = format!("{}.html", content.page.slug());
        fs::write(output_dir.join(&path), &document)?;

        let mut aliases = Vec::new();
        if content.page == HOME_PAGE {
            fs::write(output_dir.join("index.html"), &document)?;
            aliases.push("index.html".to_string());
        }

        generated.push(GeneratedPage {
            page: content.page,
            path,
            aliases,
            node_count: content.node_count(),
        });
    }

    let json = serde_json::to_string_pretty(&contents)?;
    fs::write(output_dir.join("content.json"), json)?;

    Ok(generated)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header with the venue name and page navigation
fn site_header(current: PageId) -> Markup {
    html! {
        header.site-header {
            div.inner {
                a.site-name href="/" { (SITE_NAME) }
                nav.site-nav {
                    (render_nav(current))
                }
            }
        }
    }
}

/// Renders the navigation list, marking the current page
pub fn render_nav(current: PageId) -> Markup {
    html! {
        ul {
            @for page in PageId::ALL {
                @let is_current = page == current;
                li class=[is_current.then_some("current")] {
                    a href={ "/" (page.slug()) ".html" } { (page.nav_label()) }
                }
            }
        }
    }
}

/// Renders one content node and its subtree
pub fn render_node(node: &ContentNode) -> Markup {
    match node {
        ContentNode::Heading { text, level } => match level {
            1 => html! { h1 { (text) } },
            2 => html! { h2 { (text) } },
            3 => html! { h3 { (text) } },
            4 => html! { h4 { (text) } },
            5 => html! { h5 { (text) } },
            _ => html! { h6 { (text) } },
        },
        ContentNode::Paragraph { text } => html! { p { (text) } },
        ContentNode::Card { class, children } => html! {
            div class=(class) {
                @for child in children {
                    (render_node(child))
                }
            }
        },
        ContentNode::Grid {
            class,
            columns,
            children,
        } => {
            let style = format!("--columns: {};", columns);
            html! {
                div class=(class) style=(style) {
                    @for child in children {
                        (render_node(child))
                    }
                }
            }
        }
        ContentNode::Fact { label, value } => html! {
            div.fact-row {
                span.fact-label { (label) ":" }
                " "
                span.fact-value { (value) }
            }
        },
    }
}

/// Renders a full page document from its content tree
pub fn render_page(content: &PageContent, css: &str) -> Markup {
    let main_class = format!("{}-page", content.page.slug());
    let body = html! {
        (site_header(content.page))
        main class=(main_class) {
            @for node in &content.nodes {
                (render_node(node))
            }
        }
    };
    base_document(&content.title, css, body)
}

// ============================================================================
// Tests
// ============================================================================
