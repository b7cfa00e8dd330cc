//! # Mavera Hall
//!
//! The static site of the Mavera Hall event venue: four informational pages,
//! a design token theme and a generator that turns both into plain HTML.
//!
//! # Architecture
//!
//! ```text
//! PageId ─► pages::render ─► PageContent ─┐
//!              │                          ├─► generate ─► dist/*.html
//!              └─► DiagnosticSink         │
//! theme.toml ─► tokens::load_tokens ──────┘
//! ```
//!
//! A render takes no input. It emits one diagnostic event through the sink
//! it is handed, then builds a fresh content tree from the page's literal
//! copy. The tree describes structure only (headings, paragraphs, cards,
//! grids, fact rows); container nodes carry class identifiers that the
//! generated stylesheet resolves through the design tokens.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content tree (`ContentNode`, `PageContent`) and page identifiers (`PageId`) |
//! | [`pages`] | Page copy as data, and the renderers that turn it into content trees |
//! | [`diagnostics`] | Render events and the sinks that receive them |
//! | [`tokens`] | Design tokens: defaults, `theme.toml` loading, lookup, CSS generation |
//! | [`generate`] | HTML output via Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Copy as Data
//!
//! Page text lives in one table ([`pages::PAGE_LITERALS`]) rather than in
//! four hand-written renderers. The renderers share one builder, so layout
//! changes happen in one place and the copy can be swapped or reviewed
//! without touching tree construction.
//!
//! ## Injected Sinks
//!
//! Diagnostics go to whatever [`diagnostics::DiagnosticSink`] the caller
//! passes. The binary uses stdout; tests capture events in memory. Any
//! `Fn(&DiagnosticEvent)` closure is a sink too.
//!
//! ## Tokens as CSS Custom Properties
//!
//! The embedded stylesheet never hard-codes a color, font or size. Every
//! token becomes a `--<category>-<name>` property on `:root`, so a
//! `theme.toml` override restyles the whole site without touching CSS.

pub mod diagnostics;
pub mod generate;
pub mod output;
pub mod pages;
pub mod tokens;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
