//! Shared types for page content.
//!
//! Renderers produce a [`PageContent`] tree, the generator turns it into HTML,
//! and the `render` command serializes it to JSON. Nothing here knows about
//! styling beyond the class-like identifiers carried by container nodes; those
//! are resolved by the stylesheet generated from the design tokens.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four pages of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    About,
    Faqs,
    Gallery,
    HallDetails,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page '{0}' (expected one of: about, faqs, gallery, hall-details)")]
pub struct UnknownPage(pub String);

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::About,
        PageId::Faqs,
        PageId::Gallery,
        PageId::HallDetails,
    ];

    /// Identifier attached to the page's diagnostic events.
    pub fn source_id(self) -> &'static str {
        match self {
            PageId::About => "about-page",
            PageId::Faqs => "faqs-page",
            PageId::Gallery => "gallery-page",
            PageId::HallDetails => "hall-details-page",
        }
    }

    /// URL slug; the generated file is `<slug>.html`.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::About => "about",
            PageId::Faqs => "faqs",
            PageId::Gallery => "gallery",
            PageId::HallDetails => "hall-details",
        }
    }

    /// Label shown in the site navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            PageId::About => "About",
            PageId::Faqs => "FAQs",
            PageId::Gallery => "Gallery",
            PageId::HallDetails => "Hall Details",
        }
    }

    /// Human-readable description emitted with every render.
    pub fn description(self) -> &'static str {
        match self {
            PageId::About => "About page rendered: venue story and mission",
            PageId::Faqs => "FAQs page rendered: booking questions and answers",
            PageId::Gallery => "Gallery page rendered: photo placeholder grid",
            PageId::HallDetails => "Hall Details page rendered: capacity, amenities and pricing",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Accepts either the slug (`hall-details`) or the source id (`hall-details-page`).
impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        PageId::ALL
            .into_iter()
            .find(|page| page.slug() == needle || page.source_id() == needle)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// A single node of a page's content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
    },
    /// A boxed group of nodes. A card without children is a decorative placeholder.
    Card {
        class: String,
        children: Vec<ContentNode>,
    },
    Grid {
        class: String,
        columns: u8,
        children: Vec<ContentNode>,
    },
    /// A labeled fact row such as `Capacity: Up to 300 guests`.
    Fact {
        label: String,
        value: String,
    },
}

impl ContentNode {
    pub fn heading(text: &str, level: u8) -> Self {
        ContentNode::Heading {
            text: text.to_string(),
            level: level.clamp(1, 6),
        }
    }

    pub fn paragraph(text: &str) -> Self {
        ContentNode::Paragraph {
            text: text.to_string(),
        }
    }

    pub fn card(class: &str, children: Vec<ContentNode>) -> Self {
        ContentNode::Card {
            class: class.to_string(),
            children,
        }
    }

    pub fn placeholder(class: &str) -> Self {
        Self::card(class, Vec::new())
    }

    pub fn grid(class: &str, columns: u8, children: Vec<ContentNode>) -> Self {
        ContentNode::Grid {
            class: class.to_string(),
            columns,
            children,
        }
    }

    pub fn fact(label: &str, value: &str) -> Self {
        ContentNode::Fact {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    /// Child nodes of containers; leaves have none.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Card { children, .. } | ContentNode::Grid { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ContentNode::Card { children, .. } if children.is_empty())
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ContentNode::node_count).sum::<usize>()
    }
}

/// The full content tree of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub page: PageId,
    /// Document title (the page's top-level heading).
    pub title: String,
    pub nodes: Vec<ContentNode>,
}

impl PageContent {
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(ContentNode::node_count).sum()
    }
}
