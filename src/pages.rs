//! Page renderers.
//!
//! Page copy lives in a single table, [`PAGE_LITERALS`], one entry per
//! [`PageId`]. [`render`] looks up the entry, emits the page's diagnostic
//! event and builds a fresh [`PageContent`] tree from it. The four
//! `render_*` functions are thin entry points over [`render`].
//!
//! Renders are deterministic: two calls produce equal trees. Only the
//! timestamp of the diagnostic event differs.
//!
//! ## Layout classes
//!
//! Container nodes carry class identifiers that the stylesheet resolves
//! through the design tokens:
//!
//! | Class | Used by |
//! |-------|---------|
//! | `faq-card` | one question/answer pair |
//! | `gallery-grid`, `gallery-item` | the photo placeholder grid |
//! | `details-grid`, `details-info`, `details-image` | the two-column hall details layout |

use crate::diagnostics::{self, DiagnosticSink};
use crate::types::{ContentNode, PageContent, PageId};

/// Literal content of one page.
#[derive(Debug)]
pub struct PageLiteral {
    pub page: PageId,
    pub heading: &'static str,
    pub body: PageBody,
}

#[derive(Debug)]
pub enum PageBody {
    /// Plain paragraphs under the page heading.
    Prose(&'static [&'static str]),
    /// Question/answer pairs, one card each.
    Faq(&'static [(&'static str, &'static str)]),
    /// A grid of empty decorative boxes.
    Placeholders { count: usize, columns: u8 },
    /// Two columns: description and labeled facts on the left, an image box on the right.
    Details {
        subheading: &'static str,
        summary: &'static str,
        facts: &'static [(&'static str, &'static str)],
    },
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Mavera Hall is an elegant event venue designed for weddings, celebrations, \
     and corporate gatherings. With timeless architecture and warm, natural light, \
     our hall offers a refined setting for the moments that matter most.",
    "Our dedicated team works alongside you from the first walkthrough to the last \
     dance, ensuring every detail is thoughtfully planned and beautifully executed.",
];

pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "What is included in the booking?",
        "Our booking includes the venue, basic setup, and coordination services.",
    ),
    (
        "How far in advance should I book?",
        "We recommend booking at least 6 to 12 months in advance, especially for weekend dates.",
    ),
    (
        "Can we bring our own caterer?",
        "Yes. You may work with our preferred caterers or bring a licensed caterer of your choice.",
    ),
];

pub const GALLERY_PLACEHOLDERS: usize = 12;
pub const GALLERY_COLUMNS: u8 = 3;

pub const HALL_FACTS: &[(&str, &str)] = &[
    ("Capacity", "Up to 300 guests"),
    (
        "Amenities",
        "Sound system, lighting, catering kitchen, bridal suite",
    ),
    ("Pricing", "Starting from $5,000"),
];

/// Content of every page, in navigation order.
pub static PAGE_LITERALS: [PageLiteral; 4] = [
    PageLiteral {
        page: PageId::About,
        heading: "About Mavera Hall",
        body: PageBody::Prose(ABOUT_PARAGRAPHS),
    },
    PageLiteral {
        page: PageId::Faqs,
        heading: "Frequently Asked Questions",
        body: PageBody::Faq(FAQ_ENTRIES),
    },
    PageLiteral {
        page: PageId::Gallery,
        heading: "Gallery",
        body: PageBody::Placeholders {
            count: GALLERY_PLACEHOLDERS,
            columns: GALLERY_COLUMNS,
        },
    },
    PageLiteral {
        page: PageId::HallDetails,
        heading: "Hall Details",
        body: PageBody::Details {
            subheading: "The Grand Hall",
            summary: "A spacious, light-filled hall with soaring ceilings and a flexible \
                      floor plan that adapts to intimate dinners and grand receptions alike.",
            facts: HALL_FACTS,
        },
    },
];

/// Literal content for a page.
pub fn literal(page: PageId) -> &'static PageLiteral {
    match page {
        PageId::About => &PAGE_LITERALS[0],
        PageId::Faqs => &PAGE_LITERALS[1],
        PageId::Gallery => &PAGE_LITERALS[2],
        PageId::HallDetails => &PAGE_LITERALS[3],
    }
}

/// Render a page: emit its diagnostic event, then build its content tree.
pub fn render(page: PageId, sink: &dyn DiagnosticSink) -> PageContent {
    diagnostics::emit(sink, page.source_id(), page.description());
    build(literal(page))
}

pub fn render_about(sink: &dyn DiagnosticSink) -> PageContent {
    render(PageId::About, sink)
}

pub fn render_faqs(sink: &dyn DiagnosticSink) -> PageContent {
    render(PageId::Faqs, sink)
}

pub fn render_gallery(sink: &dyn DiagnosticSink) -> PageContent {
    render(PageId::Gallery, sink)
}

pub fn render_hall_details(sink: &dyn DiagnosticSink) -> PageContent {
    render(PageId::HallDetails, sink)
}

/// Render every page in navigation order.
pub fn render_all(sink: &dyn DiagnosticSink) -> Vec<PageContent> {
    PageId::ALL.into_iter().map(|page| render(page, sink)).collect()
}

fn build(literal: &PageLiteral) -> PageContent {
    let mut nodes = vec![ContentNode::heading(literal.heading, 1)];

    match &literal.body {
        PageBody::Prose(paragraphs) => {
            nodes.extend(paragraphs.iter().map(|p| ContentNode::paragraph(p)));
        }
        PageBody::Faq(entries) => {
            nodes.extend(entries.iter().map(|(question, answer)| {
                ContentNode::card(
                    "faq-card",
                    vec![
                        ContentNode::heading(question, 3),
                        ContentNode::paragraph(answer),
                    ],
                )
            }));
        }
        PageBody::Placeholders { count, columns } => {
            let items = (0..*count)
                .map(|_| ContentNode::placeholder("gallery-item"))
                .collect();
            nodes.push(ContentNode::grid("gallery-grid", *columns, items));
        }
        PageBody::Details {
            subheading,
            summary,
            facts,
        } => {
            let mut info = vec![
                ContentNode::heading(subheading, 2),
                ContentNode::paragraph(summary),
            ];
            info.extend(
                facts
                    .iter()
                    .map(|(label, value)| ContentNode::fact(label, value)),
            );
            nodes.push(ContentNode::grid(
                "details-grid",
                2,
                vec![
                    ContentNode::card("details-info", info),
                    ContentNode::placeholder("details-image"),
                ],
            ));
        }
    }

    PageContent {
        page: literal.page,
        title: literal.heading.to_string(),
        nodes,
    }
}
