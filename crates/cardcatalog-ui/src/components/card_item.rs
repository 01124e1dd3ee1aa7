//! Card Item Component
//!
//! Displays one rendered card: question, category badge, optional tags and
//! the formatted answer. Text nodes are escaped by the renderer.

use cardcatalog_core::{AnswerBlock, RenderedCard};
use dioxus::prelude::*;

/// Displays a single catalog card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (index, card) in frame.cards.iter().enumerate() {
///         CardItem { key: "{index}", card: card.clone() }
///     }
/// }
/// ```
#[component]
pub fn CardItem(card: RenderedCard) -> Element {
    rsx! {
        article { class: "card",
            header { class: "card-header",
                h3 { class: "card-question", "{card.question}" }
                span { class: "card-category", "{card.category_label}" }
            }
            if let Some(tags) = &card.tags {
                span { class: "card-tags", "{tags}" }
            }
            AnswerBody { blocks: card.answer.clone() }
        }
    }
}

/// Formatted answer: one `p` per prose line, one `pre` per code segment
#[component]
pub fn AnswerBody(blocks: Vec<AnswerBlock>) -> Element {
    rsx! {
        div { class: "card-answer",
            for (index, block) in blocks.iter().enumerate() {
                {
                    match block {
                        AnswerBlock::Paragraph(text) => rsx! {
                            p { key: "{index}", "{text}" }
                        },
                        AnswerBlock::Code(code) => rsx! {
                            pre { key: "{index}", code { "{code}" } }
                        },
                    }
                }
            }
        }
    }
}
