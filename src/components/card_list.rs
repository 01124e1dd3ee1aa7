//! Card area: count readout, cards, and the indicators that replace them.

use cardcatalog_core::{BootStatus, RenderFrame};
use cardcatalog_ui::{CardItem, CountReadout, EmptyState, LoadFailure, LoadingIndicator};
use dioxus::prelude::*;

/// Renders the card area for one frame.
///
/// The list is rebuilt from the frame every time; there is no per-card
/// state to keep in sync.
#[component]
pub fn CardList(frame: RenderFrame) -> Element {
    match frame.status {
        BootStatus::Loading => rsx! {
            div { id: "cards", LoadingIndicator {} }
        },
        BootStatus::Failed => rsx! {
            div { id: "cards", LoadFailure {} }
        },
        BootStatus::Ready => {
            let empty = frame.is_empty();
            rsx! {
                CountReadout { text: frame.count_readout() }
                if !empty {
                    div { id: "cards", class: "card-list",
                        for (index, card) in frame.cards.iter().enumerate() {
                            CardItem { key: "{index}", card: card.clone() }
                        }
                    }
                }
                EmptyState { visible: empty }
            }
        }
    }
}
