//! Product Grid Component
//!
//! The card container. Renders every card in inventory order and applies
//! the visibility decided by the last filter evaluation, marking on each
//! card the field the query hit.

use assetgrid_core::{Card, CardField, Query, Selectors, VisibilityMap};
use dioxus::prelude::*;

use crate::components::ProductCard;

/// "N of M assets" summary text
pub fn summary_text(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{} assets", total)
    } else {
        format!("{} of {} assets", visible, total)
    }
}

/// Field to highlight on `card`; nothing is highlighted for the empty query
pub fn highlighted_field(query: &Query, card: &Card) -> Option<CardField> {
    if query.is_empty() {
        None
    } else {
        query.matching_field(card)
    }
}

/// Properties for the ProductGrid component
#[derive(Clone, PartialEq, Props)]
pub struct ProductGridProps {
    /// Cards in display order
    pub cards: Vec<Card>,
    /// Display state per card
    pub visibility: VisibilityMap,
    /// Current filter text, used to highlight the matched field
    #[props(default)]
    pub query: String,
    /// Container and card classes
    #[props(default)]
    pub selectors: Selectors,
    /// Click handler (receives the card id)
    #[props(default)]
    pub on_select: Option<EventHandler<String>>,
}

/// Grid of product cards
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProductGrid {
///         cards: inventory.read().cards().to_vec(),
///         visibility: display(),
///     }
/// }
/// ```
#[component]
pub fn ProductGrid(props: ProductGridProps) -> Element {
    let total = props.cards.len();
    let visible = props
        .cards
        .iter()
        .filter(|card| props.visibility.get(&card.id).is_visible())
        .count();
    let query = Query::new(props.query.as_str());

    rsx! {
        div { class: "product-grid-section",
            p { class: "grid-summary", "{summary_text(visible, total)}" }

            if total == 0 {
                p { class: "grid-empty", "no assets in inventory" }
            }

            div { class: "{props.selectors.container_class}",
                for card in props.cards.iter() {
                    ProductCard {
                        key: "{card.id}",
                        card: card.clone(),
                        visibility: props.visibility.get(&card.id),
                        matched: highlighted_field(&query, card),
                        card_class: props.selectors.card_class.clone(),
                        on_click: props.on_select,
                    }
                }
            }
        }
    }
}
