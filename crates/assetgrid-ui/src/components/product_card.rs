//! Product Card Component
//!
//! One asset record rendered as a card. Each searchable field lives in a
//! sub-element carrying that field's stable class; a field the record
//! lacks has no sub-element at all. The field the current query hit first
//! also carries the `matched` class.

use assetgrid_core::{Card, CardElement, CardField, Visibility};
use dioxus::prelude::*;

/// Inline style for a card in the given state
pub fn card_style(visibility: Visibility) -> String {
    format!("display: {};", visibility.css_display())
}

/// Class list of a field's sub-element
pub fn field_class(field: CardField, matched: Option<CardField>) -> String {
    if matched == Some(field) {
        format!("{} matched", field.css_class())
    } else {
        field.css_class().to_string()
    }
}

/// Searchable fields the card renders, as (field, class list, text)
pub fn rendered_fields(
    card: &Card,
    matched: Option<CardField>,
) -> Vec<(CardField, String, String)> {
    CardField::ALL
        .into_iter()
        .filter_map(|field| {
            card.field_text(field)
                .map(|text| (field, field_class(field, matched), text.to_string()))
        })
        .collect()
}

/// Properties for the ProductCard component
#[derive(Clone, PartialEq, Props)]
pub struct ProductCardProps {
    /// The asset record
    pub card: Card,
    /// Display state from the last evaluation
    #[props(default)]
    pub visibility: Visibility,
    /// Field the current query matched, if any
    #[props(default)]
    pub matched: Option<CardField>,
    /// CSS class of the card element
    #[props(default = "cardd".to_string())]
    pub card_class: String,
    /// Optional click handler (receives the card id)
    #[props(default)]
    pub on_click: Option<EventHandler<String>>,
}

/// Single asset card
///
/// The title field renders as the heading; the other four as labeled rows.
/// Display-only details (asset tag, department, hardware) follow and are
/// never matched against the filter.
#[component]
pub fn ProductCard(props: ProductCardProps) -> Element {
    let style = card_style(props.visibility);
    let fields = rendered_fields(&props.card, props.matched);
    let kind = props.card.kind;
    let details = props.card.details.entries();
    let card_id = props.card.id.to_string();
    let on_click = props.on_click;

    rsx! {
        div {
            class: "{props.card_class}",
            style: "{style}",
            "data-card-id": "{props.card.id}",
            onclick: move |_| {
                if let Some(handler) = &on_click {
                    handler.call(card_id.clone());
                }
            },

            span { class: "card-kind", "{kind}" }

            for (field, class, text) in fields {
                if field == CardField::Title {
                    h3 { class: "{class}", "{text}" }
                } else {
                    div { class: "card-row",
                        span { class: "card-label", {field.label()} }
                        span { class: "{class}", "{text}" }
                    }
                }
            }

            if !details.is_empty() {
                dl { class: "card-details",
                    for (label, value) in details {
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
