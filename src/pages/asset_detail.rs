//! Asset Detail - every field of one asset
//!
//! Handles `/assets/:id`. Missing searchable fields are listed explicitly
//! so malformed records are easy to spot.

use assetgrid_core::{CardElement, CardField, CardId};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_inventory;

/// Single asset view.
#[component]
pub fn AssetDetail(id: String) -> Element {
    let navigator = use_navigator();
    let inventory = use_inventory();

    let inv = inventory.read();
    let Some(card) = inv.get(&CardId::new(id.clone())) else {
        return rsx! {
            div { class: "error-state",
                p { class: "error-message", "no asset with id {id}" }
                button {
                    class: "btn-ghost",
                    onclick: move |_| { navigator.push(Route::Home {}); },
                    "back to inventory"
                }
            }
        };
    };

    let heading = card
        .field_text(CardField::Title)
        .unwrap_or("untitled asset")
        .to_string();
    let kind = card.kind;
    let rows: Vec<(&'static str, Option<String>)> = CardField::ALL
        .into_iter()
        .map(|field| (field.label(), card.field_text(field).map(str::to_string)))
        .collect();
    let details: Vec<(&'static str, String)> = card
        .details
        .entries()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();

    rsx! {
        main { class: "asset-detail",
            button {
                class: "btn-ghost",
                onclick: move |_| { navigator.push(Route::Home {}); },
                "\u{2190} inventory"
            }

            h1 { class: "page-title", "{heading}" }
            p { class: "asset-id", "{kind} \u{00b7} id {id}" }

            dl { class: "asset-fields",
                for (label, value) in rows {
                    dt { "{label}" }
                    if let Some(value) = value {
                        dd { "{value}" }
                    } else {
                        dd { class: "missing", "missing" }
                    }
                }
                for (label, value) in details {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
