//! Home page - the inventory grid with its live filter.
//!
//! Every key release in the filter input re-evaluates every card. The
//! query is read from its signal at that moment; the cards are read from
//! the inventory signal at that moment.

use assetgrid_core::FilterController;
use assetgrid_ui::{FilterInput, ProductGrid};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{
    get_settings, use_display, use_inventory, use_inventory_state, use_query, FilterQuery,
    InventoryState,
};

/// Inventory grid page.
#[component]
pub fn Home() -> Element {
    let settings = get_settings();
    let selectors = settings.selectors.clone();
    let navigator = use_navigator();

    let inventory = use_inventory();
    let state = use_inventory_state();
    let mut display = use_display();
    let mut query = use_query();

    let mut refilter = move || {
        let text = query.peek().0.clone();
        let inv = inventory.peek();
        let report = display.with_mut(|map| FilterController::new(text.as_str(), &*inv).evaluate(map));
        tracing::debug!(
            "Filter {:?}: {} of {} visible",
            text,
            report.visible,
            report.total
        );
    };

    // Apply the starting query once the cards exist
    use_effect(move || {
        if state() == InventoryState::Ready {
            refilter();
        }
    });

    let on_keyup = move |_: ()| refilter();

    let current_state = state();

    rsx! {
        main { class: "inventory-page",
            header { class: "inventory-header",
                h1 { class: "page-title", "Asset Inventory" }
                FilterInput {
                    id: selectors.input_id.clone(),
                    value: query.read().0.clone(),
                    oninput: move |text| query.set(FilterQuery(text)),
                    onkeyup: on_keyup,
                }
            }

            {
                match current_state {
                    InventoryState::Loading => rsx! {
                        div { class: "loading-state",
                            p { class: "loading-message", "loading inventory..." }
                        }
                    },
                    InventoryState::Failed(message) => rsx! {
                        div { class: "error-state",
                            p { class: "error-message", "could not load inventory: {message}" }
                        }
                    },
                    InventoryState::Ready => rsx! {
                        ProductGrid {
                            cards: inventory.read().cards().to_vec(),
                            visibility: display(),
                            query: query.read().0.clone(),
                            selectors: selectors.clone(),
                            on_select: move |id: String| {
                                navigator.push(Route::AssetDetail { id });
                            },
                        }
                    },
                }
            }
        }
    }
}
