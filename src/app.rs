use assetgrid_core::{Inventory, VisibilityMap};
use dioxus::prelude::*;

use crate::context::{get_settings, FilterQuery, InventoryState};
use crate::pages::{AssetDetail, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Inventory grid with the live filter
/// - `/assets/:id` - Every field of a single asset
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/assets/:id")]
    AssetDetail { id: String },
}

/// Root application component.
///
/// Provides global styles, inventory context, and routing.
#[component]
pub fn App() -> Element {
    let settings = get_settings();

    let mut inventory: Signal<Inventory> = use_signal(Inventory::default);
    let mut state: Signal<InventoryState> = use_signal(InventoryState::default);
    let mut display: Signal<VisibilityMap> = use_signal(VisibilityMap::new);
    let query: Signal<FilterQuery> = use_signal(|| FilterQuery(settings.initial_query.clone()));

    use_context_provider(|| inventory);
    use_context_provider(|| state);
    use_context_provider(|| display);
    use_context_provider(|| query);

    // Load inventory on mount
    use_effect(move || {
        let path = get_settings().inventory_path;
        spawn(async move {
            let loaded = match path {
                Some(path) => Inventory::load_async(&path).await,
                None => Ok(Inventory::sample()),
            };
            match loaded {
                Ok(inv) => {
                    tracing::info!("Inventory ready with {} cards", inv.len());
                    // Decisions about the previous card set no longer apply
                    display.write().clear();
                    inventory.set(inv);
                    state.set(InventoryState::Ready);
                }
                Err(e) => {
                    tracing::error!("Failed to load inventory: {}", e);
                    state.set(InventoryState::Failed(e.to_string()));
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
