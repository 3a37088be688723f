// src/ui/state.rs - Storefront state management and context

use std::sync::Arc;

use dioxus::prelude::*;

use crate::catalog::{mock, CatalogStore};
use crate::config::StorefrontConfig;
use crate::platform::PageServices;
use crate::storefront::CarrierTable;
use crate::ui::Toast;

/// Context shared by every storefront page
#[derive(Clone)]
pub struct StorefrontContext {
    pub config: StorefrontConfig,
    pub catalog: Arc<CatalogStore>,
    pub services: PageServices,
    pub carriers: CarrierTable,
}

impl StorefrontContext {
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(CatalogStore::with_products(mock::demo_products()));
        let services = PageServices::detect(&config);
        let carriers = CarrierTable::with_overrides(&config.carriers);
        Self {
            config,
            catalog,
            services,
            carriers,
        }
    }
}

/// Actions dispatched against shared UI state
#[derive(Debug, Clone)]
pub enum StorefrontAction {
    PushToast(String),
    DismissToast(uuid::Uuid),
    ClearToasts,
}

/// Provides the storefront context, toast state, and dispatch to the tree
#[component]
pub fn StorefrontStateProvider(children: Element) -> Element {
    let context = use_context_provider(|| StorefrontContext::new(StorefrontConfig::default()));
    let mut toasts = use_signal(Vec::<Toast>::new);

    let dispatch = use_callback(move |action: StorefrontAction| match action {
        StorefrontAction::PushToast(message) => {
            context.services.toast.toast(&message);
            toasts.with_mut(|t| t.push(Toast::new(message)));
        }
        StorefrontAction::DismissToast(id) => {
            toasts.with_mut(|t| t.retain(|toast| toast.id != id));
        }
        StorefrontAction::ClearToasts => toasts.set(Vec::new()),
    });

    use_context_provider(|| toasts);
    use_context_provider(|| dispatch);

    rsx! {
        {children}
    }
}

/// Hook to access the storefront context
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>()
}

/// Hook to read the current toast list
pub fn use_toasts() -> Vec<Toast> {
    use_context::<Signal<Vec<Toast>>>()()
}

/// Hook to dispatch storefront actions
pub fn use_storefront_dispatch() -> Callback<StorefrontAction> {
    use_context::<Callback<StorefrontAction>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builds_from_default_config() {
        let context = StorefrontContext::new(StorefrontConfig::default());
        assert_eq!(context.catalog.len(), 3);
        assert_eq!(context.config.currency.code, "USD");
        // built-in carrier table is active without config overrides
        assert_eq!(context.carriers.style_for("Unlocked").color, "#047857");
    }
}
