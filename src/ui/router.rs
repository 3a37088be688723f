// src/ui/router.rs

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::{
    layout::Layout,
    pages::{
        Home as HomePage, NotFound as NotFoundPage, ProductPage, SellerInventory as InventoryPage,
        SellerOrders as OrdersPage,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/product/:id")]
    Product { id: String },
    #[route("/seller/inventory")]
    SellerInventory {},
    #[route("/seller/orders")]
    SellerOrders {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            HomePage {}
        }
    }
}

#[component]
pub fn Product(id: String) -> Element {
    rsx! {
        Layout {
            key: "{id}",
            ProductPage { id }
        }
    }
}

#[component]
pub fn SellerInventory() -> Element {
    rsx! {
        Layout {
            InventoryPage {}
        }
    }
}

#[component]
pub fn SellerOrders() -> Element {
    rsx! {
        Layout {
            OrdersPage {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-50",
            NotFoundPage { path }
        }
    }
}

pub mod nav {
    use super::*;

    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        std::mem::discriminant(current) == std::mem::discriminant(target)
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Home { .. } => "Shop",
            Route::Product { .. } => "Product",
            Route::SellerInventory { .. } => "Inventory",
            Route::SellerOrders { .. } => "Orders",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        assert_eq!(Route::Home {}, Route::Home {});
        assert_eq!(
            Route::Product { id: "p1".to_string() },
            Route::Product { id: "p1".to_string() }
        );
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Home {}), "Shop");
        assert_eq!(nav::route_title(&Route::SellerOrders {}), "Orders");
    }

    #[test]
    fn test_active_route_matches_by_variant() {
        let a = Route::Product { id: "a".to_string() };
        let b = Route::Product { id: "b".to_string() };
        assert!(nav::is_active_route(&a, &b));
        assert!(!nav::is_active_route(&a, &Route::Home {}));
    }
}
