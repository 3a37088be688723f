// src/ui/layout/header.rs - Store header with primary navigation

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::{nav, Route};

/// Header component
#[component]
pub fn StoreHeader() -> Element {
    let current: Route = use_route();

    let links = [
        Route::Home {},
        Route::SellerInventory {},
        Route::SellerOrders {},
    ];

    rsx! {
        header {
            class: "bg-white border-b border-gray-200 sticky top-0 z-40",
            div {
                class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex h-16 items-center justify-between",

                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-gray-900 tracking-tight",
                        "Vendora"
                    }

                    nav {
                        class: "flex items-center space-x-6",
                        for link in links {
                            Link {
                                to: link.clone(),
                                class: if nav::is_active_route(&current, &link) {
                                    "text-sm font-medium text-blue-600"
                                } else {
                                    "text-sm font-medium text-gray-500 hover:text-gray-900 transition-colors"
                                },
                                {nav::route_title(&link)}
                            }
                        }
                    }
                }
            }
        }
    }
}
