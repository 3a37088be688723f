// src/ui/layout/footer.rs - Store footer

use chrono::Datelike;
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;
use crate::utils::time::Time;

/// Footer component
#[component]
pub fn StoreFooter() -> Element {
    let current_year = Time::now().year();

    rsx! {
        footer {
            class: "bg-white border-t border-gray-200 mt-auto",
            div {
                class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-6",
                div {
                    class: "md:flex md:items-center md:justify-between",

                    div {
                        class: "flex flex-wrap justify-center md:justify-start space-x-6 md:order-2",
                        Link {
                            to: Route::Home {},
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Shop"
                        }
                        Link {
                            to: Route::SellerInventory {},
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Sell on Vendora"
                        }
                        a {
                            href: "mailto:support@vendora.shop",
                            class: "text-sm text-gray-500 hover:text-gray-600 transition-colors",
                            "Support"
                        }
                    }

                    div {
                        class: "mt-4 md:mt-0 md:order-1",
                        div {
                            class: "flex flex-col items-center md:items-start space-y-1",
                            p {
                                class: "text-sm text-gray-500",
                                "© {current_year} Vendora. All rights reserved."
                            }
                            p {
                                class: "text-xs text-gray-400",
                                "Version {crate::VERSION}"
                            }
                        }
                    }
                }
            }
        }
    }
}
