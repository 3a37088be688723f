// src/ui/pages/home.rs - Storefront landing page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::storefront::pricing::{price_range, stock_total};
use crate::ui::pages::{EmptyState, PageWrapper};
use crate::ui::router::Route;
use crate::ui::state::use_storefront;

/// Product grid
#[component]
pub fn Home() -> Element {
    let ctx = use_storefront();
    let price_formatter = ctx.services.price.clone();
    let products = ctx.catalog.products();

    rsx! {
        PageWrapper {
            title: "Shop".to_string(),
            subtitle: Some("Browse the latest listings".to_string()),

            if products.is_empty() {
                EmptyState {
                    icon: "🛒".to_string(),
                    title: "Nothing listed yet".to_string(),
                    description: "Check back soon for new products.".to_string(),
                }
            } else {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
                    for product in products {
                        Link {
                            key: "{product.id}",
                            to: Route::Product { id: product.id.clone() },
                            class: "group bg-white rounded-lg border border-gray-200 overflow-hidden hover:shadow-md transition-shadow",

                            div {
                                class: "aspect-square bg-gray-100 flex items-center justify-center overflow-hidden",
                                if let Some(image) = product.images.first() {
                                    img {
                                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform",
                                        src: "{image}",
                                        alt: "{product.name}",
                                    }
                                } else {
                                    span { class: "text-4xl text-gray-300", "📦" }
                                }
                            }

                            div {
                                class: "p-4 space-y-1",
                                h3 {
                                    class: "font-medium text-gray-900 group-hover:text-blue-600",
                                    "{product.name}"
                                }
                                if let Some(description) = &product.description {
                                    p {
                                        class: "text-xs text-gray-500",
                                        {crate::utils::strings::truncate(description, 80)}
                                    }
                                }
                                p {
                                    class: "text-sm font-semibold text-gray-900",
                                    {
                                        match price_range(&product.variants) {
                                            Some(range) if !range.is_flat() => format!(
                                                "{} – {}",
                                                price_formatter.format_price(range.min, None),
                                                price_formatter.format_price(range.max, None),
                                            ),
                                            Some(range) => price_formatter.format_price(range.min, None),
                                            None => price_formatter.format_price(
                                                product.discount_price.unwrap_or(product.price),
                                                None,
                                            ),
                                        }
                                    }
                                }
                                p {
                                    class: "text-xs text-gray-500",
                                    {
                                        let stock = stock_total(&product);
                                        if stock == 0 {
                                            "Out of stock".to_string()
                                        } else {
                                            format!("{stock} in stock")
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
