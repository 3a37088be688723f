// src/ui/components/price.rs - Configuration price summary

use dioxus::prelude::*;

use crate::catalog::product::Product;
use crate::storefront::pricing::{display_price, storage_display_value};
use crate::storefront::resolver::Resolution;
use crate::ui::state::use_storefront;

/// Price panel for the current configuration.
///
/// Resolves through the deepest-wins chain and shows the struck-through
/// base price when the configuration undercuts it.
#[component]
pub fn PriceSummary(
    product: ReadOnlySignal<Product>,
    resolution: ReadOnlySignal<Option<Resolution>>,
) -> Element {
    let ctx = use_storefront();
    let price_formatter = ctx.services.price.clone();

    let product = product();
    let res = resolution().unwrap_or_default();
    let price = display_price(&product, &res);
    let base = product.price;

    let stock = res.selected_color_variant().map(|c| c.stock);

    rsx! {
        div {
            class: "bg-white rounded-lg border border-gray-200 p-4 space-y-2",

            div {
                class: "flex items-baseline space-x-3",
                span {
                    class: "text-3xl font-bold text-gray-900",
                    {price_formatter.format_price(price, None)}
                }
                if price > 0.0 && base > price {
                    span {
                        class: "text-lg text-gray-400 line-through",
                        {price_formatter.format_price(base, None)}
                    }
                }
            }

            div {
                class: "text-sm text-gray-600",
                span { "Selected: " }
                span {
                    class: "font-medium text-gray-900",
                    {
                        let color = res.selection.color.as_deref().unwrap_or("—");
                        let storage = storage_display_value(res.selection.storage.as_deref());
                        let network = res.selection.network.as_deref().unwrap_or("—");
                        let condition = res.selection.condition.as_deref().unwrap_or("—");
                        format!("{color} · {storage} · {network} · {condition}")
                    }
                }
            }

            match stock {
                Some(0) => rsx! {
                    p { class: "text-sm font-medium text-red-600", "Out of stock" }
                },
                Some(n) if n <= 3 => rsx! {
                    p { class: "text-sm font-medium text-amber-600", "Only {n} left in stock" }
                },
                Some(n) => rsx! {
                    p { class: "text-sm text-green-700", "{n} in stock" }
                },
                None => rsx! {
                    p { class: "text-sm text-gray-500", "Select a color to see availability" }
                },
            }
        }
    }
}
