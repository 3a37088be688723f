// src/ui/pages/seller.rs - Seller inventory and orders views

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

use crate::storefront::pricing::{price_range, stock_total};
use crate::ui::pages::{EmptyState, PageWrapper, StatCard, StatTrend};
use crate::ui::state::{use_storefront, use_storefront_dispatch, StorefrontAction};
use crate::utils::format::compact_count;
use crate::utils::time::Time;

/// Inventory management view over the catalog store
#[component]
pub fn SellerInventory() -> Element {
    let ctx = use_storefront();
    let dispatch = use_storefront_dispatch();
    let price_formatter = ctx.services.price.clone();

    // bumped after every store mutation so the table re-reads
    let mut revision = use_signal(|| 0u32);
    let _ = revision();

    let products = ctx.catalog.products();
    let total_units: u32 = products.iter().map(stock_total).sum();
    let with_media = products
        .iter()
        .filter(|p| !p.images.is_empty() || !p.product_videos.is_empty())
        .count();

    let catalog = ctx.catalog.clone();
    let regenerate = move |id: String| {
        match catalog.regenerate_skus(&id) {
            Ok(count) => {
                dispatch.call(StorefrontAction::PushToast(format!("Regenerated {count} SKUs")));
            }
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "sku regeneration failed");
                dispatch.call(StorefrontAction::PushToast(format!("Could not regenerate SKUs: {err}")));
            }
        }
        revision.with_mut(|r| *r += 1);
    };

    let catalog = ctx.catalog.clone();
    let seed = move |id: String| {
        match catalog.seed_variant_names(&id) {
            Ok(0) => {
                dispatch.call(StorefrontAction::PushToast("Colors already seeded".to_string()));
            }
            Ok(count) => {
                dispatch.call(StorefrontAction::PushToast(format!("Seeded {count} colors from template")));
            }
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "variant seeding failed");
                dispatch.call(StorefrontAction::PushToast(format!("Could not seed colors: {err}")));
            }
        }
        revision.with_mut(|r| *r += 1);
    };

    rsx! {
        PageWrapper {
            title: "Inventory".to_string(),
            subtitle: Some("Your listed products and their variant stock".to_string()),

            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                StatCard {
                    title: "Products".to_string(),
                    value: products.len().to_string(),
                    icon: Some("📦".to_string()),
                }
                StatCard {
                    title: "Units in stock".to_string(),
                    value: compact_count(total_units),
                    icon: Some("🏷️".to_string()),
                }
                StatCard {
                    title: "Listings with media".to_string(),
                    value: format!("{with_media} / {}", products.len()),
                    icon: Some("🖼️".to_string()),
                }
            }

            if products.is_empty() {
                EmptyState {
                    icon: "🛒".to_string(),
                    title: "No products listed".to_string(),
                    description: "Your inventory is empty.".to_string(),
                }
            } else {
                div {
                    class: "bg-white shadow rounded-lg overflow-hidden",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Product" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Price" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Colors" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Variants" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Stock" }
                                th { class: "px-4 py-3 text-right text-xs font-medium text-gray-500 uppercase", "Actions" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for product in products {
                                tr {
                                    key: "{product.id}",
                                    td {
                                        class: "px-4 py-3 text-sm font-medium text-gray-900",
                                        "{product.name}"
                                    }
                                    td {
                                        class: "px-4 py-3 text-sm text-gray-700",
                                        {
                                            match price_range(&product.variants) {
                                                Some(range) if !range.is_flat() => format!(
                                                    "{} – {}",
                                                    price_formatter.format_price(range.min, None),
                                                    price_formatter.format_price(range.max, None),
                                                ),
                                                Some(range) => price_formatter.format_price(range.min, None),
                                                None => price_formatter.format_price(product.price, None),
                                            }
                                        }
                                    }
                                    td { class: "px-4 py-3 text-sm text-gray-700", "{product.variant_names.len()}" }
                                    td { class: "px-4 py-3 text-sm text-gray-700", "{product.variants.len()}" }
                                    td {
                                        class: "px-4 py-3 text-sm text-gray-700",
                                        "{stock_total(&product)}"
                                    }
                                    td {
                                        class: "px-4 py-3 text-right text-sm space-x-3",
                                        button {
                                            class: "text-blue-600 hover:underline",
                                            onclick: {
                                                let id = product.id.clone();
                                                let mut regenerate = regenerate.clone();
                                                move |_| regenerate(id.clone())
                                            },
                                            "Regenerate SKUs"
                                        }
                                        button {
                                            class: "text-blue-600 hover:underline",
                                            onclick: {
                                                let id = product.id.clone();
                                                let mut seed = seed.clone();
                                                move |_| seed(id.clone())
                                            },
                                            "Seed colors"
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

/// Fulfilment state of a seller order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> [OrderStatus; 4] {
        [Self::Pending, Self::Shipped, Self::Delivered, Self::Cancelled]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    fn badge_classes(&self) -> &'static str {
        match self {
            Self::Pending => "bg-amber-50 text-amber-700",
            Self::Shipped => "bg-blue-50 text-blue-700",
            Self::Delivered => "bg-green-50 text-green-700",
            Self::Cancelled => "bg-gray-100 text-gray-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SellerOrder {
    pub id: String,
    pub product_name: String,
    pub configuration: String,
    pub buyer: String,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

fn mock_orders() -> Vec<SellerOrder> {
    let now = Time::now();
    vec![
        SellerOrder {
            id: "ord-1041".to_string(),
            product_name: "Aurora X5".to_string(),
            configuration: "Red · 128GB · Unlocked · Brand New".to_string(),
            buyer: "J. Moreau".to_string(),
            total: 549.0,
            status: OrderStatus::Pending,
            placed_at: now - Duration::hours(3),
        },
        SellerOrder {
            id: "ord-1040".to_string(),
            product_name: "Aurora X5".to_string(),
            configuration: "Blue · 256GB · Unlocked · Brand New".to_string(),
            buyer: "S. Okafor".to_string(),
            total: 649.0,
            status: OrderStatus::Shipped,
            placed_at: now - Duration::days(1),
        },
        SellerOrder {
            id: "ord-1036".to_string(),
            product_name: "Pulse Buds Pro".to_string(),
            configuration: "Charcoal".to_string(),
            buyer: "A. Lindqvist".to_string(),
            total: 129.0,
            status: OrderStatus::Delivered,
            placed_at: now - Duration::days(4),
        },
        SellerOrder {
            id: "ord-1029".to_string(),
            product_name: "Drift Strap".to_string(),
            configuration: "One size".to_string(),
            buyer: "M. Tanaka".to_string(),
            total: 24.0,
            status: OrderStatus::Cancelled,
            placed_at: now - Duration::days(9),
        },
    ]
}

/// Order list with status filtering, newest first
#[component]
pub fn SellerOrders() -> Element {
    let ctx = use_storefront();
    let price_formatter = ctx.services.price.clone();

    let mut status_filter = use_signal(|| Option::<OrderStatus>::None);

    let orders = use_memo(move || {
        let mut orders: Vec<SellerOrder> = mock_orders()
            .into_iter()
            .filter(|o| status_filter().map_or(true, |s| o.status == s))
            .collect();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        orders
    });

    let all = mock_orders();
    let open_count = all
        .iter()
        .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Shipped))
        .count();
    let revenue: f64 = all
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total)
        .sum();

    rsx! {
        PageWrapper {
            title: "Orders".to_string(),
            subtitle: Some("Recent orders across your listings".to_string()),

            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                StatCard {
                    title: "Orders".to_string(),
                    value: all.len().to_string(),
                    icon: Some("🧾".to_string()),
                }
                StatCard {
                    title: "Open".to_string(),
                    value: open_count.to_string(),
                    icon: Some("🚚".to_string()),
                }
                StatCard {
                    title: "Revenue".to_string(),
                    value: price_formatter.format_price(revenue, None),
                    change: Some("+8%".to_string()),
                    trend: Some(StatTrend::Up),
                    icon: Some("💰".to_string()),
                }
            }

            div {
                class: "flex items-center space-x-2 text-sm",
                button {
                    class: if status_filter().is_none() {
                        "px-3 py-1 rounded-full bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full bg-gray-200 text-gray-700 hover:bg-gray-300"
                    },
                    onclick: move |_| status_filter.set(None),
                    "All"
                }
                for status in OrderStatus::all() {
                    button {
                        key: "{status.label()}",
                        class: if status_filter() == Some(status) {
                            "px-3 py-1 rounded-full bg-blue-600 text-white"
                        } else {
                            "px-3 py-1 rounded-full bg-gray-200 text-gray-700 hover:bg-gray-300"
                        },
                        onclick: move |_| status_filter.set(Some(status)),
                        {status.label()}
                    }
                }
            }

            if orders().is_empty() {
                EmptyState {
                    icon: "🧾".to_string(),
                    title: "No orders".to_string(),
                    description: "No orders match this filter.".to_string(),
                }
            } else {
                div {
                    class: "bg-white shadow rounded-lg overflow-hidden",
                    table {
                        class: "min-w-full divide-y divide-gray-200",
                        thead {
                            class: "bg-gray-50",
                            tr {
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Order" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Product" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Buyer" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Total" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Placed" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-gray-200",
                            for order in orders() {
                                tr {
                                    key: "{order.id}",
                                    td { class: "px-4 py-3 text-sm font-medium text-gray-900", "{order.id}" }
                                    td {
                                        class: "px-4 py-3 text-sm text-gray-700",
                                        p { "{order.product_name}" }
                                        p { class: "text-xs text-gray-500", "{order.configuration}" }
                                    }
                                    td { class: "px-4 py-3 text-sm text-gray-700", "{order.buyer}" }
                                    td {
                                        class: "px-4 py-3 text-sm text-gray-700",
                                        {price_formatter.format_price(order.total, None)}
                                    }
                                    td {
                                        class: "px-4 py-3",
                                        span {
                                            class: format!(
                                                "inline-flex px-2 py-0.5 rounded-full text-xs font-medium {}",
                                                order.status.badge_classes(),
                                            ),
                                            {order.status.label()}
                                        }
                                    }
                                    td {
                                        class: "px-4 py-3 text-sm text-gray-500",
                                        {order.placed_at.format("%b %e, %Y").to_string()}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_orders_are_newest_first_after_sort() {
        let mut orders = mock_orders();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        assert!(orders.windows(2).all(|w| w[0].placed_at >= w[1].placed_at));
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Pending.label(), "Pending");
        assert_eq!(OrderStatus::all().len(), 4);
    }
}
