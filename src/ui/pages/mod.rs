// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

// Module declarations
mod home;
mod not_found;
mod product;
mod seller;

// Re-exports
pub use home::Home;
pub use not_found::NotFound;
pub use product::ProductPage;
pub use seller::{SellerInventory, SellerOrders};

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: format!("space-y-6 {}", class),

            // Page header
            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h1 {
                            class: "text-2xl font-bold leading-7 text-gray-900 sm:text-3xl sm:truncate",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-sm text-gray-500",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "mt-4 flex md:mt-0 md:ml-4",
                            {actions}
                        }
                    }
                }
            }

            // Page content
            {children}
        }
    }
}

/// Empty state component for pages
#[component]
pub fn EmptyState(
    #[props(default = "📭".to_string())] icon: String,
    #[props(default = "No data available".to_string())] title: String,
    #[props(default = "There's nothing to show here yet.".to_string())] description: String,
    #[props(default = None)] action: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "text-6xl mb-4",
                "{icon}"
            }
            h3 {
                class: "text-lg font-medium text-gray-900 mb-2",
                "{title}"
            }
            p {
                class: "text-gray-500 mb-6",
                "{description}"
            }
            if let Some(action) = action {
                {action}
            }
        }
    }
}

/// Stat card component for the seller views
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default = None)] change: Option<String>,
    #[props(default = None)] trend: Option<StatTrend>,
    #[props(default = None)] icon: Option<String>,
) -> Element {
    let trend_color = match trend {
        Some(StatTrend::Up) => "text-green-600",
        Some(StatTrend::Down) => "text-red-600",
        Some(StatTrend::Neutral) => "text-gray-600",
        None => "text-gray-600",
    };

    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg",
            div {
                class: "p-5",
                div {
                    class: "flex items-center",
                    div {
                        class: "flex-shrink-0",
                        if let Some(icon) = icon {
                            span {
                                class: "text-2xl",
                                "{icon}"
                            }
                        }
                    }
                    div {
                        class: "ml-5 w-0 flex-1",
                        dl {
                            dt {
                                class: "text-sm font-medium text-gray-500 truncate",
                                "{title}"
                            }
                            dd {
                                class: "flex items-baseline",
                                div {
                                    class: "text-2xl font-semibold text-gray-900",
                                    "{value}"
                                }
                                if let Some(change_text) = change {
                                    div {
                                        class: format!("ml-2 flex items-baseline text-sm font-semibold {}", trend_color),
                                        match trend {
                                            Some(StatTrend::Up) => rsx! { "↗ {change_text}" },
                                            Some(StatTrend::Down) => rsx! { "↘ {change_text}" },
                                            _ => rsx! { "{change_text}" },
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

/// Trend direction for stat cards
#[derive(Debug, Clone, PartialEq)]
pub enum StatTrend {
    Up,
    Down,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_creation() {
        let _wrapper = rsx! {
            PageWrapper {
                title: "Inventory".to_string(),
                div { "Content" }
            }
        };
    }

    #[test]
    fn test_stat_card_creation() {
        let _card = rsx! {
            StatCard {
                title: "Units in stock".to_string(),
                value: "1,234".to_string(),
                change: Some("+12%".to_string()),
                trend: Some(StatTrend::Up),
                icon: Some("📦".to_string())
            }
        };
    }

    #[test]
    fn test_empty_state_creation() {
        let _empty = rsx! {
            EmptyState {
                icon: "🛒".to_string(),
                title: "No products".to_string(),
                description: "List your first product".to_string()
            }
        };
    }
}
