// src/ui/components/mod.rs - Reusable UI components

use dioxus::prelude::*;

pub mod gallery;
pub mod price;
pub mod reviews;
pub mod variant_picker;

pub use gallery::MediaGallery;
pub use price::PriceSummary;
pub use reviews::{QuestionsSection, ReviewsSection};
pub use variant_picker::VariantSelector;

/// Button component with consistent styling
#[component]
pub fn Button(
    #[props(default = "button".to_string())] button_type: String,
    #[props(default = "primary".to_string())] variant: String,
    #[props(default = false)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default = None)] onclick: Option<Callback<MouseEvent>>,
    children: Element,
) -> Element {
    let base_classes = "inline-flex items-center px-4 py-2 border font-medium text-sm rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2 transition-colors";

    let variant_classes = match variant.as_str() {
        "primary" => "border-transparent text-white bg-blue-600 hover:bg-blue-700 focus:ring-blue-500",
        "secondary" => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-blue-500",
        "danger" => "border-transparent text-white bg-red-600 hover:bg-red-700 focus:ring-red-500",
        "ghost" => "border-transparent text-gray-700 hover:bg-gray-100 focus:ring-blue-500",
        _ => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-blue-500",
    };

    let disabled_classes = if disabled { "opacity-50 cursor-not-allowed" } else { "" };

    rsx! {
        button {
            r#type: "{button_type}",
            class: format!("{} {} {} {}", base_classes, variant_classes, disabled_classes, class),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Small pill badge
#[component]
pub fn Badge(
    #[props(default = "#374151".to_string())] color: String,
    #[props(default = "#f3f4f6".to_string())] background: String,
    children: Element,
) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium",
            style: "color: {color}; background-color: {background};",
            {children}
        }
    }
}

/// Five-star rating display, filled to the nearest half
#[component]
pub fn RatingStars(rating: f64, #[props(default = None)] count: Option<usize>) -> Element {
    let filled = rating.round().clamp(0.0, 5.0) as usize;

    rsx! {
        span {
            class: "inline-flex items-center space-x-1",
            span {
                class: "text-amber-400 tracking-tight",
                {"★".repeat(filled)}
                span { class: "text-gray-300", {"★".repeat(5 - filled)} }
            }
            if let Some(count) = count {
                span {
                    class: "text-xs text-gray-500",
                    "({count})"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_creation() {
        let _button = rsx! {
            Button {
                variant: "secondary".to_string(),
                "Add to cart"
            }
        };
    }

    #[test]
    fn test_rating_stars_creation() {
        let _stars = rsx! {
            RatingStars { rating: 4.25, count: Some(12) }
        };
    }
}
