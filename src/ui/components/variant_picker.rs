// src/ui/components/variant_picker.rs - Cascading variant selector

//! Four stacked option rows (color, storage, network, condition) driven by
//! a single `Selection` signal. Every click re-runs the full cascade; the
//! corrected selection is written back into the signal and the resulting
//! `Resolution` is pushed up to the hosting page for the summary panel and
//! the gallery's focus-mode configuration view.

use dioxus::prelude::*;

use crate::catalog::product::Product;
use crate::storefront::pricing::storage_display_value;
use crate::storefront::resolver::{resolve, Resolution, Selection};
use crate::ui::components::Badge;
use crate::ui::state::use_storefront;

#[component]
pub fn VariantSelector(
    product: ReadOnlySignal<Product>,
    /// Fired with the full resolution after every cascade run
    on_configuration_change: EventHandler<Resolution>,
    /// Fired with (image url, color name) when a clicked color carries an image
    on_variant_image_change: EventHandler<(String, String)>,
) -> Element {
    let ctx = use_storefront();
    let carriers = ctx.carriers.clone();
    let price_formatter = ctx.services.price.clone();

    let mut selection = use_signal(Selection::default);

    let resolution = use_memo({
        let carriers = carriers.clone();
        move || resolve(&product(), &selection(), &carriers)
    });

    // the cascade may have corrected or cleared levels; write the corrected
    // selection back only when it differs, so the effect settles
    use_effect(move || {
        let res = resolution();
        if *selection.peek() != res.selection {
            selection.set(res.selection.clone());
        }
        on_configuration_change.call(res);
    });

    let res = resolution();

    let select_color = move |color: crate::storefront::resolver::ColorOption| {
        selection.with_mut(|s| s.color = Some(color.name.clone()));
        if let Some(image) = color.image {
            on_variant_image_change.call((image, color.name));
        }
    };

    rsx! {
        div {
            class: "space-y-6",

            // color row
            div {
                h4 { class: "text-sm font-medium text-gray-900 mb-2", "Color" }
                div {
                    class: "flex flex-wrap gap-2",
                    for color in res.color_variants.clone() {
                        button {
                            key: "{color.id}",
                            class: if res.selection.color.as_deref() == Some(color.name.as_str()) {
                                "px-3 py-2 rounded-lg border-2 border-blue-600 bg-blue-50 text-sm"
                            } else {
                                "px-3 py-2 rounded-lg border border-gray-300 hover:border-gray-400 text-sm"
                            },
                            onclick: {
                                let color = color.clone();
                                let mut select_color = select_color.clone();
                                move |_| select_color(color.clone())
                            },
                            div {
                                class: "flex items-center space-x-2",
                                if let Some(image) = &color.image {
                                    img {
                                        class: "w-8 h-8 rounded object-cover",
                                        src: "{image}",
                                        alt: "{color.name}",
                                    }
                                }
                                div {
                                    class: "text-left",
                                    p { class: "font-medium text-gray-900", "{color.name}" }
                                    p {
                                        class: "text-xs text-gray-500",
                                        {price_formatter.format_price(color.price, None)}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // storage row
            if !res.storage_variants.is_empty() {
                div {
                    h4 { class: "text-sm font-medium text-gray-900 mb-2", "Storage" }
                    div {
                        class: "flex flex-wrap gap-2",
                        for storage in res.storage_variants.clone() {
                            button {
                                key: "{storage.name}",
                                class: if res.selection.storage.as_deref() == Some(storage.name.as_str()) {
                                    "px-3 py-2 rounded-lg border-2 border-blue-600 bg-blue-50 text-sm"
                                } else {
                                    "px-3 py-2 rounded-lg border border-gray-300 hover:border-gray-400 text-sm"
                                },
                                onclick: {
                                    let name = storage.name.clone();
                                    move |_| selection.with_mut(|s| s.storage = Some(name.clone()))
                                },
                                div {
                                    class: "flex items-center space-x-2",
                                    span {
                                        class: "font-medium text-gray-900",
                                        {storage_display_value(Some(&storage.name))}
                                    }
                                    if storage.is_bestseller {
                                        Badge {
                                            color: "#92400e".to_string(),
                                            background: "#fef3c7".to_string(),
                                            "Bestseller"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // network row, painted with carrier styles
            if !res.network_variants.is_empty() {
                div {
                    h4 { class: "text-sm font-medium text-gray-900 mb-2", "Network" }
                    div {
                        class: "flex flex-wrap gap-2",
                        for network in res.network_variants.clone() {
                            button {
                                key: "{network.name}",
                                class: if res.selection.network.as_deref() == Some(network.name.as_str()) {
                                    "px-3 py-2 rounded-lg border-2 border-blue-600 text-sm"
                                } else {
                                    "px-3 py-2 rounded-lg border text-sm hover:opacity-80"
                                },
                                style: "color: {network.style.color}; background-color: {network.style.background}; border-color: {network.style.border};",
                                onclick: {
                                    let name = network.name.clone();
                                    move |_| selection.with_mut(|s| s.network = Some(name.clone()))
                                },
                                div {
                                    class: "flex items-center space-x-2",
                                    span { class: "font-medium", "{network.name}" }
                                    if network.is_bestseller {
                                        Badge {
                                            color: "#92400e".to_string(),
                                            background: "#fef3c7".to_string(),
                                            "Bestseller"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // condition row
            if !res.condition_variants.is_empty() {
                div {
                    h4 { class: "text-sm font-medium text-gray-900 mb-2", "Condition" }
                    div {
                        class: "flex flex-wrap gap-2",
                        for condition in res.condition_variants.clone() {
                            button {
                                key: "{condition.name}",
                                class: if res.selection.condition.as_deref() == Some(condition.name.as_str()) {
                                    "px-3 py-2 rounded-lg border-2 border-blue-600 bg-blue-50 text-sm"
                                } else {
                                    "px-3 py-2 rounded-lg border border-gray-300 hover:border-gray-400 text-sm"
                                },
                                onclick: {
                                    let name = condition.name.clone();
                                    move |_| selection.with_mut(|s| s.condition = Some(name.clone()))
                                },
                                div {
                                    class: "flex items-center space-x-2",
                                    span { class: "font-medium text-gray-900", "{condition.name}" }
                                    span {
                                        class: "text-xs text-gray-500",
                                        {price_formatter.format_price(condition.price, None)}
                                    }
                                    if condition.is_bestseller {
                                        Badge {
                                            color: "#92400e".to_string(),
                                            background: "#fef3c7".to_string(),
                                            "Bestseller"
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
