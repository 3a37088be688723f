// src/ui/pages/product.rs - Product detail page

//! Hosts the gallery, the variant selector, and the price summary, and owns
//! the signals that tie them together: the promoted variant image, the
//! latest resolution, and the focus override. The gallery's tab handle lets
//! the "Product Details" action land on the description tab below.

use dioxus::prelude::*;

use crate::catalog::mock;
use crate::storefront::pricing::display_price;
use crate::storefront::resolver::Resolution;
use crate::ui::components::{MediaGallery, PriceSummary, QuestionsSection, ReviewsSection, VariantSelector};
use crate::ui::pages::{EmptyState, PageWrapper};
use crate::ui::state::{use_storefront, use_storefront_dispatch, StorefrontAction};
use crate::ui::{ActiveTab, GalleryTabsHandle};

#[component]
pub fn ProductPage(id: String) -> Element {
    let ctx = use_storefront();
    let dispatch = use_storefront_dispatch();

    let Some(found) = ctx.catalog.product(&id) else {
        return rsx! {
            EmptyState {
                icon: "🔎".to_string(),
                title: "Product not found".to_string(),
                description: "This listing may have been removed.".to_string(),
            }
        };
    };

    let product = use_signal(|| found);
    let images = use_memo(move || product().images.clone());
    let videos = use_memo(move || product().product_videos.clone());
    let model_3d = use_memo(move || product().model_3d_url.clone());

    let active_tab = use_signal(ActiveTab::default);
    let tabs = GalleryTabsHandle::new(active_tab);

    let mut variant_image = use_signal(|| Option::<String>::None);
    let mut resolution = use_signal(|| Option::<Resolution>::None);
    let configured_price =
        use_memo(move || resolution().map(|res| display_price(&product(), &res)));
    let mut external_focus = use_signal(|| Option::<bool>::None);
    let mut gallery_position = use_signal(|| (0usize, 0usize));
    let mut in_focus = use_signal(|| false);

    let reviews = use_signal(|| mock::demo_reviews(&product.peek().id));
    let questions = use_signal(|| mock::demo_questions(&product.peek().id));

    let tabs_container = tabs.tabs_container_id();
    let scroll_to_tabs = move |_: ()| {
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(tabs_container))
        {
            element.scroll_into_view();
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!(container = tabs_container, "jump to product details");
    };

    let name = product().name.clone();
    let (position, total) = gallery_position();
    let current_tab = tabs.get_active_tab();

    rsx! {
        PageWrapper {
            title: name.clone(),

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-8",

                // left column: gallery
                div {
                    class: "space-y-2",
                    MediaGallery {
                        images,
                        videos,
                        model_3d,
                        variant_image,
                        external_focus,
                        configuration: resolution,
                        configured_price,
                        tabs,
                        on_image_index_change: move |(index, len)| {
                            gallery_position.set((index, len));
                        },
                        on_focus_mode_change: move |focus| in_focus.set(focus),
                        on_product_details_click: scroll_to_tabs,
                    }
                    if total > 0 {
                        p {
                            class: "text-xs text-gray-500 text-center",
                            "Media {position + 1} of {total}"
                        }
                    }
                    button {
                        class: "text-sm text-blue-600 hover:underline",
                        onclick: move |_| {
                            let next = !*in_focus.peek();
                            external_focus.set(Some(next));
                        },
                        if in_focus() { "Leave immersive view" } else { "Immersive view" }
                    }
                }

                // right column: configuration and price
                div {
                    class: "space-y-6",
                    VariantSelector {
                        product,
                        on_configuration_change: move |res: Resolution| {
                            if let Some(image) = res.default_display_image.clone() {
                                variant_image.set(Some(image));
                            }
                            resolution.set(Some(res));
                        },
                        on_variant_image_change: move |(image, _color): (String, String)| {
                            variant_image.set(Some(image));
                        },
                    }
                    PriceSummary { product, resolution }
                    button {
                        class: "w-full px-4 py-3 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700",
                        onclick: move |_| {
                            dispatch.call(StorefrontAction::PushToast("Added to cart".to_string()));
                        },
                        "Add to cart"
                    }
                }
            }

            // tab strip
            div {
                id: tabs_container,
                class: "border-b border-gray-200",
                nav {
                    class: "flex space-x-6",
                    for tab in ActiveTab::all() {
                        button {
                            key: "{tab.label()}",
                            class: if tab == current_tab {
                                "pb-3 border-b-2 border-blue-600 text-sm font-medium text-blue-600"
                            } else {
                                "pb-3 border-b-2 border-transparent text-sm font-medium text-gray-500 hover:text-gray-700"
                            },
                            onclick: move |_| tabs.set_active_tab(tab),
                            {tab.label()}
                        }
                    }
                }
            }

            match current_tab {
                ActiveTab::Description => rsx! {
                    p {
                        class: "text-sm text-gray-700 leading-relaxed",
                        {product().description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                    }
                },
                ActiveTab::Specifications => rsx! {
                    SpecificationsTab { resolution }
                },
                ActiveTab::Reviews => rsx! {
                    ReviewsSection { reviews }
                },
                ActiveTab::Questions => rsx! {
                    QuestionsSection { questions }
                },
            }
        }
    }
}

/// Current-configuration spec table
#[component]
fn SpecificationsTab(resolution: ReadOnlySignal<Option<Resolution>>) -> Element {
    let Some(res) = resolution() else {
        return rsx! {
            p { class: "text-sm text-gray-500", "Select a configuration to see its specifications." }
        };
    };

    let rows = [
        ("Color", res.selection.color.clone()),
        (
            "Storage",
            res.selection
                .storage
                .as_deref()
                .map(|s| crate::storefront::pricing::storage_display_value(Some(s))),
        ),
        ("Network", res.selection.network.clone()),
        ("Condition", res.selection.condition.clone()),
    ];

    rsx! {
        dl {
            class: "divide-y divide-gray-200 max-w-md",
            for (label, value) in rows {
                div {
                    key: "{label}",
                    class: "py-2 flex justify-between text-sm",
                    dt { class: "text-gray-500", "{label}" }
                    dd {
                        class: "font-medium text-gray-900",
                        {value.unwrap_or_else(|| "—".to_string())}
                    }
                }
            }
        }
    }
}
