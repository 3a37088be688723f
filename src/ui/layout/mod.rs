// src/ui/layout/mod.rs - Page chrome

use dioxus::prelude::*;

mod footer;
mod header;

pub use footer::StoreFooter;
pub use header::StoreHeader;

/// Standard page shell: header, content column, footer
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-gray-50",
            StoreHeader {}
            main {
                class: "flex-1 mx-auto w-full max-w-7xl px-4 sm:px-6 lg:px-8 py-8",
                {children}
            }
            StoreFooter {}
        }
    }
}
