// src/ui/mod.rs - UI system coordinator

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

// Re-export main app component
pub use app::App;

// Module declarations
pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;

pub use router::Route;
pub use state::{use_storefront, StorefrontStateProvider};

/// Tabs on the product page, controllable through the gallery's handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    #[default]
    Description,
    Specifications,
    Reviews,
    Questions,
}

impl ActiveTab {
    pub fn all() -> [ActiveTab; 4] {
        [
            Self::Description,
            Self::Specifications,
            Self::Reviews,
            Self::Questions,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Specifications => "Specifications",
            Self::Reviews => "Reviews",
            Self::Questions => "Q&A",
        }
    }
}

/// Capability handle the gallery exposes to its hosting page.
///
/// A small struct of shared signals instead of an opaque UI-tree ref: the
/// parent can switch or inspect the active tab and locate the tabs
/// container without reaching into the gallery's markup.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryTabsHandle {
    active: Signal<ActiveTab>,
}

impl GalleryTabsHandle {
    pub fn new(active: Signal<ActiveTab>) -> Self {
        Self { active }
    }

    pub fn set_active_tab(&self, tab: ActiveTab) {
        let mut active = self.active;
        active.set(tab);
    }

    pub fn get_active_tab(&self) -> ActiveTab {
        (self.active)()
    }

    /// DOM id of the tabs container element
    pub fn tabs_container_id(&self) -> &'static str {
        "product-tabs"
    }
}

/// Transient user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            message: message.into(),
            timestamp: crate::utils::time::Time::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(ActiveTab::Description.label(), "Description");
        assert_eq!(ActiveTab::Questions.label(), "Q&A");
        assert_eq!(ActiveTab::all().len(), 4);
    }
}
