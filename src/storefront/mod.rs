// src/storefront/mod.rs - Storefront core

//! The two product-page subsystems: the unified media gallery (sequence
//! builder plus view-state machine) and the cascading variant resolver with
//! its pricing chain and carrier presentation table.

pub mod carriers;
pub mod gallery;
pub mod pricing;
pub mod resolver;
pub mod viewer;

pub use carriers::{CarrierStyle, CarrierTable};
pub use gallery::{build_gallery, promote_variant_image, GalleryItem, MediaKind};
pub use pricing::display_price;
pub use resolver::{resolve, Resolution, Selection};
pub use viewer::{GalleryViewState, ImageFilter};
