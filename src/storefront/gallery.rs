// src/storefront/gallery.rs - Unified media sequence

//! Merges product images, videos, and an optional 3D model into one ordered
//! gallery sequence. The placement rule is fixed: first image leads, the 3D
//! model (when present) comes immediately after, remaining images follow in
//! original order, and all videos trail in original order. The sequence is
//! rebuilt whole on every input change; items are never mutated in place.

use serde::{Deserialize, Serialize};

use crate::catalog::product::{Model3dRef, ProductVideo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Model3d,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Model3d => "model3d",
        }
    }

    /// Download extension for this media kind
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Video => "mp4",
            Self::Image | Self::Model3d => "jpg",
        }
    }
}

/// Video metadata carried alongside a video gallery item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl From<&ProductVideo> for VideoInfo {
    fn from(video: &ProductVideo) -> Self {
        Self {
            title: video.title.clone(),
            description: video.description.clone(),
            thumbnail: video.thumbnail.clone(),
        }
    }
}

/// One unit in the unified media sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub kind: MediaKind,
    pub src: String,
    pub video: Option<VideoInfo>,
    /// Position in the final sequence
    pub index: usize,
}

/// Builds the display sequence from raw catalog media.
///
/// Deterministic: identical inputs always yield an identical sequence.
pub fn build_gallery(
    images: &[String],
    videos: &[ProductVideo],
    model_3d: &Model3dRef,
) -> Vec<GalleryItem> {
    let mut items = Vec::with_capacity(images.len() + videos.len() + 1);

    let mut remaining = images.iter();
    if let Some(first) = remaining.next() {
        items.push((MediaKind::Image, first.clone(), None));
    }
    if let Some(url) = model_3d.normalized() {
        items.push((MediaKind::Model3d, url.to_string(), None));
    }
    for image in remaining {
        items.push((MediaKind::Image, image.clone(), None));
    }
    for video in videos {
        items.push((
            MediaKind::Video,
            video.video_url.clone(),
            Some(VideoInfo::from(video)),
        ));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, (kind, src, video))| GalleryItem {
            kind,
            src,
            video,
            index,
        })
        .collect()
}

/// Rewrites the image list so a variant's image leads the gallery.
///
/// The promoted image moves to the front and any existing occurrence is
/// dropped, so the list never holds a duplicate.
pub fn promote_variant_image(images: &[String], promoted: &str) -> Vec<String> {
    let mut rewritten = Vec::with_capacity(images.len() + 1);
    rewritten.push(promoted.to_string());
    rewritten.extend(images.iter().filter(|img| *img != promoted).cloned());
    rewritten
}

/// Download file name for a gallery item
pub fn download_file_name(item: &GalleryItem) -> String {
    format!(
        "product-{}-{}.{}",
        item.kind.as_str(),
        item.index + 1,
        item.kind.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str) -> ProductVideo {
        ProductVideo {
            video_url: url.to_string(),
            ..Default::default()
        }
    }

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ordering_law() {
        let items = build_gallery(
            &images(&["a.jpg", "b.jpg"]),
            &[video("v.mp4")],
            &Model3dRef::Direct("https://m.glb".to_string()),
        );

        let kinds: Vec<_> = items.iter().map(|i| (i.kind, i.src.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (MediaKind::Image, "a.jpg"),
                (MediaKind::Model3d, "https://m.glb"),
                (MediaKind::Image, "b.jpg"),
                (MediaKind::Video, "v.mp4"),
            ]
        );
        for (pos, item) in items.iter().enumerate() {
            assert_eq!(item.index, pos);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let imgs = images(&["a.jpg", "b.jpg", "c.jpg"]);
        let vids = vec![video("v1.mp4"), video("v2.mp4")];
        let model = Model3dRef::Wrapped("https://m.glb".to_string());

        assert_eq!(
            build_gallery(&imgs, &vids, &model),
            build_gallery(&imgs, &vids, &model)
        );
    }

    #[test]
    fn test_model_leads_when_no_images() {
        let items = build_gallery(&[], &[video("v.mp4")], &Model3dRef::Direct("m.glb".into()));
        assert_eq!(items[0].kind, MediaKind::Model3d);
        assert_eq!(items[0].index, 0);
        assert_eq!(items[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_wrapped_model_behaves_like_direct() {
        let imgs = images(&["a.jpg"]);
        let direct = build_gallery(&imgs, &[], &Model3dRef::Direct("x".into()));
        let wrapped = build_gallery(&imgs, &[], &Model3dRef::Wrapped("x".into()));
        assert_eq!(direct, wrapped);
    }

    #[test]
    fn test_blank_model_emits_no_item() {
        for model in [Model3dRef::None, Model3dRef::Direct("   ".into())] {
            let items = build_gallery(&images(&["a.jpg"]), &[], &model);
            assert!(items.iter().all(|i| i.kind != MediaKind::Model3d));
        }
    }

    #[test]
    fn test_empty_inputs_build_empty_sequence() {
        assert!(build_gallery(&[], &[], &Model3dRef::None).is_empty());
    }

    #[test]
    fn test_promotion_moves_image_to_front_without_duplicate() {
        let promoted = promote_variant_image(&images(&["a.jpg", "b.jpg", "c.jpg"]), "b.jpg");
        assert_eq!(promoted, images(&["b.jpg", "a.jpg", "c.jpg"]));

        // promoting an image not already present just prepends it
        let fresh = promote_variant_image(&images(&["a.jpg"]), "new.jpg");
        assert_eq!(fresh, images(&["new.jpg", "a.jpg"]));
    }

    #[test]
    fn test_download_file_name() {
        let items = build_gallery(&images(&["a.jpg"]), &[video("v.mp4")], &Model3dRef::None);
        assert_eq!(download_file_name(&items[0]), "product-image-1.jpg");
        assert_eq!(download_file_name(&items[1]), "product-video-2.mp4");
    }
}
