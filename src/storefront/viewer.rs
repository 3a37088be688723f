// src/storefront/viewer.rs - Gallery view state machine

//! Per-session view state for the unified media gallery: carousel position,
//! per-item transform state, video playback state fed by the media element's
//! event stream, the focus-mode/configuration sub-machine, fullscreen, and
//! auto-scroll timer bookkeeping.
//!
//! All transitions are synchronous reducer-style methods over this one
//! container; the auto-scroll timer and the live media element are owned by
//! the hosting component, never module-level state. Timer ticks carry the
//! epoch they were armed with so a stale timer can never advance the
//! carousel after auto-scroll is turned off.

use serde::{Deserialize, Serialize};

use crate::storefront::gallery::{GalleryItem, MediaKind};

/// Image filter applied to the current image item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFilter {
    #[default]
    None,
    Grayscale,
    Sepia,
    Brightness,
    Contrast,
}

impl ImageFilter {
    /// CSS filter expression, `None` for no filter
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Grayscale => Some("grayscale(100%)"),
            Self::Sepia => Some("sepia(80%)"),
            Self::Brightness => Some("brightness(1.25)"),
            Self::Contrast => Some("contrast(1.4)"),
        }
    }
}

/// Video playback state, populated by the media element's event stream
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    pub volume: f64,
    pub current_time: f64,
    pub duration: f64,
    pub buffered: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: true,
            volume: 1.0,
            current_time: 0.0,
            duration: 0.0,
            buffered: 0.0,
        }
    }
}

/// Seconds skipped by the forward/back affordances
pub const SKIP_SECONDS: f64 = 10.0;

/// The gallery's complete transient view state
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryViewState {
    items: Vec<GalleryItem>,
    current_index: usize,
    rotation: u16,
    flipped: bool,
    zoom: f64,
    filter: ImageFilter,
    pub playback: PlaybackState,
    focus_mode: bool,
    show_configuration: bool,
    fullscreen: bool,
    auto_scroll: bool,
    auto_scroll_epoch: u64,
    link_copied: bool,
}

impl Default for GalleryViewState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl GalleryViewState {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let mut state = Self {
            items,
            current_index: 0,
            rotation: 0,
            flipped: false,
            zoom: 1.0,
            filter: ImageFilter::None,
            playback: PlaybackState::default(),
            focus_mode: false,
            show_configuration: false,
            fullscreen: false,
            auto_scroll: false,
            auto_scroll_epoch: 0,
            link_copied: false,
        };
        state.sync_item_modes();
        state
    }

    /// Replaces the sequence after a rebuild, keeping the index when it is
    /// still in range and snapping to the front otherwise.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        if self.current_index >= self.items.len() {
            self.current_index = 0;
        }
        self.reset_item_state();
        self.sync_item_modes();
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    // --- navigation ---

    /// Advances to the next item, wrapping whenever more than one exists
    pub fn next(&mut self) -> bool {
        if self.len() <= 1 {
            return false;
        }
        let next = (self.current_index + 1) % self.len();
        self.commit_index(next)
    }

    /// Steps back to the previous item, wrapping whenever more than one exists
    pub fn previous(&mut self) -> bool {
        if self.len() <= 1 {
            return false;
        }
        let prev = (self.current_index + self.len() - 1) % self.len();
        self.commit_index(prev)
    }

    /// Jumps to an item (thumbnail click); out-of-range indices are ignored
    pub fn scroll_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.commit_index(index)
    }

    /// Every index commit resets per-item transform and playback state,
    /// matching the carousel's index-change notification semantics.
    fn commit_index(&mut self, index: usize) -> bool {
        self.current_index = index;
        self.reset_item_state();
        self.sync_item_modes();
        true
    }

    fn reset_item_state(&mut self) {
        self.rotation = 0;
        self.flipped = false;
        self.zoom = 1.0;
        self.filter = ImageFilter::None;
        self.playback = PlaybackState::default();
    }

    /// Viewing a 3D model auto-forces focus mode without showing the
    /// configuration panel.
    fn sync_item_modes(&mut self) {
        if matches!(self.current_item().map(|i| i.kind), Some(MediaKind::Model3d)) {
            self.focus_mode = true;
        }
    }

    // --- per-item transforms (image items) ---

    pub fn rotation(&self) -> u16 {
        self.rotation
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn filter(&self) -> ImageFilter {
        self.filter
    }

    /// Advances rotation by 90 degrees, wrapping at 360
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 90) % 360;
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.5, 4.0);
    }

    pub fn set_filter(&mut self, filter: ImageFilter) {
        self.filter = filter;
    }

    /// CSS transform for the current image item
    pub fn transform_css(&self) -> String {
        let mut transform = format!("rotate({}deg)", self.rotation);
        if self.flipped {
            transform.push_str(" scaleX(-1)");
        }
        transform.push_str(&format!(" scale({})", self.zoom));
        transform
    }

    // --- video playback ---

    pub fn toggle_play(&mut self) -> bool {
        self.playback.playing = !self.playback.playing;
        self.playback.playing
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.playback.muted = !self.playback.muted;
        self.playback.muted
    }

    /// Setting volume to exactly zero forces mute; a nonzero volume never
    /// force-unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.playback.volume = volume.clamp(0.0, 1.0);
        if self.playback.volume == 0.0 {
            self.playback.muted = true;
        }
    }

    /// Seeks to a position, clamped to the known duration
    pub fn seek(&mut self, seconds: f64) {
        self.playback.current_time = seconds.clamp(0.0, self.playback.duration);
    }

    pub fn skip_forward(&mut self) {
        self.seek(self.playback.current_time + SKIP_SECONDS);
    }

    pub fn skip_back(&mut self) {
        self.seek(self.playback.current_time - SKIP_SECONDS);
    }

    // metadata-loaded / timeupdate / progress events from the live element

    pub fn media_metadata_loaded(&mut self, duration: f64) {
        self.playback.duration = if duration.is_finite() { duration } else { 0.0 };
    }

    pub fn media_time_update(&mut self, current_time: f64) {
        self.playback.current_time = current_time;
    }

    pub fn media_progress(&mut self, buffered: f64) {
        self.playback.buffered = buffered;
    }

    pub fn media_ended(&mut self) {
        self.playback.playing = false;
    }

    // --- focus mode / configuration sub-machine ---

    pub fn focus_mode(&self) -> bool {
        self.focus_mode
    }

    pub fn show_configuration(&self) -> bool {
        self.show_configuration
    }

    /// Tapping the stage image: enters focus (with the configuration panel)
    /// when not already focused, otherwise toggles the panel only. Returns
    /// whether `focus_mode` changed.
    pub fn tap_stage(&mut self) -> bool {
        let suppressed = matches!(
            self.current_item().map(|i| i.kind),
            Some(MediaKind::Video) | Some(MediaKind::Model3d)
        );
        if self.focus_mode {
            self.show_configuration = !self.show_configuration;
            false
        } else if !suppressed {
            self.focus_mode = true;
            self.show_configuration = true;
            true
        } else {
            false
        }
    }

    /// The "Product Details" affordance performs the same transition as a
    /// stage tap, without the video/3D suppression.
    pub fn details_clicked(&mut self) -> bool {
        if self.focus_mode {
            self.show_configuration = !self.show_configuration;
            false
        } else {
            self.focus_mode = true;
            self.show_configuration = true;
            true
        }
    }

    /// Leaving focus always hides the configuration panel in the same
    /// transition. Returns whether `focus_mode` changed.
    pub fn exit_focus(&mut self) -> bool {
        self.show_configuration = false;
        if self.focus_mode {
            self.focus_mode = false;
            true
        } else {
            false
        }
    }

    pub fn hide_configuration(&mut self) {
        self.show_configuration = false;
    }

    /// One-directional sync from the parent: an external `focus_mode` that
    /// differs from internal state overrides it. Turning focus off this way
    /// also hides the configuration panel; turning it on never auto-shows.
    pub fn apply_external_focus(&mut self, focus_mode: bool) -> bool {
        if self.focus_mode == focus_mode {
            return false;
        }
        self.focus_mode = focus_mode;
        if !focus_mode {
            self.show_configuration = false;
        }
        true
    }

    // --- fullscreen ---

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Returns the new fullscreen state; the hosting component owns the
    /// body scroll-lock side effect.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    pub fn exit_fullscreen(&mut self) -> bool {
        if self.fullscreen {
            self.fullscreen = false;
            true
        } else {
            false
        }
    }

    // --- auto-scroll ---

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Arms auto-scroll and returns the epoch the new timer must carry
    pub fn enable_auto_scroll(&mut self) -> u64 {
        self.auto_scroll = true;
        self.auto_scroll_epoch += 1;
        self.auto_scroll_epoch
    }

    /// Disarms auto-scroll; any timer still holding the old epoch becomes
    /// a no-op.
    pub fn disable_auto_scroll(&mut self) {
        self.auto_scroll = false;
        self.auto_scroll_epoch += 1;
    }

    /// One timer tick. Advances only when the epoch is current, the flag is
    /// still set, and there is more than one item to cycle through.
    pub fn tick_auto_scroll(&mut self, epoch: u64) -> bool {
        if epoch != self.auto_scroll_epoch || !self.auto_scroll || self.len() <= 1 {
            return false;
        }
        self.next()
    }

    // --- copy-link indicator ---

    pub fn link_copied(&self) -> bool {
        self.link_copied
    }

    pub fn set_link_copied(&mut self, copied: bool) {
        self.link_copied = copied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{Model3dRef, ProductVideo};
    use crate::storefront::gallery::build_gallery;

    fn video(url: &str) -> ProductVideo {
        ProductVideo {
            video_url: url.to_string(),
            ..Default::default()
        }
    }

    fn state(image_count: usize, with_video: bool, with_model: bool) -> GalleryViewState {
        let images: Vec<String> = (0..image_count).map(|i| format!("img-{i}.jpg")).collect();
        let videos = if with_video { vec![video("v.mp4")] } else { vec![] };
        let model = if with_model {
            Model3dRef::Direct("m.glb".to_string())
        } else {
            Model3dRef::None
        };
        GalleryViewState::new(build_gallery(&images, &videos, &model))
    }

    #[test]
    fn test_index_change_resets_transforms_and_playback() {
        let mut view = state(3, true, false);
        view.rotate();
        view.toggle_flip();
        view.set_zoom(2.0);
        view.media_metadata_loaded(120.0);
        view.media_time_update(42.0);
        view.toggle_play();

        assert!(view.next());

        assert_eq!(view.rotation(), 0);
        assert!(!view.is_flipped());
        assert_eq!(view.zoom(), 1.0);
        assert!(!view.playback.playing);
        assert_eq!(view.playback.current_time, 0.0);
        assert_eq!(view.playback.duration, 0.0);
        assert_eq!(view.playback.buffered, 0.0);
        assert!(view.playback.muted);
    }

    #[test]
    fn test_rotation_wraps_mod_360() {
        let mut view = state(1, false, false);
        for expected in [90, 180, 270, 0, 90] {
            view.rotate();
            assert_eq!(view.rotation(), expected);
        }
    }

    #[test]
    fn test_transform_string_composition() {
        let mut view = state(1, false, false);
        view.rotate();
        view.toggle_flip();
        view.set_zoom(1.5);
        assert_eq!(view.transform_css(), "rotate(90deg) scaleX(-1) scale(1.5)");

        view.toggle_flip();
        assert_eq!(view.transform_css(), "rotate(90deg) scale(1.5)");
    }

    #[test]
    fn test_wrap_around_needs_more_than_one_item() {
        let mut single = state(1, false, false);
        assert!(!single.next());
        assert!(!single.previous());
        assert_eq!(single.current_index(), 0);

        let mut multi = state(3, false, false);
        multi.scroll_to(2);
        assert!(multi.next());
        assert_eq!(multi.current_index(), 0);
        assert!(multi.previous());
        assert_eq!(multi.current_index(), 2);
    }

    #[test]
    fn test_scroll_to_ignores_out_of_range() {
        let mut view = state(2, false, false);
        assert!(!view.scroll_to(5));
        assert_eq!(view.current_index(), 0);
    }

    #[test]
    fn test_volume_zero_forces_mute_nonzero_does_not_unmute() {
        let mut view = state(1, true, false);
        view.scroll_to(0);

        // unmute, then drop the volume to zero
        view.toggle_mute();
        assert!(!view.playback.muted);
        view.set_volume(0.0);
        assert!(view.playback.muted);

        // raising volume again leaves mute alone
        view.set_volume(0.7);
        assert!(view.playback.muted);
        assert_eq!(view.playback.volume, 0.7);
    }

    #[test]
    fn test_skip_clamps_to_duration() {
        let mut view = state(0, true, false);
        view.media_metadata_loaded(15.0);
        view.skip_forward();
        assert_eq!(view.playback.current_time, 15.0);
        view.skip_back();
        assert_eq!(view.playback.current_time, 5.0);
        view.skip_back();
        assert_eq!(view.playback.current_time, 0.0);
    }

    #[test]
    fn test_focus_exit_always_hides_configuration() {
        let mut view = state(2, false, false);

        assert!(view.tap_stage());
        assert!(view.focus_mode());
        assert!(view.show_configuration());

        // inside focus, tapping toggles the panel only
        assert!(!view.tap_stage());
        assert!(!view.show_configuration());
        assert!(!view.tap_stage());
        assert!(view.show_configuration());

        assert!(view.exit_focus());
        assert!(!view.focus_mode());
        assert!(!view.show_configuration());
    }

    #[test]
    fn test_external_focus_override_never_auto_shows() {
        let mut view = state(2, false, false);
        assert!(view.apply_external_focus(true));
        assert!(view.focus_mode());
        assert!(!view.show_configuration());

        // same value is a no-op
        assert!(!view.apply_external_focus(true));

        view.details_clicked(); // toggles panel on while focused
        assert!(view.show_configuration());
        assert!(view.apply_external_focus(false));
        assert!(!view.show_configuration());
    }

    #[test]
    fn test_model_item_auto_forces_focus_without_panel() {
        let mut view = state(1, false, true);
        assert!(!view.focus_mode());

        // index 1 is the model
        view.scroll_to(1);
        assert_eq!(view.current_item().unwrap().kind, MediaKind::Model3d);
        assert!(view.focus_mode());
        assert!(!view.show_configuration());
    }

    #[test]
    fn test_stage_tap_suppressed_on_video_items() {
        let mut view = state(0, true, false);
        assert_eq!(view.current_item().unwrap().kind, MediaKind::Video);
        assert!(!view.tap_stage());
        assert!(!view.focus_mode());
    }

    #[test]
    fn test_auto_scroll_epoch_discipline() {
        let mut view = state(3, false, false);
        let epoch = view.enable_auto_scroll();

        assert!(view.tick_auto_scroll(epoch));
        assert_eq!(view.current_index(), 1);
        assert!(view.tick_auto_scroll(epoch));
        assert!(view.tick_auto_scroll(epoch));
        // wrapped back to the front
        assert_eq!(view.current_index(), 0);

        view.disable_auto_scroll();
        // the old timer's tick is now inert
        assert!(!view.tick_auto_scroll(epoch));
        assert_eq!(view.current_index(), 0);

        // re-arming issues a fresh epoch; the stale one stays dead
        let fresh = view.enable_auto_scroll();
        assert!(!view.tick_auto_scroll(epoch));
        assert!(view.tick_auto_scroll(fresh));
    }

    #[test]
    fn test_auto_scroll_noop_with_single_item() {
        let mut view = state(1, false, false);
        let epoch = view.enable_auto_scroll();
        assert!(!view.tick_auto_scroll(epoch));
    }

    #[test]
    fn test_set_items_clamps_index() {
        let mut view = state(4, false, false);
        view.scroll_to(3);
        view.set_items(build_gallery(
            &["a.jpg".to_string(), "b.jpg".to_string()],
            &[],
            &Model3dRef::None,
        ));
        assert_eq!(view.current_index(), 0);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_image_filter_css() {
        assert_eq!(ImageFilter::None.css(), None);
        assert_eq!(ImageFilter::Grayscale.css(), Some("grayscale(100%)"));
        assert_eq!(ImageFilter::Sepia.css(), Some("sepia(80%)"));
    }
}
