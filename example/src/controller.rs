//! Screen controller owning a gallery grid.
//!
//! The array view is built lazily on first access, mirroring how a screen
//! creates its view hierarchy only when it is about to be shown.

use tessera_array_view::{
    ArrayView, LayoutConfig, Result, ScrollState, ScrollViewport,
    px::{Px, PxInsets, PxPosition, PxSize},
};
use tracing::{debug, info};

use crate::gallery::{Gallery, Photo};

pub type GalleryView = ArrayView<Gallery, ScrollState>;

pub struct GalleryController {
    config: LayoutConfig,
    viewport_size: PxSize,
    pending_photos: Vec<Photo>,
    array_view: Option<GalleryView>,
}

impl GalleryController {
    pub fn new(viewport_size: PxSize, photos: Vec<Photo>) -> Self {
        let config = LayoutConfig::default()
            .item_size(PxSize::new(Px(100), Px(100)))
            .content_insets(PxInsets::uniform(Px(4)))
            .minimum_column_gap(Px(4))
            .maximum_row_gap(Px(8))
            .preload_row_span(1);
        Self {
            config,
            viewport_size,
            pending_photos: photos,
            array_view: None,
        }
    }

    /// Builds the array view if it does not exist yet.
    pub fn load_view(&mut self) -> &mut GalleryView {
        let config = self.config;
        let viewport_size = self.viewport_size;
        let pending = &mut self.pending_photos;
        self.array_view.get_or_insert_with(|| {
            debug!(
                width = viewport_size.width.0,
                height = viewport_size.height.0,
                "Loading gallery view"
            );
            let gallery = Gallery::new(std::mem::take(pending));
            ArrayView::with_config(gallery, ScrollState::new(viewport_size), config)
        })
    }

    pub fn is_view_loaded(&self) -> bool {
        self.array_view.is_some()
    }

    pub fn array_view(&self) -> Option<&GalleryView> {
        self.array_view.as_ref()
    }

    pub fn will_appear(&mut self) -> Result<()> {
        let view = self.load_view();
        view.reload()?;
        info!(items = view.item_count(), "Gallery appeared");
        Ok(())
    }

    pub fn did_resize(&mut self, size: PxSize) -> Result<()> {
        self.viewport_size = size;
        let view = self.load_view();
        view.viewport_mut().set_viewport_size(size);
        view.note_scroll_or_resize()
    }

    pub fn scroll_to(&mut self, y: Px) -> Result<()> {
        let view = self.load_view();
        let x = view.viewport().content_offset().x;
        view.viewport_mut().scroll_to(PxPosition::new(x, y));
        view.note_scroll_or_resize()
    }

    pub fn replace_data(&mut self, photos: Vec<Photo>) -> Result<()> {
        let view = self.load_view();
        view.delegate_mut().set_photos(photos);
        view.reload_items()
    }
}
