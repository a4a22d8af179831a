//! A photo gallery delegate producing captioned tiles.

use tessera_array_view::{ArrayViewDelegate, ItemView, ReuseQueue, px::PxRect};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub title: String,
}

impl Photo {
    pub fn numbered(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|index| Photo {
                title: format!("Photo {:04}", index + 1),
            })
            .collect()
    }
}

/// A thumbnail tile. Equality is instance identity.
#[derive(Debug)]
pub struct Tile {
    id: usize,
    frame: PxRect,
    caption: Option<String>,
}

impl Tile {
    pub fn frame(&self) -> PxRect {
        self.frame
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl ItemView for Tile {
    fn set_frame(&mut self, frame: PxRect) {
        self.frame = frame;
    }

    fn prepare_for_reuse(&mut self) {
        self.caption = None;
    }
}

#[derive(Debug, Default)]
pub struct Gallery {
    photos: Vec<Photo>,
    tiles_built: usize,
}

impl Gallery {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            tiles_built: 0,
        }
    }

    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn tiles_built(&self) -> usize {
        self.tiles_built
    }
}

impl ArrayViewDelegate for Gallery {
    type View = Tile;

    fn item_count(&self) -> usize {
        self.photos.len()
    }

    fn view_for_item(&mut self, index: usize, reuse: &mut ReuseQueue<'_, Tile>) -> Tile {
        let mut tile = match reuse.dequeue() {
            Some(tile) => tile,
            None => {
                self.tiles_built += 1;
                trace!(tile = self.tiles_built, "Built a new tile");
                Tile {
                    id: self.tiles_built,
                    frame: PxRect::ZERO,
                    caption: None,
                }
            }
        };
        tile.caption = self.photos.get(index).map(|photo| photo.title.clone());
        tile
    }
}
