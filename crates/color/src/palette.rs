//! Ordered swatch collection with selection tracking and paging.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hsv::Hsva;
use crate::item::ColorItem;

/// Cells per swatch page, five across by two rows.
pub const PAGE_SIZE: usize = 10;

/// An ordered collection of swatches plus the currently selected color.
///
/// The trailing "add a color" cell shares the grid with the swatches,
/// so it counts toward [`page_count`](Self::page_count) but is not an
/// item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    items: Vec<ColorItem>,
    selected: Hsva,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// An empty palette with white selected.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: Hsva::white(),
        }
    }

    /// Build a palette by tagging each color in order.
    pub fn from_colors(colors: impl IntoIterator<Item = Hsva>) -> Self {
        Self {
            items: colors.into_iter().map(ColorItem::new).collect(),
            selected: Hsva::white(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ColorItem] {
        &self.items
    }

    /// The currently selected color.
    pub fn selected(&self) -> Hsva {
        self.selected
    }

    /// Change the selection.
    ///
    /// Returns whether anything changed; reselecting the current color
    /// is a no-op, so callers can gate expensive refreshes on the
    /// return value.
    pub fn select(&mut self, color: Hsva) -> bool {
        if self.selected == color {
            return false;
        }
        self.selected = color;
        true
    }

    /// Append a color as a new swatch and return its id.
    pub fn push(&mut self, color: Hsva) -> Uuid {
        let item = ColorItem::new(color);
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Insert a color as a new swatch at `index`, shifting the rest
    /// toward the end. Returns `None` when `index` is past the end.
    pub fn insert(&mut self, index: usize, color: Hsva) -> Option<Uuid> {
        if index > self.items.len() {
            return None;
        }
        let item = ColorItem::new(color);
        let id = item.id;
        self.items.insert(index, item);
        Some(id)
    }

    /// Append the selected color, the "add" cell's behavior.
    pub fn push_selected(&mut self) -> Uuid {
        self.push(self.selected)
    }

    /// Remove a swatch by id.
    pub fn remove(&mut self, id: Uuid) -> Option<ColorItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Move the swatch at `from` so it lands at `to`.
    ///
    /// Moving forward places it after the swatch currently at `to`;
    /// moving backward places it before. Out-of-range indices leave
    /// the palette untouched and return `false`.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Pages of swatches, each at most [`PAGE_SIZE`] long.
    pub fn pages(&self) -> impl Iterator<Item = &[ColorItem]> {
        self.items.chunks(PAGE_SIZE)
    }

    /// Number of grid pages, counting the trailing "add" cell.
    pub fn page_count(&self) -> usize {
        (self.items.len() + 1).div_ceil(PAGE_SIZE)
    }
}
