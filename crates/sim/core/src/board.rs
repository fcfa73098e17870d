//! Spatial registry of every simulated item.
//!
//! The board owns its items in draw order and hands out [`ItemId`] handles.
//! Handles are never reused, so a stale handle simply resolves to nothing.

use std::fmt;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::geometry::Point;
use crate::item::{self, Actor, Item, Target};
use crate::render::{Renderer, Transform};

/// Stable handle to a board item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Entry {
    id: ItemId,
    item: Item,
}

/// The simulated plane plus everything on it.
#[derive(Debug)]
pub struct Board {
    entries: Vec<Entry>,
    next_id: u32,
    width: f64,
    height: f64,
    config: SimConfig,
    fault: Option<SimError>,
}

impl Board {
    pub fn new(width: f64, height: f64, config: SimConfig) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            width,
            height,
            config,
            fault: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Updates the surface dimensions after a viewport change.
    pub fn resize(&mut self, width: f64, height: f64) {
        tracing::debug!(width, height, "board resized");
        self.width = width;
        self.height = height;
    }

    /// Appends an item and returns its handle.
    pub fn add(&mut self, item: impl Into<Item>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            item: item.into(),
        });
        id
    }

    /// Removes the item with the given handle.
    ///
    /// Returns `None` when the item is already gone.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).item)
    }

    /// Removes the target with the given handle, leaving other kinds alone.
    pub fn remove_target(&mut self, id: ItemId) -> Option<Target> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id && matches!(entry.item, Item::Target(_)))?;
        match self.entries.remove(index).item {
            Item::Target(target) => Some(target),
            _ => None,
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.item)
    }

    pub fn actor(&self, id: ItemId) -> Option<&Actor> {
        self.get(id).and_then(Item::as_actor)
    }

    pub fn actor_mut(&mut self, id: ItemId) -> Option<&mut Actor> {
        match self.get_mut(id)? {
            Item::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn target(&self, id: ItemId) -> Option<&Target> {
        self.get(id).and_then(Item::as_target)
    }

    /// Iterates over all items in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.entries.iter().map(|entry| (entry.id, &entry.item))
    }

    /// Iterates over all targets in draw order.
    pub fn targets(&self) -> impl Iterator<Item = (ItemId, &Target)> {
        self.iter()
            .filter_map(|(id, item)| item.as_target().map(|target| (id, target)))
    }

    /// Iterates over all actors in draw order.
    pub fn actors(&self) -> impl Iterator<Item = (ItemId, &Actor)> {
        self.iter()
            .filter_map(|(id, item)| item.as_actor().map(|actor| (id, actor)))
    }

    /// Items whose location tolerance-equals `point`.
    pub fn items_at(&self, point: Point) -> impl Iterator<Item = (ItemId, &Item)> {
        let tolerance = self.config.tolerance;
        self.iter()
            .filter(move |(_, item)| item.location().approx_eq(point, tolerance))
    }

    pub fn target_count(&self) -> usize {
        self.targets().count()
    }

    pub fn actor_count(&self) -> usize {
        self.actors().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records an invariant violation; the running [`Board::tick`] returns it.
    pub fn raise(&mut self, error: SimError) {
        tracing::error!(%error, "simulation invariant violated");
        self.fault.get_or_insert(error);
    }

    /// Fault raised during the current item's tick, not yet returned.
    pub(crate) fn pending_fault(&self) -> Option<&SimError> {
        self.fault.as_ref()
    }

    /// Ticks every item once, in order.
    ///
    /// Items are visited by index while the collection may change underneath:
    /// removing an item that sits before the cursor (a captured target) shifts
    /// the next item into the slot just visited, so it sits out this frame.
    /// That skip is accepted; it never visits an item twice or panics.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if let Some(error) = self.fault.take() {
            return Err(error);
        }

        let mut index = 0;
        while let Some(id) = self.entries.get(index).map(|entry| entry.id) {
            self.tick_item(id);
            if let Some(error) = self.fault.take() {
                return Err(error);
            }
            index += 1;
        }
        Ok(())
    }

    fn tick_item(&mut self, id: ItemId) {
        let (width, height, policy) = (self.width, self.height, self.config.edge_policy);

        let is_actor = match self.get_mut(id) {
            Some(Item::Wanderer(wanderer)) => {
                wanderer.advance(width, height, policy);
                false
            }
            Some(Item::Actor(_)) => true,
            Some(Item::Target(_)) | None => false,
        };

        if is_actor {
            item::tick_actor(self, id);
        }
    }

    /// Draws every item in a frame translated to its location and rotated by
    /// its heading.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.begin_frame(self.width, self.height);
        for entry in &self.entries {
            let transform = Transform::new(entry.item.location(), entry.item.heading());
            renderer.draw_shape(entry.item.shape(), transform);
        }
    }
}
