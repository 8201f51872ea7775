//! Drop-zone enumeration and pointer hit-testing
//!
//! Every gap between items, including the one before the first item and the one
//! after the last, is a drop zone. Renderers use [`list_zones`] and
//! [`card_zones`] to draw them and [`ZoneLayout`] to turn a pointer position
//! into the [`ZoneId`] under it.
//!
//! An item's own box doubles as two zones: the half nearest the start of the
//! sequence resolves to the gap in front of the item, the other half to the gap
//! behind it. Lists split along x, cards along y.

use super::session::DragSession;
use crate::types::{BoardSnapshot, ItemKind, ZoneId};
use serde::{Deserialize, Serialize};

/// A pointer position in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Direction a sequence is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right (lists on a board)
    X,
    /// Top to bottom (cards in a list)
    Y,
}

impl Axis {
    /// Axis a sequence of `kind` items is laid out along
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::List => Self::X,
            ItemKind::Card => Self::Y,
        }
    }
}

/// Axis-aligned box. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if `point` lies inside the box. The right and bottom edges are
    /// exclusive so adjacent boxes never both claim a point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Cut the box into two equal halves along `axis`
    pub fn split(&self, axis: Axis) -> (Rect, Rect) {
        match axis {
            Axis::X => {
                let half = self.width / 2.0;
                (
                    Rect::new(self.x, self.y, half, self.height),
                    Rect::new(self.x + half, self.y, self.width - half, self.height),
                )
            }
            Axis::Y => {
                let half = self.height / 2.0;
                (
                    Rect::new(self.x, self.y, self.width, half),
                    Rect::new(self.x, self.y + half, self.width, self.height - half),
                )
            }
        }
    }
}

/// Resolve a point over the item at `slot` to the gap in front of it
/// (`slot`) or behind it (`slot + 1`). Returns `None` if the point is outside.
pub fn split_slot(rect: Rect, axis: Axis, slot: usize, point: Point) -> Option<usize> {
    let (front, back) = rect.split(axis);
    if front.contains(point) {
        Some(slot)
    } else if back.contains(point) {
        Some(slot + 1)
    } else {
        None
    }
}

/// A drop zone as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropZone {
    pub id: ZoneId,
    /// The zone is the one currently armed by the session
    pub highlighted: bool,
}

/// List-level zones `0..=lists.len()`
pub fn list_zones(snapshot: &BoardSnapshot, session: &DragSession) -> Vec<DropZone> {
    (0..=snapshot.len())
        .map(|slot| {
            let id = ZoneId::list(slot);
            DropZone {
                id,
                highlighted: session.is_hovered(id),
            }
        })
        .collect()
}

/// Card-level zones `0..=cards.len()` of the list at `list_slot`.
/// Empty if there is no such list.
pub fn card_zones(snapshot: &BoardSnapshot, list_slot: usize, session: &DragSession) -> Vec<DropZone> {
    let Some(list) = snapshot.lists.get(list_slot) else {
        return Vec::new();
    };

    (0..=list.cards.len())
        .map(|card_slot| {
            let id = ZoneId::card(list_slot, card_slot);
            DropZone {
                id,
                highlighted: session.is_hovered(id),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HitBox {
    /// A list column; splits into the zones before and after it
    List { slot: usize, rect: Rect },
    /// The empty area after the last list
    ListTail { slot: usize, rect: Rect },
    /// A card; splits into the zones before and after it
    Card {
        list_slot: usize,
        card_slot: usize,
        rect: Rect,
    },
    /// The empty area after the last card of a list
    CardTail {
        list_slot: usize,
        card_slot: usize,
        rect: Rect,
    },
}

impl HitBox {
    fn kind(&self) -> ItemKind {
        match self {
            Self::List { .. } | Self::ListTail { .. } => ItemKind::List,
            Self::Card { .. } | Self::CardTail { .. } => ItemKind::Card,
        }
    }

    fn resolve(&self, point: Point) -> Option<ZoneId> {
        match *self {
            Self::List { slot, rect } => split_slot(rect, Axis::X, slot, point).map(ZoneId::list),
            Self::ListTail { slot, rect } => rect.contains(point).then(|| ZoneId::list(slot)),
            Self::Card {
                list_slot,
                card_slot,
                rect,
            } => split_slot(rect, Axis::Y, card_slot, point)
                .map(|slot| ZoneId::card(list_slot, slot)),
            Self::CardTail {
                list_slot,
                card_slot,
                rect,
            } => rect
                .contains(point)
                .then(|| ZoneId::card(list_slot, card_slot)),
        }
    }
}

/// Hit boxes recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct ZoneLayout {
    boxes: Vec<HitBox>,
}

impl ZoneLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded boxes (call before re-rendering)
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Record the box of the list at `slot`
    pub fn add_list(&mut self, slot: usize, rect: Rect) -> &mut Self {
        self.boxes.push(HitBox::List { slot, rect });
        self
    }

    /// Record the empty area after the last list; `slot` is the list count
    pub fn add_list_tail(&mut self, slot: usize, rect: Rect) -> &mut Self {
        self.boxes.push(HitBox::ListTail { slot, rect });
        self
    }

    /// Record the box of card `card_slot` in list `list_slot`
    pub fn add_card(&mut self, list_slot: usize, card_slot: usize, rect: Rect) -> &mut Self {
        self.boxes.push(HitBox::Card {
            list_slot,
            card_slot,
            rect,
        });
        self
    }

    /// Record the empty area after the last card of list `list_slot`;
    /// `card_slot` is that list's card count
    pub fn add_card_tail(&mut self, list_slot: usize, card_slot: usize, rect: Rect) -> &mut Self {
        self.boxes.push(HitBox::CardTail {
            list_slot,
            card_slot,
            rect,
        });
        self
    }

    /// Build the layout of a board drawn as fixed-size columns laid out left to
    /// right, cards stacked top to bottom, with a tail zone under every list and
    /// one after the last list.
    pub fn columns(snapshot: &BoardSnapshot, column_width: f32, card_height: f32, height: f32) -> Self {
        let mut layout = Self::new();
        for (li, list) in snapshot.lists.iter().enumerate() {
            let x = li as f32 * column_width;
            layout.add_list(li, Rect::new(x, 0.0, column_width, height));
            for ci in 0..list.cards.len() {
                let y = ci as f32 * card_height;
                layout.add_card(li, ci, Rect::new(x, y, column_width, card_height));
            }
            let tail_y = list.cards.len() as f32 * card_height;
            layout.add_card_tail(
                li,
                list.cards.len(),
                Rect::new(x, tail_y, column_width, (height - tail_y).max(0.0)),
            );
        }
        let tail_x = snapshot.len() as f32 * column_width;
        layout.add_list_tail(snapshot.len(), Rect::new(tail_x, 0.0, column_width, height));
        layout
    }

    /// The zone of `kind` under `point`. Boxes recorded later sit on top.
    pub fn zone_at(&self, point: Point, kind: ItemKind) -> Option<ZoneId> {
        self.boxes
            .iter()
            .rev()
            .filter(|b| b.kind() == kind)
            .find_map(|b| b.resolve(point))
    }
}
