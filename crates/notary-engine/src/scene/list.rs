use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one canvas.
///
/// - `push()` is O(1)
/// - paint-order iteration sorts lazily and caches the index buffer until
///   the next push
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn kinds(list: &mut DrawList) -> Vec<&'static str> {
        list.iter_in_paint_order().map(|i| i.cmd.kind()).collect()
    }

    #[test]
    fn paint_order_respects_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_line(ZIndex(1), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 1.0, Color::BLACK);
        list.push_filled_polygon(ZIndex(0), vec![Vec2::zero(); 3], Color::BLACK);
        list.push_line(ZIndex(0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 1.0, Color::BLACK);
        assert_eq!(kinds(&mut list), ["polygon", "line", "line"]);
        assert_eq!(list.items()[0].cmd.kind(), "line");
    }

    #[test]
    fn resorts_after_late_push() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        assert_eq!(kinds(&mut list), Vec::<&str>::new());
        list.push_line(ZIndex(1), Vec2::zero(), Vec2::zero(), 1.0, Color::BLACK);
        assert_eq!(kinds(&mut list), ["line"]);
        list.push_filled_polygon(ZIndex(0), vec![Vec2::zero(); 3], Color::BLACK);
        assert_eq!(kinds(&mut list), ["polygon", "line"]);
        assert_eq!(list.len(), 2);
    }
}
