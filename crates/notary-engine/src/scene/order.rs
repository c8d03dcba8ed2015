/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(0);
}

/// Stable sort key for draw items.
///
/// Field order matters: the derived `Ord` compares `z` first, then falls back
/// to insertion `order`, so equal layers paint in the order they were pushed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_z_sorts_after_earlier_insertions() {
        let low_late = SortKey::new(ZIndex(0), 9);
        let high_early = SortKey::new(ZIndex(1), 0);
        assert!(low_late < high_early);
    }

    #[test]
    fn equal_z_uses_insertion_order() {
        assert!(SortKey::new(ZIndex(2), 1) < SortKey::new(ZIndex(2), 2));
    }
}
