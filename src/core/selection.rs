//! Generic multi-selection model.
//!
//! [`Selection`] tracks a selected subset of a fixed, ordered universe
//! of items and supports the three pointer-driven gestures of a desktop
//! file browser: plain click, toggle click (ctrl/cmd) and range click
//! (shift), the latter anchored at the last non-range selection point.
//!
//! The universe is captured once at construction and treated as a
//! frozen snapshot; whenever the underlying item list changes
//! structurally, the owner replaces the whole `Selection` instead of
//! patching it (see the browser view model).

use std::collections::BTreeSet;

/// Modifier keys carried by a pointer click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Toggle modifier held (ctrl on most platforms, cmd on macOS).
    pub toggle: bool,
    /// Range modifier held (shift).
    pub range: bool,
}

/// Multi-selection over an ordered universe of items.
///
/// Selected items are stored as indices into the universe, so
/// [`Selection::items`] comes back in universe order (not insertion
/// order) for free, which keeps bulk operations deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<T> {
    universe: Vec<T>,
    selected: BTreeSet<usize>,
    anchor: Option<usize>,
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Create an empty selection over `universe`.
    pub fn new(universe: Vec<T>) -> Self {
        Self {
            universe,
            selected: BTreeSet::new(),
            anchor: None,
        }
    }

    /// Check whether `item` is currently selected.
    pub fn has(&self, item: &T) -> bool {
        self.index_of(item)
            .is_some_and(|idx| self.selected.contains(&idx))
    }

    /// Empty the selected set and forget the anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Apply a pointer click to the selection.
    ///
    /// - Plain click: the selected set becomes exactly `{item}` and the
    ///   anchor moves to `item`.
    /// - Toggle click: flips `item`'s membership; the anchor moves to
    ///   `item` either way.
    /// - Range click: selects the inclusive index span between the
    ///   anchor and `item`, in either direction, leaving the anchor
    ///   where it was. Without an anchor it degrades to a plain click.
    ///   Range wins when both modifiers are held.
    ///
    /// Clicks on items outside the universe are ignored; callers are
    /// expected to hand in items drawn from the same universe this
    /// selection was constructed with.
    pub fn click(&mut self, item: &T, modifiers: ClickModifiers) {
        let Some(idx) = self.index_of(item) else {
            return;
        };

        if modifiers.range {
            if let Some(anchor) = self.anchor {
                let (lo, hi) = (anchor.min(idx), anchor.max(idx));
                self.selected = (lo..=hi).collect();
                return;
            }
        }

        if modifiers.toggle {
            if !self.selected.remove(&idx) {
                self.selected.insert(idx);
            }
            self.anchor = Some(idx);
            return;
        }

        self.selected = BTreeSet::from([idx]);
        self.anchor = Some(idx);
    }

    /// Selected items as a universe-ordered sequence.
    pub fn items(&self) -> Vec<T> {
        self.selected
            .iter()
            .map(|idx| self.universe[*idx].clone())
            .collect()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.universe.iter().position(|u| u == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ClickModifiers = ClickModifiers {
        toggle: false,
        range: false,
    };
    const TOGGLE: ClickModifiers = ClickModifiers {
        toggle: true,
        range: false,
    };
    const RANGE: ClickModifiers = ClickModifiers {
        toggle: false,
        range: true,
    };

    fn universe() -> Vec<char> {
        vec!['a', 'b', 'c', 'd', 'e']
    }

    #[test]
    fn test_plain_click_replaces_selection() {
        let mut sel = Selection::new(universe());
        sel.click(&'b', PLAIN);
        sel.click(&'d', PLAIN);
        assert_eq!(sel.items(), vec!['d']);
    }

    #[test]
    fn test_toggle_click_adds_and_removes() {
        let mut sel = Selection::new(universe());
        sel.click(&'a', TOGGLE);
        sel.click(&'c', TOGGLE);
        assert_eq!(sel.items(), vec!['a', 'c']);
        sel.click(&'a', TOGGLE);
        assert_eq!(sel.items(), vec!['c']);
    }

    #[test]
    fn test_range_click_without_anchor_is_plain() {
        let mut sel = Selection::new(universe());
        sel.click(&'c', RANGE);
        assert_eq!(sel.items(), vec!['c']);
        // That plain-equivalent click set the anchor.
        sel.click(&'e', RANGE);
        assert_eq!(sel.items(), vec!['c', 'd', 'e']);
    }

    #[test]
    fn test_range_works_in_both_directions() {
        let mut sel = Selection::new(universe());
        sel.click(&'d', PLAIN);
        sel.click(&'b', RANGE);
        assert_eq!(sel.items(), vec!['b', 'c', 'd']);
    }

    /// The full gesture sequence from the design discussion: range
    /// extension is always relative to the original anchor, and toggle
    /// moves the anchor.
    #[test]
    fn test_anchor_scenario() {
        let mut sel = Selection::new(universe());

        sel.click(&'c', PLAIN);
        assert_eq!(sel.items(), vec!['c']);

        sel.click(&'e', RANGE);
        assert_eq!(sel.items(), vec!['c', 'd', 'e']);

        // Anchor is still 'c': toggling 'a' selects it and re-anchors.
        sel.click(&'a', TOGGLE);
        assert_eq!(sel.items(), vec!['a', 'c', 'd', 'e']);

        // Range from the new anchor 'a' replaces the set with the span.
        sel.click(&'c', RANGE);
        assert_eq!(sel.items(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_items_in_universe_order_not_click_order() {
        let mut sel = Selection::new(universe());
        sel.click(&'e', TOGGLE);
        sel.click(&'a', TOGGLE);
        sel.click(&'c', TOGGLE);
        assert_eq!(sel.items(), vec!['a', 'c', 'e']);
    }

    #[test]
    fn test_clear_resets_anchor() {
        let mut sel = Selection::new(universe());
        sel.click(&'b', PLAIN);
        sel.clear();
        assert!(sel.is_empty());
        // With no anchor, a range click behaves like a plain click.
        sel.click(&'d', RANGE);
        assert_eq!(sel.items(), vec!['d']);
    }

    #[test]
    fn test_click_outside_universe_is_ignored() {
        let mut sel = Selection::new(universe());
        sel.click(&'b', PLAIN);
        sel.click(&'z', PLAIN);
        assert_eq!(sel.items(), vec!['b']);
        assert!(sel.has(&'b'));
        assert!(!sel.has(&'z'));
    }

    #[test]
    fn test_empty_universe() {
        let mut sel: Selection<char> = Selection::new(Vec::new());
        sel.click(&'a', PLAIN);
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }
}
