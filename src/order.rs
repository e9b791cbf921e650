use crate::catalog::{Border, Flavor, Size};
use strum::EnumCount;

/// A pizza splits between at most this many flavors.
pub const MAX_FLAVORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeDirection {
    Previous,
    Next,
}

/// The in-progress order owned by one widget instance. Lives in memory for
/// the widget's lifetime only; a fresh instance starts empty, without a
/// border, at the middle size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    flavors: Vec<Flavor>,
    border: Border,
    size_index: usize,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            flavors: Vec::new(),
            border: Border::default(),
            size_index: Size::M.as_index(),
        }
    }
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chosen flavors in selection order, which is also the slice order in
    /// the diagram.
    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn size(&self) -> Size {
        Size::from_index(self.size_index)
    }

    pub fn size_index(&self) -> usize {
        self.size_index
    }

    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavors.contains(&flavor)
    }

    /// Deselects `flavor` if it is chosen, otherwise selects it when there is
    /// room. Returns whether the order changed; asking for a fourth flavor
    /// leaves the order untouched.
    pub fn toggle_flavor(&mut self, flavor: Flavor) -> bool {
        if let Some(pos) = self.flavors.iter().position(|&f| f == flavor) {
            self.flavors.remove(pos);
            true
        } else if self.flavors.len() < MAX_FLAVORS {
            self.flavors.push(flavor);
            true
        } else {
            false
        }
    }

    pub fn set_border(&mut self, border: Border) {
        self.border = border;
    }

    /// Steps the size one label forward or back, wrapping at both ends.
    pub fn change_size(&mut self, direction: SizeDirection) {
        self.size_index = match direction {
            SizeDirection::Previous => (self.size_index + Size::COUNT - 1) % Size::COUNT,
            SizeDirection::Next => (self.size_index + 1) % Size::COUNT,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defaults_are_empty_no_border_middle_size() {
        let order = Order::new();
        assert!(order.flavors().is_empty());
        assert_eq!(order.border(), Border::SemBorda);
        assert_eq!(order.size(), Size::M);
    }

    #[test]
    fn never_more_than_three_flavors_and_no_duplicates() {
        let mut order = Order::new();
        for _ in 0..3 {
            for flavor in Flavor::iter() {
                order.toggle_flavor(flavor);
                assert!(order.flavors().len() <= MAX_FLAVORS);
                let mut seen = order.flavors().to_vec();
                seen.dedup();
                assert_eq!(seen.len(), order.flavors().len());
            }
        }
    }

    #[test]
    fn toggling_off_preserves_relative_order() {
        let mut order = Order::new();
        order.toggle_flavor(Flavor::Margherita);
        order.toggle_flavor(Flavor::Pepperoni);
        order.toggle_flavor(Flavor::Calabresa);

        assert!(order.toggle_flavor(Flavor::Pepperoni));
        assert_eq!(order.flavors(), [Flavor::Margherita, Flavor::Calabresa]);
    }

    #[test]
    fn fourth_flavor_is_a_no_op() {
        let mut order = Order::new();
        order.toggle_flavor(Flavor::Margherita);
        order.toggle_flavor(Flavor::Pepperoni);
        order.toggle_flavor(Flavor::Calabresa);

        let before = order.clone();
        assert!(!order.toggle_flavor(Flavor::Portuguesa));
        assert_eq!(order, before);
    }

    #[test]
    fn size_wraps_in_both_directions() {
        let mut order = Order::new();

        order.change_size(SizeDirection::Previous); // M -> P
        assert_eq!(order.size(), Size::P);
        order.change_size(SizeDirection::Previous); // wraps to G
        assert_eq!(order.size(), Size::G);
        order.change_size(SizeDirection::Next); // wraps to P
        assert_eq!(order.size(), Size::P);
    }

    #[test]
    fn next_cycles_back_to_start_after_a_full_lap() {
        let mut order = Order::new();
        let start = order.size();
        for _ in 0..Size::COUNT {
            order.change_size(SizeDirection::Next);
        }
        assert_eq!(order.size(), start);
    }

    #[test]
    fn border_is_always_a_single_choice() {
        let mut order = Order::new();
        order.set_border(Border::Cheddar);
        assert_eq!(order.border(), Border::Cheddar);
        order.set_border(Border::Chocolate);
        assert_eq!(order.border(), Border::Chocolate);
        order.set_border(Border::SemBorda);
        assert_eq!(order.border(), Border::SemBorda);
    }
}
