use strum::{Display as StrumDisplay, EnumCount, EnumIter};

/// The seven flavors on the menu. A closed set fixed at compile time, so chip
/// rendering is exhaustive and there is no "unknown flavor" error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumCount)]
pub enum Flavor {
    Margherita,
    Pepperoni,
    #[strum(serialize = "Quatro Queijos")]
    QuatroQueijos,
    Calabresa,
    #[strum(serialize = "Frango c/ Catupiry")]
    FrangoComCatupiry,
    Portuguesa,
    Vegetariana,
}

/// Stuffed-crust choices. `SemBorda` is the "no border" member and the
/// default for a fresh order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumCount)]
pub enum Border {
    #[default]
    #[strum(serialize = "Sem Borda")]
    SemBorda,
    Catupiry,
    Cheddar,
    Chocolate,
}

impl Border {
    /// Whether the diagram draws the outer crust ring for this choice.
    pub fn has_ring(self) -> bool {
        self != Self::SemBorda
    }
}

/// Pizza sizes, cycled through in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumCount)]
pub enum Size {
    P,
    M,
    G,
}

impl Size {
    pub fn as_index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Self::P,
            1 => Self::M,
            _ => Self::G,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(Flavor::COUNT, 7);
        assert_eq!(Border::COUNT, 4);
        assert_eq!(Size::COUNT, 3);
    }

    #[test]
    fn display_uses_menu_names() {
        assert_eq!(Flavor::QuatroQueijos.to_string(), "Quatro Queijos");
        assert_eq!(Flavor::FrangoComCatupiry.to_string(), "Frango c/ Catupiry");
        assert_eq!(Border::SemBorda.to_string(), "Sem Borda");
        assert_eq!(Size::G.to_string(), "G");
    }

    #[test]
    fn only_the_sentinel_border_has_no_ring() {
        assert!(!Border::SemBorda.has_ring());
        for border in Border::iter().filter(|b| *b != Border::SemBorda) {
            assert!(border.has_ring());
        }
    }

    #[test]
    fn size_index_round_trips_and_wraps() {
        for size in Size::iter() {
            assert_eq!(Size::from_index(size.as_index()), size);
        }
        assert_eq!(Size::from_index(3), Size::P);
        assert_eq!(Size::from_index(4), Size::M);
    }
}
