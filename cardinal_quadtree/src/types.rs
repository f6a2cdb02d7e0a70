// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the quadtree: node identifiers, colours, quadrants,
//! sides, and leaf filters.

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle into the tree's node arena. The arena is
/// append-only — nodes are created during construction and live for the
/// lifetime of the tree — so a `NodeId` obtained from a [`Tree`](crate::Tree)
/// never goes stale. Handles are only meaningful for the tree that issued
/// them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Colour of a node.
///
/// Only `Free` and `Obstructed` nodes are leaves; only `Mixed` nodes have
/// children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Uniformly free leaf.
    Free,
    /// Uniformly obstructed leaf, or a mixed region too small to subdivide
    /// further (conservatively treated as obstructed).
    Obstructed,
    /// Interior node with four children.
    Mixed,
}

/// Child slot of a node within its parent.
///
/// The discriminants follow the locational-code child index used by
/// [`Tree::locate`](crate::Tree::locate): `x_bit | y_bit << 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Top-left child.
    Northwest = 0,
    /// Top-right child.
    Northeast = 1,
    /// Bottom-left child.
    Southwest = 2,
    /// Bottom-right child.
    Southeast = 3,
}

impl Quadrant {
    pub(crate) const fn idx(self) -> usize {
        self as usize
    }
}

/// Cardinal direction from a node towards one of its sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards smaller x.
    West = 0,
    /// Towards smaller y.
    North = 1,
    /// Towards larger x.
    East = 2,
    /// Towards larger y.
    South = 3,
}

impl Side {
    /// All four sides, in the order neighbour enumeration visits them.
    pub const ALL: [Self; 4] = [Self::West, Self::North, Self::East, Self::South];

    /// The side facing this one: `West <-> East`, `North <-> South`.
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
        }
    }

    /// The direction walked when enumerating several neighbours along this
    /// side: from the cardinal neighbour towards the rest of the run.
    pub const fn traversal(self) -> Self {
        match self {
            Self::West => Self::South,
            Self::North => Self::East,
            Self::East => Self::North,
            Self::South => Self::West,
        }
    }

    pub(crate) const fn idx(self) -> usize {
        self as usize
    }
}

bitflags::bitflags! {
    /// Filter for leaf iteration.
    ///
    /// The default filter selects both colours, i.e. every leaf.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LeafFilter: u8 {
        /// Include free leaves.
        const FREE = 0b0000_0001;
        /// Include obstructed leaves.
        const OBSTRUCTED = 0b0000_0010;
    }
}

impl Default for LeafFilter {
    fn default() -> Self {
        Self::FREE | Self::OBSTRUCTED
    }
}

impl LeafFilter {
    /// Whether a leaf of the given colour passes the filter.
    ///
    /// `Mixed` never passes: interior nodes are by definition not leaves.
    pub fn admits(self, colour: Colour) -> bool {
        match colour {
            Colour::Free => self.contains(Self::FREE),
            Colour::Obstructed => self.contains(Self::OBSTRUCTED),
            Colour::Mixed => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_ne!(side.opposite(), side);
        }
    }

    #[test]
    fn traversal_runs_along_the_side() {
        // Walking a side's run must move orthogonally to the side itself.
        assert_eq!(Side::West.traversal(), Side::South);
        assert_eq!(Side::North.traversal(), Side::East);
        assert_eq!(Side::East.traversal(), Side::North);
        assert_eq!(Side::South.traversal(), Side::West);
        for side in Side::ALL {
            assert_ne!(side.traversal(), side);
            assert_ne!(side.traversal(), side.opposite());
        }
    }

    #[test]
    fn quadrant_discriminants_match_locational_codes() {
        assert_eq!(Quadrant::Northwest.idx(), 0);
        assert_eq!(Quadrant::Northeast.idx(), 1);
        assert_eq!(Quadrant::Southwest.idx(), 2);
        assert_eq!(Quadrant::Southeast.idx(), 3);
    }

    #[test]
    fn leaf_filter_admits_colours() {
        assert!(LeafFilter::default().admits(Colour::Free));
        assert!(LeafFilter::default().admits(Colour::Obstructed));
        assert!(!LeafFilter::default().admits(Colour::Mixed));
        assert!(LeafFilter::FREE.admits(Colour::Free));
        assert!(!LeafFilter::FREE.admits(Colour::Obstructed));
        assert!(!LeafFilter::OBSTRUCTED.admits(Colour::Free));
        assert!(LeafFilter::empty().is_empty());
    }
}
