// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal-neighbour maintenance and traversal.
//!
//! Every leaf keeps one link per side to its *cardinal neighbour*: the
//! top-most western, left-most northern, bottom-most eastern, and right-most
//! southern abutting node. Subdividing a node invalidates the links of every
//! outside node that referenced it, so each subdivision runs a rewire pass:
//!
//! 1. *refine-NE*: when the northern neighbour is smaller than the subdivided
//!    node, walk its run eastwards to find the NE child's own cardinal.
//! 2. *refine-SW*: symmetric for the western side and the SW child.
//! 3. *rewire-outside*: repoint every western and northern neighbour that
//!    referenced the subdivided node at the correct new child, and hand the
//!    (single, at-least-as-large) eastern and southern neighbours their new
//!    western/northern extremes.
//!
//! The decomposition visits quadrants in Z-order, so at subdivision time the
//! western and northern neighbours may already be smaller, while the eastern
//! and southern ones are always at least as large. The pass restores the
//! cardinal invariants before the recursion descends further.

use alloc::vec::Vec;

use crate::tree::Tree;
use crate::types::{NodeId, Quadrant, Side};

impl Tree {
    /// Visit every neighbour of the leaf `id` on the given side, in run
    /// order (the direction of [`Side::traversal`]).
    ///
    /// Emits nothing when the side lies on the raster border. When the
    /// cardinal neighbour is at least as large as the leaf it is the only
    /// neighbour on that side; otherwise the run of smaller neighbours tiles
    /// the side and each is visited exactly once.
    ///
    /// Links are maintained for leaves; calling this on a `Mixed` node reads
    /// the links it held when it was subdivided.
    pub fn for_each_neighbour_in_direction(
        &self,
        id: NodeId,
        side: Side,
        mut f: impl FnMut(NodeId),
    ) {
        let size = self.node(id).size;
        let Some(first) = self.node(id).cn(side) else {
            return;
        };
        f(first);
        if self.node(first).size >= size {
            return;
        }

        let traversal = side.traversal();
        let opposite = side.opposite();
        let mut cur = first;
        loop {
            match self.node(cur).cn(traversal) {
                // Still adjacent as long as the next node looks back at us.
                Some(next) if self.node(next).cn(opposite) == Some(id) => {
                    f(next);
                    cur = next;
                }
                _ => return,
            }
        }
    }

    /// Visit every neighbour of the leaf `id`, sides in W, N, E, S order.
    pub fn for_each_neighbour(&self, id: NodeId, mut f: impl FnMut(NodeId)) {
        for side in Side::ALL {
            self.for_each_neighbour_in_direction(id, side, &mut f);
        }
    }

    // --- rewire pass, invoked once per subdivision ---

    fn neighbour_run(&self, id: NodeId, side: Side) -> Vec<NodeId> {
        let mut run = Vec::new();
        self.for_each_neighbour_in_direction(id, side, |n| run.push(n));
        run
    }

    /// Give the NE child its own north link when the subdivided node's
    /// northern neighbour is smaller than the node itself.
    ///
    /// NW correctly inherits the parent's north link (the left-most northern
    /// neighbour always overlaps NW), but NE's true cardinal then lies
    /// further east: walk the run until it passes the midline.
    pub(crate) fn refine_north_east(&mut self, p: NodeId) {
        let (size, children) = {
            let n = self.node(p);
            (n.size, n.children.expect("refine before children are attached"))
        };
        let Some(first) = self.node(p).cn(Side::North) else {
            return;
        };
        if self.node(first).size >= size {
            return;
        }

        let half = size / 2;
        let mut cur = first;
        let mut cum = self.node(cur).size;
        while cum <= half {
            cur = self
                .node(cur)
                .cn(Side::East)
                .expect("northern run ends before the midline");
            cum += self.node(cur).size;
        }
        let ne = children[Quadrant::Northeast.idx()];
        self.node_mut(ne).set_cn(Side::North, Some(cur));
    }

    /// Symmetric to [`Self::refine_north_east`]: give the SW child its own
    /// west link when the western neighbour is smaller, walking the run
    /// southwards past the midline.
    pub(crate) fn refine_south_west(&mut self, p: NodeId) {
        let (size, children) = {
            let n = self.node(p);
            (n.size, n.children.expect("refine before children are attached"))
        };
        let Some(first) = self.node(p).cn(Side::West) else {
            return;
        };
        if self.node(first).size >= size {
            return;
        }

        let half = size / 2;
        let mut cur = first;
        let mut cum = self.node(cur).size;
        while cum <= half {
            cur = self
                .node(cur)
                .cn(Side::South)
                .expect("western run ends before the midline");
            cum += self.node(cur).size;
        }
        let sw = children[Quadrant::Southwest.idx()];
        self.node_mut(sw).set_cn(Side::West, Some(cur));
    }

    /// Repoint every outside neighbour that referenced the just-subdivided
    /// node at the correct new child.
    pub(crate) fn rewire_outside(&mut self, p: NodeId) {
        let [nw, ne, sw, _se] = self
            .node(p)
            .children
            .expect("rewire before children are attached");

        // Western run: split at the horizontal midline between NW and SW.
        // When the chosen child's top edge lines up with the neighbour's,
        // the neighbour is that child's new western cardinal.
        for x in self.neighbour_run(p, Side::West) {
            if self.node(x).cn(Side::East) != Some(p) {
                continue;
            }
            let child = if self.node(x).bounds.max_y > self.node(sw).bounds.min_y {
                sw
            } else {
                nw
            };
            self.node_mut(x).set_cn(Side::East, Some(child));
            if self.node(child).bounds.min_y == self.node(x).bounds.min_y {
                self.node_mut(child).set_cn(Side::West, Some(x));
            }
        }

        // Northern run: symmetric, split at the vertical midline.
        for x in self.neighbour_run(p, Side::North) {
            if self.node(x).cn(Side::South) != Some(p) {
                continue;
            }
            let child = if self.node(x).bounds.max_x > self.node(ne).bounds.min_x {
                ne
            } else {
                nw
            };
            self.node_mut(x).set_cn(Side::South, Some(child));
            if self.node(child).bounds.min_x == self.node(x).bounds.min_x {
                self.node_mut(child).set_cn(Side::North, Some(x));
            }
        }

        // The eastern and southern neighbours are single nodes at least as
        // large as `p` at this point of the decomposition. The eastern one's
        // new western extreme is NE (top-most); the southern one's new
        // northern extreme is SW (left-most).
        if let Some(east) = self.node(p).cn(Side::East)
            && self.node(east).cn(Side::West) == Some(p)
        {
            self.node_mut(east).set_cn(Side::West, Some(ne));
        }
        if let Some(south) = self.node(p).cn(Side::South)
            && self.node(south).cn(Side::North) == Some(p)
        {
            self.node_mut(south).set_cn(Side::North, Some(sw));
        }
    }
}
