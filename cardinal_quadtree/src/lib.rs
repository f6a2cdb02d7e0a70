// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal Quadtree: a region quadtree with constant-time neighbour finding.
//!
//! Cardinal Quadtree decomposes a square, power-of-two binary raster into
//! homogeneous leaves and keeps four directional links per leaf — one per
//! cardinal side — so that neighbours are reachable in O(1) per link and a
//! run of k smaller neighbours along one side enumerates in O(k), whatever
//! the node sizes involved. The structure follows Safwan W. Qasem's
//! "Cardinal Neighbor Quadtree: a New Quadtree-based Structure for
//! Constant-Time Neighbor Finding".
//!
//! - Input: any [`cardinal_raster::Scanner`], typically a
//!   [`BitRaster`](cardinal_raster::BitRaster), classifying regions as free,
//!   obstructed, or mixed.
//! - Output: an immutable [`Tree`] whose leaves are uniform regions,
//!   queryable by point, by colour, and by adjacency.
//!
//! Trees are built once and never mutated; all queries take `&self` and may
//! run concurrently.
//!
//! ## API overview
//!
//! - [`Tree::new`]: build by recursive decomposition down to a resolution
//!   floor.
//! - [`Tree::locate`]: O(depth) point location via integer locational codes.
//! - [`Tree::for_each_leaf`] / [`Tree::leaves`]: leaf iteration with a
//!   [`LeafFilter`].
//! - [`Tree::for_each_neighbour_in_direction`] /
//!   [`Tree::for_each_neighbour`]: cardinal-neighbour traversal.
//! - Per-node accessors: [`Tree::bounds`], [`Tree::colour`],
//!   [`Tree::parent`], [`Tree::child`], [`Tree::location`],
//!   [`Tree::cardinal`].
//!
//! # Example
//!
//! ```rust
//! use cardinal_quadtree::{Colour, LeafFilter, Tree};
//! use cardinal_raster::{BitRaster, PixelRect};
//!
//! // An 8x8 map with a 2x2 obstacle.
//! let mut raster = BitRaster::new(8);
//! raster.fill_rect(PixelRect::new(2, 2, 4, 4), true);
//!
//! let tree = Tree::new(&raster, 1)?;
//!
//! // The obstacle collapses into a single obstructed leaf.
//! let leaf = tree.locate(3, 3).unwrap();
//! assert_eq!(tree.colour(leaf), Colour::Obstructed);
//! assert_eq!(tree.bounds(leaf), PixelRect::new(2, 2, 4, 4));
//!
//! // Its four neighbours are free, whatever their sizes.
//! let mut free_neighbours = 0;
//! tree.for_each_neighbour(leaf, |n| {
//!     assert_eq!(tree.colour(n), Colour::Free);
//!     free_neighbours += 1;
//! });
//! assert_eq!(free_neighbours, 4);
//!
//! // Leaves are enumerable by colour.
//! assert_eq!(tree.leaves(LeafFilter::OBSTRUCTED).count(), 1);
//! # Ok::<(), cardinal_quadtree::Error>(())
//! ```
//!
//! Runs of smaller neighbours are walked from the cardinal link:
//!
//! ```rust
//! use cardinal_quadtree::{Quadrant, Side, Tree};
//! use cardinal_raster::BitRaster;
//!
//! let mut raster = BitRaster::new(8);
//! raster.set(0, 0, true);
//! let tree = Tree::new(&raster, 1)?;
//!
//! // The NE quadrant stays one 4x4 leaf; its western side abuts two
//! // smaller leaves exposed by the subdivided NW quadrant.
//! let big = tree.child(tree.root(), Quadrant::Northeast).unwrap();
//! let mut run = Vec::new();
//! tree.for_each_neighbour_in_direction(big, Side::West, |n| run.push(tree.size(n)));
//! assert_eq!(run, [2, 2]);
//! # Ok::<(), cardinal_quadtree::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
mod neighbours;
pub mod tree;
pub mod types;

pub use error::Error;
pub use tree::Tree;
pub use types::{Colour, LeafFilter, NodeId, Quadrant, Side};
