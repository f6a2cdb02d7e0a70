// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a tree from a small bitmap, list the obstructed leaves, and locate
//! a point.
//!
//! Run:
//! - `cargo run -p cardinal_quadtree --example quadtree_basics`

use cardinal_quadtree::{LeafFilter, Tree};
use cardinal_raster::{BitRaster, PixelRect};

fn main() {
    // A 16x16 map with a square obstacle and a vertical wall.
    let mut raster = BitRaster::new(16);
    raster.fill_rect(PixelRect::new(4, 4, 8, 8), true);
    raster.fill_rect(PixelRect::new(10, 2, 12, 14), true);

    let tree = Tree::new(&raster, 1).expect("valid raster");
    println!("{tree:?}");

    println!("obstructed leaves:");
    tree.for_each_leaf(LeafFilter::OBSTRUCTED, |leaf| {
        println!("  {:?}", tree.bounds(leaf));
    });

    let leaf = tree.locate(5, 5).expect("in bounds");
    println!(
        "(5, 5) lies in {:?} ({:?})",
        tree.bounds(leaf),
        tree.colour(leaf)
    );
}
