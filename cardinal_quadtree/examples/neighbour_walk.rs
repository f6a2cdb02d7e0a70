// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbour walks.
//!
//! Build a tree whose leaves come in mixed sizes, then enumerate the
//! neighbours of one leaf per cardinal side.
//!
//! Run:
//! - `cargo run -p cardinal_quadtree --example neighbour_walk`

use cardinal_quadtree::{Side, Tree};
use cardinal_raster::{BitRaster, PixelRect};

fn main() {
    // A horizontal wall; leaves shrink towards it and merge away from it.
    let mut raster = BitRaster::new(32);
    raster.fill_rect(PixelRect::new(0, 15, 20, 17), true);
    let tree = Tree::new(&raster, 1).expect("valid raster");

    let leaf = tree.locate(8, 8).expect("in bounds");
    println!("neighbours of {:?}:", tree.bounds(leaf));
    for side in Side::ALL {
        print!("  {side:?}:");
        tree.for_each_neighbour_in_direction(leaf, side, |n| {
            print!(" {:?}", tree.bounds(n));
        });
        println!();
    }
}
