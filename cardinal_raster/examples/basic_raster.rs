// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Cardinal Raster: build a bitmap and classify regions.
//!
//! Run:
//! - `cargo run -p cardinal_raster --example basic_raster`

use cardinal_raster::{BitRaster, PixelRect, Scanner};

fn main() {
    // A 16x16 map with a wall along x = 5..7.
    let mut raster = BitRaster::new(16);
    raster.fill_rect(PixelRect::new(5, 0, 7, 16), true);

    for rect in [
        PixelRect::new(0, 0, 4, 4),
        PixelRect::new(5, 4, 7, 8),
        PixelRect::new(4, 4, 8, 8),
    ] {
        println!("{rect:?} -> {:?}", raster.coverage(rect));
    }
}
