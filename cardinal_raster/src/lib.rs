// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinal Raster: integer pixel geometry and binary-raster scanning.
//!
//! Cardinal Raster is the lower layer of the Cardinal workspace.
//!
//! - [`PixelRect`]: half-open, axis-aligned integer rectangles.
//! - [`Scanner`]: the uniformity oracle consumed by `cardinal_quadtree`
//!   during decomposition — classify a region as uniformly free, uniformly
//!   obstructed, or mixed.
//! - [`BitRaster`]: a square bit-packed binary raster implementing
//!   [`Scanner`] with word-wise scans.
//!
//! The crate does not decode image files; callers construct rasters
//! programmatically (or implement [`Scanner`] over their own storage).
//!
//! # Example
//!
//! ```rust
//! use cardinal_raster::{BitRaster, Coverage, PixelRect, Scanner};
//!
//! // An 8x8 map with an obstructed 2x2 block.
//! let mut raster = BitRaster::new(8);
//! raster.fill_rect(PixelRect::new(2, 2, 4, 4), true);
//!
//! assert_eq!(raster.coverage(PixelRect::new(2, 2, 4, 4)), Coverage::Obstructed);
//! assert_eq!(raster.coverage(PixelRect::new(4, 4, 8, 8)), Coverage::Free);
//! assert_eq!(raster.coverage(raster.bounds()), Coverage::Mixed);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod scanner;
pub mod types;

pub use scanner::{BitRaster, Coverage, Scanner};
pub use types::PixelRect;
