// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Errors reported by [`Tree::new`](crate::Tree::new).
///
/// All variants are fatal: no partial tree is returned. Queries on a
/// successfully built tree are total and never error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The raster is not a square with a power-of-two side.
    InvalidGeometry,
    /// The requested resolution is smaller than one pixel.
    InvalidResolution,
    /// The raster side is smaller than twice the resolution, so the root
    /// could not be subdivided even once.
    ResolutionTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry => {
                write!(f, "raster must be a square with power-of-two dimensions")
            }
            Self::InvalidResolution => write!(f, "resolution must be greater than 0"),
            Self::ResolutionTooLarge => {
                write!(f, "raster side must be at least twice the resolution")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_the_constraint() {
        assert!(Error::InvalidGeometry.to_string().contains("power-of-two"));
        assert!(Error::InvalidResolution.to_string().contains("greater than 0"));
        assert!(Error::ResolutionTooLarge.to_string().contains("twice"));
    }
}
