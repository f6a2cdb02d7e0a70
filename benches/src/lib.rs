// Copyright 2025 the Cardinal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmark-only crate; the benchmarks live under `benches/`.
