// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for the sorted term table.
//!
//! Every query trusts that the owned table is sorted by natural order and that
//! the boundary search returned a tight range. The contracts here check both
//! in debug builds and compile down to nothing in release.

pub mod contracts;
