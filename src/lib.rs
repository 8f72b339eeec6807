// SPDX-License-Identifier: PMPL-1.0-or-later

//! palavra: English to Portuguese vocabulary lookup.
//!
//! One word in, one translation out. The vocabulary is a fixed,
//! compile-time table; a word outside it resolves to a fixed fallback
//! string rather than an error.
//!
//! - [`vocab`]: the embedded table and the `translate` operation.
//! - [`output`]: text/JSON/YAML rendering of a lookup result.

pub mod output;
pub mod vocab;
