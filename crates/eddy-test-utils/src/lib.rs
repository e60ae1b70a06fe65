//! Test utilities for Eddy development.
//!
//! Seeded field generators ([`random_field`], [`gaussian_bump`],
//! [`point_field`], [`random_state`]) and tolerance assertions
//! ([`assert_close`], [`assert_relative_eq`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fields;

pub use fields::{gaussian_bump, point_field, random_field, random_state};

/// Assert `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f32, b: f32, tol: f32) {
    assert!(
        (a - b).abs() <= tol,
        "expected {a} within {tol} of {b} (diff {})",
        (a - b).abs()
    );
}

/// Assert `|a - b| <= rel * max(|a|, |b|)`.
#[track_caller]
pub fn assert_relative_eq(a: f32, b: f32, rel: f32) {
    let scale = a.abs().max(b.abs()).max(f32::MIN_POSITIVE);
    assert!(
        (a - b).abs() <= rel * scale,
        "expected {a} ~= {b} (relative diff {}, allowed {rel})",
        (a - b).abs() / scale
    );
}
