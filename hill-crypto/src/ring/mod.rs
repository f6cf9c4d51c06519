#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing the finite ring Z_m and the
//! fixed-size 2x2 linear algebra the Hill cipher is built on.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// Modulus of the Hill cipher ring: 26 letters plus the filler symbol.
pub const HILL_MODULUS: u64 = 27;

/// An ordered pair of residues, the block the key matrix operates on.
pub type Vector = [i64; 2];
/// A 2x2 matrix stored row-major.
pub type Matrix = [[i64; 2]; 2];

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
