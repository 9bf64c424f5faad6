//! Grammar productions for FTL.
//!
//! This module implements all production methods as an extension of
//! `ResourceParser`. Each production returns its node or the first error met.

mod entries;
mod expressions;
mod literals;
mod patterns;
