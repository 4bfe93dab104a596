//! Core types and transforms for the fraud awareness site.
//!
//! This crate holds everything the page apps share that is not UI:
//! - `payload`: wire types for the backend endpoints
//! - `dataset`: the normalized per-county statistics map
//! - `ranking`: nationwide and cross-county rankings for the dashboard tables
//! - `severity`: presentation tier derived from a county's case count
//! - `selection`: the map's single-active-county selection rule
//!
//! All of it is pure logic, so it is tested natively here rather than in
//! the browser.

pub mod dataset;
pub mod payload;
pub mod ranking;
pub mod selection;
pub mod severity;
