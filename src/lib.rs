#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! One-question-at-a-time contact form for the terminal.
//!
//! Collects an email address, a name, and a description in a fixed order,
//! pins each confirmed answer above the prompt as a read-only line, then
//! shows a review summary with `Restart` / `Send it!` before finishing.
//! Nothing is persisted or sent anywhere; sending is a stub success signal.

pub mod model;
pub mod tui;
