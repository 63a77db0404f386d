//! Language-agnostic infrastructure shared by rescope's analysis crates.
//!
//! This crate provides:
//! - Byte-offset spans (`span`)
//! - Byte/line/column text position utilities (`text`)
//! - A shared diagnostic taxonomy for non-fatal analysis anomalies (`diagnostic`)

pub mod diagnostic;
pub mod span;
pub mod text;
