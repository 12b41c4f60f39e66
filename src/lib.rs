//! veridoc - A strict, deterministic schema validation engine for documents
//! and update modifiers
//!
//! Given a schema (a mapping from dotted generic field paths to type rules),
//! veridoc walks a full document or a partial update modifier (`$set`,
//! `$push`, ...) and reports every field whose value does not match its
//! declared type. All violations are collected in traversal order; nothing
//! short-circuits on the first error.

pub mod document;
pub mod schema;
pub mod validation;
