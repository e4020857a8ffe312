//! # gavel-core
//!
//! Ingestion-model entities and the emptiness reducer for Gavel.
//!
//! This crate provides the foundational types shared across all Gavel crates:
//! - Entity structs for the event ingestion schema (events, minutes items, votes, etc.)
//! - Decision and role-title constants used by the normalization pipeline
//! - The per-type emptiness reducer that prunes records carrying no information
//! - Text cleanup helpers for scraped strings

pub mod entities;
pub mod enums;
pub mod reduce;
pub mod text;
