//! Event normalization pipeline.
//!
//! Raw Legistar payloads come in one end; filtered, reduced, injected
//! ingestion models come out the other. The stages are small and
//! independently usable:
//!
//! - [`decisions`]: vote, matter, and minutes text classification
//! - [`filter`]: exclusion patterns for procedural minutes items
//! - [`convert`]: wire record to entity coercions
//! - [`roles`]: role merge against static data, title standardization
//! - [`inject`]: authoritative static person data
//! - [`assemble`]: whole-event assembly and batch scraping
//! - [`roster`]: drift detection between scraped and static rosters

pub mod assemble;
pub mod convert;
pub mod decisions;
pub mod filter;
pub mod inject;
pub mod roles;
pub mod roster;

mod error;

pub use error::PipelineError;
