//! # Scraping "specs" module
//!
//! Page-specific knowledge lives here: where the verifier listings sit in the
//! JVMS HTML, which of them are rules, and which published listings carry
//! known typos.
//!
//! ## What lives here
//! - **Pure DOM extraction** over an already-parsed document (`verifier`).
//! - **The erratum table** applied to each listing (`errata`).
//!
//! ## What does **not** live here
//! - Networking (`core::net`), fan-out and dedup (`scrape`, `dedup`), or
//!   writing files (`file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run → core::net::fetch → specs::verifier::extract
//!                                          ↘ specs::errata::correct (per block)
//!                   → dedup::dedup → file::write_specs
//! ```
//!
//! ## Testing notes
//! Everything here is testable offline against small HTML fixtures.
pub mod errata;
pub mod verifier;
