// src/specs/verifier.rs
//! Scraping spec for JVMS §4.10 (Verification of class Files).
//!
//! The chapter 4 page renders every verifier clause as a
//! `<pre class="programlisting">` inside the `div.section` that carries the
//! `jvms-4.10` anchor. This module turns that section into one Prolog text.
//!
//! Page-layout contract (not guaranteed by the JVMS itself):
//! - the last [`TRAILING_NON_RULE_BLOCKS`] listings of the section are not rules;
//! - the type hierarchy diagram is a listing too and is recognised by its caption.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::config::consts::{
    LISTING_SELECTOR, SECTION_SELECTOR, TRAILING_NON_RULE_BLOCKS, TYPE_HIERARCHY_MARKER,
    VERIFIER_ANCHOR_SELECTOR,
};
use crate::core::html::{element_text, first_containing, selector};
use crate::core::sanitize::decode_entities;
use crate::specs::errata;

static SECTION: Lazy<Selector> = Lazy::new(|| selector(SECTION_SELECTOR));
static ANCHOR: Lazy<Selector> = Lazy::new(|| selector(VERIFIER_ANCHOR_SELECTOR));
static LISTING: Lazy<Selector> = Lazy::new(|| selector(LISTING_SELECTOR));

pub const MISSING_SECTION: &str = "section jvms-4.10 not found";

/// Rendered text of every listing in the verifier section, in document order.
/// `None` when the page has no verifier section.
pub fn listing_blocks(doc: &Html) -> Option<Vec<String>> {
    let section = first_containing(doc.root_element(), &SECTION, &ANCHOR)?;
    Some(section.select(&LISTING).map(element_text).collect())
}

/// Keep only verifier rules: drop the trailing appendix listings, then the
/// type hierarchy diagram.
pub fn rule_blocks(mut blocks: Vec<String>) -> Vec<String> {
    let keep = blocks.len().saturating_sub(TRAILING_NON_RULE_BLOCKS);
    blocks.truncate(keep);
    blocks.retain(|b| !b.contains(TYPE_HIERARCHY_MARKER));
    blocks
}

/// Extract the corrected Prolog text of the verifier section.
/// A section with no rule listings yields an empty string.
pub fn extract(doc: &Html, apply_corrections: bool) -> Result<String, &'static str> {
    let blocks = listing_blocks(doc).ok_or(MISSING_SECTION)?;
    let total = blocks.len();
    let rules = rule_blocks(blocks);
    log::debug!("{} of {total} listings are rules", rules.len());

    let prolog = rules
        .iter()
        .map(|b| {
            let decoded = decode_entities(b);
            errata::correct(&decoded, apply_corrections).into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(prolog)
}
