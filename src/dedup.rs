// src/dedup.rs
use std::collections::HashSet;

use crate::config::DedupPolicy;

/// One version whose spec text was extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionSpec {
    pub version: u32,
    pub spec: String,
}

/// Drop specs identical to ones already kept. Input must be in ascending
/// version order for `Adjacent` to mean "same as the previous release".
pub fn dedup(specs: Vec<VersionSpec>, keep_duplicates: bool, policy: DedupPolicy) -> Vec<VersionSpec> {
    if keep_duplicates {
        return specs;
    }
    match policy {
        DedupPolicy::Adjacent => dedup_adjacent(specs),
        DedupPolicy::Global => dedup_global(specs),
    }
}

fn dedup_adjacent(mut specs: Vec<VersionSpec>) -> Vec<VersionSpec> {
    specs.dedup_by(|cur, prev| cur.spec == prev.spec);
    specs
}

fn dedup_global(specs: Vec<VersionSpec>) -> Vec<VersionSpec> {
    let mut seen: HashSet<String> = HashSet::new();
    specs
        .into_iter()
        .filter(|vs| seen.insert(vs.spec.clone()))
        .collect()
}
