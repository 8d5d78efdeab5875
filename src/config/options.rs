// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, NaiveDate, Utc};

use super::consts::*;

/// How identical specs across versions are collapsed when duplicates are not kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DedupPolicy {
    /// Compare against the previously kept spec, in ascending version order.
    #[default]
    Adjacent,
    /// Compare against every spec kept so far.
    Global,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub start_version: u32,
    pub end_version: u32,
    pub url: String,
    pub output_folder: PathBuf,
    pub keep_duplicates: bool,
    pub apply_corrections: bool,
    pub dedup_policy: DedupPolicy,
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start_version: DEFAULT_START_VERSION,
            end_version: current_feature_release(),
            url: s!(DEFAULT_URL),
            output_folder: PathBuf::from(DEFAULT_OUT_DIR),
            keep_duplicates: false,
            apply_corrections: true,
            dedup_policy: DedupPolicy::Adjacent,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Options {
    /// Inclusive range of requested versions. Empty when start > end.
    pub fn versions(&self) -> std::ops::RangeInclusive<u32> {
        self.start_version..=self.end_version
    }

    /// Request URL for one version: every placeholder in the template is replaced.
    pub fn url_for(&self, version: u32) -> String {
        self.url.replace(VERSION_PLACEHOLDER, &version.to_string())
    }

    /// File the spec for `version` is written to.
    pub fn out_path(&self, version: u32) -> PathBuf {
        self.output_folder.join(out_file_name(version))
    }
}

pub fn out_file_name(version: u32) -> String {
    join!(OUT_FILE_PREFIX, &version.to_string(), OUT_FILE_SUFFIX)
}

/// Latest Java feature release as of today.
pub fn current_feature_release() -> u32 {
    feature_release_on(Utc::now().date_naive())
}

/// Feature release current on `date`, following the six-month cadence
/// (March and September) that started with Java 10.
pub fn feature_release_on(date: NaiveDate) -> u32 {
    if date.year() < CADENCE_BASE_YEAR {
        return CADENCE_BASE_VERSION;
    }
    let mut releases = 2 * (date.year() - CADENCE_BASE_YEAR) as u32;
    if date.month() >= 3 { releases += 1; }
    if date.month() >= 9 { releases += 1; }
    CADENCE_BASE_VERSION + releases
}
