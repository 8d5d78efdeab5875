// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://docs.oracle.com/javase/specs/jvms/se%s/html/jvms-4.html#jvms-4.10";
pub const VERSION_PLACEHOLDER: &str = "%s";
pub const USER_AGENT: &str = concat!("jvms_prolog/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Versions
pub const DEFAULT_START_VERSION: u32 = 7;
/// Java 10 shipped in March 2018; a feature release follows every March and September.
pub const CADENCE_BASE_YEAR: i32 = 2018;
pub const CADENCE_BASE_VERSION: u32 = 9;

// Page layout (§4.10 of chapter 4)
pub const SECTION_SELECTOR: &str = "div.section";
pub const VERIFIER_ANCHOR_SELECTOR: &str = r#"a[name="jvms-4.10"]"#;
pub const LISTING_SELECTOR: &str = "pre.programlisting";
/// The last listings of §4.10 are not verifier rules. This is tied to the layout of
/// the published page, not to anything the JVMS guarantees.
pub const TRAILING_NON_RULE_BLOCKS: usize = 3;
pub const TYPE_HIERARCHY_MARKER: &str = "Verification type hierarchy:";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const OUT_FILE_PREFIX: &str = "jvms-";
pub const OUT_FILE_SUFFIX: &str = "-prolog.pl";
