// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::{ consts::*, DedupPolicy, Options };
use crate::progress::Progress;
use crate::scrape::{ self, RunSummary };
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(about, version)]
pub struct Args {
    /// First JVM version to fetch
    #[arg(long, env = "JVMS_START_VERSION", default_value_t = DEFAULT_START_VERSION)]
    pub start_version: u32,

    /// Last JVM version to fetch [default: current Java feature release]
    #[arg(long, env = "JVMS_END_VERSION")]
    pub end_version: Option<u32>,

    /// Page URL template; `%s` is replaced by the version
    #[arg(long, env = "JVMS_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Folder the .pl files are written to
    #[arg(short, long, env = "JVMS_OUTPUT_FOLDER", default_value = DEFAULT_OUT_DIR)]
    pub output_folder: PathBuf,

    /// Write every version, even when identical to another
    #[arg(long, env = "JVMS_KEEP_DUPLICATES", value_parser = clap::builder::FalseyValueParser::new())]
    pub keep_duplicates: bool,

    /// Write the listings exactly as published
    #[arg(long)]
    pub no_corrections: bool,

    /// Which specs count as duplicates
    #[arg(long, env = "JVMS_DEDUP", value_enum, default_value_t = DedupPolicy::Adjacent)]
    pub dedup: DedupPolicy,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn into_options(self) -> Options {
        let defaults = Options::default();
        Options {
            start_version: self.start_version,
            end_version: self.end_version.unwrap_or(defaults.end_version),
            url: self.url,
            output_folder: self.output_folder,
            keep_duplicates: self.keep_duplicates,
            apply_corrections: !self.no_corrections,
            dedup_policy: self.dedup,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Prints one status line per version to stderr.
pub struct StderrProgress {
    total: usize,
    done: usize,
    quiet: bool,
}

impl StderrProgress {
    pub fn new(quiet: bool) -> Self {
        Self { total: 0, done: 0, quiet }
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        if !self.quiet {
            eprintln!("Fetching {total} version(s)…");
        }
    }
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn item_done(&mut self, version: u32) {
        self.done += 1;
        if !self.quiet {
            eprintln!("[{}/{}] Java {version}: ok", self.done, self.total);
        }
    }
    fn item_failed(&mut self, version: u32, reason: &str) {
        self.done += 1;
        if !self.quiet {
            eprintln!("[{}/{}] Java {version}: skipped ({reason})", self.done, self.total);
        }
    }
}

/// Parse the command line, run, and print the written paths.
pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    crate::logger::init(crate::logger::level_for(args.verbose, args.quiet));

    let quiet = args.quiet;
    let options = args.into_options();
    log::debug!("{options:?}");

    let mut progress = StderrProgress::new(quiet);
    let summary = scrape::run(&options, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("{}", path.display());
    }
    if !summary.duplicates.is_empty() {
        progress.log(&format!("Skipped duplicates: {:?}", summary.duplicates));
    }
    Ok(summary)
}
