// src/scrape.rs
use std::{
    collections::{ BTreeMap, HashSet }, path::PathBuf, thread,
    panic::{ self, AssertUnwindSafe },
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::{ consts::VERSION_PLACEHOLDER, Options },
    core::net,
    dedup::{ self, VersionSpec },
    error::{ Result, ScrapeError },
    file,
    progress::{ NullProgress, Progress },
    specs::verifier,
};

/// Result of one version's fetch + extract.
#[derive(Debug)]
pub struct VersionOutcome {
    pub version: u32,
    pub result: Result<String>,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Versions dropped because fetch or extract failed, with the reason.
    pub failed: Vec<(u32, String)>,
    /// Versions dropped as duplicates of a kept spec.
    pub duplicates: Vec<u32>,
}

/// Full run: fetch every version, dedup, write one file per surviving version.
pub fn run(options: &Options, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let outcomes = collect_specs(options, progress)?;

    let mut summary = RunSummary::default();
    let mut specs = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(spec) => specs.push(VersionSpec { version: outcome.version, spec }),
            Err(e) if e.is_recoverable() => summary.failed.push((outcome.version, e.to_string())),
            Err(e) => return Err(e),
        }
    }

    let extracted: Vec<u32> = specs.iter().map(|vs| vs.version).collect();
    let output = build_output(dedup::dedup(specs, options.keep_duplicates, options.dedup_policy));
    summary.duplicates = extracted.into_iter().filter(|v| !output.contains_key(v)).collect();
    for v in &summary.duplicates {
        log::info!("version {v}: identical to an earlier spec, skipped");
    }

    summary.files_written = file::write_specs(&options.output_folder, &output)?;
    Ok(summary)
}

/// Version → spec mapping. Versions are unique, so nothing collides.
pub fn build_output(specs: Vec<VersionSpec>) -> BTreeMap<u32, String> {
    specs.into_iter().map(|vs| (vs.version, vs.spec)).collect()
}

/// Fetch and extract every requested version concurrently.
/// One worker per version; a failing version never affects the others.
/// Outcomes come back in ascending version order, one per requested version.
pub fn collect_specs(options: &Options, progress: &mut dyn Progress) -> Result<Vec<VersionOutcome>> {
    if !options.url.contains(VERSION_PLACEHOLDER) {
        return Err(ScrapeError::InvalidOptions(format!(
            "url template {:?} has no {VERSION_PLACEHOLDER} placeholder", options.url
        )));
    }

    let versions: Vec<u32> = options.versions().collect();
    progress.begin(versions.len());
    if versions.is_empty() {
        log::warn!("empty version range {}..={}", options.start_version, options.end_version);
        progress.finish();
        return Ok(Vec::new());
    }

    let client = net::client(options.timeout)?;

    // Concurrency
    let jobs: Arc<Vec<(u32, String)>> = Arc::new(
        versions.iter().map(|&v| (v, options.url_for(v))).collect()
    );
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<VersionOutcome>();
    let apply_corrections = options.apply_corrections;

    let total = jobs.len();
    let mut workers = 0usize;
    for n in 0..total {
        let jobs = Arc::clone(&jobs);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let client = client.clone();

        let spawned = thread::Builder::new()
            .name(format!("jvms-worker-{n}"))
            .spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    let Some((version, url)) = jobs.get(i) else { break };
                    let result = run_guarded(*version, || fetch_and_extract(&client, url, apply_corrections));
                    let _ = tx.send(VersionOutcome { version: *version, result });
                }
            });
        match spawned {
            Ok(_) => workers += 1,
            // Workers pull from a shared queue, so the running ones cover the rest.
            Err(e) if workers > 0 => {
                log::warn!("started {workers} of {total} workers: {e}");
                break;
            }
            Err(e) => return Err(ScrapeError::Spawn(e)),
        }
    }
    drop(res_tx); // main thread is sole receiver now

    let mut outcomes = Vec::with_capacity(total);
    for outcome in res_rx.iter() {
        report(progress, &outcome);
        outcomes.push(outcome);
    }
    for outcome in missing_outcomes(&versions, &outcomes) {
        report(progress, &outcome);
        outcomes.push(outcome);
    }
    progress.finish();

    outcomes.sort_by_key(|o| o.version);
    Ok(outcomes)
}

fn report(progress: &mut dyn Progress, outcome: &VersionOutcome) {
    match &outcome.result {
        Ok(spec) => {
            log::debug!("version {}: {} bytes of Prolog", outcome.version, spec.len());
            progress.item_done(outcome.version);
        }
        Err(e) => {
            log::warn!("version {}: {e}", outcome.version);
            progress.item_failed(outcome.version, &e.to_string());
        }
    }
}

/// Run one version's job, turning a panic into a failure for that version.
fn run_guarded(version: u32, job: impl FnOnce() -> Result<String>) -> Result<String> {
    panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|_| {
        log::error!("worker panicked on version {version}");
        Err(ScrapeError::Worker { version })
    })
}

/// Failed outcomes for requested versions no worker reported.
fn missing_outcomes(versions: &[u32], outcomes: &[VersionOutcome]) -> Vec<VersionOutcome> {
    let seen: HashSet<u32> = outcomes.iter().map(|o| o.version).collect();
    versions
        .iter()
        .filter(|v| !seen.contains(v))
        .map(|&version| VersionOutcome { version, result: Err(ScrapeError::Worker { version }) })
        .collect()
}

/// Fetch one page and extract its verifier Prolog.
pub fn fetch_and_extract(
    client: &reqwest::blocking::Client,
    url: &str,
    apply_corrections: bool,
) -> Result<String> {
    let doc = net::fetch(client, url)?;
    verifier::extract(&doc, apply_corrections).map_err(|reason| ScrapeError::Extract {
        url: s!(url),
        reason: s!(reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panicking_job_fails_only_its_version() {
        let result = run_guarded(11, || panic!("boom"));
        assert!(matches!(result, Err(ScrapeError::Worker { version: 11 })));
        assert_eq!(run_guarded(12, || Ok(s!("ok(1)."))).unwrap(), "ok(1).");
    }

    #[test]
    fn unreported_versions_become_failures() {
        let outcomes = vec![
            VersionOutcome { version: 9, result: Ok(s!("a.")) },
            VersionOutcome { version: 11, result: Ok(s!("b.")) },
        ];
        let missing = missing_outcomes(&[9, 10, 11, 12], &outcomes);
        let versions: Vec<u32> = missing.iter().map(|o| o.version).collect();
        assert_eq!(versions, vec![10, 12]);
        assert!(missing.iter().all(|o| matches!(o.result, Err(ScrapeError::Worker { .. }))));
    }

    #[test]
    fn worker_failures_are_counted_as_failed() {
        let mut progress = Recorder::default();
        let outcome = VersionOutcome { version: 10, result: Err(ScrapeError::Worker { version: 10 }) };
        report(&mut progress, &outcome);
        assert_eq!(progress.failed, vec![10]);
    }

    #[derive(Default)]
    struct Recorder {
        failed: Vec<u32>,
    }

    impl Progress for Recorder {
        fn item_failed(&mut self, version: u32, _reason: &str) { self.failed.push(version); }
    }
}
