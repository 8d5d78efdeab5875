// src/specs/errata.rs
//! Known transcription errors in the published verifier listings.
//!
//! Each entry pairs a literal trigger with a literal fix and names the JVMS
//! subsection the listing comes from. Entries are checked in order and the
//! first one that applies wins, so a listing gets at most one fix. No fix
//! produces text that triggers a different entry, so `correct` is idempotent.
//!
//! A new erratum is a new table row; nothing else changes.

use std::borrow::Cow;

pub struct Erratum {
    /// JVMS subsection the listing appears in.
    pub section: &'static str,
    pub applies: fn(&str) -> bool,
    pub fix: fn(&str) -> String,
}

pub static ERRATA: &[Erratum] = &[
    // classesInOtherPkgWithProtectedMember(..., [class(MemberClassName, L) | Tail], T] :-
    Erratum {
        section: "4.10.1.8",
        applies: |s| s.contains("classesInOtherPkgWithProtectedMember"),
        fix: |s| s.replace("T] :-", "T) :-"),
    },
    // instructionHasEquivalentTypeRule(ldc_w(CP), ldc(CP))  <- missing '.'
    Erratum {
        section: "4.10.1.9",
        applies: |s| s.starts_with("instructionHasEquivalentTypeRule") && !s.ends_with('.'),
        fix: |s| join!(s, "."),
    },
    // isInitHandler: `isInit(Method).` ends the clause one goal early
    Erratum {
        section: "4.10.1.6",
        applies: |s| s == "isInit(Method).",
        fix: |_| s!("isInit(Method),"),
    },
    // instructionIsTypeSafe(baload, ...) :   <- truncated neck
    Erratum {
        section: "4.10.1.9",
        applies: |s| s.ends_with("NextStackFrame, ExceptionStackFrame) :"),
        fix: |s| join!(s, "-"),
    },
];

/// Apply the first matching erratum to one listing block.
pub fn correct(block: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(block);
    }
    match ERRATA.iter().find(|e| (e.applies)(block)) {
        Some(e) => {
            log::debug!("applied §{} erratum", e.section);
            Cow::Owned((e.fix)(block))
        }
        None => Cow::Borrowed(block),
    }
}
