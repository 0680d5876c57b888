//! Module name allocation.
//!
//! Candidate names come from a [`NameSource`] so the allocation loop can run
//! against the console in normal use and against a scripted list in tests or
//! flag-driven runs. A candidate is accepted when it matches
//! `^[A-Za-z0-9_-]+$` and has not been allocated before; otherwise the source
//! is told why and asked again.

use std::collections::{HashSet, VecDeque};
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use regex::Regex;

static MODULE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("module name regex"));

/// Why a candidate module name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Characters outside `[A-Za-z0-9_-]`, or an empty candidate.
    InvalidCharacters,
    /// The name was already allocated to an earlier module slot.
    Duplicate,
}

impl NameRejection {
    /// Diagnostic shown to the user when a candidate is turned down.
    pub fn message(&self) -> &'static str {
        match self {
            NameRejection::InvalidCharacters => {
                "Module name should only contain letters, digits, underscores, and hyphens. Please try again."
            }
            NameRejection::Duplicate => {
                "Module name already exists. Please enter a unique module name."
            }
        }
    }
}

/// Source of candidate module names.
///
/// `slot` is the 1-based module number the candidate is for.
pub trait NameSource {
    /// Yield the next candidate name for the given slot.
    fn next_candidate(&mut self, slot: usize) -> anyhow::Result<String>;

    /// Report a rejected candidate.
    ///
    /// Interactive sources surface the diagnostic and return `Ok` so the
    /// allocation loop asks again; sources that cannot retry return an error.
    fn candidate_rejected(
        &mut self,
        slot: usize,
        candidate: &str,
        rejection: NameRejection,
    ) -> anyhow::Result<()>;
}

/// Interactive name source reading from stdin.
///
/// Re-prompts without bound until an acceptable name is entered.
pub struct ConsoleNameSource;

impl NameSource for ConsoleNameSource {
    fn next_candidate(&mut self, slot: usize) -> anyhow::Result<String> {
        print!(
            "Enter the name of module {slot} (Module name should only contain letters, digits, underscores, and hyphens): "
        );
        io::stdout().flush().context("failed to flush stdout")?;
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read module name from stdin")?;
        if read == 0 {
            bail!("input stream closed while reading the name of module {slot}");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn candidate_rejected(
        &mut self,
        _slot: usize,
        _candidate: &str,
        rejection: NameRejection,
    ) -> anyhow::Result<()> {
        println!("{}", rejection.message());
        Ok(())
    }
}

/// Name source backed by a fixed candidate list.
///
/// Used for `--module-name` flags and in tests. Unlike the console source it
/// has no way to ask for another candidate, so a rejection or an exhausted
/// list aborts the run instead of looping.
pub struct ScriptedNameSource {
    candidates: VecDeque<String>,
}

impl ScriptedNameSource {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for ScriptedNameSource {
    fn next_candidate(&mut self, slot: usize) -> anyhow::Result<String> {
        match self.candidates.pop_front() {
            Some(candidate) => Ok(candidate),
            None => bail!("no module name supplied for module {slot}"),
        }
    }

    fn candidate_rejected(
        &mut self,
        slot: usize,
        candidate: &str,
        rejection: NameRejection,
    ) -> anyhow::Result<()> {
        bail!(
            "module name {candidate:?} for module {slot} was rejected: {}",
            rejection.message()
        )
    }
}

/// Check a candidate against the character-class rule and the allocated set.
pub fn validate_module_name(candidate: &str, taken: &HashSet<String>) -> Result<(), NameRejection> {
    if !MODULE_NAME_RE.is_match(candidate) {
        return Err(NameRejection::InvalidCharacters);
    }
    if taken.contains(candidate) {
        return Err(NameRejection::Duplicate);
    }
    Ok(())
}

/// Allocate one unique, valid module name for `slot`.
///
/// Loops until the source yields an acceptable candidate or refuses to retry.
pub fn allocate_module_name(
    source: &mut dyn NameSource,
    slot: usize,
    taken: &HashSet<String>,
) -> anyhow::Result<String> {
    loop {
        let candidate = source.next_candidate(slot)?;
        match validate_module_name(&candidate, taken) {
            Ok(()) => return Ok(candidate),
            Err(rejection) => source.candidate_rejected(slot, &candidate, rejection)?,
        }
    }
}
