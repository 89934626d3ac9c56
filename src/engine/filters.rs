//! Filter lists consulted by the Server Orchestrator (§4.6).
//!
//! One pattern per line; a blank line in a list file is a hard error, matching
//! the legacy `getIgnoreList` reader that compiled every non-empty line as a
//! regex with no tolerance for stray blanks.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use super::config::EngineConfig;
use super::error::{EngineError, Result};

/// Control groups are never replicated, matching `nntpsucka.py`'s hardcoded
/// `ign=[re.compile('^control\.')]` default.
const HARDCODED_GLOBAL_IGNORE: &str = r"^control\.";

pub struct FilterLists {
    ignore: Vec<Regex>,
    global_ignore: Vec<Regex>,
    force: Vec<Regex>,
    done: HashSet<String>,
    use_ignore: bool,
}

impl FilterLists {
    pub fn load(config: &EngineConfig) -> Result<Self> {
        let ignore = match &config.filter_list {
            Some(path) => load_regex_list(path)?,
            None => Vec::new(),
        };

        let mut global_ignore = vec![Regex::new(HARDCODED_GLOBAL_IGNORE).expect("valid regex")];
        if let Some(path) = &config.global_filter_list {
            global_ignore.extend(load_regex_list(path)?);
        }

        let force = match &config.forced_list {
            Some(path) => load_regex_list(path)?,
            None => Vec::new(),
        };

        let done = match &config.done_list {
            Some(path) => load_string_set(path)?,
            None => HashSet::new(),
        };

        Ok(Self {
            ignore,
            global_ignore,
            force,
            done,
            use_ignore: config.use_ignore,
        })
    }

    /// Whether `group` should be processed this run, applying filter precedence
    /// (§4.5 step 6): `force` is a required predicate when configured; `done`
    /// excludes already-finished groups; `global_ignore` unconditionally
    /// excludes; `ignore` excludes only when `use_ignore` is set.
    pub fn should_process(&self, group: &str) -> bool {
        if !self.force.is_empty() && !self.force.iter().any(|re| re.is_match(group)) {
            return false;
        }
        if self.done.contains(group) {
            return false;
        }
        if self.global_ignore.iter().any(|re| re.is_match(group)) {
            return false;
        }
        if self.use_ignore && self.ignore.iter().any(|re| re.is_match(group)) {
            return false;
        }
        true
    }
}

fn load_regex_list(path: &Path) -> Result<Vec<Regex>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .map(|line| {
            if line.is_empty() {
                return Err(EngineError::Config(format!(
                    "blank line in filter list {}",
                    path.display()
                )));
            }
            Regex::new(line)
                .map_err(|e| EngineError::Config(format!("invalid pattern '{line}': {e}")))
        })
        .collect()
}

fn load_string_set(path: &Path) -> Result<HashSet<String>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .map(|line| {
            if line.is_empty() {
                return Err(EngineError::Config(format!(
                    "blank line in done list {}",
                    path.display()
                )));
            }
            Ok(line.to_string())
        })
        .collect()
}
