//! Shared test fixtures and helpers
//!
//! Hand-written fakes for the port traits, with call counters so tests can
//! check what the engine did without touching a settings hive.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use hardentools::core::models::SubjectInfo;
use hardentools::core::ports::{StatusStore, Subject};
use hardentools::core::services::Catalog;

/// Subject that keeps its state in memory
pub struct StubSubject {
    info: SubjectInfo,
    hardened: AtomicBool,
    fails: AtomicBool,
    harden_calls: AtomicUsize,
    query_calls: AtomicUsize,
}

impl StubSubject {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            info: SubjectInfo::new(name, format!("{name} (long)"), format!("About {name}")),
            hardened: AtomicBool::new(false),
            fails: AtomicBool::new(false),
            harden_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
        })
    }

    pub fn hardened(name: &str) -> Arc<Self> {
        let subject = Self::new(name);
        subject.hardened.store(true, Ordering::SeqCst);
        subject
    }

    pub fn failing(name: &str) -> Arc<Self> {
        let subject = Self::new(name);
        subject.fails.store(true, Ordering::SeqCst);
        subject
    }

    /// Number of `harden` calls so far
    pub fn harden_calls(&self) -> usize {
        self.harden_calls.load(Ordering::SeqCst)
    }

    /// Number of `is_hardened` calls so far
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Whether the stub currently reports hardened, without counting a query
    pub fn state(&self) -> bool {
        self.hardened.load(Ordering::SeqCst)
    }
}

impl Subject for StubSubject {
    fn is_hardened(&self) -> bool {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.hardened.load(Ordering::SeqCst)
    }

    fn harden(&self, apply: bool) -> anyhow::Result<()> {
        self.harden_calls.fetch_add(1, Ordering::SeqCst);
        if self.fails.load(Ordering::SeqCst) {
            bail!("{} is locked by policy", self.info.name);
        }
        self.hardened.store(apply, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.info.name
    }

    fn long_name(&self) -> &str {
        &self.info.long_name
    }

    fn description(&self) -> &str {
        &self.info.description
    }
}

/// Status store that records every write
#[derive(Default)]
pub struct RecordingStatus {
    flag: AtomicBool,
    fail_writes: AtomicBool,
    writes: Mutex<Vec<bool>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marked() -> Self {
        let status = Self::new();
        status.flag.store(true, Ordering::SeqCst);
        status
    }

    pub fn failing() -> Self {
        let status = Self::new();
        status.fail_writes.store(true, Ordering::SeqCst);
        status
    }

    /// Every `mark_hardened` argument, in call order
    pub fn writes(&self) -> Vec<bool> {
        self.writes.lock().unwrap().clone()
    }
}

impl StatusStore for RecordingStatus {
    fn check_hardened(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn mark_hardened(&self, hardened: bool) -> anyhow::Result<()> {
        self.writes.lock().unwrap().push(hardened);
        if self.fail_writes.load(Ordering::SeqCst) {
            bail!("access denied");
        }
        self.flag.store(hardened, Ordering::SeqCst);
        Ok(())
    }
}

/// Build a catalog from stubs, keeping handles for assertions
pub fn catalog_of(subjects: &[&Arc<StubSubject>]) -> Catalog {
    subjects
        .iter()
        .fold(Catalog::builder(), |builder, s| builder.subject(Arc::clone(*s)))
        .build()
        .unwrap()
}
