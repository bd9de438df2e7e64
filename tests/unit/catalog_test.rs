//! Tests for catalog wiring and subject groups

use std::sync::Arc;

use hardentools::adapters::MemoryBackend;
use hardentools::core::models::SubjectInfo;
use hardentools::core::ports::{SettingsBackend, Subject};
use hardentools::core::services::{Catalog, CatalogError, SubjectGroup};
use hardentools::subjects;

use crate::common::StubSubject;

fn group(name: &str, members: &[&Arc<StubSubject>]) -> SubjectGroup {
    members.iter().fold(
        SubjectGroup::new(SubjectInfo::new(name, name, "")),
        |group, member| group.with(Arc::clone(*member)),
    )
}

// =============================================================================
// CATALOG WIRING
// =============================================================================

#[test]
fn test_catalog_keeps_order() {
    let catalog = Catalog::builder()
        .subject(StubSubject::new("WSH"))
        .group(group("Office", &[&StubSubject::new("OfficeWord")]))
        .subject(StubSubject::new("UAC"))
        .build()
        .unwrap();

    assert_eq!(catalog.names(), vec!["WSH", "Office", "UAC"]);
    assert_eq!(catalog.len(), 3);
    assert!(catalog.contains("Office"));
    assert!(!catalog.contains("OfficeWord"));
}

#[test]
fn test_duplicate_top_level_name() {
    let err = Catalog::builder()
        .subject(StubSubject::new("WSH"))
        .subject(StubSubject::new("WSH"))
        .build()
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateName("WSH".into()));
}

#[test]
fn test_duplicate_member_name() {
    let err = Catalog::builder()
        .subject(StubSubject::new("Macros"))
        .group(group("Office", &[&StubSubject::new("Macros")]))
        .build()
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateName("Macros".into()));
}

#[test]
fn test_group_passed_as_subject_reserves_member_names() {
    let err = Catalog::builder()
        .subject(StubSubject::new("WSH"))
        .subject(group("Scripts", &[&StubSubject::new("WSH")]))
        .build()
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateName("WSH".into()));
}

#[test]
fn test_duplicate_two_levels_down() {
    let inner = group("Word", &[&StubSubject::new("Macros")]);
    let outer = SubjectGroup::new(SubjectInfo::new("Office", "Office", "")).with(inner);
    let err = Catalog::builder()
        .subject(StubSubject::new("Macros"))
        .group(outer)
        .build()
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateName("Macros".into()));
}

#[test]
fn test_invalid_name() {
    let err = Catalog::builder().subject(StubSubject::new("Office Macros")).build().unwrap_err();
    assert!(matches!(err, CatalogError::InvalidName(_)));
}

// =============================================================================
// GROUPS
// =============================================================================

#[test]
fn test_group_stops_at_first_failure() {
    let first = StubSubject::new("First");
    let broken = StubSubject::failing("Broken");
    let last = StubSubject::new("Last");
    let office = group("Office", &[&first, &broken, &last]);

    let err = office.harden(true).unwrap_err();
    assert!(err.to_string().contains("Broken"));
    assert!(first.state());
    assert_eq!(last.harden_calls(), 0);
    assert!(!office.is_hardened());
}

#[test]
fn test_group_queries_every_member() {
    let a = StubSubject::new("A");
    let b = StubSubject::hardened("B");
    let office = group("Office", &[&a, &b]);

    assert!(!office.is_hardened());
    assert_eq!((a.query_calls(), b.query_calls()), (1, 1));
}

#[test]
fn test_empty_group_is_hardened() {
    let empty = SubjectGroup::new(SubjectInfo::new("Empty", "Empty", ""));
    assert!(empty.is_empty());
    assert!(empty.is_hardened());
    empty.harden(false).unwrap();
}

// =============================================================================
// BUILTIN CATALOG
// =============================================================================

#[test]
fn test_builtin_harden_and_restore_leaves_hive_clean() {
    let memory = Arc::new(MemoryBackend::new());
    let backend: Arc<dyn SettingsBackend> = memory.clone();
    let catalog = subjects::builtin(&backend).unwrap();

    for subject in catalog.iter() {
        subject.harden(true).unwrap();
    }
    assert!(catalog.iter().all(|s| s.is_hardened()));

    for subject in catalog.iter() {
        subject.harden(false).unwrap();
    }
    assert!(catalog.iter().all(|s| !s.is_hardened()));

    // Only the values that carry a default remain
    let remaining: usize = memory.snapshot().values().map(|values| values.len()).sum();
    assert_eq!(remaining, 2);
}

#[test]
fn test_builtin_entries_have_labels() {
    let backend: Arc<dyn SettingsBackend> = Arc::new(MemoryBackend::new());
    let catalog = subjects::builtin(&backend).unwrap();
    for subject in catalog.iter() {
        assert!(!subject.long_name().is_empty(), "{} has no label", subject.name());
        assert!(!subject.description().is_empty(), "{} has no description", subject.name());
    }
}
