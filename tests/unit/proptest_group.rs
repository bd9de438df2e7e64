//! Property-based tests for subject groups
//!
//! Uses proptest to check the composite rules for arbitrary member states.

use std::sync::Arc;

use hardentools::core::models::SubjectInfo;
use hardentools::core::ports::Subject;
use hardentools::core::services::SubjectGroup;
use proptest::prelude::*;

use crate::common::StubSubject;

fn build(states: &[bool], failing: Option<usize>) -> (SubjectGroup, Vec<Arc<StubSubject>>) {
    let members: Vec<Arc<StubSubject>> = states
        .iter()
        .enumerate()
        .map(|(i, hardened)| {
            let name = format!("Member{i}");
            match (failing == Some(i), hardened) {
                (true, _) => StubSubject::failing(&name),
                (false, true) => StubSubject::hardened(&name),
                (false, false) => StubSubject::new(&name),
            }
        })
        .collect();
    let group = members.iter().fold(
        SubjectGroup::new(SubjectInfo::new("Group", "Group", "")),
        |group, member| group.with(Arc::clone(member)),
    );
    (group, members)
}

proptest! {
    /// A group is hardened exactly when every member is
    #[test]
    fn group_is_and_of_members(states in prop::collection::vec(any::<bool>(), 0..8)) {
        let (group, members) = build(&states, None);
        prop_assert_eq!(group.is_hardened(), states.iter().all(|s| *s));
        // Every member was asked
        prop_assert!(members.iter().all(|m| m.query_calls() == 1));
    }

    /// Hardening a group without failures hardens every member
    #[test]
    fn group_harden_reaches_every_member(
        states in prop::collection::vec(any::<bool>(), 0..8),
        apply in any::<bool>()
    ) {
        let (group, members) = build(&states, None);
        prop_assert!(group.harden(apply).is_ok());
        prop_assert!(members.iter().all(|m| m.state() == apply));
        prop_assert_eq!(group.is_hardened(), apply || states.is_empty());
    }

    /// A failing member stops the walk: later members are never invoked
    #[test]
    fn group_harden_stops_at_failure(
        states in prop::collection::vec(any::<bool>(), 1..8),
        pick in any::<prop::sample::Index>()
    ) {
        let failing = pick.index(states.len());
        let (group, members) = build(&states, Some(failing));
        prop_assert!(group.harden(true).is_err());
        for (i, member) in members.iter().enumerate() {
            prop_assert_eq!(member.harden_calls(), usize::from(i <= failing));
        }
    }
}
