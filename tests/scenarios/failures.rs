//! Scenario: the ways a run stops early, and what it leaves behind.

use std::time::Duration;

use orgov::application::{AccountOutcome, AccountRequest, PolicyRequest};
use orgov::error::OrgovError;

use crate::common::*;

#[test]
fn duplicate_alias_is_rejected_before_anything_is_created() {
    let directory = FakeOrganization::new(0)
        .with_member("100000000090", "billing")
        .with_member("100000000091", "audit")
        .with_member("100000000092", "team-x");
    let world = World::new(directory);

    let err = world
        .create_account(&AccountRequest::new("team-x", "team-x@example.com"))
        .unwrap_err();

    assert!(matches!(err, OrgovError::DuplicateAlias { alias } if alias == "team-x"));
    assert!(world.organization().aliases().is_empty());
}

#[test]
fn slow_creation_times_out_after_fifteen_checks() {
    let world = World::new(FakeOrganization::new(100));

    let err = world
        .create_account(&AccountRequest::new("team-x", "team-x@example.com"))
        .unwrap_err();

    match err {
        OrgovError::CreationTimeout {
            request_id,
            attempts,
            ..
        } => {
            assert_eq!(request_id, "car-1");
            assert_eq!(attempts, 15);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(world.clock.slept(), Duration::from_secs(14 * 60));
    assert!(world.organization().aliases().is_empty());
}

#[test]
fn missing_unit_skips_account_creation() {
    let world = World::new(FakeOrganization::new(0));

    let outcome = world
        .create_account(&AccountRequest::new("team-x", "team-x@example.com").in_ou("Ghost"))
        .unwrap();

    assert_eq!(
        outcome,
        AccountOutcome::SkippedMissingOu {
            ou: "Ghost".to_string()
        }
    );
    assert!(world.organization().aliases().is_empty());
}

#[test]
fn failed_move_records_the_account_at_the_root_without_policies() {
    let world = World::new(FakeOrganization::new(0));
    world.ensure_ou("Eng", "").unwrap();
    world.directory.deny_moves();

    let outcome = world
        .create_account(&AccountRequest::new("team-x", "team-x@example.com").in_ou("Eng"))
        .unwrap();

    let account = match outcome {
        AccountOutcome::CreatedButUnplaced {
            account,
            ou,
            reason,
        } => {
            assert_eq!(ou, "Eng");
            assert!(reason.contains("not authorized"));
            account
        }
        other => panic!("unexpected outcome {other:?}"),
    };

    let organization = world.organization();
    assert_eq!(organization.accounts[0].alias, "team-x");
    assert!(organization.unit("Eng").unwrap().accounts.is_empty());
    assert!(world.cloud.stack(&account.id, "Team-X-Policies").is_none());
    assert!(world.cloud.connections().is_empty());
}

#[test]
fn unknown_alias_stops_the_batch() {
    let world = World::new(FakeOrganization::new(0));
    world
        .create_account(&AccountRequest::new("iam", "iam@example.com"))
        .unwrap();
    let deployed = world.cloud.connections().len();

    let err = world
        .update_policies(&PolicyRequest::new(["ghost", "iam"]))
        .unwrap_err();

    assert!(matches!(err, OrgovError::UnknownAccount { alias } if alias == "ghost"));
    assert_eq!(world.cloud.connections().len(), deployed);
}

#[test]
fn group_refresh_without_identity_account_fails() {
    let world = World::new(FakeOrganization::new(0));
    world
        .create_account(&AccountRequest::new("team-x", "team-x@example.com"))
        .unwrap();

    let err = world
        .update_policies(&PolicyRequest::new(["team-x"]).with_update_groups(true))
        .unwrap_err();

    assert!(matches!(err, OrgovError::UnknownAccount { alias } if alias == "iam"));
}
