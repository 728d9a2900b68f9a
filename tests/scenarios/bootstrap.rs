//! Scenario: an operator builds an organization from nothing.
//!
//! Units are created, the identity account comes first, then a team account
//! whose exports land in the identity account's group stack.

use std::time::Duration;

use orgov::application::{AccountOutcome, AccountRequest, OuOutcome, StackOutcome};
use orgov::OrgovError;

use crate::common::*;

#[test]
fn bootstrap_units_identity_and_team_accounts() {
    let world = World::new(FakeOrganization::new(2));

    // Units: Eng and Web under the root; nesting is refused
    let eng = world.ensure_ou("Eng", "").unwrap();
    assert_eq!(eng, OuOutcome::Created { id: "ou-eng".to_string() });
    let web = world.ensure_ou("Web", "Root").unwrap();
    assert_eq!(web, OuOutcome::Created { id: "ou-web".to_string() });
    let nested = world.ensure_ou("Platform", "Eng").unwrap_err();
    assert!(matches!(nested, OrgovError::ParentNotFound { ref name } if name == "Eng"));
    assert_eq!(world.directory.ou_count(), 2);

    // Identity account stays at the root
    let iam = world
        .create_account(&AccountRequest::new("iam", "iam@example.com"))
        .unwrap();
    let iam_id = iam.account().unwrap().id.clone();
    match &iam {
        AccountOutcome::Created { policies, .. } => {
            assert_eq!(policies.stacks.len(), 1);
            assert_eq!(policies.stacks[0].stack, "Iam-Policies");
            assert_eq!(policies.stacks[0].outcome, StackOutcome::Created);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(world.clock.slept(), Duration::from_secs(120));

    // The template declares a group parameter the team stacks export into
    world
        .cloud
        .declare_parameter(&iam_id, "Iam-Policies", "DevUsers", "");
    world
        .cloud
        .exports("Team-X-Policies", "DevUsers", "arn:aws:iam::team-x:role/Dev");

    let team = world
        .create_account(
            &AccountRequest::new("team-x", "team-x@example.com")
                .in_ou("Eng")
                .with_update_groups(true),
        )
        .unwrap();
    let team_id = team.account().unwrap().id.clone();
    match &team {
        AccountOutcome::Created { policies, .. } => {
            assert_eq!(policies.stacks[0].stack, "Team-X-Policies");
            let groups = policies.groups.as_ref().unwrap();
            assert_eq!(groups.stack, "Iam-Policies");
            assert_eq!(groups.merged_keys, vec!["DevUsers"]);
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    // Directory: moved into Eng
    assert_eq!(world.directory.parent_of(&team_id).as_deref(), Some("ou-eng"));

    // Manifest: units in creation order, team-x under Eng, iam at the root
    let organization = world.organization();
    let names: Vec<&str> = organization
        .organizational_units
        .iter()
        .map(|ou| ou.name.as_str())
        .collect();
    assert_eq!(names, vec!["Eng", "Web"]);
    assert_eq!(organization.unit("Web").unwrap().parent, "");
    assert_eq!(organization.unit("Eng").unwrap().accounts[0].alias, "team-x");
    assert!(organization.unit("Web").unwrap().accounts.is_empty());
    assert_eq!(organization.accounts[0].alias, "iam");

    // Team stack received the identity account id
    let team_stack = world.cloud.stack(&team_id, "Team-X-Policies").unwrap();
    assert_eq!(team_stack.parameter("IamAccountID"), Some(iam_id.as_str()));
    assert_eq!(team_stack.parameter("ProdccountID"), Some(""));

    // Group stack merged the export
    let group_stack = world.cloud.stack(&iam_id, "Iam-Policies").unwrap();
    assert_eq!(
        group_stack.parameter("DevUsers"),
        Some("arn:aws:iam::team-x:role/Dev")
    );

    // Templates were rendered, published and shared with the owners
    assert!(world.dir.path().join("policies/Team-X-Policies").exists());
    assert_eq!(
        world.cloud.object(BUCKET, "Team-X-Policies").as_deref(),
        Some(TEMPLATE.as_bytes())
    );
    assert!(world.cloud.grants().contains(&(
        BUCKET.to_string(),
        "Team-X-Policies".to_string(),
        "team-x@example.com".to_string()
    )));
}

#[test]
fn creating_an_existing_unit_is_a_no_op() {
    let world = World::new(FakeOrganization::new(0));

    world.ensure_ou("Eng", "").unwrap();
    let again = world.ensure_ou("Eng", "Root").unwrap();

    assert_eq!(again, OuOutcome::Existing { id: "ou-eng".to_string() });
    assert_eq!(world.directory.ou_count(), 1);
    assert_eq!(world.organization().organizational_units.len(), 1);
}
