#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end flows through the public wiring: credential in, principal
//! out, guarded operations against the seeded repository.

use std::io::Write;

use authn_resolver_sdk::Credential;
use authz_resolver_sdk::{PolicyEnforcer, PolicyName};
use resolutions::domain::seed::{SEED_OWNER, SEED_RESOLUTIONS};
use resolutions::{Resolution, Resolutions, ResolutionsConfig, ResolutionsError};
use resolutions_security::constants::{ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE};
use resolutions_security::{AuthenticationMethod, authority_set};
use tracing_test::traced_test;

const SCENARIO_YAML: &str = r#"
identity:
  users:
    - name: alice
      password_hash: "{noop}wonderland"
      authorities: ["resolution:read"]
    - name: admin
      password_hash: "{noop}hunter2"
      authorities: ["ROLE_ADMIN"]
  tokens:
    - token: alice-token
      claims:
        subject: alice
        scopes: ["SCOPE_resolution:read", "SCOPE_resolution:write"]
        attributes:
          client_id: scenario-cli
    - token: ghost-token
      claims:
        subject: ghost
        scopes: ["SCOPE_resolution:read"]
  scope_prefix: "SCOPE_"
seed_resolutions: false
"#;

async fn scenario_module() -> Resolutions {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO_YAML.as_bytes()).unwrap();
    let cfg = ResolutionsConfig::load(Some(file.path())).unwrap();
    Resolutions::init(&cfg).await.unwrap()
}

async fn seeded_module() -> Resolutions {
    Resolutions::init(&ResolutionsConfig::default()).await.unwrap()
}

// ============================================================================
// Scenarios A-D
// ============================================================================

#[tokio::test]
async fn scenario_a_token_cannot_widen_stored_authorities() {
    let module = scenario_module().await;
    let enforcer = PolicyEnforcer::new(module.authz());

    let alice = module
        .client()
        .authenticate(&Credential::bearer("alice-token"))
        .await
        .unwrap();

    assert_eq!(alice.authorities(), &authority_set([RESOLUTION_READ]));
    assert_eq!(alice.method(), AuthenticationMethod::Bearer);
    assert_eq!(
        alice.attribute("client_id").and_then(|v| v.as_str()),
        Some("scenario-cli")
    );
    assert!(!enforcer.authorize_before(&alice, &PolicyName::has_authority(RESOLUTION_WRITE)));
    assert!(enforcer.authorize_before(&alice, &PolicyName::has_authority(RESOLUTION_READ)));

    let err = module
        .client()
        .make_resolution(&alice, "Widen my scopes")
        .await
        .unwrap_err();
    assert_eq!(err, ResolutionsError::Forbidden);
}

#[tokio::test]
async fn scenario_b_admin_role_expands_and_passes_owner_check() {
    let module = scenario_module().await;
    let enforcer = PolicyEnforcer::new(module.authz());

    let admin = module
        .client()
        .authenticate(&Credential::password("admin", "hunter2"))
        .await
        .unwrap();

    assert_eq!(
        admin.authorities(),
        &authority_set([ADMIN_ROLE, RESOLUTION_READ, RESOLUTION_WRITE])
    );
    assert_eq!(admin.method(), AuthenticationMethod::Password);

    let bobs = Resolution::new("Learn the banjo", "bob");
    assert!(enforcer.authorize_after(&admin, Some(&bobs), &PolicyName::owner_or_admin()));
}

#[tokio::test]
async fn scenario_c_filter_keeps_own_items_in_order() {
    let module = scenario_module().await;
    let enforcer = PolicyEnforcer::new(module.authz());
    let alice = module
        .client()
        .authenticate(&Credential::password("alice", "wonderland"))
        .await
        .unwrap();

    let resources = vec![
        Resolution::new("first", "alice"),
        Resolution::new("second", "bob"),
        Resolution::new("third", "alice"),
    ];
    let owner_or_admin = PolicyName::owner_or_admin();

    let texts: Vec<String> = enforcer
        .filter(&alice, resources, &owner_or_admin)
        .map(|r| r.text)
        .collect();

    assert_eq!(texts, ["first", "third"]);
}

#[tokio::test]
async fn scenario_d_unknown_subject_is_an_authentication_error() {
    let module = scenario_module().await;
    let client = module.client();

    let by_token = client
        .authenticate(&Credential::bearer("ghost-token"))
        .await
        .unwrap_err();
    let by_password = client
        .authenticate(&Credential::password("ghost", "boo"))
        .await
        .unwrap_err();

    assert_eq!(by_token, ResolutionsError::Unauthenticated);
    assert_eq!(by_password, ResolutionsError::Unauthenticated);
}

#[tokio::test]
async fn failure_causes_are_indistinguishable() {
    let module = scenario_module().await;
    let client = module.client();

    let wrong_password = client
        .authenticate(&Credential::password("alice", "looking-glass"))
        .await
        .unwrap_err();
    let unknown_user = client
        .authenticate(&Credential::password("ghost", "looking-glass"))
        .await
        .unwrap_err();
    let unknown_token = client
        .authenticate(&Credential::bearer("forged"))
        .await
        .unwrap_err();

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(unknown_user, unknown_token);
    assert_eq!(wrong_password.to_string(), "authentication required");
}

#[tokio::test]
async fn disabled_account_cannot_authenticate() {
    let module = scenario_module().await;
    assert!(module.identity_store().set_enabled("alice", false));

    let err = module
        .client()
        .authenticate(&Credential::password("alice", "wonderland"))
        .await
        .unwrap_err();

    assert_eq!(err, ResolutionsError::Unauthenticated);
}

// ============================================================================
// Seeded accounts and resolutions
// ============================================================================

#[tokio::test]
async fn user_sees_the_seeded_resolutions() {
    let module = seeded_module().await;
    let client = module.client();
    let user = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();

    let listed = client.list_resolutions(&user).await.unwrap();

    let texts: Vec<&str> = listed.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, SEED_RESOLUTIONS);
    assert!(listed.iter().all(|r| r.owner == SEED_OWNER && !r.completed));

    let first = client.get_resolution(&user, listed[0].id).await.unwrap();
    assert_eq!(first, listed[0]);
}

#[tokio::test]
async fn hasread_sees_nothing_and_cannot_fetch_by_id() {
    let module = seeded_module().await;
    let client = module.client();
    let user = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();
    let seeded = client.list_resolutions(&user).await.unwrap();
    let hasread = client
        .authenticate(&Credential::password("hasread", "password"))
        .await
        .unwrap();

    assert!(client.list_resolutions(&hasread).await.unwrap().is_empty());
    assert_eq!(
        client
            .get_resolution(&hasread, seeded[0].id)
            .await
            .unwrap_err(),
        ResolutionsError::NotFound
    );
}

#[tokio::test]
async fn haswrite_creates_but_cannot_read_or_touch_others() {
    let module = seeded_module().await;
    let client = module.client();
    let user = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();
    let seeded = client.list_resolutions(&user).await.unwrap();
    let haswrite = client
        .authenticate(&Credential::password("haswrite", "password"))
        .await
        .unwrap();

    let created = client
        .make_resolution(&haswrite, "Learn Rust")
        .await
        .unwrap();
    assert_eq!(created.owner, "haswrite");

    assert_eq!(
        client.list_resolutions(&haswrite).await.unwrap_err(),
        ResolutionsError::Forbidden
    );
    assert_eq!(
        client
            .revise_resolution(&haswrite, seeded[0].id, "Skim War and Peace")
            .await
            .unwrap_err(),
        ResolutionsError::NotFound
    );

    let revised = client
        .revise_resolution(&haswrite, created.id, "Learn more Rust")
        .await
        .unwrap();
    assert_eq!(revised.text, "Learn more Rust");
}

#[tokio::test]
async fn user_without_write_cannot_complete_own_resolution() {
    let module = seeded_module().await;
    let client = module.client();
    let user = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();
    let seeded = client.list_resolutions(&user).await.unwrap();

    let err = client
        .complete_resolution(&user, seeded[1].id)
        .await
        .unwrap_err();

    assert_eq!(err, ResolutionsError::Forbidden);
}

#[tokio::test]
async fn granting_write_at_runtime_takes_effect_on_next_authentication() {
    let module = seeded_module().await;
    let client = module.client();
    let before = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();
    let seeded = client.list_resolutions(&before).await.unwrap();

    assert!(
        module
            .identity_store()
            .grant_authority("user", RESOLUTION_WRITE)
    );
    let after = client
        .authenticate(&Credential::password("user", "password"))
        .await
        .unwrap();

    assert!(!before.has_authority(RESOLUTION_WRITE));
    let done = client
        .complete_resolution(&after, seeded[1].id)
        .await
        .unwrap();
    assert!(done.completed);
}

#[tokio::test]
async fn admin_sees_and_completes_everything() {
    let module = seeded_module().await;
    let client = module.client();
    let admin = client
        .authenticate(&Credential::password("admin", "password"))
        .await
        .unwrap();

    let listed = client.list_resolutions(&admin).await.unwrap();
    assert_eq!(listed.len(), SEED_RESOLUTIONS.len());

    let done = client
        .complete_resolution(&admin, listed[2].id)
        .await
        .unwrap();
    assert!(done.completed);
    assert_eq!(done.owner, SEED_OWNER);

    let mine = client
        .make_resolution(&admin, "Audit everything")
        .await
        .unwrap();
    assert_eq!(mine.owner, "admin");
    assert_eq!(client.list_resolutions(&admin).await.unwrap().len(), 4);
}

#[tokio::test]
#[traced_test]
async fn rejected_login_is_logged_without_the_password() {
    let module = seeded_module().await;

    let err = module
        .client()
        .authenticate(&Credential::password("user", "not-the-password"))
        .await
        .unwrap_err();

    assert_eq!(err, ResolutionsError::Unauthenticated);
    assert!(logs_contain("authentication rejected"));
    assert!(!logs_contain("not-the-password"));
}
