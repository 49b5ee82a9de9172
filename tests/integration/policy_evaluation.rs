use asciicast_policy::policy::{Action, Attribute, DenialReason, PolicyEngine, DEFAULT_POLICY};
use asciicast_policy::request::AuthorizationRequest;
use asciicast_policy::{Actor, Asciicast};
use serde_json::json;

fn admin() -> Actor {
    Actor::admin(1)
}

fn regular_user() -> Actor {
    Actor::new(7)
}

#[test]
fn test_update_denied_without_user() {
    let engine = PolicyEngine::new();
    assert!(!engine.can_update(None, &Asciicast::new()));
}

#[test]
fn test_update_granted_to_admin() {
    let engine = PolicyEngine::new();
    assert!(engine.can_update(Some(&admin()), &Asciicast::new()));
}

#[test]
fn test_update_granted_to_creator() {
    let engine = PolicyEngine::new();
    let user = regular_user();
    assert!(engine.can_update(Some(&user), &Asciicast::owned_by(user.id)));
}

#[test]
fn test_update_denied_to_other_user() {
    let engine = PolicyEngine::new();
    assert!(!engine.can_update(Some(&Actor::new(8)), &Asciicast::owned_by(9)));
}

#[test]
fn test_destroy_follows_update_rule() {
    let engine = PolicyEngine::new();
    let user = regular_user();

    assert!(!engine.can_destroy(None, &Asciicast::new()));
    assert!(engine.can_destroy(Some(&admin()), &Asciicast::new()));
    assert!(engine.can_destroy(Some(&user), &Asciicast::owned_by(user.id)));
    assert!(!engine.can_destroy(Some(&Actor::new(8)), &Asciicast::owned_by(9)));
}

#[test]
fn test_feature_and_unfeature_require_admin() {
    let engine = PolicyEngine::new();
    let user = regular_user();
    let owned = Asciicast::owned_by(user.id);

    assert!(!engine.can_feature(None, &Asciicast::new()));
    assert!(engine.can_feature(Some(&admin()), &Asciicast::new()));
    assert!(!engine.can_feature(Some(&user), &owned));

    assert!(!engine.can_unfeature(None, &Asciicast::new()));
    assert!(engine.can_unfeature(Some(&admin()), &Asciicast::new()));
    assert!(!engine.can_unfeature(Some(&user), &owned));
}

#[test]
fn test_visibility_changes_require_ownership() {
    let engine = PolicyEngine::new();
    let user = regular_user();
    let owned = Asciicast::owned_by(user.id);
    let foreign = Asciicast::owned_by(8);

    assert!(!engine.can_make_public(None, &owned));
    assert!(engine.can_make_public(Some(&user), &owned));
    assert!(!engine.can_make_public(Some(&user), &foreign));

    assert!(!engine.can_make_private(None, &owned));
    assert!(engine.can_make_private(Some(&user), &owned));
    assert!(!engine.can_make_private(Some(&user), &foreign));
}

#[test]
fn test_admin_cannot_change_visibility_of_foreign_asciicast() {
    let engine = PolicyEngine::new();
    let foreign = Asciicast::owned_by(8);

    assert!(!engine.can_make_public(Some(&admin()), &foreign));
    assert!(!engine.can_make_private(Some(&admin()), &foreign));
}

#[test]
fn test_permitted_attributes_for_admin_include_featured() {
    let engine = PolicyEngine::new();
    assert_eq!(
        engine.permitted_attributes(Some(&admin()), &Asciicast::new()),
        [
            Attribute::Title,
            Attribute::Description,
            Attribute::ThemeName,
            Attribute::Featured
        ]
    );
}

#[test]
fn test_permitted_attributes_for_non_admin_are_empty() {
    let engine = PolicyEngine::new();
    assert!(engine
        .permitted_attributes(Some(&regular_user()), &Asciicast::new())
        .is_empty());
}

#[test]
fn test_permitted_attributes_for_creator_include_private() {
    let engine = PolicyEngine::new();
    let user = regular_user();

    let permitted = engine.permitted_attributes(Some(&user), &Asciicast::owned_by(user.id));

    assert_eq!(
        permitted,
        [
            Attribute::Title,
            Attribute::Description,
            Attribute::ThemeName,
            Attribute::Private
        ]
    );
    assert!(!permitted.contains(Attribute::Featured));
}

#[test]
fn test_permitted_attributes_filter_request_params() {
    let engine = PolicyEngine::new();
    let user = regular_user();
    let params = json!({
        "title": "tmux basics",
        "theme_name": "solarized-dark",
        "featured": true,
        "private": true
    });

    let permitted = engine.permitted_attributes(Some(&user), &Asciicast::owned_by(user.id));
    let filtered = permitted.filter(params.as_object().unwrap());

    assert!(filtered.contains_key("title"));
    assert!(filtered.contains_key("theme_name"));
    assert!(filtered.contains_key("private"));
    assert!(!filtered.contains_key("featured"));
}

#[test]
fn test_request_from_json_round_trip_through_engine() {
    let engine = PolicyEngine::new();
    let request: AuthorizationRequest = serde_json::from_value(json!({
        "actor": {"id": 7},
        "asciicast": {"owner_id": 7, "title": "demo"}
    }))
    .unwrap();

    let report = engine.evaluate(&request);

    assert!(report.allows(Action::Update));
    assert!(report.allows(Action::Destroy));
    assert!(!report.allows(Action::Feature));
    assert!(!report.allows(Action::Unfeature));
    assert!(report.allows(Action::MakePublic));
    assert!(report.allows(Action::MakePrivate));

    let rendered = serde_json::to_value(&report).unwrap();
    assert_eq!(rendered["actor_id"], json!(7));
    assert_eq!(
        rendered["permitted_attributes"],
        json!(["title", "description", "theme_name", "private"])
    );
    assert_eq!(rendered["verdicts"][2]["reason"], json!("not_admin"));
}

#[test]
fn test_authorize_reports_reason() {
    let engine = PolicyEngine::new();

    let violation = engine
        .authorize(Action::MakePublic, Some(&admin()), &Asciicast::owned_by(7))
        .unwrap_err();
    assert_eq!(violation.reason, DenialReason::NotOwner);
    assert!(violation.to_string().contains("make_public"));
}

#[test]
fn test_default_policy_yaml_matches_builtin_engine() {
    let from_yaml = PolicyEngine::from_yaml(DEFAULT_POLICY).unwrap();
    let builtin = PolicyEngine::new();
    let asciicasts = [Asciicast::new(), Asciicast::owned_by(7), Asciicast::owned_by(1)];
    let actors = [None, Some(admin()), Some(regular_user()), Some(Actor::admin(7))];

    for asciicast in &asciicasts {
        for actor in &actors {
            assert_eq!(
                from_yaml.report(actor.as_ref(), asciicast),
                builtin.report(actor.as_ref(), asciicast)
            );
        }
    }
}

#[test]
fn test_custom_policy_lets_admins_change_visibility() {
    let policies = r#"
version: "1.0"
rules:
  update: admin_or_owner
  destroy: admin
  feature: admin
  unfeature: admin
  make_public: admin_or_owner
  make_private: admin_or_owner
"#;

    let engine = PolicyEngine::from_yaml(policies).unwrap();
    let user = regular_user();
    let owned = Asciicast::owned_by(user.id);

    assert!(engine.can_make_public(Some(&admin()), &owned));
    assert!(engine.can_make_private(Some(&admin()), &owned));
    assert!(!engine.can_destroy(Some(&user), &owned));
    // attributes fall back to the built-in lists
    assert!(engine
        .permitted_attributes(Some(&user), &owned)
        .contains(Attribute::Private));
}
