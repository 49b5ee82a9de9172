#![no_main]

use arbitrary::Arbitrary;
use asciicast_policy::policy::{Action, Attribute, PolicyEngine};
use asciicast_policy::request::AuthorizationRequest;
use asciicast_policy::{Actor, Asciicast};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    actor: Option<FuzzActor>,
    owner_id: Option<u64>,
    title: Option<String>,
    featured: bool,
    private: bool,
    params: Vec<(String, bool)>,
}

#[derive(Arbitrary, Debug)]
struct FuzzActor {
    id: u64,
    admin: bool,
}

fuzz_target!(|input: FuzzInput| {
    let actor = input.actor.map(|a| Actor::new(a.id).with_admin(a.admin));

    let mut asciicast = Asciicast::new().featured(input.featured).private(input.private);
    asciicast.owner_id = input.owner_id.map(Into::into);
    asciicast.title = input.title;

    let engine = PolicyEngine::new();
    let owns = actor.as_ref().is_some_and(|a| a.owns(&asciicast));
    let admin = actor.as_ref().is_some_and(|a| a.is_admin());

    assert_eq!(engine.can_feature(actor.as_ref(), &asciicast), admin);
    assert_eq!(engine.can_make_public(actor.as_ref(), &asciicast), owns);
    assert_eq!(engine.can_update(actor.as_ref(), &asciicast), admin || owns);

    let permitted = engine.permitted_attributes(actor.as_ref(), &asciicast);
    assert!(!(permitted.contains(Attribute::Featured) && permitted.contains(Attribute::Private)));

    // Filtering never lets through a key that is not permitted
    let params: serde_json::Map<String, serde_json::Value> = input
        .params
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::Bool(v)))
        .collect();
    for key in permitted.filter(&params).keys() {
        assert!(permitted.names().contains(&key.as_str()));
    }

    let report = engine.evaluate(&AuthorizationRequest {
        actor,
        asciicast,
        action: None,
    });
    assert_eq!(report.verdicts.len(), Action::ALL.len());
});
