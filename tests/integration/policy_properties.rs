use asciicast_policy::policy::{Action, Attribute, PolicyEngine};
use asciicast_policy::{Actor, ActorId, Asciicast};
use proptest::prelude::*;

fn arb_actor() -> impl Strategy<Value = Actor> {
    (0u64..16, any::<bool>()).prop_map(|(id, admin)| Actor::new(id).with_admin(admin))
}

fn arb_asciicast() -> impl Strategy<Value = Asciicast> {
    (
        proptest::option::of(0u64..16),
        proptest::option::of("[a-z ]{0,12}"),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(owner, title, featured, private)| Asciicast {
            owner_id: owner.map(ActorId),
            title,
            featured,
            private,
            ..Asciicast::default()
        })
}

proptest! {
    #[test]
    fn anonymous_is_always_denied(asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        for action in Action::ALL {
            prop_assert!(!engine.permits(action, None, &asciicast));
        }
        prop_assert!(engine.permitted_attributes(None, &asciicast).is_empty());
    }

    #[test]
    fn admin_may_update_and_destroy_anything(id in 0u64..16, asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        let admin = Actor::admin(id);
        prop_assert!(engine.can_update(Some(&admin), &asciicast));
        prop_assert!(engine.can_destroy(Some(&admin), &asciicast));
    }

    #[test]
    fn update_requires_admin_or_ownership(actor in arb_actor(), asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        let expected = actor.admin || asciicast.owner_id == Some(actor.id);
        prop_assert_eq!(engine.can_update(Some(&actor), &asciicast), expected);
        prop_assert_eq!(engine.can_destroy(Some(&actor), &asciicast), expected);
    }

    #[test]
    fn featuring_depends_only_on_admin(actor in arb_actor(), asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        prop_assert_eq!(engine.can_feature(Some(&actor), &asciicast), actor.admin);
        prop_assert_eq!(engine.can_unfeature(Some(&actor), &asciicast), actor.admin);
    }

    #[test]
    fn visibility_depends_only_on_ownership(actor in arb_actor(), asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        let owns = asciicast.owner_id == Some(actor.id);
        prop_assert_eq!(engine.can_make_public(Some(&actor), &asciicast), owns);
        prop_assert_eq!(engine.can_make_private(Some(&actor), &asciicast), owns);
    }

    #[test]
    fn permitted_attributes_follow_access(actor in arb_actor(), asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        let permitted = engine.permitted_attributes(Some(&actor), &asciicast);
        let base = [Attribute::Title, Attribute::Description, Attribute::ThemeName];

        if actor.admin {
            prop_assert_eq!(permitted.as_slice(), &[base[0], base[1], base[2], Attribute::Featured][..]);
        } else if asciicast.owner_id == Some(actor.id) {
            prop_assert_eq!(permitted.as_slice(), &[base[0], base[1], base[2], Attribute::Private][..]);
        } else {
            prop_assert!(permitted.is_empty());
        }
    }

    #[test]
    fn permitted_attributes_never_include_both_flags(actor in arb_actor(), asciicast in arb_asciicast()) {
        let engine = PolicyEngine::new();
        let permitted = engine.permitted_attributes(Some(&actor), &asciicast);
        prop_assert!(!(permitted.contains(Attribute::Featured) && permitted.contains(Attribute::Private)));
    }
}
