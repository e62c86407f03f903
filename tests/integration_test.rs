use login_policy::{
    audit::{AuditOutcome, AuditTrail},
    config, AccessPolicy, AccessPolicyEvaluator, AllowList, Decision, DenyReason, RequestContext,
    User,
};

fn evaluator() -> AccessPolicyEvaluator {
    AccessPolicyEvaluator::default()
}

#[test]
fn scenario_empty_unverified_email_is_denied() {
    let user = User::new("", false);
    let decision = evaluator().evaluate(&user, &RequestContext::new("anything"));
    assert_eq!(decision, Decision::Deny(DenyReason::EmailNotVerified));
}

#[test]
fn scenario_verified_user_of_other_app_is_allowed() {
    let user = User::new("x@y.com", true);
    let decision = evaluator().evaluate(&user, &RequestContext::new("other_app"));
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn scenario_allow_listed_user_of_restricted_app_is_allowed() {
    let user = User::new("user1@example.com", true);
    let decision = evaluator().evaluate(&user, &RequestContext::new("sample_rule2app"));
    assert_eq!(decision, Decision::Allow);
}

#[test]
fn scenario_unlisted_user_of_restricted_app_is_denied() {
    let user = User::new("someone@else.com", true);
    let decision = evaluator().evaluate(&user, &RequestContext::new("sample_rule2app"));
    assert_eq!(
        decision,
        Decision::Deny(DenyReason::NotAllowListed {
            client: "sample_rule2app".to_string()
        })
    );
}

#[test]
fn scenario_unverified_listed_user_is_denied_for_verification() {
    let user = User::new("user2@example.com", false);
    let decision = evaluator().evaluate(&user, &RequestContext::new("sample_rule2app"));
    assert_eq!(decision, Decision::Deny(DenyReason::EmailNotVerified));
}

#[test]
fn both_denials_look_identical_to_the_host() {
    let ctx = RequestContext::new("sample_rule2app");
    let unverified = evaluator()
        .authorize(&User::new("user1@example.com", false), &ctx)
        .unwrap_err();
    let unlisted = evaluator()
        .authorize(&User::new("someone@else.com", true), &ctx)
        .unwrap_err();

    assert_eq!(unverified.to_string(), unlisted.to_string());
    assert_eq!(unverified.to_string(), login_policy::ACCESS_DENIED);
}

#[test]
fn loaded_config_drives_evaluation() {
    let policy = config::load_from_str(
        "restrictedClientId: reports\nallowedEmails:\n  - analyst@corp.example\n",
    )
    .expect("valid config");
    let evaluator = AccessPolicyEvaluator::new(policy);

    let analyst = User::new("analyst@corp.example", true);
    let intern = User::new("intern@corp.example", true);

    assert!(evaluator
        .authorize(&analyst, &RequestContext::new("reports"))
        .is_ok());
    assert!(evaluator
        .authorize(&intern, &RequestContext::new("reports"))
        .is_err());
    assert!(evaluator
        .authorize(&intern, &RequestContext::new("dashboard"))
        .is_ok());
}

#[test]
fn audited_evaluation_matches_plain_evaluation() {
    let evaluator = AccessPolicyEvaluator::new(AccessPolicy::new(
        "sample_rule2app",
        AllowList::from_iter(["user1@example.com"]),
    ));
    let trail = AuditTrail::new();
    let ctx = RequestContext::new("sample_rule2app").with_request_id("req-7");

    for user in [
        User::new("user1@example.com", true),
        User::new("user2@example.com", true),
        User::default(),
    ] {
        let plain = evaluator.evaluate(&user, &ctx);
        let audited = evaluator.evaluate_audited(&user, &ctx, &trail);
        assert_eq!(plain, audited);
    }

    let outcomes: Vec<AuditOutcome> = trail.events().iter().map(|e| e.outcome()).collect();
    assert_eq!(
        outcomes,
        vec![
            AuditOutcome::Allowed,
            AuditOutcome::Denied,
            AuditOutcome::Denied
        ]
    );
    assert!(trail.events().iter().all(|e| e.request_id() == "req-7"));
}

#[test]
fn rule_view_flow() {
    let json = r#"[
        {"name": "allow-list rule2app", "enabled": true,
         "script": "function (user, context, callback) { if(context.clientName === 'sample_rule2app'){ callback(null, user, context); } }"},
        {"name": "add roles", "enabled": false,
         "script": "function (user, context, callback) { callback(null, user, context); }"}
    ]"#;
    let viewers = AllowList::from_iter(login_policy::DEFAULT_ALLOWED_EMAILS);

    let trail = AuditTrail::new();
    let ctx = RequestContext::new("rules_dashboard").with_request_id("req-rules");

    assert!(login_policy::rules::authorize_viewer_audited(
        &viewers,
        "outsider@example.com",
        &ctx,
        &trail
    )
    .is_err());
    login_policy::rules::authorize_viewer_audited(&viewers, "user2@example.com", &ctx, &trail)
        .expect("viewer allowed");
    assert_eq!(trail.len(), 2);
    assert!(trail.events().iter().all(|e| e.request_id() == "req-rules"));

    let rules = login_policy::rules::parse_rules(json).expect("valid rules");
    let summary = login_policy::rules::summarize(&rules);

    assert_eq!(summary[0].application, "sample_rule2app");
    assert_eq!(summary[1].application, "unknown");
}
