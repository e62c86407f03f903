//! Login rule demonstration.
//!
//! Evaluates a handful of login attempts against the default policy and
//! prints each decision, with policy and audit events logged to stderr.
//!
//! Run with: `cargo run --example login_rule`

use login_policy::{
    audit::AuditTrail, rules, AccessPolicyEvaluator, AllowList, RequestContext, User,
    DEFAULT_ALLOWED_EMAILS,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Login Rule Example ===\n");

    let evaluator = AccessPolicyEvaluator::default();
    let trail = AuditTrail::new();

    let attempts = [
        ("req-1", User::new("", false), "anything"),
        ("req-2", User::new("x@y.com", true), "other_app"),
        ("req-3", User::new("user1@example.com", true), "sample_rule2app"),
        ("req-4", User::new("someone@else.com", true), "sample_rule2app"),
        ("req-5", User::new("user2@example.com", false), "sample_rule2app"),
    ];

    for (request_id, user, client) in &attempts {
        let ctx = RequestContext::new(*client).with_request_id(*request_id);
        let decision = evaluator.evaluate_audited(user, &ctx, &trail);
        match decision.into_result() {
            Ok(()) => println!("{request_id} {client:>16}: allowed"),
            Err(e) => println!("{request_id} {client:>16}: {e} ({})", e.reason().code()),
        }
    }

    println!("\n--- Audit Trail ({} events) ---", trail.len());
    for event in trail.events() {
        println!("{event}");
    }

    println!("\n--- Rule Summary ---");
    let viewers = AllowList::from_iter(DEFAULT_ALLOWED_EMAILS);
    let view_ctx = RequestContext::new("rules_dashboard").with_request_id("req-rules");
    let viewer = "user1@example.com";
    if let Err(e) = rules::authorize_viewer_audited(&viewers, viewer, &view_ctx, &trail) {
        println!("{e}");
        return;
    }
    let listing = r#"[{"name": "allow-list rule2app", "enabled": true,
        "script": "if(context.clientName === 'sample_rule2app'){ callback(null, user, context); }"}]"#;
    match rules::parse_rules(listing) {
        Ok(records) => {
            for row in rules::summarize(&records) {
                println!("{:<24} enabled={:<5} application={}", row.rule, row.enabled, row.application);
            }
        }
        Err(e) => println!("{e}"),
    }
}
