//! Integration tests for command dispatch and the audit policy

use serial_test::serial;

use crate::helpers::{TestContext, ALICE, BOB};

#[tokio::test]
async fn test_keyword_needs_token_boundary() {
    let ctx = TestContext::new();
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "LOCATIONX Lisbon").await;

    assert_eq!(response.status, 200);
    assert!(response.text.starts_with("AttractionBuddy commands:"));
    assert_eq!(ctx.profile(ALICE).await.unwrap().location.unwrap().city, "Paris");
}

#[tokio::test]
async fn test_unknown_text_gets_docs() {
    let ctx = TestContext::new();

    let response = ctx.text(BOB, "what can you do?").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("LOCATION <city>"));
    assert!(response.text.contains(&ctx.settings.conversation.catalog_url));
    assert!(ctx.profile(BOB).await.is_none());
}

#[tokio::test]
#[serial]
async fn test_every_dispatch_is_audited_with_redacted_phone() {
    let ctx = TestContext::new();

    ctx.text(ALICE, "MORE").await;
    ctx.text(ALICE, "SUBSCRIBE").await;
    ctx.text(ALICE, "DOCS").await;

    let audit = ctx.audit_log();
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("\t400 MORE +*********6871:"));
    assert!(lines[1].contains("\t200 SUBSCRIBE +*********6871:"));
    assert!(lines[2].contains("\t200 DOCS +*********6871:"));
    assert!(!audit.contains("4915735166871"));
}
