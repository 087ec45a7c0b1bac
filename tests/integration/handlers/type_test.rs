//! Integration tests for TYPE

use AttractionBuddy::models::{Attraction, SURPRISE};

use crate::helpers::{paris_museums, TestContext, ALICE};

#[tokio::test]
async fn test_type_requires_location() {
    let ctx = TestContext::new();
    ctx.text(ALICE, "SUBSCRIBE").await;

    let response = ctx.text(ALICE, "TYPE museum").await;

    assert_eq!(response.status, 400);
    assert!(response.text.contains("LOCATION"));
    assert!(ctx.places.calls().is_empty());
}

#[tokio::test]
async fn test_type_museum_stores_results() {
    let ctx = TestContext::new();
    ctx.places.set_results("entertainment.museum", paris_museums());
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "TYPE museum").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("Louvre"));
    assert!(response.text.contains("https://www.louvre.fr"));

    let profile = ctx.profile(ALICE).await.unwrap();
    assert_eq!(profile.attraction_type.as_deref(), Some("museum"));
    assert_eq!(profile.attractions.len(), 3);
    assert_eq!(profile.cursor, 0);
}

#[tokio::test]
async fn test_invalid_type_does_not_mutate() {
    let ctx = TestContext::new();
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "TYPE volcano").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("\"volcano\" is not a category"));
    assert!(ctx.profile(ALICE).await.unwrap().attraction_type.is_none());
    assert!(ctx.places.calls().is_empty());
}

#[tokio::test]
async fn test_empty_results_do_not_mutate() {
    let ctx = TestContext::new();
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "TYPE beach").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("Nothing found for beach in Paris"));
    let profile = ctx.profile(ALICE).await.unwrap();
    assert!(profile.attraction_type.is_none());
    assert!(profile.attractions.is_empty());
}

#[tokio::test]
async fn test_provider_error_surfaces_status() {
    let ctx = TestContext::new();
    ctx.subscribe_in_paris(ALICE).await;
    ctx.places.fail_with(503);

    let response = ctx.text(ALICE, "TYPE museum").await;

    assert_eq!(response.status, 503);
    assert_eq!(response.text, "places unavailable");
    assert!(ctx.profile(ALICE).await.unwrap().attraction_type.is_none());
}

#[tokio::test]
async fn test_surprise_gives_up_after_three_attempts() {
    let ctx = TestContext::new();
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "TYPE surprise").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("out of surprises"));
    assert_eq!(ctx.places.calls().len(), 3);

    let profile = ctx.profile(ALICE).await.unwrap();
    assert_eq!(profile.attraction_type.as_deref(), Some(SURPRISE));
    assert!(profile.attractions.is_empty());
}

#[tokio::test]
async fn test_surprise_sends_one_of_the_results() {
    let ctx = TestContext::new();
    let everywhere = vec![
        Attraction::new("Jardin du Luxembourg", "https://jardin.senat.fr"),
        Attraction::new("Parc des Buttes-Chaumont", "https://www.paris.fr/buttes"),
    ];
    ctx.places.set_fallback(everywhere.clone());
    ctx.subscribe_in_paris(ALICE).await;

    let response = ctx.text(ALICE, "TYPE Surprise").await;

    assert_eq!(response.status, 200);
    assert!(response.text.starts_with("Surprise!"));
    assert!(everywhere.iter().any(|a| response.text.contains(&a.title)));
    assert_eq!(ctx.places.calls().len(), 1);

    let profile = ctx.profile(ALICE).await.unwrap();
    assert!(profile.is_surprise());
    assert_eq!(profile.attractions, everywhere);
    assert_eq!(profile.cursor, 0);
}
