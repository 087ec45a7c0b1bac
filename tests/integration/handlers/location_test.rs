//! Integration tests for LOCATION

use AttractionBuddy::models::Attraction;

use crate::helpers::{paris_museums, TestContext, ALICE};

#[tokio::test]
async fn test_location_requires_subscription() {
    let ctx = TestContext::new();

    let response = ctx.text(ALICE, "LOCATION Paris").await;

    assert_eq!(response.status, 400);
    assert!(response.text.contains("SUBSCRIBE"));
    assert!(ctx.profile(ALICE).await.is_none());
}

#[tokio::test]
async fn test_unknown_city_leaves_location_unset() {
    let ctx = TestContext::new();
    ctx.text(ALICE, "SUBSCRIBE").await;

    let response = ctx.text(ALICE, "LOCATION Atlantis").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("could not find the city \"Atlantis\""));
    assert!(ctx.profile(ALICE).await.unwrap().location.is_none());
}

#[tokio::test]
async fn test_location_set_suggests_two_types() {
    let ctx = TestContext::new();
    ctx.text(ALICE, "SUBSCRIBE").await;

    let response = ctx.text(ALICE, "location   paris").await;

    assert_eq!(response.status, 200);
    assert!(response.text.starts_with("Location set to Paris."));

    let names = ctx.app.services.attractions.catalog().names();
    let suggested: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| response.text.contains(&format!("TYPE {} ", name)) || response.text.contains(&format!("TYPE {},", name)))
        .collect();
    assert!(suggested.len() >= 2, "expected two suggestions in {:?}", response.text);

    let profile = ctx.profile(ALICE).await.unwrap();
    assert_eq!(profile.location.unwrap().city, "Paris");
}

#[tokio::test]
async fn test_empty_location_gets_usage() {
    let ctx = TestContext::new();
    ctx.text(ALICE, "SUBSCRIBE").await;

    let response = ctx.text(ALICE, "LOCATION").await;

    assert_eq!(response.status, 200);
    assert!(response.text.contains("add a city"));
    assert!(ctx.profile(ALICE).await.unwrap().location.is_none());
}

#[tokio::test]
async fn test_new_location_clears_type_and_results() {
    let ctx = TestContext::new();
    ctx.places.set_results("entertainment.museum", paris_museums());
    ctx.subscribe_in_paris(ALICE).await;
    ctx.text(ALICE, "TYPE museum").await;
    ctx.text(ALICE, "MORE").await;

    let response = ctx.text(ALICE, "LOCATION Lisbon").await;
    assert_eq!(response.status, 200);

    let profile = ctx.profile(ALICE).await.unwrap();
    assert_eq!(profile.location.unwrap().city, "Lisbon");
    assert!(profile.attraction_type.is_none());
    assert_eq!(profile.attractions, Vec::<Attraction>::new());
    assert_eq!(profile.cursor, 0);
}
