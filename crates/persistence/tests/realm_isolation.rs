//! Tests for realm data isolation.
//!
//! Records written under one realm must never surface in another realm's
//! searches or counts, whatever the payload asks for.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use cairn_domain::PayloadOf;
use cairn_domain::resources::{
    Content, ContentQuery, ContentSortField, Language, LanguageSortField,
};
use cairn_persistence::backends::memory::MemoryBackend;
use cairn_persistence::core::SearchStore;
use cairn_persistence::realm::RealmId;

// ============================================================================
// Helper Functions
// ============================================================================

fn language(code: &str, name: &str) -> Language {
    Language {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: name.to_string(),
        created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn content(name: &str, type_id: Uuid) -> Content {
    Content {
        id: Uuid::new_v4(),
        name: name.to_string(),
        type_id,
        language_id: None,
        created: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated: None,
    }
}

// ============================================================================
// Isolation Tests
// ============================================================================

#[tokio::test]
async fn test_search_isolation() {
    let backend = MemoryBackend::new();
    let realm_a = RealmId::new("realm-a");
    let realm_b = RealmId::new("realm-b");

    backend.insert(&realm_a, language("en", "English")).await.unwrap();
    backend.insert(&realm_b, language("fr", "French")).await.unwrap();
    backend.insert(&realm_b, language("de", "German")).await.unwrap();

    let payload = PayloadOf::<Language>::new(Default::default())
        .with_sort(LanguageSortField::Code, false);

    let page_a = backend.search::<Language>(&realm_a, &payload).await.unwrap();
    let codes_a: Vec<_> = page_a.items.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes_a, vec!["en"]);

    let page_b = backend.search::<Language>(&realm_b, &payload).await.unwrap();
    let codes_b: Vec<_> = page_b.items.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes_b, vec!["de", "fr"]);
}

#[tokio::test]
async fn test_search_term_does_not_cross_realms() {
    let backend = MemoryBackend::new();
    let realm_a = RealmId::new("realm-a");
    let realm_b = RealmId::new("realm-b");

    backend.insert(&realm_a, language("en", "English")).await.unwrap();

    let payload = PayloadOf::<Language>::new(Default::default()).with_search("english");
    let page = backend.search::<Language>(&realm_b, &payload).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_filter_does_not_cross_realms() {
    let backend = MemoryBackend::new();
    let realm_a = RealmId::new("realm-a");
    let realm_b = RealmId::new("realm-b");
    let shared_type = Uuid::new_v4();

    backend.insert(&realm_a, content("home", shared_type)).await.unwrap();
    backend.insert(&realm_b, content("about", shared_type)).await.unwrap();

    let payload = PayloadOf::<Content>::new(ContentQuery {
        content_type: Some(shared_type),
        language: None,
    })
    .with_sort(ContentSortField::Name, false);

    let page = backend.search::<Content>(&realm_b, &payload).await.unwrap();
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["about"]);
}

#[tokio::test]
async fn test_total_isolation() {
    let backend = MemoryBackend::new();
    let realm_a = RealmId::new("realm-a");
    let realm_b = RealmId::new("realm-b");

    for code in ["en", "fr", "de"] {
        backend.insert(&realm_a, language(code, code)).await.unwrap();
    }

    let languages = PayloadOf::<Language>::new(Default::default());

    let in_a = backend.search::<Language>(&realm_a, &languages).await.unwrap();
    assert_eq!(in_a.total, 3);

    let in_b = backend.search::<Language>(&realm_b, &languages).await.unwrap();
    assert_eq!(in_b.total, 0);

    let contents = PayloadOf::<Content>::new(Default::default());
    let other_resource = backend.search::<Content>(&realm_a, &contents).await.unwrap();
    assert_eq!(other_resource.total, 0);
}
