//! Tests for domain value objects across module boundaries

use tce_domain::value_objects::{Cluster, Document, LanguageCode, OrderedMap};

#[test]
fn test_language_code_serde_is_transparent() {
    let code = LanguageCode::new("English");
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, "\"english\"");

    let back: LanguageCode = serde_json::from_str("\"GERMAN\"").unwrap();
    assert_eq!(back, LanguageCode::new("german"));
}

#[test]
fn test_document_roundtrip() {
    let document = Document::new("body").with_title("title");
    let json = serde_json::to_string(&document).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(document, back);
}

#[test]
fn test_cluster_roundtrip() {
    let cluster = Cluster::new("rust", vec![1, 3]);
    let json = serde_json::to_string(&cluster).unwrap();
    let back: Cluster = serde_json::from_str(&json).unwrap();
    assert_eq!(cluster, back);
}

#[test]
fn test_ordered_map_with_language_keys() {
    let mut map = OrderedMap::new();
    map.insert(LanguageCode::new("German"), 1);
    map.insert(LanguageCode::new("english"), 2);

    // Normalization makes differently-cased inserts collide
    let previous = map.insert(LanguageCode::new("GERMAN"), 3);
    assert_eq!(previous, Some(1));

    let codes: Vec<&str> = map.keys().map(LanguageCode::as_str).collect();
    assert_eq!(codes, ["german", "english"]);
}
