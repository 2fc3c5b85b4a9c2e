mod common;

use ai_or_human::{catalog::Catalog, models::Difficulty};
use common::item;

#[test]
fn test_builtin_catalog_shape() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 15);
    for difficulty in Difficulty::ALL {
        assert_eq!(catalog.filtered(Some(difficulty)).len(), 5);
    }
    assert!(catalog.get(15).unwrap().is_ai);
    assert!(catalog.get(16).is_none());
}

#[test]
fn test_catalog_rejects_bad_items() {
    assert!(Catalog::new(vec![item(1, true, None), item(1, false, None)]).is_err());
    assert!(Catalog::new(vec![item(0, true, None)]).is_err());

    let mut blank = item(2, true, None);
    blank.content = "   ".to_string();
    assert!(Catalog::new(vec![blank]).is_err());
}

#[test]
fn test_catalog_from_json() {
    let json = r#"[
        {"id": 1, "content": "Hello there", "isAI": false, "difficulty": "easy"},
        {"id": 2, "content": "Greetings, human", "isAI": true}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(1).unwrap().difficulty, Some(Difficulty::Easy));
    assert_eq!(catalog.get(2).unwrap().difficulty, None);
    assert_eq!(catalog.filtered(None).len(), 2);
    assert_eq!(catalog.filtered(Some(Difficulty::Easy)).len(), 1);
}

#[test]
fn test_catalog_from_json_rejects_unknown_difficulty() {
    let json = r#"[{"id": 1, "content": "x", "isAI": false, "difficulty": "extreme"}]"#;
    assert!(Catalog::from_json(json).is_err());
}
