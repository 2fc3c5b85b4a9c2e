mod common;

use ai_or_human::{
    catalog::Catalog,
    game::{GameSession, InvalidSession},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use common::tiny_catalog;

fn token_for(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json)
}

#[test]
fn test_round_trip_without_optional_fields() {
    let catalog = tiny_catalog();
    let session = GameSession {
        id: "a1".to_string(),
        text_ids: vec![1, 2],
        original_score: None,
        original_player: None,
        timestamp: 1000,
    };

    let token = session.encode().unwrap();
    let decoded = GameSession::decode(&token, &catalog).unwrap();

    assert_eq!(decoded, session);
    assert!(decoded.original_score.is_none());
    assert!(decoded.original_player.is_none());
}

#[test]
fn test_round_trip_with_all_fields() {
    let catalog = Catalog::builtin();
    let session = GameSession::create(vec![15, 3, 7, 1], Some("Zoë".to_string()), Some(3));

    let token = session.encode().unwrap();
    let decoded = GameSession::decode(&token, &catalog).unwrap();

    assert_eq!(decoded, session);
    assert_eq!(decoded.text_ids, vec![15, 3, 7, 1]);
}

#[test]
fn test_token_is_url_safe() {
    let catalog = Catalog::builtin();
    for n in 0..20 {
        let player = format!("player ?>~ {n} \u{1F600}");
        let session = GameSession::create(vec![1, 2, 3, 4, 5], Some(player), Some(n));
        let token = session.encode().unwrap();

        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
        assert!(GameSession::decode(&token, &catalog).is_ok());
    }
}

#[test]
fn test_encode_is_deterministic() {
    let session = GameSession::create(vec![1, 2], None, Some(1));
    assert_eq!(session.encode().unwrap(), session.encode().unwrap());
}

#[test]
fn test_create_generates_fresh_ids() {
    let a = GameSession::create(vec![1], None, None);
    let b = GameSession::create(vec![1], None, None);

    assert_ne!(a.id, b.id);
    assert!(!a.id.is_empty());
    assert!(a.timestamp > 0);
}

#[test]
fn test_padded_token_is_accepted() {
    let catalog = tiny_catalog();
    let json = r#"{"id":"x","textIds":[3],"timestamp":5}"#;
    let padded = base64::engine::general_purpose::URL_SAFE.encode(json);
    assert!(padded.ends_with('='));

    let decoded = GameSession::decode(&padded, &catalog).unwrap();
    assert_eq!(decoded.text_ids, vec![3]);
}

#[test]
fn test_decode_rejects_garbage() {
    let catalog = tiny_catalog();
    for token in ["", "not a token!!", "%%%", "abc", "e30", "bnVsbA"] {
        assert_eq!(
            GameSession::decode(token, &catalog),
            Err(InvalidSession),
            "token {token:?} should be rejected"
        );
    }
}

#[test]
fn test_decode_rejects_incomplete_payloads() {
    let catalog = tiny_catalog();
    let payloads = [
        r#"{"textIds":[1],"timestamp":1000}"#,
        r#"{"id":"","textIds":[1],"timestamp":1000}"#,
        r#"{"id":"a1","textIds":[],"timestamp":1000}"#,
        r#"{"id":"a1","timestamp":1000}"#,
        r#"{"id":"a1","textIds":[1]}"#,
        r#"{"id":"a1","textIds":[1],"timestamp":0}"#,
        r#"{"id":"a1","textIds":"1","timestamp":1000}"#,
        r#"{"id":"a1","textIds":[-1],"timestamp":1000}"#,
        r#"[1,2,3]"#,
    ];

    for json in payloads {
        assert_eq!(
            GameSession::decode(&token_for(json), &catalog),
            Err(InvalidSession),
            "payload {json} should be rejected"
        );
    }
}

#[test]
fn test_decode_rejects_unknown_ids() {
    let catalog = tiny_catalog();
    let session = GameSession {
        id: "a1".to_string(),
        text_ids: vec![1, 2, 99],
        original_score: Some(3),
        original_player: Some("Alice".to_string()),
        timestamp: 1000,
    };

    let token = session.encode().unwrap();
    assert_eq!(GameSession::decode(&token, &catalog), Err(InvalidSession));
}

#[test]
fn test_stale_token_after_catalog_change() {
    let builtin = Catalog::builtin();
    let session = GameSession::create(vec![12, 13], Some("Alice".to_string()), Some(2));
    let token = session.encode().unwrap();

    assert!(GameSession::decode(&token, &builtin).is_ok());
    assert!(GameSession::decode(&token, &tiny_catalog()).is_err());
}

#[test]
fn test_resolve_items_keeps_order() {
    let catalog = tiny_catalog();
    let session = GameSession::create(vec![3, 1, 2], None, None);

    let items = session.resolve_items(&catalog).unwrap();
    let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(items[0].is_ai);
    assert!(!items[1].is_ai);
}

#[test]
fn test_resolve_items_fails_on_unknown_id() {
    let session = GameSession::create(vec![1, 42], None, None);
    assert_eq!(session.resolve_items(&tiny_catalog()), Err(InvalidSession));
}
