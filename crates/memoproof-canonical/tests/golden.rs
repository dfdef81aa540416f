use std::collections::{BTreeMap, HashMap};

use memoproof_canonical::{
    canonicalize, hash_with_known_salt, hash_with_salt, parse_commitment, verify_reveal,
    Canonicalizer, Commitment, MemoPayload, Salt,
};
use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest as _, Sha256};

fn deferral_event() -> Value {
    json!({
        "event_type": "deferral_change",
        "amount": 1000.0,
        "timestamp": "2025-10-18T14:00:00Z"
    })
}

fn is_lower_hex(s: &str) -> bool {
    s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[test]
fn deferral_event_canonical_bytes() {
    let result = Canonicalizer::default()
        .canonicalize(&deferral_event())
        .unwrap();

    let keys: Vec<&String> = result.value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["amount", "event_type", "timestamp"]);
    assert_eq!(
        result.bytes,
        br#"{"amount":1000,"event_type":"deferral_change","timestamp":"2025-10-18T14:00:00Z"}"#
            .to_vec()
    );
}

#[test]
fn canonicalization_is_idempotent() {
    let value = json!({
        "z": [{"y": 1, "x": [true, null, {"b": "2", "a": "1"}]}],
        "a": {"d": {}, "c": []},
        "m": -0.5
    });
    let once = canonicalize(&value);
    let twice = canonicalize(&once);
    assert_eq!(once, twice);

    let canonicalizer = Canonicalizer::default();
    assert_eq!(
        canonicalizer.canonicalize(&once).unwrap().bytes,
        canonicalizer.canonicalize(&value).unwrap().bytes
    );
}

#[test]
fn insertion_order_does_not_change_bytes() {
    #[derive(Serialize)]
    struct Forward {
        amount: f64,
        event_type: &'static str,
        timestamp: &'static str,
    }

    #[derive(Serialize)]
    struct Reversed {
        timestamp: &'static str,
        event_type: &'static str,
        amount: f64,
    }

    let mut hashed = HashMap::new();
    hashed.insert("timestamp", json!("2025-10-18T14:00:00Z"));
    hashed.insert("event_type", json!("deferral_change"));
    hashed.insert("amount", json!(1000.0));

    let canonicalizer = Canonicalizer::default();
    let expected = canonicalizer.canonicalize(&deferral_event()).unwrap().bytes;

    let forward = Forward {
        amount: 1000.0,
        event_type: "deferral_change",
        timestamp: "2025-10-18T14:00:00Z",
    };
    let reversed = Reversed {
        timestamp: "2025-10-18T14:00:00Z",
        event_type: "deferral_change",
        amount: 1000.0,
    };

    assert_eq!(canonicalizer.canonicalize_serializable(&forward).unwrap().bytes, expected);
    assert_eq!(canonicalizer.canonicalize_serializable(&reversed).unwrap().bytes, expected);
    assert_eq!(canonicalizer.canonicalize_serializable(&hashed).unwrap().bytes, expected);
}

#[test]
fn nested_maps_from_different_containers_agree() {
    let mut inner = BTreeMap::new();
    inner.insert("beta", 2);
    inner.insert("alpha", 1);
    let typed = json!({"outer": inner, "list": [3, 2, 1]});
    let literal = json!({"list": [3, 2, 1], "outer": {"alpha": 1, "beta": 2}});

    let canonicalizer = Canonicalizer::default();
    assert_eq!(
        canonicalizer.canonicalize(&typed).unwrap().bytes,
        canonicalizer.canonicalize(&literal).unwrap().bytes
    );
}

#[test]
fn large_integral_floats_match_integer_spelling() {
    let canonicalizer = Canonicalizer::default();
    let float: Value = serde_json::from_str(r#"{"amount":1e16}"#).unwrap();
    let integer: Value = serde_json::from_str(r#"{"amount":10000000000000000}"#).unwrap();

    let float_bytes = canonicalizer.canonicalize(&float).unwrap().bytes;
    assert_eq!(float_bytes, canonicalizer.canonicalize(&integer).unwrap().bytes);
    assert_eq!(float_bytes, br#"{"amount":10000000000000000}"#.to_vec());

    let salt = Salt::from_bytes([3u8; 16]);
    assert_eq!(
        hash_with_known_salt(&float, &salt, &canonicalizer).unwrap(),
        hash_with_known_salt(&integer, &salt, &canonicalizer).unwrap()
    );

    let beyond_i64: Value = serde_json::from_str("1.5e19").unwrap();
    let as_u64: Value = serde_json::from_str("15000000000000000000").unwrap();
    assert_eq!(
        canonicalizer.canonicalize(&beyond_i64).unwrap().bytes,
        canonicalizer.canonicalize(&as_u64).unwrap().bytes
    );
}

#[test]
fn commitments_are_fresh_and_well_formed() {
    let event = deferral_event();
    let first = hash_with_salt(&event).unwrap();
    let second = hash_with_salt(&event).unwrap();

    for commitment in [&first, &second] {
        assert_eq!(commitment.digest_hex.as_str().len(), 64);
        assert_eq!(commitment.salt_hex.as_str().len(), 32);
        assert!(is_lower_hex(commitment.digest_hex.as_str()));
        assert!(is_lower_hex(commitment.salt_hex.as_str()));
    }

    assert_ne!(first.salt_hex, second.salt_hex);
    assert_ne!(first.digest_hex, second.digest_hex);
}

#[test]
fn reveal_recomputes_published_digest() {
    let event = deferral_event();
    let commitment = hash_with_salt(&event).unwrap();

    let canonical = Canonicalizer::default().canonicalize(&event).unwrap();
    let salt = hex::decode(commitment.salt_hex.as_str()).unwrap();
    let mut hasher = Sha256::new();
    hasher.update(&canonical.bytes);
    hasher.update(&salt);
    assert_eq!(hex::encode(hasher.finalize()), commitment.digest_hex.as_str());

    assert!(verify_reveal(&event, &commitment, &Canonicalizer::default()).unwrap());
}

#[test]
fn reveal_from_stored_text() {
    let event = deferral_event();
    let salt = Salt::from_bytes(*b"0123456789abcdef");
    let digest = hash_with_known_salt(&event, &salt, &Canonicalizer::default()).unwrap();

    let stored = parse_commitment(digest.as_str(), salt.to_hex().as_str()).unwrap();
    assert!(verify_reveal(&event, &stored, &Canonicalizer::default()).unwrap());

    let reordered = json!({
        "timestamp": "2025-10-18T14:00:00Z",
        "amount": 1000,
        "event_type": "deferral_change"
    });
    assert!(verify_reveal(&reordered, &stored, &Canonicalizer::default()).unwrap());
}

#[test]
fn commitment_serializes_as_hex_fields() {
    let commitment = parse_commitment(&"1".repeat(64), &"2".repeat(32)).unwrap();
    let serialized = serde_json::to_value(&commitment).unwrap();
    assert_eq!(
        serialized,
        json!({"digest_hex": "1".repeat(64), "salt_hex": "2".repeat(32)})
    );

    let back: Commitment = serde_json::from_value(serialized).unwrap();
    assert_eq!(back, commitment);
}

#[test]
fn memo_carries_digest_only() {
    let commitment = hash_with_salt(&deferral_event()).unwrap();
    let memo = MemoPayload::with_default_prefix(commitment.digest_hex.clone());
    let text = memo.to_text();

    assert!(text.starts_with("POC_HASH:"));
    assert!(text.ends_with(commitment.digest_hex.as_str()));
    assert!(!text.contains(commitment.salt_hex.as_str()));
}
