use coinsel_common::types::{AssetId, Value};
use coinsel_common::ValueError;
use serde_json::json;

use test_helpers::asset;

#[test]
fn test_addition_merges_asset_bundles() {
    let a = Value::from_lovelace(1_000_000)
        .with_asset(asset("X"), 10)
        .with_asset(asset("Y"), 1);
    let b = Value::from_lovelace(500_000)
        .with_asset(asset("X"), 5)
        .with_asset(asset("Z"), 7);

    let sum = a.checked_add(&b).unwrap();

    assert_eq!(sum.lovelace(), 1_500_000);
    assert_eq!(sum.quantity_of(&asset("X")), 15);
    assert_eq!(sum.quantity_of(&asset("Y")), 1);
    assert_eq!(sum.quantity_of(&asset("Z")), 7);
    assert_eq!(sum.assets().len(), 3);
}

#[test]
fn test_addition_reports_lovelace_overflow() {
    let a = Value::from_lovelace(u64::MAX);
    let b = Value::from_lovelace(1);
    assert_eq!(a.checked_add(&b), Err(ValueError::LovelaceOverflow));
}

#[test]
fn test_subtraction_drops_exhausted_assets() {
    let held = Value::from_lovelace(3_000_000)
        .with_asset(asset("X"), 10)
        .with_asset(asset("Y"), 4);
    let spent = Value::from_lovelace(1_000_000)
        .with_asset(asset("X"), 10)
        .with_asset(asset("Y"), 1);

    let remainder = held.checked_sub(&spent).unwrap();

    assert_eq!(remainder.lovelace(), 2_000_000);
    assert!(!remainder.assets().contains_key(&asset("X")));
    assert_eq!(remainder.quantity_of(&asset("Y")), 3);
    assert_eq!(remainder, Value::from_lovelace(2_000_000).with_asset(asset("Y"), 3));
}

#[test]
fn test_subtraction_requires_coverage() {
    let held = Value::from_lovelace(5_000_000);
    let wanted = Value::from_lovelace(1).with_asset(asset("X"), 1);

    match held.checked_sub(&wanted) {
        Err(ValueError::Underflow { minuend, subtrahend }) => {
            assert_eq!(minuend, held);
            assert_eq!(subtrahend, wanted);
        }
        other => panic!("expected underflow, got {:?}", other),
    }
}

#[test]
fn test_saturating_sub_clamps_each_dimension() {
    let target = Value::from_lovelace(500_000)
        .with_asset(asset("X"), 5)
        .with_asset(asset("Y"), 1);
    let available = Value::from_lovelace(1_000_000).with_asset(asset("X"), 2);

    let shortfall = target.saturating_sub(&available);

    assert_eq!(shortfall.lovelace(), 0);
    assert_eq!(shortfall.quantity_of(&asset("X")), 3);
    assert_eq!(shortfall.quantity_of(&asset("Y")), 1);
}

#[test]
fn test_covers_ignores_extra_assets() {
    let held = Value::from_lovelace(2_000_000)
        .with_asset(asset("X"), 10)
        .with_asset(asset("Extra"), 99);

    assert!(held.covers(&Value::from_lovelace(2_000_000)));
    assert!(held.covers(&Value::from_lovelace(1).with_asset(asset("X"), 10)));
    assert!(!held.covers(&Value::from_lovelace(1).with_asset(asset("X"), 11)));
    assert!(!held.covers(&Value::from_lovelace(2_000_001)));
    assert!(!held.covers(&Value::zero().with_asset(asset("Y"), 1)));
    assert!(Value::zero().covers(&Value::zero()));
}

#[test]
fn test_asset_ids_compare_by_content() {
    let a = AssetId::new(vec![1, 2, 3], b"tok".to_vec());
    let b = AssetId::new(vec![1, 2, 3], b"tok".to_vec());
    assert_eq!(a, b);

    let value = Value::zero().with_asset(a, 4);
    assert_eq!(value.quantity_of(&b), 4);
}

#[test]
fn test_try_sum_of_requested_amounts() {
    let amounts = vec![
        Value::from_lovelace(1_000_000),
        Value::from_lovelace(2_000_000).with_asset(asset("X"), 3),
        Value::zero().with_asset(asset("X"), 2),
    ];

    let total = Value::try_sum(&amounts).unwrap();

    assert_eq!(total, Value::from_lovelace(3_000_000).with_asset(asset("X"), 5));
    assert_eq!(Value::try_sum(&Vec::<Value>::new()).unwrap(), Value::zero());
}

#[test]
fn test_json_shape_uses_hex_identifiers() {
    let token = AssetId::new(vec![0xab, 0xcd], b"A".to_vec());
    let value = Value::from_lovelace(42).with_asset(token, 7);

    let encoded = serde_json::to_value(&value).unwrap();

    assert_eq!(
        encoded,
        json!({
            "lovelace": 42,
            "assets": [{ "policy_id": "abcd", "asset_name": "41", "quantity": 7 }]
        })
    );
}

#[test]
fn test_deserialize_normalizes_zero_and_repeated_entries() {
    let decoded: Value = serde_json::from_value(json!({
        "lovelace": 10,
        "assets": [
            { "policy_id": "abcd", "asset_name": "41", "quantity": 2 },
            { "policy_id": "abcd", "asset_name": "42", "quantity": 0 },
            { "policy_id": "abcd", "asset_name": "41", "quantity": 3 }
        ]
    }))
    .unwrap();

    let token = AssetId::new(vec![0xab, 0xcd], b"A".to_vec());
    assert_eq!(decoded, Value::from_lovelace(10).with_asset(token, 5));

    let missing_assets: Value = serde_json::from_value(json!({ "lovelace": 3 })).unwrap();
    assert_eq!(missing_assets, Value::from_lovelace(3));
}

#[test]
fn test_display_lists_assets() {
    let token = AssetId::new(vec![0x01], b"A".to_vec());
    let value = Value::from_lovelace(5).with_asset(token, 2);
    assert_eq!(value.to_string(), "5 lovelace + 2 01.41");
}
