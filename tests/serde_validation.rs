#![cfg(feature = "serde")]

mod common;

use common::node;
use historytree::{Index, Label, Layer, Pos};

#[test]
fn pos_serializes_as_index_and_layer() {
    let json = serde_json::to_string(&node(4, 2)).expect("serialize");
    assert_eq!(json, r#"{"index":4,"layer":2}"#);
    let back: Pos = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, node(4, 2));
}

#[test]
fn invalid_positions_are_rejected() {
    assert!(serde_json::from_str::<Pos>(r#"{"index":1,"layer":1}"#).is_err());
    assert!(serde_json::from_str::<Pos>(r#"{"index":0,"layer":58}"#).is_err());
    assert!(serde_json::from_str::<Index>("144115188075855872").is_err());
    assert!(serde_json::from_str::<Layer>("200").is_err());
}

#[test]
fn label_keeps_its_bytes() {
    let label = Label::new([9; 32]);
    let json = serde_json::to_string(&label).expect("serialize");
    let back: Label = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, label);
}
