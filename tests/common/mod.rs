#![allow(dead_code)]

use historytree::{Index, Layer, Pos};

pub fn node(index: u64, layer: u8) -> Pos {
    Pos::try_new(index, layer).unwrap_or_else(|err| panic!("({},{}): {}", index, layer, err))
}

pub fn leaf(index: u64) -> Pos {
    Pos::leaf(idx(index))
}

pub fn idx(index: u64) -> Index {
    Index::new(index).expect("index in range")
}

pub fn layer(layer: u8) -> Layer {
    Layer::new(layer).expect("layer in range")
}
