//! Process-wide lookup table from generator-expression identifier to its
//! [`NodeDescriptor`], built once from [`crate::ops::NODES`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::node::NodeDescriptor;

static REGISTRY: Lazy<HashMap<&'static str, NodeDescriptor>> =
    Lazy::new(|| crate::ops::NODES.iter().map(|d| (d.name, *d)).collect());

pub fn lookup(identifier: &str) -> Option<NodeDescriptor> {
    REGISTRY.get(identifier).copied()
}
