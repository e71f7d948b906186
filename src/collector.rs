use std::{collections::HashMap, hash::Hash};

use crate::slice::{from_slice, from_slice_with_duplicates};

/// Holds a key function so it can be applied to many inputs.
///
/// Every call hands back a fresh map; nothing is shared between calls apart
/// from the key function itself.
#[derive(Debug, Clone, derive_new::new)]
pub struct KeyedCollector<F> {
    key: F,
}

impl<F> KeyedCollector<F> {
    pub fn unique<I, E, K>(&mut self, input: I) -> HashMap<K, E>
    where
        I: IntoIterator<Item = E>,
        K: Hash + Eq,
        F: FnMut(&E) -> K,
    {
        from_slice(input, &mut self.key)
    }

    pub fn grouped<I, E, K>(&mut self, input: I) -> HashMap<K, Vec<E>>
    where
        I: IntoIterator<Item = E>,
        K: Hash + Eq,
        F: FnMut(&E) -> K,
    {
        from_slice_with_duplicates(input, &mut self.key)
    }

    pub fn into_inner(self) -> F {
        self.key
    }
}

pub trait Mapify: Iterator {
    fn mapify_by<K, F>(self, key: F) -> HashMap<K, Self::Item>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        from_slice(self, key)
    }

    fn mapify_grouped_by<K, F>(self, key: F) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        from_slice_with_duplicates(self, key)
    }
}

impl<I: Iterator> Mapify for I {}
