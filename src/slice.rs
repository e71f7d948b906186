use std::{collections::HashMap, hash::Hash};

use tracing::trace;
use utilities::iterable::index;

/// Builds a map from `input`, keying every element with `key`.
///
/// When `key` yields the same value for several elements, the element seen
/// last is the one kept. See [`from_slice_with_duplicates`] to keep all of
/// them.
///
/// ```
/// let map = mapify::from_slice(vec![(1, 'a'), (2, 'b'), (1, 'c')], |p| p.0);
/// assert_eq!(map[&1], (1, 'c'));
/// ```
pub fn from_slice<I, E, K, F>(input: I, mut key: F) -> HashMap<K, E>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> K,
{
    let mut elements = 0usize;
    let map: HashMap<K, E> = input
        .into_iter()
        .inspect(|_| elements += 1)
        .map(|e| (key(&e), e))
        .collect();

    trace!(target: "mapify", elements, keys = map.len(), "mapified slice");
    map
}

/// Builds a map from `input` where every key holds all elements that produced
/// it, in the order they were encountered.
pub fn from_slice_with_duplicates<I, E, K, F>(input: I, mut key: F) -> HashMap<K, Vec<E>>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> K,
{
    let mut elements = 0usize;
    let map = index(
        input
            .into_iter()
            .inspect(|_| elements += 1)
            .map(|e| (key(&e), e)),
    );

    trace!(target: "mapify", elements, keys = map.len(), "mapified slice with duplicates");
    map
}

/// [`from_slice`] over an input that may be absent. `None` gives an empty map.
pub fn from_option_slice<I, E, K, F>(input: Option<I>, key: F) -> HashMap<K, E>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> K,
{
    from_slice(input.into_iter().flatten(), key)
}

/// [`from_slice_with_duplicates`] over an input that may be absent.
pub fn from_option_slice_with_duplicates<I, E, K, F>(
    input: Option<I>,
    key: F,
) -> HashMap<K, Vec<E>>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> K,
{
    from_slice_with_duplicates(input.into_iter().flatten(), key)
}

/// Fallible [`from_slice`]. Stops at the first key error and returns it.
pub fn try_from_slice<I, E, K, X, F>(input: I, mut key: F) -> Result<HashMap<K, E>, X>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> Result<K, X>,
{
    let mut map = HashMap::new();
    let mut elements = 0usize;

    for e in input {
        elements += 1;
        map.insert(key(&e)?, e);
    }

    trace!(target: "mapify", elements, keys = map.len(), "mapified slice");
    Ok(map)
}

/// Fallible [`from_slice_with_duplicates`].
pub fn try_from_slice_with_duplicates<I, E, K, X, F>(
    input: I,
    mut key: F,
) -> Result<HashMap<K, Vec<E>>, X>
where
    I: IntoIterator<Item = E>,
    K: Hash + Eq,
    F: FnMut(&E) -> Result<K, X>,
{
    let mut map: HashMap<K, Vec<E>> = HashMap::new();
    let mut elements = 0usize;

    for e in input {
        elements += 1;
        map.entry(key(&e)?).or_default().push(e);
    }

    trace!(target: "mapify", elements, keys = map.len(), "mapified slice with duplicates");
    Ok(map)
}
