use std::{collections::HashMap, hash::Hash};

/// Groups already keyed pairs. Values under one key keep the order in which
/// they were yielded.
pub fn index<K: Hash + Eq, V, I>(items: I) -> HashMap<K, Vec<V>>
    where I: IntoIterator<Item = (K, V)> {
    use itertools::Itertools;

    items.into_iter().into_group_map()
}

#[cfg(test)]
mod tests {
    use crate::iterable::index;

    #[test]
    fn test_index() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let ix = index(items);
        assert_eq!(ix.len(), 2);
        assert_eq!(ix["a"], vec![1, 3]);
        assert_eq!(ix["b"], vec![2]);
    }

    #[test]
    fn test_index_keeps_encounter_order() {
        let items = vec![(1, "z"), (2, "y"), (1, "a"), (1, "m")];
        let ix = index(items);
        assert_eq!(ix[&1], vec!["z", "a", "m"]);
    }

    #[test]
    fn test_index_empty() {
        let ix = index(Vec::<(u8, u8)>::new());
        assert!(ix.is_empty());
    }
}
