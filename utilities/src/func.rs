/// Chains two key functions: `g(f(e))`.
pub fn compose<E, B, K, F, G>(f: F, g: G) -> impl Fn(&E) -> K
where
    E: ?Sized,
    F: Fn(&E) -> B,
    G: Fn(B) -> K,
{
    move |e: &E| g(f(e))
}

/// Lifts a key function over optional elements. `None` maps to a clone of
/// `sentinel`.
pub fn or_sentinel<T, K, F>(sentinel: K, key: F) -> impl Fn(&Option<T>) -> K
where
    K: Clone,
    F: Fn(&T) -> K,
{
    move |e: &Option<T>| match e {
        Some(value) => key(value),
        None => sentinel.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{compose, or_sentinel};

    #[derive(Debug, PartialEq, Eq)]
    struct Thing {
        i: i32
    }

    #[test]
    fn test_compose() {
        let key = compose(|t: &Thing| t.i, |i: i32| format!("thing-{i}"));
        assert_eq!(key(&Thing { i: 1 }), "thing-1");
    }

    #[test]
    fn test_compose_unsized() {
        let key = compose(|s: &str| s.len(), |n: usize| n * 2);
        assert_eq!(key("four"), 8);
    }

    #[test]
    fn test_or_sentinel() {
        let key = or_sentinel("(nil)".to_string(), |t: &Thing| t.i.to_string());
        assert_eq!(key(&Some(Thing { i: 7 })), "7");
        assert_eq!(key(&None), "(nil)");
    }
}
