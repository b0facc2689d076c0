//! Query-string merging for component URLs

use url::form_urlencoded;

/// Merge `updates` into the query string of `url`.
///
/// Existing parameters whose key is being updated are dropped; the rest keep
/// their order and the updates are appended in iteration order. The fragment
/// is preserved and relative URLs are accepted as-is.
pub fn merge_query<I, K, V>(url: &str, updates: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let updates: Vec<(K, V)> = updates.into_iter().collect();
    if updates.is_empty() {
        return url.to_string();
    }

    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if !updates.iter().any(|(k, _)| k.as_ref() == key) {
            serializer.append_pair(&key, &value);
        }
    }
    for (key, value) in &updates {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }

    let mut merged = format!("{base}?{}", serializer.finish());
    if let Some(fragment) = fragment {
        merged.push('#');
        merged.push_str(fragment);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_existing_query() {
        assert_eq!(
            merge_query("http://example.com?key2=content123", [("key", "content")]),
            "http://example.com?key2=content123&key=content"
        );
    }

    #[test]
    fn test_overwritten_key_moves_to_end() {
        assert_eq!(
            merge_query("/list?page=2&sort=name", [("page", "3")]),
            "/list?sort=name&page=3"
        );
    }

    #[test]
    fn test_url_without_query() {
        assert_eq!(merge_query("/detail/7", [("a", "1")]), "/detail/7?a=1");
    }

    #[test]
    fn test_fragment_is_kept() {
        assert_eq!(
            merge_query("/page?x=1#section", [("y", "2")]),
            "/page?x=1&y=2#section"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        assert_eq!(
            merge_query("/search", [("q", "a b&c")]),
            "/search?q=a+b%26c"
        );
    }

    #[test]
    fn test_repeated_keys_are_all_replaced() {
        assert_eq!(
            merge_query("/f?tag=a&tag=b&n=1", [("tag", "c")]),
            "/f?n=1&tag=c"
        );
    }

    #[test]
    fn test_no_updates_returns_url_unchanged() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(merge_query("/a?b=%20", empty), "/a?b=%20");
    }
}
