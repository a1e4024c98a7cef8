//! Receiver filtering
//!
//! Restricts generation to the methods of one receiver variable and/or
//! receiver type. An empty filter value matches everything.

use signature::SignatureMatch;

/// Keep only the matches whose receiver fields equal the requested values.
///
/// A match passes when the receiver name equals `want_name` (or
/// `want_name` is empty) and the receiver type equals `want_type` (or
/// `want_type` is empty). Both filters empty is the identity. Filtering is
/// idempotent and preserves order.
pub fn filter_matches(
    matches: Vec<SignatureMatch>,
    want_name: &str,
    want_type: &str,
) -> Vec<SignatureMatch> {
    matches
        .into_iter()
        .filter(|m| {
            (want_name.is_empty() || m.receiver_name == want_name)
                && (want_type.is_empty() || m.receiver_type == want_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(receiver_name: &str, receiver_type: &str, method_name: &str) -> SignatureMatch {
        SignatureMatch {
            receiver_name: receiver_name.to_string(),
            receiver_type: receiver_type.to_string(),
            method_name: method_name.to_string(),
            raw_params: String::new(),
            raw_returns: "error".to_string(),
        }
    }

    #[test]
    fn empty_filters_pass_everything() {
        let matches = vec![sig("s", "Foo", "A"), sig("c", "Bar", "B")];
        let filtered = filter_matches(matches.clone(), "", "");
        assert_eq!(filtered, matches);
    }

    #[test]
    fn name_and_type_filters_combine_conjunctively() {
        let matches = vec![sig("s", "Foo", "A"), sig("s", "Bar", "B"), sig("c", "Foo", "C")];

        let by_name = filter_matches(matches.clone(), "s", "");
        assert_eq!(by_name.len(), 2);

        let by_type = filter_matches(matches.clone(), "", "Foo");
        assert_eq!(by_type.len(), 2);

        let by_both = filter_matches(matches, "s", "Foo");
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].method_name, "A");
    }

    #[test]
    fn mismatched_type_filter_rejects_all() {
        let matches = vec![sig("s", "Foo", "A")];
        assert!(filter_matches(matches, "s", "Baz").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let matches = vec![sig("s", "Foo", "A"), sig("c", "Bar", "B")];
        let once = filter_matches(matches, "s", "Foo");
        let twice = filter_matches(once.clone(), "s", "Foo");
        assert_eq!(once, twice);
    }
}
