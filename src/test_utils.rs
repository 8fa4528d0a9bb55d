//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a flat document name with a common extension
    pub fn document_name() -> impl Strategy<Value = String> {
        ("[a-z][a-z0-9_-]{0,24}", prop_oneof!["json", "txt", "dat"])
            .prop_map(|(stem, ext)| format!("{stem}.{ext}"))
    }

    /// Generate arbitrary document contents
    pub fn document_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..4096)
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_document_name_generator(name in document_name()) {
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.starts_with('.'));
            prop_assert!(name.contains('.'));
        }

        #[test]
        fn test_document_bytes_generator(bytes in document_bytes()) {
            prop_assert!(bytes.len() < 4096);
        }
    }
}
