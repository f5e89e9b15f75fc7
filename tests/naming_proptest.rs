//! Property-based tests for byte decoding, filename derivation and rendering totality

use proptest::prelude::*;
use qhelp::qhelp::decoding::{decode, decode_byte};
use qhelp::qhelp::naming::{alias_filenames, escape_char, filename, filename_for_context};
use qhelp::qhelp::parsing::Database;
use qhelp::{render_topic, Topic};

/// Printable ASCII contexts, escapable characters included
fn context_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,20}"
}

/// Contexts whose escaped forms can never collide: no space, no underscore and no `x`
fn collision_free_context_strategy() -> impl Strategy<Value = String> {
    r#"[a-wyzA-Z0-9./@:#&,<>'"\\-]{1,12}"#
}

proptest! {
    #[test]
    fn test_decode_maps_every_byte_to_one_char(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let decoded = decode(&bytes);
        prop_assert_eq!(decoded.chars().count(), bytes.len());
        for (byte, c) in bytes.iter().zip(decoded.chars()) {
            prop_assert_eq!(decode_byte(*byte), c);
            prop_assert_eq!(*byte == b'\n', c == '\n');
            prop_assert_eq!(*byte == b'\r', c == '\r');
        }
    }

    #[test]
    fn test_filename_shape(context in context_strategy()) {
        let name = filename_for_context(&context);
        prop_assert_eq!(&name, &filename_for_context(&context));
        prop_assert!(!name.starts_with('_'));

        let stem = name.strip_suffix(".html");
        prop_assert!(stem.is_some(), "missing extension: {}", name);
        let stem = stem.unwrap_or_default();
        prop_assert!(
            stem.chars().all(|c| escape_char(c).is_none()),
            "unescaped character left in {}",
            name
        );
    }

    #[test]
    fn test_distinct_contexts_get_distinct_filenames(
        a in collision_free_context_strategy(),
        b in collision_free_context_strategy(),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(filename_for_context(&a), filename_for_context(&b));
    }

    #[test]
    fn test_one_alias_per_extra_context(
        contexts in prop::collection::hash_set(collision_free_context_strategy(), 1..6)
    ) {
        let topic = Topic::with_contexts(contexts.iter().cloned(), "");
        let aliases = alias_filenames(&topic);
        prop_assert_eq!(aliases.len(), contexts.len() - 1);
        prop_assert!(!aliases.contains(&filename(&topic)));
    }

    #[test]
    fn test_rendering_never_panics(body in r"(\\[abipuv\\]|[ -~►◄\n]){0,80}") {
        let topic = Topic::with_contexts(["x"], body);
        let _html = render_topic(&topic, &Database::default());
    }
}
