//! Integration tests for msgsimple-source crate.
//!
//! These tests exercise the public API the way a surrounding message bundle
//! would: build once, then read from many places.

use msgsimple_common::test_utils::{init_test_logging, message_fixtures};
use msgsimple_source::{
    load_path, InternalBundle, MapMessageSource, MessageSource, MsgSimpleError, Result,
};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_end_to_end_lookup() -> Result<()> {
    init_test_logging();

    let source = MapMessageSource::new_builder()
        .put("greeting", "hello")?
        .put("farewell", "bye")?
        .build();

    assert_eq!(source.get_key("greeting").as_deref(), Some("hello"));
    assert_eq!(source.get_key("farewell").as_deref(), Some("bye"));
    assert_eq!(source.get_key("unknown"), None);
    Ok(())
}

#[test]
fn test_put_all_matches_individual_puts() -> Result<()> {
    let merged = MapMessageSource::new_builder()
        .put_all(HashMap::from([("a", "1"), ("b", "2")]))?
        .build();
    let chained = MapMessageSource::new_builder()
        .put("a", "1")?
        .put("b", "2")?
        .build();

    assert_eq!(merged, chained);
    for key in ["a", "b", "c"] {
        assert_eq!(merged.get_key(key), chained.get_key(key));
    }
    Ok(())
}

#[test]
fn test_null_rejection_leaves_builder_unchanged() -> Result<()> {
    let mut builder = MapMessageSource::new_builder();
    builder.put("existing", "value")?;
    let before = builder.build();

    let failures: Vec<MsgSimpleError> = vec![
        builder.put(None::<&str>, "x").map(|_| ()).unwrap_err(),
        builder.put("x", None::<&str>).map(|_| ()).unwrap_err(),
        builder
            .put_all(None::<HashMap<String, String>>)
            .map(|_| ())
            .unwrap_err(),
    ];

    for err in &failures {
        assert!(err.is_invalid_argument(), "unexpected error: {err}");
    }
    assert_eq!(builder.build(), before);
    Ok(())
}

#[test]
fn test_error_messages_come_from_internal_bundle() {
    let err = MapMessageSource::new_builder()
        .put(None::<String>, "x")
        .map(|_| ())
        .unwrap_err();

    let code = err.code().unwrap_or_default().to_string();
    assert_eq!(err.to_string(), InternalBundle::instance().message(&code));
}

#[test]
#[allow(deprecated)]
fn test_deprecated_constructor_validates_whole_map() {
    let result = MapMessageSource::from_map(message_fixtures::greetings_with_missing_message());
    assert!(matches!(result, Err(MsgSimpleError::InvalidArgument { .. })));

    let source = MapMessageSource::from_map(message_fixtures::greetings()).unwrap();
    assert_eq!(source.get_key("thanks").as_deref(), Some("thank you"));
}

#[test]
fn test_concurrent_readers_share_one_source() -> Result<()> {
    let source: Arc<dyn MessageSource> = Arc::new(
        MapMessageSource::new_builder()
            .put_all(message_fixtures::greetings())?
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || {
                (0..100).all(|_| {
                    source.get_key("greeting").as_deref() == Some("hello")
                        && source.get_key("missing").is_none()
                })
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    Ok(())
}

#[test]
fn test_sources_behind_trait_objects() -> Result<()> {
    let sources: Vec<Box<dyn MessageSource>> = vec![
        Box::new(MapMessageSource::new_builder().put("only.first", "1")?.build()),
        Box::new(MapMessageSource::new_builder().put("only.second", "2")?.build()),
    ];

    let first_hit = |key: &str| sources.iter().find_map(|source| source.get_key(key));
    assert_eq!(first_hit("only.second").as_deref(), Some("2"));
    assert_eq!(first_hit("nowhere"), None);
    Ok(())
}

#[test]
fn test_load_path_json_and_toml() -> Result<()> {
    init_test_logging();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let json_path = temp_dir.path().join("messages.json");
    let toml_path = temp_dir.path().join("messages.toml");

    fs::write(&json_path, r#"{"greeting": "hello"}"#).unwrap();
    fs::write(&toml_path, "farewell = \"bye\"\n").unwrap();

    assert_eq!(load_path(&json_path)?.get("greeting"), Some("hello"));
    assert_eq!(load_path(&toml_path)?.get("farewell"), Some("bye"));
    Ok(())
}

#[test]
fn test_load_path_failures() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let yaml_path = temp_dir.path().join("messages.yaml");
    fs::write(&yaml_path, "greeting: hello\n").unwrap();
    assert!(matches!(
        load_path(&yaml_path),
        Err(MsgSimpleError::UnsupportedFormat { .. })
    ));

    let missing = temp_dir.path().join("missing.json");
    assert!(matches!(load_path(&missing), Err(MsgSimpleError::Io { .. })));

    let null_path = temp_dir.path().join("nulls.json");
    fs::write(&null_path, r#"{"greeting": null}"#).unwrap();
    let err = load_path(&null_path).unwrap_err();
    assert_eq!(err.code(), Some("cfg.map.nullValue"));
}
