//! Integration tests for the wristcast-common crate.
//!
//! These tests exercise the error type and logging configuration as
//! consumed by downstream crates.

use std::error::Error;
use std::io;
use wristcast_common::logging::LoggingConfig;
use wristcast_common::{Result, WristcastError};

#[test]
fn test_error_variants_render_their_domain() {
    let config = WristcastError::config("bad canvas section");
    assert!(config.to_string().contains("Configuration error"));

    let graph = WristcastError::graph("stroke failed");
    assert!(graph.to_string().contains("Graph error"));

    let preference = WristcastError::preference("unknown system");
    assert!(preference.to_string().contains("Preference error"));

    let empty = WristcastError::empty_series("coordinate mapping");
    assert_eq!(
        empty.to_string(),
        "Empty sample series: coordinate mapping"
    );
}

#[test]
fn test_source_chain_is_walkable() {
    let root = io::Error::new(io::ErrorKind::NotFound, "missing preferences file");
    let wrapped = WristcastError::preference_with_source("load failed", root);

    let source = wrapped.source().expect("source should be preserved");
    assert!(source.to_string().contains("missing preferences file"));
}

#[test]
fn test_io_errors_convert_with_question_mark() {
    fn read_missing() -> Result<String> {
        let contents = std::fs::read_to_string("/definitely/not/here.toml")?;
        Ok(contents)
    }

    let err = read_missing().unwrap_err();
    assert!(matches!(err, WristcastError::Io(_)));
}

#[test]
fn test_toml_errors_become_config_errors() {
    let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
    let err: WristcastError = toml_err.into();
    assert!(matches!(err, WristcastError::Config { .. }));
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(config.pretty_format);
    assert!(config.file_path.is_none());
}
