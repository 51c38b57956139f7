// wordmask-core/tests/config_integration_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

use wordmask_core::config::{merge_configs, FilterConfig};
use wordmask_core::errors::WordMaskError;
use wordmask_core::mask_string;

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r##"
keywords:
  - "text"
  - "治国"
mask_char: "#"
"##;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(config.keywords, vec!["text".to_string(), "治国".to_string()]);
    assert_eq!(config.mask_char, '#');
    Ok(())
}

#[test]
fn test_load_from_file_mask_char_defaults() -> Result<()> {
    let yaml_content = r#"
keywords:
  - "secret"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(config.keywords, vec!["secret".to_string()]);
    assert_eq!(config.mask_char, '*');
    Ok(())
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let err = FilterConfig::load_from_file("/nonexistent/wordmask.yaml").unwrap_err();
    assert!(matches!(err, WordMaskError::Io(_)), "got {err:?}");
}

#[test]
fn test_load_from_malformed_yaml_is_parse_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"keywords: {not: [a, list")?;
    let err = FilterConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, WordMaskError::ConfigParse(..)), "got {err:?}");
    Ok(())
}

#[test]
fn test_loaded_config_drives_masking() -> Result<()> {
    let yaml_content = r#"
keywords:
  - "filter"
mask_char: "?"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(mask_string(&config, "a f.i.l.t.e.r b"), "a ?????? b");
    Ok(())
}

#[test]
fn test_merge_configs_extends_keywords() {
    let base = FilterConfig {
        keywords: vec!["ab".into()],
        mask_char: '*',
    };
    let extra = FilterConfig {
        keywords: vec!["ab".into(), "治国".into()],
        mask_char: '*',
    };
    let merged = merge_configs(base, Some(extra));
    assert_eq!(merged.keywords, vec!["ab", "治国"]);

    // The merged set honors keywords from both sources.
    assert_eq!(mask_string(&merged, "ab 治国"), "** **");
}
