// crates/bundle-gate-cli/src/tests/config.rs
// ============================================================================
// Module: CLI Config Tests
// Description: Validate config loading guards (path, size, encoding, schema).
// Purpose: Ensure config input handling is strict and fail-closed.
// Dependencies: bundle-gate-cli config module, tempfile
// ============================================================================

//! ## Overview
//! Exercises the strict config loading path: size and path guards, UTF-8
//! requirement, unknown-key rejection, and semantic validation of values.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::BundleGateConfig;
use crate::config::ConfigError;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<BundleGateConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(contents: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_without_path_returns_defaults() -> TestResult {
    let config = BundleGateConfig::load(None).map_err(|err| err.to_string())?;
    if config != BundleGateConfig::default() {
        return Err("expected default config".to_string());
    }
    Ok(())
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(BundleGateConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(BundleGateConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_keys() -> TestResult {
    let file = write_config("[scan]\nextension = \"properties\"\nsurprise = true\n")?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "failed to parse config file")?;
    Ok(())
}

#[test]
fn load_rejects_empty_extension() -> TestResult {
    let file = write_config("[scan]\nextension = \"\"\n")?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "scan.extension")?;
    Ok(())
}

#[test]
fn load_rejects_extension_with_separators() -> TestResult {
    let file = write_config("[scan]\nextension = \".properties\"\n")?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "scan.extension")?;
    Ok(())
}

#[test]
fn load_rejects_non_numeric_platform_version() -> TestResult {
    let file = write_config("[encoding]\nplatform_version = \"lts\"\n")?;
    assert_invalid(BundleGateConfig::load(Some(file.path())), "encoding.platform_version")?;
    Ok(())
}

#[test]
fn load_accepts_recognized_fields() -> TestResult {
    let file =
        write_config("[scan]\nextension = \"props\"\n\n[encoding]\nplatform_version = \"2.303\"\n")?;
    let config = BundleGateConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.scan.extension.as_deref() != Some("props") {
        return Err("expected scan.extension to load".to_string());
    }
    if config.encoding.platform_version.as_deref() != Some("2.303") {
        return Err("expected encoding.platform_version to load".to_string());
    }
    Ok(())
}

#[test]
fn load_accepts_empty_file_as_defaults() -> TestResult {
    let file = write_config("")?;
    let config = BundleGateConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config != BundleGateConfig::default() {
        return Err("expected empty file to load as defaults".to_string());
    }
    Ok(())
}
