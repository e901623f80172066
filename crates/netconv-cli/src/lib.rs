//! netconv command-line front end
//!
//! Reads `ManagedControlPlane` documents (YAML or JSON), converts them between
//! versions with [`netconv_core::Converter`] and renders the result.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod document;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use netconv_core::{ConversionConfig, Converter};

pub use document::{Document, OutputFormat, TargetVersion};

/// Outcome of a down/up round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Whether the record came back unchanged
    pub preserved: bool,
    /// The record as it came back
    pub result: Document,
}

/// Load configuration from a YAML or JSON file, or use defaults
///
/// # Errors
/// Fails if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ConversionConfig> {
    let Some(path) = path else {
        return Ok(ConversionConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Read a document from a file, or from stdin when `input` is `-`
///
/// # Errors
/// Fails on I/O errors.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
}

/// Convert a serialized document to `target` and render it
///
/// # Errors
/// Fails on parse, conversion or render errors.
pub fn convert_text(
    text: &str,
    target: TargetVersion,
    format: OutputFormat,
    converter: &Converter,
) -> anyhow::Result<String> {
    let document = Document::parse(text)?;
    tracing::info!(from = %document.version(), to = %target, "converting document");

    let converted = document
        .convert(target, converter)
        .with_context(|| format!("converting to {target}"))?;
    converted.render(format)
}

/// Down-convert a hub document and bring it back
///
/// # Errors
/// Fails if the document is not a hub record or either conversion fails.
pub fn round_trip_text(text: &str, converter: &Converter) -> anyhow::Result<RoundTripReport> {
    let Document::Hub(hub) = Document::parse(text)? else {
        anyhow::bail!("round trip expects a {} document", netconv_api::v1beta1::API_VERSION);
    };

    let legacy = converter.convert_down(&hub).context("converting down")?;
    let back = converter.convert_up(&legacy).context("converting up")?;

    let preserved = back == hub;
    if !preserved {
        tracing::warn!(name = %hub.metadata.name, "round trip did not preserve the record");
    }
    Ok(RoundTripReport {
        preserved,
        result: Document::Hub(back),
    })
}
