//! Version dispatch for serialized records

use std::fmt;
use std::str::FromStr;

use netconv_api::{v1alpha4, v1beta1, TypeMeta, KIND};
use netconv_core::{ConversionError, Converter};
use serde::Serialize;

/// Version a document can be converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetVersion {
    V1alpha4,
    V1beta1,
}

impl TargetVersion {
    pub const NAMES: [&'static str; 2] = ["v1alpha4", "v1beta1"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1alpha4 => "v1alpha4",
            Self::V1beta1 => "v1beta1",
        }
    }
}

impl FromStr for TargetVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1alpha4" => Ok(Self::V1alpha4),
            "v1beta1" => Ok(Self::V1beta1),
            other => anyhow::bail!("unknown target version {other:?}"),
        }
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization used for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["yaml", "json"];
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown output format {other:?}"),
        }
    }
}

/// A record of any supported version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Hub(v1beta1::ManagedControlPlane),
    Legacy(v1alpha4::ManagedControlPlane),
}

impl Document {
    /// Parse YAML or JSON, dispatching on `apiVersion` and `kind`
    ///
    /// # Errors
    /// Fails on malformed input and on unsupported versions or kinds.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let type_meta: TypeMeta = serde_yaml::from_str(text)?;
        tracing::debug!(api_version = %type_meta.api_version, kind = %type_meta.kind, "parsed document header");

        if type_meta.kind != KIND {
            return Err(unsupported(&type_meta).into());
        }
        match type_meta.api_version.as_str() {
            v1beta1::API_VERSION => Ok(Self::Hub(serde_yaml::from_str(text)?)),
            v1alpha4::API_VERSION => Ok(Self::Legacy(serde_yaml::from_str(text)?)),
            _ => Err(unsupported(&type_meta).into()),
        }
    }

    #[must_use]
    pub fn version(&self) -> TargetVersion {
        match self {
            Self::Hub(_) => TargetVersion::V1beta1,
            Self::Legacy(_) => TargetVersion::V1alpha4,
        }
    }

    /// Convert to `target`; identity when already there
    ///
    /// # Errors
    /// Propagates conversion failures.
    pub fn convert(self, target: TargetVersion, converter: &Converter) -> Result<Self, ConversionError> {
        match (self, target) {
            (doc @ Self::Hub(_), TargetVersion::V1beta1) | (doc @ Self::Legacy(_), TargetVersion::V1alpha4) => Ok(doc),
            (Self::Hub(hub), TargetVersion::V1alpha4) => converter.convert_down(&hub).map(Self::Legacy),
            (Self::Legacy(legacy), TargetVersion::V1beta1) => converter.convert_up(&legacy).map(Self::Hub),
        }
    }

    /// Serialize in the requested format
    ///
    /// # Errors
    /// Fails if the serializer does.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match self {
            Self::Hub(hub) => render(hub, format),
            Self::Legacy(legacy) => render(legacy, format),
        }
    }
}

fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            out
        }
    })
}

fn unsupported(type_meta: &TypeMeta) -> ConversionError {
    ConversionError::UnsupportedVersion {
        api_version: type_meta.api_version.clone(),
        kind: type_meta.kind.clone(),
    }
}
