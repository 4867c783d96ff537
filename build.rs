use anyhow::{Context, Result};
use std::path::PathBuf;

const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const CATALOG_ASSET: &str = "assets/products.json";

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    title: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let metadata = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?
            .get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let id = Self::extract_string(metadata, "id")?;
        let title = Self::extract_string(metadata, "title")?;

        Ok(Self {
            name,
            description,
            version,
            id,
            title,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_rebuild_triggers() {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=Cargo.toml");
        println!("cargo:rerun-if-changed={CATALOG_ASSET}");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let asset = root.join(CATALOG_ASSET);
    if !asset.is_file() {
        anyhow::bail!("Bundled catalog is missing at {}", asset.display());
    }

    let metadata = ApplicationMetadata::extract_from_cargo()?;
    CargoEnvironmentVariables::emit_rebuild_triggers();
    CargoEnvironmentVariables::emit_application_metadata(&metadata);
    Ok(())
}
