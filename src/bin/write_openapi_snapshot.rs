// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use rt_celebs::presentation::http::openapi::write_openapi_snapshot;
use std::{env, path::PathBuf};

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = env::var_os("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from);

    write_openapi_snapshot(&output_path)
        .with_context(|| format!("writing OpenAPI snapshot to {}", output_path.display()))?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
