use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: launcher parameters and a short result summary.
pub struct Payload {
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            summary: Value::Null,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

/// Provenance block shared by `report` and the sidecar writer.
pub fn provenance_doc(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "crate_version": hullstep::VERSION,
        "params": payload.params,
        "summary": payload.summary,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = provenance_doc(payload, &[artifact.to_string_lossy().into_owned()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("hull"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/hull.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/hull.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_creates_file() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("a.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(json!({"points": 12})).with_summary(json!({"hull_len": 5}));
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["points"], 12);
        assert_eq!(parsed["summary"]["hull_len"], 5);
    }
}
