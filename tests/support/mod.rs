use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use stepspec::{StepLibrary, StepmanConfig};
use tempfile::TempDir;

/// A throwaway stepman root with helpers for writing routing and spec files.
pub struct StepmanFixture {
    temp: TempDir,
}

impl StepmanFixture {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("failed to allocate stepman root")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn library(&self) -> StepLibrary {
        StepLibrary::new(StepmanConfig::new(self.root()))
    }

    pub fn routing_path(&self) -> PathBuf {
        self.root().join("routing.json")
    }

    pub fn spec_path(&self, token: &str) -> PathBuf {
        self.root()
            .join("step_collections")
            .join(token)
            .join("spec")
            .join("spec.json")
    }

    /// `stepman-lookup` pointed at this root, isolated from the caller's env.
    pub fn lookup_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_stepman-lookup"));
        cmd.env_remove("STEPMAN_ROOT")
            .env_remove("RUST_LOG")
            .arg("--stepman-root")
            .arg(self.root());
        cmd
    }

    pub fn write_routing(&self, routes: &Value) -> Result<()> {
        self.write_raw_routing(&serde_json::to_string_pretty(routes)?)
    }

    pub fn write_raw_routing(&self, contents: &str) -> Result<()> {
        fs::write(self.routing_path(), contents).context("failed to write routing.json")
    }

    pub fn write_spec(&self, token: &str, spec: &Value) -> Result<PathBuf> {
        self.write_raw_spec(token, &serde_json::to_string_pretty(spec)?)
    }

    pub fn write_raw_spec(&self, token: &str, contents: &str) -> Result<PathBuf> {
        let path = self.spec_path(token);
        let parent = path.parent().context("spec path has no parent")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
