//! Test environment builder for isolated nua-deploy testing.
//!
//! Provides `TestEnv` - a project directory (the working directory, holding
//! `nua-apps/` and `nua-deploy.toml`) plus a toolchain directory with fake
//! `nua-build` / `nua-orchestrator` scripts.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures;

/// Result of running a nua-deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}")))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory of the CLI
    pub project_root: TempDir,
    /// Holds the fake toolchain, its log and the staged document
    pub tool_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default apps root (`<project>/nua-apps`)
    pub fn apps_root(&self) -> PathBuf {
        self.project_path("nua-apps")
    }

    /// Where the deployment document is staged
    pub fn document_path(&self) -> PathBuf {
        self.tool_root.path().join("nua-deployment.json")
    }

    /// Copy of the document the fake orchestrator received
    pub fn received_path(&self) -> PathBuf {
        self.tool_root.path().join("received.json")
    }

    /// Lines logged by the fake toolchain, in call order
    pub fn tool_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.tool_root.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run nua-deploy in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run nua-deploy with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("NUA_HOST")
            .env_remove("NUA_DOMAIN")
            .env_remove("NUA_APPS_ROOT")
            .env_remove("NUA_ENV")
            .env_remove("NUA_DEPLOY_CONFIG")
            .env_remove("FAKE_FAIL_APP")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute nua-deploy");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    apps: Vec<(String, String)>,
    settings: String,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            apps: Vec::new(),
            settings: fixtures::LOCAL_TARGET.to_string(),
        }
    }

    /// Add `nua-apps/<relative>` with the given content
    pub fn with_app_file(mut self, relative: &str, content: &str) -> Self {
        self.apps.push((relative.to_string(), content.to_string()));
        self
    }

    /// Add `nua-apps/<id>/nua-config.toml` declaring `image`
    pub fn with_app(self, id: &str, image: &str) -> Self {
        self.with_app_file(&format!("{}/nua-config.toml", id), &fixtures::nua_config(image))
    }

    /// Extra settings tables, appended after `[target]`
    pub fn with_settings(mut self, extra: &str) -> Self {
        self.settings.push('\n');
        self.settings.push_str(extra);
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let tool_root = TempDir::new().expect("Failed to create tool dir");

        std::fs::create_dir_all(project_root.path().join("nua-apps"))
            .expect("Failed to create apps root");
        for (relative, content) in &self.apps {
            write_file(&project_root.path().join("nua-apps").join(relative), content);
        }

        let nua_env = tool_root.path().join("env");
        install_fake_toolchain(tool_root.path(), &nua_env);

        let settings = format!(
            "{}\n[toolchain]\nnua_env = \"{}\"\ndocument_path = \"{}\"\n",
            self.settings,
            nua_env.display(),
            tool_root.path().join("nua-deployment.json").display()
        );
        write_file(&project_root.path().join("nua-deploy.toml"), &settings);

        TestEnv {
            project_root,
            tool_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_nua-deploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[cfg(unix)]
fn install_fake_toolchain(tool_root: &Path, nua_env: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let log = tool_root.join("calls.log").display().to_string();
    let received = tool_root.join("received.json").display().to_string();
    let scripts = [
        ("nua-build", fixtures::fake_nua_build(&log)),
        (
            "nua-orchestrator",
            fixtures::fake_nua_orchestrator(&log, &received),
        ),
    ];

    for (name, body) in scripts {
        let path = nua_env.join("bin").join(name);
        write_file(&path, &body);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }
}

#[cfg(not(unix))]
fn install_fake_toolchain(_tool_root: &Path, _nua_env: &Path) {}
