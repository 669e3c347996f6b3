//! Test environment for isolated skeleton-cli runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test
const SCRUBBED_ENV: &[&str] = &[
    "SKELETON_COPY_TEMPLATE",
    "SKELETON_WORKSPACE",
    "SKELETON_BUNDLER",
    "SKELETON_NODE",
    "XDG_CONFIG_HOME",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with its own HOME.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_skeleton-cli")),
        }
    }

    /// Project root as the CLI sees it (symlinks resolved)
    pub fn root(&self) -> PathBuf {
        self.project_root
            .path()
            .canonicalize()
            .expect("canonicalize project dir")
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("SKELETON_NO_COLOR", "1");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute skeleton-cli");
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
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Names of the entries directly inside the project root
    pub fn project_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project_root.path())
            .expect("read project dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Write `skeleton.toml` pointing bundler and renderer at the stand-in scripts
    pub fn write_fake_toolchain_config(&self, file: &str, bundler_script: &str) {
        let bundler = format!("tools/{file}.webpack.sh");
        self.write_project_file(&bundler, bundler_script);
        self.write_project_file("tools/render.sh", super::FAKE_RENDERER);
        let config = format!(
            "[bundler]\nprogram = \"sh\"\nargs = [{}]\n\n[renderer]\nprogram = \"sh\"\nargs = [{}]\n",
            toml_path(&self.project_path(&bundler)),
            toml_path(&self.project_path("tools/render.sh")),
        );
        self.write_project_file(file, &config);
    }
}

fn toml_path(path: &Path) -> String {
    format!("'{}'", path.display())
}
