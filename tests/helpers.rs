//! Shared test utilities.
//!
//! Pipeline tests never touch a real Python install: the interpreter is a
//! shell-script stub that appends every invocation to `calls.log` in the
//! workspace and plays whatever role the scenario needs.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sorapack::artifact;
use sorapack::config::Config;

/// A temporary workspace holding a target application skeleton.
pub struct TestWorkspace {
    /// Kept alive for the lifetime of the workspace.
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("canonicalize temp dir");
        fs::write(root.join("main.py"), "print('hello')\n").expect("write entry point");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Config pointing every path at this workspace and the interpreter at
    /// the given stub.
    pub fn config(&self, python: &Path) -> Config {
        Config {
            python: python.display().to_string(),
            build_spec: self.root.join("sorapack.json"),
            requirements: self.root.join("requirements.txt"),
            dist_dir: self.root.join("dist"),
            build_dir: self.root.join("build"),
        }
    }

    pub fn write_build_spec(&self, json: &str) -> PathBuf {
        let path = self.root.join("sorapack.json");
        fs::write(&path, json).expect("write build spec");
        path
    }

    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.root.join("requirements.txt");
        fs::write(&path, content).expect("write manifest");
        path
    }

    /// Install an executable interpreter stub and return its path.
    pub fn install_stub_python(&self, script: &str) -> PathBuf {
        let bin = self.root.join("stub-bin");
        fs::create_dir_all(&bin).expect("create stub bin dir");
        let path = bin.join("python");
        fs::write(&path, script).expect("write stub interpreter");
        let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod stub");
        path
    }

    /// Every interpreter invocation so far, one argument line per call.
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(self.root.join("calls.log")) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Lay down a onedir artifact tree by hand.
    pub fn make_onedir_bundle(&self, name: &str, with_internal: bool) {
        let bundle = self.root.join("dist").join(name);
        fs::create_dir_all(&bundle).expect("create bundle dir");
        fs::write(bundle.join(artifact::exe_name(name)), b"").expect("write exe");
        if with_internal {
            fs::create_dir_all(bundle.join(artifact::INTERNAL_DIR)).expect("create _internal");
        }
    }

    /// Lay down a onefile artifact by hand.
    pub fn make_onefile_bundle(&self, name: &str) {
        let dist = self.root.join("dist");
        fs::create_dir_all(&dist).expect("create dist");
        fs::write(dist.join(artifact::exe_name(name)), b"").expect("write exe");
    }
}

/// Packaging invocations in the call log (version queries excluded).
pub fn backend_runs(calls: &[String]) -> usize {
    calls
        .iter()
        .filter(|c| c.contains("-m PyInstaller") && !c.contains("--version"))
        .count()
}

/// Stub that logs calls and succeeds at everything; the backend invocation
/// executes `backend_actions` (shell snippet) to materialize artifacts.
pub fn stub_ok(backend_actions: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "$*" >> calls.log
case "$*" in
  *"-m PyInstaller --version"*)
    echo "6.6.0"
    ;;
  *"-m PyInstaller"*)
{backend_actions}
    ;;
esac
exit 0
"#
    )
}

/// Backend action snippet creating a onedir tree for `stub_ok`.
pub fn create_onedir(name: &str, with_internal: bool) -> String {
    let mut actions = format!(
        "    mkdir -p \"dist/{name}\"\n    : > \"dist/{name}/{name}\"\n"
    );
    if with_internal {
        actions.push_str(&format!("    mkdir -p \"dist/{name}/_internal\"\n"));
    }
    actions
}

/// Backend action snippet creating a onefile executable for `stub_ok`.
pub fn create_onefile(name: &str) -> String {
    format!("    mkdir -p dist\n    : > \"dist/{name}\"\n")
}

/// Stub whose dependency install fails; everything else succeeds.
pub fn stub_pip_install_fails() -> String {
    r#"#!/bin/sh
echo "$*" >> calls.log
case "$*" in
  *"-m pip install -r"*) exit 1 ;;
esac
exit 0
"#
    .to_string()
}

/// Stub where PyInstaller is missing until pip installs it.
pub fn stub_backend_missing_until_installed() -> String {
    r#"#!/bin/sh
echo "$*" >> calls.log
case "$*" in
  *"import PyInstaller"*)
    [ -f .backend-installed ] && exit 0
    exit 1
    ;;
  *"-m pip install pyinstaller"*)
    : > .backend-installed
    ;;
  *"-m PyInstaller"*)
    mkdir -p "dist/App/_internal"
    : > "dist/App/App"
    ;;
esac
exit 0
"#
    .to_string()
}

/// Stub whose backend run exits with the given code, creating nothing.
pub fn stub_backend_fails(code: i32) -> String {
    format!(
        r#"#!/bin/sh
echo "$*" >> calls.log
case "$*" in
  *"-m PyInstaller --version"*)
    echo "6.6.0"
    ;;
  *"-m PyInstaller"*) exit {code} ;;
esac
exit 0
"#
    )
}
