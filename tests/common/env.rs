//! Test environment builder for isolated zeroops testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a zeroops CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// - `project_root`: working directory for each command
/// - `state_dir`: passed as `ZEROOPS_HOME`
/// - optional fake ssh/scp that append to `remote.log`
pub struct TestEnv {
    pub project_root: TempDir,
    pub state_dir: TempDir,
    tools_dir: TempDir,
    fake_remote: bool,
    zeroops_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            state_dir: TempDir::new().expect("Failed to create state dir"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
            fake_remote: false,
            zeroops_bin: PathBuf::from(env!("CARGO_BIN_EXE_zeroops")),
        }
    }

    /// Replace ssh/scp with logging scripts.
    ///
    /// The fake ssh exits 1 when its command contains `$FAKE_SSH_FAIL`.
    #[cfg(unix)]
    pub fn with_fake_remote(mut self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let ssh = "#!/bin/sh\n\
                   for last; do :; done\n\
                   printf 'ssh %s\\n' \"$last\" >> \"$FAKE_REMOTE_LOG\"\n\
                   if [ -n \"$FAKE_SSH_FAIL\" ]; then\n\
                   case \"$last\" in *\"$FAKE_SSH_FAIL\"*) exit 1 ;; esac\n\
                   fi\n\
                   exit 0\n";
        let scp = "#!/bin/sh\n\
                   for last; do :; done\n\
                   printf 'scp %s\\n' \"$last\" >> \"$FAKE_REMOTE_LOG\"\n\
                   exit 0\n";

        for (name, script) in [("fake-ssh", ssh), ("fake-scp", scp)] {
            let path = self.tools_dir.path().join(name);
            std::fs::write(&path, script).expect("Failed to write fake tool");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod fake tool");
        }
        self.fake_remote = true;
        self
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn state_path(&self, relative: &str) -> PathBuf {
        self.state_dir.path().join(relative)
    }

    pub fn remote_log_path(&self) -> PathBuf {
        self.tools_dir.path().join("remote.log")
    }

    /// Lines written by the fake ssh/scp, in call order
    pub fn remote_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.remote_log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run zeroops in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run zeroops with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.zeroops_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("ZEROOPS_HOME", self.state_dir.path())
            .env("HOME", self.state_dir.path())
            .env_remove("ZEROOPS_SSH")
            .env_remove("ZEROOPS_SCP")
            .env_remove("ZEROOPS_STRICT_TEMPLATES")
            .env_remove("ZEROOPS_SUDO")
            .env_remove("FAKE_SSH_FAIL")
            .env("NO_COLOR", "1");

        if self.fake_remote {
            cmd.env("ZEROOPS_SSH", self.tools_dir.path().join("fake-ssh"))
                .env("ZEROOPS_SCP", self.tools_dir.path().join("fake-scp"))
                .env("FAKE_REMOTE_LOG", self.remote_log_path());
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute zeroops");
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

    /// Write a file to the state directory
    pub fn write_state_file(&self, relative_path: &str, content: &str) {
        write_file(&self.state_path(relative_path), content);
    }

    /// Add `prod` (alice@1.2.3.4) and select it
    pub fn with_current_target(self) -> Self {
        let added = self.run(&["context", "add", "prod", "--docker", "host=ssh://alice@1.2.3.4"]);
        assert!(added.success, "context add failed: {}", added.combined_output());
        let used = self.run(&["context", "use", "prod"]);
        assert!(used.success, "context use failed: {}", used.combined_output());
        self
    }

    /// `.env` plus a compose template using it
    pub fn with_compose_project(self) -> Self {
        self.write_project_file(".env", "PORT=8080\nIMAGE=web:1\n");
        self.write_project_file(
            "docker-compose.tpl.yml",
            "services:\n  web:\n    image: {{.IMAGE}}\n    ports:\n      - \"{{.PORT}}:80\"\n",
        );
        self
    }
}

impl Default for TestEnv {
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
