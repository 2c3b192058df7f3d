use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `gsurface` binary against an isolated config.
///
/// Endpoints point at a closed local port so nothing leaves the machine; the
/// tests using this harness only exercise paths that fail before a request.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub gsurface_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = dir.path().join("config.yaml");
        fs::write(
            &config_path,
            "access_token: test-token\n\
             iam_endpoint: http://127.0.0.1:9/\n\
             api_gateway_endpoint: http://127.0.0.1:9/\n\
             timeout_secs: 2\n",
        )
        .expect("Failed to write config");

        TestHarness {
            dir,
            config_path,
            gsurface_binary: PathBuf::from(env!("CARGO_BIN_EXE_gsurface")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the harness directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.gsurface_binary)
            .args(args)
            .current_dir(self.dir.path())
            .env("GSURFACE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("GSURFACE_PROJECT")
            .env_remove("GSURFACE_ACCESS_TOKEN")
            .env_remove("GSURFACE_IAM_ENDPOINT")
            .env_remove("GSURFACE_API_GATEWAY_ENDPOINT")
            .env_remove("GSURFACE_QUIET")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run gsurface")
    }

    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
