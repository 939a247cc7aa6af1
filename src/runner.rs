use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

/// Narrow seam in front of the external tools, so flows can be driven by a
/// scripted runner in tests instead of real binaries.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be found on this system.
    fn is_available(&self, program: &str) -> bool;

    /// Run `program` to completion, inheriting stdio.
    /// True iff it launched and exited with status zero.
    async fn run(&self, program: &str, args: &[String]) -> bool;

    /// Run `program` to completion and return its captured stdout, with
    /// stderr discarded. An empty string if the process could not launch.
    async fn run_capturing(&self, program: &str, args: &[String]) -> String;
}

pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    async fn run(&self, program: &str, args: &[String]) -> bool {
        match Command::new(program).args(args).status().await {
            Ok(status) => status.success(),
            Err(err) => {
                eprintln!("Error launching {}: {}", program, err);
                false
            }
        }
    }

    async fn run_capturing(&self, program: &str, args: &[String]) -> String {
        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(_) => String::new(),
        }
    }
}
