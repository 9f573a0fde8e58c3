use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// The fixed "today" every harness command runs with.
pub const TODAY: &str = "20240315";

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("scheduler").expect("Failed to find scheduler binary");

        // Set the database path via environment variable and keep any
        // config.toml of the developer out of the way.
        cmd.env("SCHEDULER_DATABASE_PATH", &self.db_path)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());

        cmd
    }

    /// Get the database path for this test instance
    #[allow(dead_code)]
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `args` with `--today` pinned to [`TODAY`].
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.run_on(TODAY, args)
    }

    /// Runs `args` as if today were `today`.
    pub fn run_on(&self, today: &str, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).args(["--today", today]).assert()
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.run(args).success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.run(args).failure()
    }

    /// All stored tasks, read back through `list --json`.
    pub fn tasks(&self) -> Vec<serde_json::Value> {
        let output = self.run_success(&["list", "--json"]).get_output().stdout.clone();
        serde_json::from_slice(&output).expect("list --json is not valid JSON")
    }

    /// Adds a task and returns its full ID.
    pub fn add(&self, args: &[&str]) -> String {
        let before: Vec<String> = self.tasks().iter().map(task_id).collect();
        self.run_success(&[&["add"][..], args].concat());
        self.tasks()
            .iter()
            .map(task_id)
            .find(|id| !before.contains(id))
            .expect("added task not listed")
    }

    /// The stored task with `id`, if any.
    pub fn task(&self, id: &str) -> Option<serde_json::Value> {
        self.tasks().into_iter().find(|t| task_id(t) == id)
    }
}

pub fn task_id(task: &serde_json::Value) -> String {
    task["id"].as_str().expect("task without id").to_string()
}

/// Utility functions for test assertions
pub mod assertions {
    use super::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Due"))
    }

    /// Predicate to check if output indicates successful task creation
    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("Created task")
    }

    /// Predicate to check if output indicates successful task completion
    pub fn task_completed_successfully() -> impl Predicate<str> {
        predicate::str::contains("Completed task")
    }

    /// Predicate to check for empty result set
    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No tasks found")
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error")
    }
}
