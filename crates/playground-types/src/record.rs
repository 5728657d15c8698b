//! The synthesized stand-in for a compile/run result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Judge0-style status pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    pub id: u16,
    pub description: String,
}

impl Status {
    pub const ACCEPTED: u16 = 3;
    /// Shared by "Compilation Error" and "Language Not Supported".
    pub const REJECTED: u16 = 4;
    pub const RUNTIME_ERROR: u16 = 6;

    pub fn new(id: u16, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }

    pub fn accepted() -> Self {
        Self::new(Self::ACCEPTED, "Accepted")
    }

    pub fn compilation_error() -> Self {
        Self::new(Self::REJECTED, "Compilation Error")
    }

    pub fn language_not_supported() -> Self {
        Self::new(Self::REJECTED, "Language Not Supported")
    }

    pub fn runtime_error() -> Self {
        Self::new(Self::RUNTIME_ERROR, "Runtime Error")
    }

    pub fn is_success(&self) -> bool {
        self.id == Self::ACCEPTED
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.id)
    }
}

/// Output of one run: streams, status, and the (fake) resource usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub status: Status,
    /// Elapsed seconds, formatted with three decimals.
    pub time: String,
    /// Peak memory in KB.
    pub memory: u32,
}

impl ExecutionRecord {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success_only_for_accepted() {
        assert!(Status::accepted().is_success());
        assert!(!Status::compilation_error().is_success());
        assert!(!Status::language_not_supported().is_success());
        assert!(!Status::runtime_error().is_success());
        assert_eq!(Status::compilation_error().id, Status::language_not_supported().id);
    }

    #[test]
    fn test_record_json_field_names() {
        let rec = ExecutionRecord {
            stdout: String::new(),
            stderr: "Runtime Error: x".to_string(),
            compile_output: String::new(),
            status: Status::runtime_error(),
            time: "0.000".to_string(),
            memory: 0,
        };
        assert!(!rec.is_success());
        let json = serde_json::to_string(&rec).unwrap();
        for key in ["stdout", "stderr", "compile_output", "status", "description", "time", "memory"] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
