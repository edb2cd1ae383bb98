//! Progress-line helpers shared by every bootstrap step.

use crate::utils::error::{BootstrapError, Result};

/// Formats the leading marker of a progress line.
///
/// A step label such as `"2/3"` renders as `"[2/3] "`; without a label the
/// line is indented with a tab so it reads as a detail of the previous step.
pub fn format_prefix(prefix: Option<&str>) -> String {
    match prefix {
        Some(label) => format!("[{}] ", label),
        None => "\t".to_string(),
    }
}

/// Converts a failed required step into [`BootstrapError::StepFailed`].
///
/// The binary maps this error to the `[-] Exiting...` line and exit status 1.
pub fn must_pass(passed: bool, step: &str) -> Result<()> {
    if passed {
        Ok(())
    } else {
        tracing::error!(step, "required step failed");
        Err(BootstrapError::StepFailed {
            step: step.to_string(),
        })
    }
}
