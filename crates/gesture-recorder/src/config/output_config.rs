use crate::config::default_true;

use serde::{Deserialize, Serialize};

/// Where completed trajectories are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print each export as one line on stdout.
    #[serde(default = "default_true")]
    pub print_to_stdout: bool,
    /// Copy each export to the system clipboard.
    #[serde(default)]
    pub copy_to_clipboard: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_to_stdout: default_true(),
            copy_to_clipboard: false,
        }
    }
}
