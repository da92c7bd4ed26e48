//! Admin and maintenance configuration.

use serde::{Deserialize, Serialize};

/// Admin/maintenance settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Whether the destructive data-wipe endpoint is enabled.
    /// Only the development overlay should ever turn this on.
    #[serde(default)]
    pub allow_data_wipe: bool,
}
