use std::fmt;

use serde::{Deserialize, Serialize};

/// One registered dialect plugin
///
/// Serialized with the field names the settings key has always used, so
/// `owner_id` is stored as `extensionId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectDescriptor {
    pub name: String,
    /// Location of the dialect grammar/definition resource
    pub path: String,
    pub description: String,
    /// Extension that registered the dialect
    #[serde(rename = "extensionId")]
    pub owner_id: String,
}

impl DialectDescriptor {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: description.into(),
            owner_id: owner_id.into(),
        }
    }
}

impl fmt::Display for DialectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name, self.path, self.owner_id, self.description
        )
    }
}
