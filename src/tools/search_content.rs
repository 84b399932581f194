//! MCP `search_content` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `search_content` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchContentParams {
    /// Whitespace-separated keywords; a file matching any one of them is returned.
    #[schemars(
        description = "Whitespace-separated keywords. A file is returned if ANY keyword appears (case-insensitive) in its filename, description, or content."
    )]
    pub keywords: String,
}
