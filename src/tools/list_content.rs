//! MCP `list_content` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `list_content` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListContentParams {
    /// Mode to list: `"instructions"`, `"prompts"`, `"collections"`, `"agents"`, or the alias `"chatmodes"`.
    #[schemars(
        description = "Mode to list: 'instructions', 'prompts', 'collections', or 'agents' ('chatmodes' is accepted as an alias of 'agents')"
    )]
    pub mode: String,
}
