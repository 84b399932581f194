//! MCP `load_content` tool parameter definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the `load_content` MCP tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LoadContentParams {
    /// Mode holding the file: `"instructions"`, `"prompts"`, `"collections"`, `"agents"`, or the alias `"chatmodes"`.
    #[schemars(
        description = "Mode of the file: 'instructions', 'prompts', 'collections', or 'agents' ('chatmodes' is accepted as an alias of 'agents')"
    )]
    pub mode: String,

    /// Filename as returned by `search_content` or `list_content`.
    #[schemars(description = "Filename exactly as returned by search_content or list_content")]
    pub filename: String,
}
