//! Instructional prompt templates offered to MCP clients.

/// Substituted when the client calls the `search` prompt without a keyword.
pub const KEYWORD_PLACEHOLDER: &str = "<keyword>";

/// Build the `search` prompt: walks the agent through finding, presenting,
/// and installing corpus items related to `keyword`.
pub fn search_prompt(keyword: Option<&str>) -> String {
    let keyword = keyword
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .unwrap_or(KEYWORD_PLACEHOLDER);

    format!(
        "Search the shelf for instructions, prompts, agents, and collections related to `{keyword}`.

Follow these steps:

1. Call `search_content` with keywords derived from the request above. Split compound terms into separate keywords; any single keyword matching is enough for an item to be returned.
2. Before suggesting anything, check which of the returned files already exist in this repository:
   - instructions: `.github/instructions/`
   - prompts: `.github/prompts/`
   - agents and chat modes: `.github/agents/`
   - collections: install their listed items rather than the collection file itself
3. Present the results as a table with the columns: Mode, Filename, Title, Description, Already installed.
4. Ask which items to install. For each one chosen, call `load_content` with its mode and filename and save the returned text unchanged into the matching directory above.
5. Never modify the loaded text, and never overwrite an existing file without asking first.
"
    )
}
