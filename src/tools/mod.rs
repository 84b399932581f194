pub mod list_content;
pub mod load_content;
pub mod search_content;

use list_content::ListContentParams;
use load_content::LoadContentParams;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    ErrorCode, GetPromptRequestParams, GetPromptResult, JsonObject, ListPromptsResult,
    PaginatedRequestParams, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler};
use search_content::SearchContentParams;
use std::sync::Arc;

use crate::corpus::{self, Corpus};

const SEARCH_PROMPT: &str = "search";

/// The shelf MCP tool handler. Holds the corpus handle and exposes the
/// search / load / list tools via the `#[tool_router]` macro, plus the
/// `search` prompt.
#[derive(Clone)]
pub struct ShelfTools {
    tool_router: ToolRouter<Self>,
    corpus: Arc<Corpus>,
}

#[tool_router]
impl ShelfTools {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            corpus,
        }
    }

    /// Keyword search across every mode.
    #[tool(description = "Search instructions, prompts, collections, and agents by keyword. Returns mode, filename, title, and description for every file matching any keyword.")]
    async fn search_content(
        &self,
        Parameters(params): Parameters<SearchContentParams>,
    ) -> Result<String, String> {
        tracing::info!(keywords = %params.keywords, "search_content called");

        let corpus = Arc::clone(&self.corpus);
        let results =
            tokio::task::spawn_blocking(move || corpus::search(&corpus, &params.keywords))
                .await
                .map_err(|e| format!("search task failed: {e}"))?;

        tracing::info!(count = results.len(), "search_content matched");
        serde_json::to_string(&results).map_err(|e| format!("serialization failed: {e}"))
    }

    /// Return the raw text of one file.
    #[tool(description = "Load the full, unmodified content of a file by mode and filename.")]
    async fn load_content(
        &self,
        Parameters(params): Parameters<LoadContentParams>,
    ) -> Result<String, String> {
        tracing::info!(mode = %params.mode, filename = %params.filename, "load_content called");

        let corpus = Arc::clone(&self.corpus);
        tokio::task::spawn_blocking(move || corpus::load(&corpus, &params.mode, &params.filename))
            .await
            .map_err(|e| format!("load task failed: {e}"))?
            .map_err(|e| format!("load failed: {e}"))
    }

    /// List the files in one mode.
    #[tool(description = "List every file in a mode with its filename, title, and description.")]
    async fn list_content(
        &self,
        Parameters(params): Parameters<ListContentParams>,
    ) -> Result<String, String> {
        tracing::info!(mode = %params.mode, "list_content called");

        let corpus = Arc::clone(&self.corpus);
        let entries = tokio::task::spawn_blocking(move || corpus::list(&corpus, &params.mode))
            .await
            .map_err(|e| format!("list task failed: {e}"))?
            .map_err(|e| format!("list failed: {e}"))?;

        serde_json::to_string(&entries).map_err(|e| format!("serialization failed: {e}"))
    }
}

fn search_prompt_descriptor() -> Prompt {
    Prompt {
        name: SEARCH_PROMPT.to_string(),
        title: None,
        description: Some(
            "Find shelf items related to a keyword and offer to install them".to_string(),
        ),
        arguments: Some(vec![PromptArgument {
            name: "keyword".to_string(),
            title: None,
            description: Some("Topic to search for".to_string()),
            required: Some(false),
        }]),
        icons: None,
        meta: None,
    }
}

#[tool_handler]
impl ServerHandler for ShelfTools {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            instructions: Some(
                "Shelf serves curated instructions, prompts, collections, and agents. \
                 Use search_content to find items, list_content to browse a mode, and \
                 load_content to fetch a file's full text."
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListPromptsResult::with_all_items(vec![
            search_prompt_descriptor(),
        ])))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        render_prompt(&request.name, request.arguments.as_ref())
    }
}

/// Resolve a prompt by name. Only `search` exists; anything else is method-not-found.
fn render_prompt(name: &str, arguments: Option<&JsonObject>) -> Result<GetPromptResult, McpError> {
    if name != SEARCH_PROMPT {
        return Err(McpError::new(
            ErrorCode::METHOD_NOT_FOUND,
            format!("no prompt registered with name: {name}"),
            None,
        ));
    }

    let keyword = arguments
        .and_then(|args| args.get("keyword"))
        .and_then(|v| v.as_str());
    tracing::info!(keyword = ?keyword, "search prompt requested");

    Ok(GetPromptResult {
        description: search_prompt_descriptor().description,
        messages: vec![PromptMessage::new_text(
            PromptMessageRole::User,
            corpus::prompt::search_prompt(keyword),
        )],
    })
}
