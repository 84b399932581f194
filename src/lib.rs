//! Snippet shelf — keyword search, listing, and loading of curated text for AI agents.
//!
//! Shelf is an [MCP](https://modelcontextprotocol.io/) server over a directory of
//! pre-authored snippets. The corpus root holds one directory per mode:
//!
//! | Mode | Contents | Typical file |
//! |------|----------|--------------|
//! | **instructions** | Coding guidelines | `rust.instructions.md` |
//! | **prompts** | Prompt templates | `review.prompt.md` |
//! | **collections** | Curated bundles | `python.collection.yml` |
//! | **agents** | Agent and chat persona definitions (alias: `chatmodes`) | `planner.agent.md` |
//!
//! Nothing is indexed ahead of time: every search, list, and load reads the
//! directories as they are at call time.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`corpus`] — Mode resolution, file access, metadata extraction, and queries

pub mod config;
pub mod corpus;
