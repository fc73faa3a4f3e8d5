//! # Stockctl Architecture
//!
//! Stockctl is a **UI-agnostic stock-keeping library** with an interactive
//! menu-driven CLI on top. The library tracks products across two in-memory
//! containers (a warehouse and a display shelf); the CLI is just one
//! possible client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                        │
//! │  - Menu loop, option parsing, colored output               │
//! │  - The ONLY place that writes to stdout/stderr directly    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - StockApi: owns both containers, dispatches to commands  │
//! │  - Returns structured Result types                         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - One module per operation: validate, then mutate         │
//! │  - Reads user fields through the InputSource seam          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Model + Containers (model.rs, store.rs)                   │
//! │  - Validated value types, ordered in-memory lists          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Input Seam
//!
//! Operations prompt for their fields one at a time (the move operation
//! only asks for a price when the shelf has no matching entry, so prompting
//! cannot be hoisted out of the command layer). Prompting goes through the
//! [`input::InputSource`] trait: `StdinInput` in production, a scripted
//! source in tests. Command code therefore never assumes a terminal.
//!
//! ## Failure Model
//!
//! Every operation validates its inputs before touching container state and
//! returns `Result<CmdResult>`. Data errors (bad input, unknown id, not
//! enough stock) are recoverable: the menu loop prints them and re-prompts.
//! Only I/O errors on the input stream end the program.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: One module per menu operation
//! - [`model`]: Validated value types (`Product`, `StockItem`, `ShelfItem`)
//! - [`store`]: The `Warehouse` and `Shelf` containers
//! - [`input`]: Console input abstraction
//! - [`error`]: Error types
//! - `cli`: Menu loop, option parsing and printing for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
