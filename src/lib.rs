//! ai-cz - AI-assisted conventional commits.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── commit        # Default flow: diff → suggestions → commit
//! │   ├── token         # API key management menu
//! │   ├── prompt        # Interactive prompts (dialoguer)
//! │   └── output        # Colored terminal output
//! └── core/             # Core library components
//!     ├── cipher/       # Key derivation, AES-256-CBC, envelope format
//!     ├── store/        # Encrypted token storage
//!     ├── suggest/      # Prompt, service call, response sanitizing
//!     ├── commit_type   # Commit type catalog and message formatting
//!     ├── git           # git binary wrapper
//!     └── config        # Environment-derived settings
//! ```

pub mod cli;
pub mod core;
pub mod error;
