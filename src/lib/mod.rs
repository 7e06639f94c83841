//! Documentation for environment files.
//!
//! This library parses `.env` files whose variables are decorated with
//! EvarDoc comments, rewrites them in a canonical layout, and produces
//! value-free templates that can be committed alongside the code.
//!
//! # EvarDoc comments
//!
//! ```text
//! # description: Port the HTTP server listens on
//! # and the health check probes
//! # type: integer
//! # requirement: optional
//! # default: 8080
//! # example: 3000
//! PORT=8080
//! ```
//!
//! Recognized keys are `description`, `type` (`string`, `integer`, `decimal`,
//! `boolean`), `requirement` (`required`, `optional`), `default` and `example`.
//! Plain comments following a description continue it.
//!
//! # Features
//!
//! - **Issues as data**: every problem is attached to the variable it concerns
//! - **Merging templates**: existing templates keep their order, new variables are appended
//! - **Optional tracing**: Detailed logging when the `tracing` feature is enabled
//!
//! # Example
//!
//! ```rust
//! use evardoc::{format::render_template, parse::ParseResult};
//!
//! let parsed = ParseResult::from("# type: boolean\nDEBUG=true");
//! assert!(parsed.success);
//! assert_eq!(render_template(&parsed.variables, None), "# type: boolean\nDEBUG=\n");
//! ```

pub mod commands;
pub mod comment;
pub mod format;
pub mod fs;
pub mod issue;
pub mod parse;
pub mod report;
pub mod vocab;
