//! Structured output: response schemas sent with a request and the decoder
//! that turns replies back into typed values.
//!
//! ```
//! use songcraft_ai::structured::parse_json;
//! use serde_json::Value;
//!
//! let v: Value = parse_json("```json\n{\"ok\": true}\n```").unwrap();
//! assert_eq!(v["ok"], true);
//! ```

pub mod decode;
pub mod schema;

pub use decode::{decode_json, parse_json, response_text, strip_code_fences, truncate_chars};
pub use schema::SchemaGenerator;
