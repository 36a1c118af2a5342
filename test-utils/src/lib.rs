//! ClubHub Test Utils
//!
//! Provides shared testing utilities for the ClubHub client. The client talks to a REST backend,
//! so tests run it against an `httpmock` server instead of a real API. This crate offers a
//! builder pattern for creating test contexts holding the mock server and an optional stored
//! session, plus JSON fixtures shaped like the backend's responses.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the mock server and seeded credentials
//! - **fixture**: Default backend payloads with builders for overriding fields
//! - **factory**: Payloads with unique ids for tests that need several distinct records
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn lists_clubs() {
//!     let test = TestBuilder::new()
//!         .with_session("abc123", fixture::user::json())
//!         .build()
//!         .await;
//!
//!     test.server
//!         .mock_async(|when, then| {
//!             when.method(httpmock::Method::GET).path("/api/clubs/");
//!             then.status(200).json_body(serde_json::json!([fixture::club::json()]));
//!         })
//!         .await;
//!
//!     // Point the client at test.base_url()...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;
pub mod fixture;
