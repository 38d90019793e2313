//! Path Expansion Comprehensive Test Suite
//!
//! End-to-end tests driven through the options-record layer over a small
//! movie/actor graph (`fixtures/movies.json`).
//!
//! ## Test Groups
//!
//! - **scenarios**: recorded behaviours the engine must reproduce exactly
//! - **filters**: label and node filters, aliases, start-node handling
//! - **shapes**: subgraph family, spanning trees, limits and ordering
//! - **errors**: configuration errors and cancellation
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test expand_comprehensive
//! ```

mod test_utils;

mod errors;
mod filters;
mod scenarios;
mod shapes;
