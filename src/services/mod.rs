//! Background services
//!
//! - fetch: Snapshot fetch worker (requests in, sequenced responses out)

pub mod fetch;
