//! zerohunger adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `auth_http`: HTTP adapter for the collaborator's token auth API
//! - `records_http`: HTTP adapter for the collaborator's record collections
//! - `storage_http`: HTTP adapter for the collaborator's blob storage
//! - `session_fs`: Filesystem session cache
//! - `stubs`: In-memory/stub implementations for tests and offline use

mod auth_http;
mod records_http;
mod session_fs;
mod storage_http;

pub mod stubs;

pub use auth_http::HttpAuthGateway;
pub use records_http::HttpRecordStore;
pub use session_fs::FsSessionStore;
pub use storage_http::HttpBlobStore;
