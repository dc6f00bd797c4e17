//! File-backed infrastructure: list sources and the audit log

pub mod access_list;
pub mod audit_log;

pub use access_list::{AccessList, ListFormat};
pub use audit_log::AuditLog;
