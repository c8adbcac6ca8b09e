//! Remote persistence strategy: hosted tabular record-store API
//!
//! Collections live as tables in a hosted record store addressed by generic
//! list/get/create/update/delete calls. Queries are declarative
//! ([`RecordQuery`]): a field list, filter predicates, and sort clauses.
//! Mutation responses report success per record; the client turns a batch
//! with any failed record into an error.

mod client;
mod config;
mod query;

pub use client::RecordStoreClient;
pub use config::RecordStoreConfig;
pub use query::{FilterClause, FilterOperator, OrderClause, PagingInfo, RecordQuery, SortDirection};
