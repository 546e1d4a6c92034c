pub mod query;
pub mod reconcile;
pub mod sources;
pub mod store;
pub mod sync;
pub mod timeview;
pub mod types;
