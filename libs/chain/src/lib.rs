pub mod error;
pub mod explorer;
pub mod query;
pub mod response;
pub mod transfer;
