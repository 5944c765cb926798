pub mod allocator;
pub mod balance;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod money;
pub mod settle;
pub mod summary;
