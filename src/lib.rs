pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;
pub mod screen;
pub mod search;
pub mod store;

pub use error::{PhonebookError, Result};
pub use models::ContactRecord;
pub use search::search;
