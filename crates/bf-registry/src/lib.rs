pub mod client;
pub mod error;
pub mod keywords;
pub mod parse;

pub use client::{BizinfoClient, FetchParams};
pub use error::RegistryError;
pub use keywords::build_search_keywords;
