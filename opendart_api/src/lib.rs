mod client;
mod errors;
mod feed;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::feed::parse_corp_index;
pub use self::query::DisclosureQuery;
