//! Utility modules: shared HTTP client and page-source list parsing.

mod http;
mod urls;

pub use http::HttpClient;
pub use urls::read_url_list;
