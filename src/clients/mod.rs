pub mod content_client;
pub mod http_client;

pub use content_client::ContentClient;
pub use http_client::{build_url, HttpClient, HttpResponse};
