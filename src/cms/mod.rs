pub mod client;
pub mod traits;
pub mod types;

pub use client::WpClient;
pub use traits::CmsApi;
