mod authorize;
mod reqwest_client;

pub use authorize::AuthorizeHttpClient;
pub use reqwest_client::ReqwestHttpClient;
