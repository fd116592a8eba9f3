//! Chat backends: where the widget's answers come from.

pub mod http;
pub mod local;
pub mod traits;

use std::sync::Arc;
use tracing::info;

pub use http::HttpBackend;
pub use local::LocalBackend;
pub use traits::ChatBackend;

use crate::config::WidgetConfig;
use crate::error::AppError;

/// Picks the HTTP backend when a URL is configured, the local one otherwise.
pub fn from_config(config: &WidgetConfig) -> Result<Arc<dyn ChatBackend>, AppError> {
    match &config.backend_url {
        Some(url) => {
            let backend = HttpBackend::new(url, config.request_timeout())?;
            info!("Using remote chatbot at {}", backend.endpoint());
            Ok(Arc::new(backend))
        }
        None => {
            info!("Using local stroke knowledge base");
            Ok(Arc::new(LocalBackend::default()))
        }
    }
}
