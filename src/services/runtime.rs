//! Tokio Runtime Bridge
//!
//! GPUI drives the UI on its own executor, but reqwest needs a tokio reactor.
//! This module runs tokio futures from GPUI tasks and hands the result back.
//!
//! ## Pattern
//!
//! ```text
//! cx.spawn(async move |this, cx| { ... })
//!       │
//!       ▼
//! run_in_tokio(data_source.get_rows(params))
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result applied back on the UI thread
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("rest-grid-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// Every HTTP call made on behalf of the UI goes through here.
///
/// # Example
///
/// ```ignore
/// let page = run_in_tokio(async move {
///     data_source.get_rows(params).await
/// }).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_in_tokio_returns_the_value() {
        let value = run_in_tokio(async { 21 * 2 }).await;
        assert_eq!(value, 42);
    }
}
