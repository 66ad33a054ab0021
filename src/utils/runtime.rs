use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Single-threaded tokio runtime driving the warehouse and Slack clients.
/// The report never runs two stages at once, so one thread is enough.
pub static GLOBAL_RUNTIME: Lazy<Arc<Runtime>> = Lazy::new(|| {
    Arc::new(
        Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime"),
    )
});

/// Execute an async function using the global runtime
pub fn block_on<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    GLOBAL_RUNTIME.block_on(future)
}
