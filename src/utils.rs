/// Strip everything but ASCII digits from a phone number.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(feature = "gui")]
mod runtime {
    use glib::MainContext;
    use once_cell::sync::Lazy;

    pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime")
    });

    pub fn spawn_async<F>(fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        RUNTIME.spawn(fut);
    }

    pub fn glib_channel<T: Send + 'static>() -> (glib::Sender<T>, glib::Receiver<T>) {
        MainContext::channel(glib::Priority::default())
    }

    /// Run `fut` on the tokio runtime and deliver its result on the GTK main loop.
    pub fn run_async_to_main<T, E, Fut>(fut: Fut) -> glib::Receiver<Result<T, E>>
    where
        T: Send + 'static,
        E: Send + 'static,
        Fut: std::future::Future<Output = Result<T, E>> + Send + 'static,
    {
        let (tx, rx) = glib_channel::<Result<T, E>>();
        spawn_async(async move {
            let res = fut.await;
            let _ = tx.send(res);
        });
        rx
    }
}

#[cfg(feature = "gui")]
pub use runtime::*;
