use tracing_subscriber::{EnvFilter, prelude::*};

pub fn init_logger() {
    let filter_fmt =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_names(true)
        .with_ansi(true)
        .pretty()
        .with_filter(filter_fmt);

    tracing_subscriber::registry().with(fmt_layer).init();
}
