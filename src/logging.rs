cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn init(_level: &str) {
            console_error_panic_hook::set_once();
        }
    } else {
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        /// `RUST_LOG` wins over `level`. `log` records are forwarded into the subscriber.
        pub fn init(level: &str) {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

            let result = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_timer(fmt::time::uptime()))
                .try_init();

            if let Err(err) = result {
                eprintln!("Logging already initialized: {}", err);
            }
        }
    }
}
