//! Log subscriber setup.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber for as long as the returned guard lives.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level for the
/// greynoise crates (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn init(verbosity: u8) -> DefaultGuard {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,greynoise_core={level},greynoise_client={level},greynoise_cli={level}"
        ))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
