use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing with environment-aware configuration.
///
/// - **Production** (`APP_ENV=production`):
///   - JSON format (for log aggregation tools)
///   - Hides module targets for cleaner logs
///   - Includes ErrorLayer for span trace capture
///
/// - **Development** (default):
///   - Pretty-printed format (human-readable)
///   - Includes ErrorLayer for span trace capture
///
/// Environment variables:
/// - `APP_ENV`: Set to "production" for JSON logs (default: "development")
/// - `RUST_LOG`: Override log levels (e.g., "debug", "domain_tasks=trace")
///
/// # Multiple Calls
///
/// Safe to call multiple times: if tracing is already initialized, the call
/// silently continues (common in tests).
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let result = if is_production {
        // Production: JSON format for log aggregation
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        // Development: pretty format for readability
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!("Tracing initialized. Environment: {:?}", environment);
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
