use std::sync::Once;

use metrics::{Unit, describe_counter};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Counters emitted by the site, with the help text exporters show for them.
const COUNTERS: &[(&str, &str)] = &[
    (
        "snsp_blog_mutations_total",
        "Blog collection writes, labelled by operation.",
    ),
    (
        "snsp_blog_store_fallback_total",
        "Loads that fell back to seed posts because stored data was undecodable.",
    ),
    ("snsp_import_total", "Import attempts, labelled by outcome."),
    (
        "snsp_contact_submissions_total",
        "Contact form submissions, labelled by outcome.",
    ),
];

static DESCRIBED: Once = Once::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the process-wide subscriber. `RUST_LOG` narrows the configured level.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    DESCRIBED.call_once(|| {
        for (name, help) in COUNTERS {
            describe_counter!(*name, Unit::Count, *help);
        }
    });

    let filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(output_layer(logging.format))
        .with(ErrorLayer::default())
        .with(filter)
        .try_init()
        .map_err(|err| InfraError::telemetry(format!("subscriber already installed: {err}")))
}

fn output_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_target(true)
            .boxed(),
    }
}
