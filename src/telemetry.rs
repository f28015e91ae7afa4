//! Tracing setup
//!
//! Console output is always on (pretty or json). Spans are additionally
//! exported over OTLP/HTTP when `logging.otlp_endpoint` is configured.

use std::sync::OnceLock;

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider;
use opentelemetry::{KeyValue, global};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

const SERVICE_NAME: &str = "cityguide";

static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let fmt_layer = if config.format == "json" {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().pretty().boxed()
    };

    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            let (tracer, provider) = build_otlp_tracer_provider(endpoint)?;
            global::set_tracer_provider(provider.clone());
            let _ = TRACER_PROVIDER.set(provider);
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .with_context(|| "Failed to install tracing subscriber")?;

    if let Some(endpoint) = &config.otlp_endpoint {
        tracing::info!(otlp.endpoint = %endpoint, "OTLP span export enabled");
    }

    Ok(())
}

fn build_otlp_tracer_provider(endpoint: &str) -> Result<(SdkTracer, SdkTracerProvider)> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_endpoint(endpoint.to_string())
        .build()
        .with_context(|| format!("Failed to build OTLP exporter for {endpoint}"))?;

    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", SERVICE_NAME),
            KeyValue::new("service.version", crate::VERSION),
        ])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    Ok((tracer, provider))
}

/// Flush and stop span export, if it was enabled
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Failed to shut down tracer provider: {e}");
        }
    }
}
