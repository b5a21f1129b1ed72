//! Supplier invocation with synthetic fallback.

use dataide_model::DatasetPayload;
use dataide_profile::{
    ChartOptions, ProfileOptions, compute_profile_with_options, suggest_charts_with_options,
};
use tracing::{info, info_span, warn};

use crate::supplier::DatasetSupplier;
use crate::synthetic::{DEFAULT_SEED, synthetic_payload};

/// Options for [`generate_payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Seed for the synthetic fallback.
    pub seed: u64,
    /// Compute the profiling summary when the payload has none.
    pub fill_missing_profile: bool,
    /// Suggest charts when the payload has none.
    pub fill_missing_charts: bool,
    pub profile: ProfileOptions,
    pub charts: ChartOptions,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            fill_missing_profile: true,
            fill_missing_charts: true,
            profile: ProfileOptions::default(),
            charts: ChartOptions::default(),
        }
    }
}

impl GenerateOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fill_missing_profile(mut self, fill: bool) -> Self {
        self.fill_missing_profile = fill;
        self
    }

    pub fn with_fill_missing_charts(mut self, fill: bool) -> Self {
        self.fill_missing_charts = fill;
        self
    }

    pub fn with_profile_options(mut self, profile: ProfileOptions) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_chart_options(mut self, charts: ChartOptions) -> Self {
        self.charts = charts;
        self
    }
}

/// Asks `supplier` for a payload, falling back to the synthetic dataset.
///
/// Never fails. On any supplier error the synthetic payload for
/// `options.seed` is used and a `"Fallback used: {error}"` caveat is
/// appended. Missing profiling and chart suggestions are then filled in.
pub fn generate_payload(
    supplier: &dyn DatasetSupplier,
    prompt: &str,
    options: &GenerateOptions,
) -> DatasetPayload {
    let span = info_span!("generate_payload", supplier = supplier.name());
    let _guard = span.enter();

    let mut payload = match supplier.supply(prompt) {
        Ok(payload) => {
            info!(tables = payload.sample_rows.len(), "supplier produced payload");
            payload
        }
        Err(error) => {
            warn!(%error, seed = options.seed, "supplier failed, using synthetic fallback");
            let mut payload = synthetic_payload(prompt, options.seed);
            payload.push_caveat(format!("Fallback used: {error}"));
            payload
        }
    };

    if options.fill_missing_profile && payload.profiling_summary.is_empty() {
        payload.profiling_summary =
            compute_profile_with_options(&payload.sample_rows, &payload.tables, &options.profile);
        info!(tables = payload.profiling_summary.len(), "filled profiling summary");
    }
    if options.fill_missing_charts && payload.suggested_charts.is_empty() {
        payload.suggested_charts = suggest_charts_with_options(&payload.sample_rows, &options.charts);
        info!(charts = payload.suggested_charts.len(), "filled chart suggestions");
    }
    payload
}
