//! Profiling and chart options.

/// Options for the column, table and dataset profilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Number of most frequent values kept in `top_values`.
    pub top_values_limit: usize,
    /// Decimal places kept for correlation coefficients.
    pub correlation_decimals: u8,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            top_values_limit: 5,
            correlation_decimals: 3,
        }
    }
}

impl ProfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_values_limit(mut self, limit: usize) -> Self {
        self.top_values_limit = limit;
        self
    }

    pub fn with_correlation_decimals(mut self, decimals: u8) -> Self {
        self.correlation_decimals = decimals;
        self
    }
}

/// Options for the chart suggester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    /// Cap on suggestions across all tables.
    pub max_charts: usize,
    /// Largest distinct-value count that still gets a bar chart.
    pub max_bar_categories: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            max_charts: 6,
            max_bar_categories: 30,
        }
    }
}

impl ChartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_charts(mut self, max: usize) -> Self {
        self.max_charts = max;
        self
    }

    pub fn with_max_bar_categories(mut self, max: usize) -> Self {
        self.max_bar_categories = max;
        self
    }
}
