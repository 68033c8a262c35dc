use core_types::Assumptions;
use rust_decimal::Decimal;

/// Per-run overrides for the projection assumptions.
///
/// With the `clap` feature enabled these become global command-line flags.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct AssumptionOverrides {
    /// Conversion uplift applied by the engagement (default 2.5).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub conversion_multiplier: Option<Decimal>,

    /// Factor applied to the acquisition cost (default 0.65).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub cac_multiplier: Option<Decimal>,

    /// Engagement investment in rupees (default 300000).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub investment: Option<Decimal>,

    /// Youth conversion benchmark in percent (default 4).
    #[cfg_attr(feature = "clap", arg(long, global = true))]
    pub youth_benchmark: Option<Decimal>,
}

impl AssumptionOverrides {
    /// Writes every override that was supplied over `assumptions`.
    pub fn apply_to(&self, assumptions: &mut Assumptions) {
        if let Some(v) = self.conversion_multiplier {
            assumptions.conversion_multiplier = v;
        }
        if let Some(v) = self.cac_multiplier {
            assumptions.cac_multiplier = v;
        }
        if let Some(v) = self.investment {
            assumptions.investment = v;
        }
        if let Some(v) = self.youth_benchmark {
            assumptions.youth_benchmark_conversion_pct = v;
        }
    }
}
