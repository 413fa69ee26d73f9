//! Plain-language policy explanation.

use inventory_spi::{InventoryPolicy, PolicyParameters};

/// Describe what `policy` protects against and the costs it assumes.
pub fn explain(policy: &InventoryPolicy, params: &PolicyParameters) -> String {
    format!(
        "This policy is designed to achieve a {}% service level, protecting against stockouts \
         during the {}-week lead time. It assumes an item cost of ${}, a holding cost of {}% \
         (or ${} per unit/year), and an ordering cost of ${}.",
        params.service_level_pct,
        params.lead_time,
        params.unit_cost,
        params.holding_cost_pct,
        policy.annual_holding_cost,
        params.ordering_cost,
    )
}
