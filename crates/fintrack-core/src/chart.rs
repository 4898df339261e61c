//! Chart collaborator interface.
//!
//! The ledger only computes the `category -> total expense` aggregate; how it
//! is drawn (terminal bars, an image, nothing at all) is up to the implementor.

use crate::error::Result;
use crate::report::CategoryTotals;

/// Renders a spending-by-category aggregate.
pub trait SpendingChart {
    /// Render the aggregate. An empty map means there are no expenses.
    fn render(&mut self, totals: &CategoryTotals) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        struct Nothing;
        impl SpendingChart for Nothing {
            fn render(&mut self, _totals: &CategoryTotals) -> Result<()> {
                Ok(())
            }
        }
        let mut chart: Box<dyn SpendingChart> = Box::new(Nothing);
        assert!(chart.render(&CategoryTotals::new()).is_ok());
    }
}
