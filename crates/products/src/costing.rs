//! Restock costing: weighted-average unit cost and margin-based sale price.
//!
//! All arithmetic runs on exact decimals and is rounded half-up to the cent
//! only at the end of each step, so repeated restocks do not drift.

use rust_decimal::Decimal;

use stockroom_core::Money;

/// Markup applied on top of the average unit cost (25%).
pub const PROFIT_MARGIN: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Outcome of receiving `quantity` units at a new unit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restock {
    pub stock_quantity: u32,
    pub average_cost: Money,
    pub sale_price: Money,
}

/// Which part of a restock fell outside the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestockOverflow {
    /// The new stock level does not fit the stock counter.
    Stock,
    /// The cost arithmetic exceeds what a `Decimal` can hold.
    Cost,
}

impl Restock {
    /// Blend the incoming units into the current stock.
    ///
    /// A missing prior cost counts as zero. `quantity` must be non-zero.
    pub fn compute(
        prior_stock: u32,
        prior_cost: Option<Money>,
        quantity: u32,
        unit_cost: Decimal,
    ) -> Result<Self, RestockOverflow> {
        let stock_quantity = prior_stock
            .checked_add(quantity)
            .ok_or(RestockOverflow::Stock)?;

        let prior_value = prior_cost
            .unwrap_or(Money::ZERO)
            .amount()
            .checked_mul(Decimal::from(prior_stock));
        let incoming_value = unit_cost.checked_mul(Decimal::from(quantity));
        let average = prior_value
            .zip(incoming_value)
            .and_then(|(prior, incoming)| prior.checked_add(incoming))
            .and_then(|total| total.checked_div(Decimal::from(stock_quantity)))
            .ok_or(RestockOverflow::Cost)?;

        let average_cost = Money::new(average);
        Ok(Self {
            stock_quantity,
            average_cost,
            sale_price: sale_price_for(average_cost).ok_or(RestockOverflow::Cost)?,
        })
    }
}

/// Sale price derived from a unit cost at the fixed margin; `None` on overflow.
pub fn sale_price_for(cost: Money) -> Option<Money> {
    cost.amount()
        .checked_mul(Decimal::ONE + PROFIT_MARGIN)
        .map(Money::new)
}
