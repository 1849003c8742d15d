use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::costing::{Restock, RestockOverflow};
use crate::product::{Product, ProductDraft, ProductInput, ProductStatus};
use crate::repository::ProductRepository;

/// Product use cases over an injected repository.
///
/// Every operation is a single read-modify-write against the repository. The
/// manager keeps no state of its own; concurrent writers to the same product
/// are arbitrated by the repository's version check.
#[derive(Debug, Clone)]
pub struct ProductManager<R> {
    repository: R,
}

impl<R> ProductManager<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and store a new product.
    ///
    /// Status defaults to `Active` and is then settled against the initial
    /// stock (zero stock means `Depleted`).
    pub fn create(&self, input: ProductInput) -> DomainResult<Product> {
        let name = match input.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(DomainError::validation("name", "is required")),
        };

        let stock_quantity = match input.stock_quantity {
            Some(quantity) if quantity >= 0 => u32::try_from(quantity)
                .map_err(|_| DomainError::validation("stock_quantity", "exceeds the maximum stock level"))?,
            _ => {
                return Err(DomainError::validation(
                    "stock_quantity",
                    "must be greater than or equal to 0",
                ));
            }
        };

        let sale_price = input
            .sale_price
            .map(Money::new)
            .filter(Money::is_positive)
            .ok_or_else(|| DomainError::validation("sale_price", "must be greater than 0"))?;

        let purchase_cost = match input.purchase_cost.map(Money::new) {
            Some(cost) if cost.is_negative() => {
                return Err(DomainError::validation(
                    "purchase_cost",
                    "must be greater than or equal to 0",
                ));
            }
            cost => cost,
        };

        let requested = match input.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<ProductStatus>()?,
            _ => ProductStatus::default(),
        };

        let product = self.repository.insert(ProductDraft {
            name,
            description: input.description,
            sale_price,
            purchase_cost,
            stock_quantity,
            status: requested.for_stock(stock_quantity),
        })?;
        tracing::info!(
            product_id = %product.id(),
            stock_quantity = product.stock_quantity(),
            status = %product.status(),
            "product created"
        );
        Ok(product)
    }

    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.repository
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(Product::RESOURCE, id))
    }

    pub fn list_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.repository.find_all()?)
    }

    pub fn list_by_status(&self, status: &str) -> DomainResult<Vec<Product>> {
        let status: ProductStatus = status.parse()?;
        Ok(self.repository.find_by_status(status)?)
    }

    /// Products with stock strictly below `threshold`.
    pub fn list_low_stock(&self, threshold: i64) -> DomainResult<Vec<Product>> {
        let threshold = u64::try_from(threshold)
            .map_err(|_| DomainError::validation("threshold", "must be greater than or equal to 0"))?;
        Ok(self.repository.find_with_stock_below(threshold)?)
    }

    /// Set the status explicitly. Requesting the current status is rejected;
    /// moving to `Depleted` empties the stock.
    pub fn change_status(&self, id: ProductId, requested: &str) -> DomainResult<Product> {
        let mut product = self.get_by_id(id)?;
        let requested: ProductStatus = requested.parse()?;

        if product.status == requested {
            tracing::debug!(product_id = %id, status = %requested, "status change rejected: no-op transition");
            return Err(DomainError::invalid_transition(product.status, requested));
        }

        let previous = product.status;
        product.status = requested;
        if requested == ProductStatus::Depleted {
            product.stock_quantity = 0;
        }

        let product = self.repository.update(product)?;
        tracing::info!(product_id = %id, from = %previous, to = %requested, "product status changed");
        Ok(product)
    }

    /// Receive `quantity` units bought at `unit_cost`.
    ///
    /// Re-averages the purchase cost, re-derives the sale price at the fixed
    /// margin and always reactivates the product, including an `Inactive` one.
    pub fn increase_stock(
        &self,
        id: ProductId,
        quantity: i64,
        unit_cost: Decimal,
    ) -> DomainResult<Product> {
        let mut product = self.get_by_id(id)?;

        if quantity <= 0 {
            return Err(DomainError::validation("quantity", "must be greater than 0"));
        }
        if unit_cost <= Decimal::ZERO {
            return Err(DomainError::validation("unit_cost", "must be greater than 0"));
        }

        let too_many = || DomainError::validation("quantity", "exceeds the maximum stock level");
        let quantity_units = u32::try_from(quantity).map_err(|_| too_many())?;
        let restock = Restock::compute(
            product.stock_quantity,
            product.purchase_cost,
            quantity_units,
            unit_cost,
        )
        .map_err(|overflow| match overflow {
            RestockOverflow::Stock => too_many(),
            RestockOverflow::Cost => DomainError::validation("unit_cost", "is too large"),
        })?;

        product.stock_quantity = restock.stock_quantity;
        product.purchase_cost = Some(restock.average_cost);
        product.sale_price = restock.sale_price;
        product.status = ProductStatus::Active;

        let product = self.repository.update(product)?;
        tracing::info!(
            product_id = %id,
            quantity,
            stock_quantity = product.stock_quantity(),
            average_cost = %restock.average_cost,
            sale_price = %restock.sale_price,
            "stock increased"
        );
        Ok(product)
    }

    /// Remove `quantity` units. All or nothing: asking for more than is on
    /// hand fails without touching the product.
    pub fn decrease_stock(&self, id: ProductId, quantity: i64) -> DomainResult<Product> {
        let mut product = self.get_by_id(id)?;

        let requested = match u64::try_from(quantity) {
            Ok(requested) if requested > 0 => requested,
            _ => return Err(DomainError::validation("quantity", "must be greater than 0")),
        };

        let available = u64::from(product.stock_quantity);
        if requested > available {
            tracing::debug!(product_id = %id, available, requested, "stock decrease rejected");
            return Err(DomainError::insufficient_stock(available, requested));
        }

        // requested <= available, which fits in u32
        product.stock_quantity -= requested as u32;
        product.status = product.status.for_stock(product.stock_quantity);

        let product = self.repository.update(product)?;
        tracing::info!(
            product_id = %id,
            quantity,
            stock_quantity = product.stock_quantity(),
            status = %product.status(),
            "stock decreased"
        );
        Ok(product)
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        let product = self.get_by_id(id)?;
        self.repository.delete(&product)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}
