use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, Money, ProductId};

/// Product status lifecycle.
///
/// Any status may be requested directly; stock operations move between
/// `Active` and `Depleted` as a side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Depleted,
}

impl ProductStatus {
    /// Wire names of every status, in declaration order.
    pub const NAMES: &'static [&'static str] = &["Active", "Inactive", "Depleted"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Depleted => "Depleted",
        }
    }

    /// Status a product must hold once its stock settles at `stock_quantity`.
    ///
    /// Zero stock forces `Depleted`. With stock on hand an `Inactive` product
    /// stays inactive; anything else becomes `Active`.
    pub fn for_stock(self, stock_quantity: u32) -> Self {
        if stock_quantity == 0 {
            ProductStatus::Depleted
        } else if self == ProductStatus::Inactive {
            ProductStatus::Inactive
        } else {
            ProductStatus::Active
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    /// Surrounding whitespace is ignored; matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(DomainError::validation("status", "is required")),
            "Active" => Ok(ProductStatus::Active),
            "Inactive" => Ok(ProductStatus::Inactive),
            "Depleted" => Ok(ProductStatus::Depleted),
            _ => Err(DomainError::invalid_state(Self::NAMES)),
        }
    }
}

/// Stored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub(crate) id: ProductId,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) sale_price: Money,
    pub(crate) purchase_cost: Option<Money>,
    pub(crate) stock_quantity: u32,
    pub(crate) status: ProductStatus,
    pub(crate) version: u64,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn sale_price(&self) -> Money {
        self.sale_price
    }

    /// Unit cost; `None` until the product is first restocked with a cost.
    pub fn purchase_cost(&self) -> Option<Money> {
        self.purchase_cost
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }
}

impl Entity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;

    const RESOURCE: &'static str = "product";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            sale_price: draft.sale_price,
            purchase_cost: draft.purchase_cost,
            stock_quantity: draft.stock_quantity,
            status: draft.status,
            version: 0,
        }
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

/// Validated, not-yet-stored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub sale_price: Money,
    pub purchase_cost: Option<Money>,
    pub stock_quantity: u32,
    pub status: ProductStatus,
}

/// Caller-supplied fields for product creation.
///
/// Everything is optional at this level; presence and range checks happen in
/// [`crate::ProductManager::create`] so failures carry the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sale_price: Option<Decimal>,
    pub purchase_cost: Option<Decimal>,
    pub stock_quantity: Option<i64>,
    pub status: Option<String>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, sale_price: Decimal, stock_quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            sale_price: Some(sale_price),
            stock_quantity: Some(stock_quantity),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_purchase_cost(mut self, cost: Decimal) -> Self {
        self.purchase_cost = Some(cost);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
