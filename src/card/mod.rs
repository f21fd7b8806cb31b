//! The add-card flow: card details, then billing address.
//!
//! The billing address step carries the card details collected before it,
//! so a billing step without card data cannot be constructed.

mod data;
mod flow;

pub use data::{CardData, CardDataError};
pub use flow::AddCardFlow;

use crate::core::Step;
use serde::{Deserialize, Serialize};

/// Stages of the add-card flow
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum AddCardStep {
    /// Card details screen
    CardDetails,

    /// Billing address screen, for the card entered on the previous screen
    BillingAddress(CardData),

    Inactive,
}

impl Step for AddCardStep {
    fn name(&self) -> &str {
        match self {
            Self::CardDetails => "CardDetails",
            Self::BillingAddress(_) => "BillingAddress",
            Self::Inactive => "Inactive",
        }
    }

    fn inactive() -> Self {
        Self::Inactive
    }

    fn is_inactive(&self) -> bool {
        matches!(self, Self::Inactive)
    }
}

impl AddCardStep {
    /// Card data carried by this step, if any.
    pub fn card_data(&self) -> Option<&CardData> {
        match self {
            Self::BillingAddress(data) => Some(data),
            _ => None,
        }
    }
}
