//! Invoice details recorded when a dispatcher finalizes a task.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Finalization details recorded once, at invoicing.
///
/// Present on a task only once it reaches `invoiced`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Purchase-order number.
    pub po_number: String,
    /// Load detail description.
    pub load_detail: String,
    /// Pickup date.
    pub pickup_date: NaiveDate,
    /// Delivery date.
    pub delivery_date: NaiveDate,
    /// Agreed rate.
    pub rate: f64,
    /// Broker detail description.
    pub broker_detail: String,
    /// Load status label.
    pub load_status: String,
    /// Invoiced amount.
    pub invoice_amount: f64,
    /// Invoice date.
    pub invoice_date: NaiveDate,
}
