//! Resource record schemas consumed by the CRUD screens.
//!
//! These are the wire shapes of the backend's list/record payloads,
//! normalized once here (camelCase names, phone alias, optional fields
//! that tolerate omission) so every screen reads the same types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    ContactInfo, InvoiceId, LandlordId, LeaseId, PaymentId, PropertyId, TenantId, TicketId,
    UnitId,
};

/// A tenant (renter) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub full_name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub unit_id: Option<UnitId>,
}

/// A landlord record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    pub id: LandlordId,
    pub full_name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
}

/// A managed property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    pub landlord_id: LandlordId,
    #[serde(default)]
    pub unit_count: Option<u32>,
}

/// Occupancy state of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitOccupancy {
    Vacant,
    Occupied,
}

/// A rentable unit within a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    pub property_id: PropertyId,
    pub label: String,
    pub occupancy: UnitOccupancy,
    /// Asking rent in minor currency units (cents).
    #[serde(default)]
    pub rent_amount: Option<i64>,
}

/// Lease lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    Active,
    Terminated,
    Expired,
}

/// A lease binding a tenant to a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: LeaseId,
    pub tenant_id: TenantId,
    pub unit_id: UnitId,
    pub status: LeaseStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Monthly rent in minor currency units (cents).
    pub monthly_rent: i64,
}

/// Invoice settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

/// A rent or service invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub lease_id: LeaseId,
    pub status: InvoiceStatus,
    /// Amount due in minor currency units (cents).
    pub amount_due: i64,
    pub due_date: NaiveDate,
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Card,
}

/// A recorded payment against an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub invoice_id: InvoiceId,
    pub method: PaymentMethod,
    /// Amount paid in minor currency units (cents).
    pub amount: i64,
    pub paid_at: DateTime<Utc>,
}

/// Maintenance ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

/// Maintenance ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

/// A maintenance ticket raised against a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    pub id: TicketId,
    pub unit_id: UnitId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub opened_at: DateTime<Utc>,
}
