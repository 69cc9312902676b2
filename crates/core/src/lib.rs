//! `propkit-core` — domain foundation building blocks.
//!
//! This crate contains the **pure data model** shared by the session,
//! client and shell layers (no IO, no HTTP concerns).

pub mod contact;
pub mod error;
pub mod id;
pub mod records;
pub mod role;
pub mod user;

pub use contact::ContactInfo;
pub use error::{DomainError, DomainResult};
pub use id::{
    InvoiceId, LandlordId, LeaseId, PaymentId, PropertyId, TenantId, TicketId, UnitId, UserId,
};
pub use records::{
    Invoice, InvoiceStatus, Landlord, Lease, LeaseStatus, MaintenanceTicket, Payment,
    PaymentMethod, Property, Tenant, TicketPriority, TicketStatus, Unit, UnitOccupancy,
};
pub use role::Role;
pub use user::{UserProfile, UserStatus};
