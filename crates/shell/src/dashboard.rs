//! Dashboard selection and summary view-models.

use serde::Serialize;

use propkit_core::{
    Invoice, InvoiceStatus, MaintenanceTicket, Property, Role, TicketStatus, Unit, UnitOccupancy,
};

/// Which dashboard a role gets. A two-way branch, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    /// Fleet-wide financial/occupancy summary.
    Admin,
    /// Operational task list.
    Staff,
}

impl DashboardVariant {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => DashboardVariant::Admin,
            Role::Staff => DashboardVariant::Staff,
        }
    }
}

/// Fleet-wide summary rendered on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_properties: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    /// Sum of unsettled invoice amounts, minor currency units.
    pub outstanding_receivables: i64,
}

impl AdminSummary {
    /// Pure aggregation over already-fetched collections.
    pub fn compute(properties: &[Property], units: &[Unit], invoices: &[Invoice]) -> Self {
        let occupied_units = units
            .iter()
            .filter(|u| u.occupancy == UnitOccupancy::Occupied)
            .count();

        let outstanding_receivables = invoices
            .iter()
            .filter(|i| matches!(i.status, InvoiceStatus::Pending | InvoiceStatus::Overdue))
            .map(|i| i.amount_due)
            .sum();

        Self {
            total_properties: properties.len(),
            total_units: units.len(),
            occupied_units,
            outstanding_receivables,
        }
    }

    /// Occupied share of all units, 0.0 when there are no units.
    pub fn occupancy_rate(&self) -> f64 {
        if self.total_units == 0 {
            0.0
        } else {
            self.occupied_units as f64 / self.total_units as f64
        }
    }
}

/// Operational task list rendered on the staff dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffWorklist {
    /// Unresolved tickets, highest priority first, oldest first within
    /// a priority.
    pub open_tickets: Vec<MaintenanceTicket>,
    pub overdue_invoices: usize,
}

impl StaffWorklist {
    pub fn compute(tickets: &[MaintenanceTicket], invoices: &[Invoice]) -> Self {
        let mut open_tickets: Vec<MaintenanceTicket> = tickets
            .iter()
            .filter(|t| t.status != TicketStatus::Resolved)
            .cloned()
            .collect();
        open_tickets.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.opened_at.cmp(&b.opened_at))
        });

        let overdue_invoices = invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Overdue)
            .count();

        Self {
            open_tickets,
            overdue_invoices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use propkit_core::{
        InvoiceId, LeaseId, TicketId, TicketPriority, UnitId,
    };

    #[test]
    fn variant_follows_role() {
        assert_eq!(DashboardVariant::for_role(Role::Admin), DashboardVariant::Admin);
        assert_eq!(DashboardVariant::for_role(Role::Staff), DashboardVariant::Staff);
    }

    fn invoice(status: InvoiceStatus, amount_due: i64) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            lease_id: LeaseId::new(),
            status,
            amount_due,
            due_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        }
    }

    fn ticket(priority: TicketPriority, status: TicketStatus, day: u32) -> MaintenanceTicket {
        MaintenanceTicket {
            id: TicketId::new(),
            unit_id: UnitId::new(),
            title: "Leaking geyser".to_string(),
            description: None,
            priority,
            status,
            opened_at: Utc.with_ymd_and_hms(2026, 8, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn admin_summary_counts_unsettled_invoices_only() {
        let invoices = vec![
            invoice(InvoiceStatus::Pending, 1000),
            invoice(InvoiceStatus::Overdue, 250),
            invoice(InvoiceStatus::Paid, 9999),
        ];

        let summary = AdminSummary::compute(&[], &[], &invoices);
        assert_eq!(summary.outstanding_receivables, 1250);
    }

    #[test]
    fn occupancy_rate_handles_an_empty_fleet() {
        let summary = AdminSummary::compute(&[], &[], &[]);
        assert_eq!(summary.occupancy_rate(), 0.0);
    }

    #[test]
    fn worklist_excludes_resolved_and_orders_by_priority_then_age() {
        let tickets = vec![
            ticket(TicketPriority::Low, TicketStatus::Open, 3),
            ticket(TicketPriority::High, TicketStatus::InProgress, 5),
            ticket(TicketPriority::High, TicketStatus::Open, 2),
            ticket(TicketPriority::Medium, TicketStatus::Resolved, 1),
        ];

        let worklist = StaffWorklist::compute(&tickets, &[]);
        let priorities: Vec<_> = worklist.open_tickets.iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            vec![TicketPriority::High, TicketPriority::High, TicketPriority::Low]
        );
        // Oldest of the two high-priority tickets comes first.
        assert!(worklist.open_tickets[0].opened_at < worklist.open_tickets[1].opened_at);
    }
}
