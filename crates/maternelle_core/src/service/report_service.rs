//! Mock financial and service statistics.
//!
//! # Responsibility
//! - Expose the fixed service catalog and finance breakdowns the dashboard
//!   renders.
//! - Compute the derived figures (revenue, totals, net, shares) from them.
//!
//! # Invariants
//! - All base figures are hard-coded demo data; only aggregation is logic.
//! - Totals are always computed from the breakdowns, never stored alongside
//!   them where they could drift.

/// One paid service offered by the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub name: &'static str,
    pub description: &'static str,
    pub cost_eur: u32,
    pub time_slot: &'static str,
    pub participants: u32,
    pub category: &'static str,
}

impl ServiceOffering {
    /// Revenue this service brings in: cost times participants.
    pub fn revenue_eur(&self) -> u32 {
        self.cost_eur * self.participants
    }
}

const SERVICE_CATALOG: &[ServiceOffering] = &[
    ServiceOffering {
        name: "Morning care",
        description: "Drop-off from 7:30",
        cost_eur: 15,
        time_slot: "7:30 - 8:30",
        participants: 45,
        category: "Care",
    },
    ServiceOffering {
        name: "Evening care",
        description: "Supervision until 18:30",
        cost_eur: 20,
        time_slot: "16:30 - 18:30",
        participants: 38,
        category: "Care",
    },
    ServiceOffering {
        name: "Canteen lunch",
        description: "Balanced meals prepared on site",
        cost_eur: 12,
        time_slot: "12:00 - 13:30",
        participants: 89,
        category: "Catering",
    },
    ServiceOffering {
        name: "After-school activities",
        description: "Arts, music, sport",
        cost_eur: 25,
        time_slot: "15:00 - 16:00",
        participants: 32,
        category: "Activities",
    },
];

/// The fixed service catalog, in display order.
pub fn service_catalog() -> &'static [ServiceOffering] {
    SERVICE_CATALOG
}

/// Total revenue across the catalog.
pub fn catalog_revenue_eur() -> u32 {
    SERVICE_CATALOG
        .iter()
        .map(ServiceOffering::revenue_eur)
        .sum()
}

/// One line of an income or expense breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAmount {
    pub category: &'static str,
    pub amount_eur: u32,
}

const INCOME_BREAKDOWN: &[CategoryAmount] = &[
    CategoryAmount {
        category: "Tuition fees",
        amount_eur: 12_500,
    },
    CategoryAmount {
        category: "Extra services",
        amount_eur: 3_200,
    },
    CategoryAmount {
        category: "Meals",
        amount_eur: 2_100,
    },
    CategoryAmount {
        category: "Activities",
        amount_eur: 740,
    },
];

const EXPENSE_BREAKDOWN: &[CategoryAmount] = &[
    CategoryAmount {
        category: "Salaries",
        amount_eur: 7_500,
    },
    CategoryAmount {
        category: "Supplies",
        amount_eur: 1_800,
    },
    CategoryAmount {
        category: "Maintenance",
        amount_eur: 1_200,
    },
    CategoryAmount {
        category: "Food",
        amount_eur: 1_000,
    },
    CategoryAmount {
        category: "Other",
        amount_eur: 800,
    },
];

/// Aggregated finance view for the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinanceReport {
    pub income: &'static [CategoryAmount],
    pub expenses: &'static [CategoryAmount],
    pub total_income_eur: u32,
    pub total_expenses_eur: u32,
    pub net_result_eur: i64,
}

/// Builds the finance report from the fixed breakdowns.
pub fn finance_report() -> FinanceReport {
    let total_income_eur: u32 = INCOME_BREAKDOWN.iter().map(|line| line.amount_eur).sum();
    let total_expenses_eur: u32 = EXPENSE_BREAKDOWN.iter().map(|line| line.amount_eur).sum();
    FinanceReport {
        income: INCOME_BREAKDOWN,
        expenses: EXPENSE_BREAKDOWN,
        total_income_eur,
        total_expenses_eur,
        net_result_eur: i64::from(total_income_eur) - i64::from(total_expenses_eur),
    }
}

/// Whole-percent share of `amount` in `total`, rounded half-up.
///
/// Returns 0 for an empty total instead of dividing by zero.
pub fn share_percent(amount_eur: u32, total_eur: u32) -> u32 {
    if total_eur == 0 {
        return 0;
    }
    ((u64::from(amount_eur) * 100 + u64::from(total_eur) / 2) / u64::from(total_eur)) as u32
}
