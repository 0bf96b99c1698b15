//! # Metrics & Reports
//!
//! Every number shown on the dashboard cards, the finance page, the payroll
//! page and the reports page.
//!
//! ## Inputs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   &Store ─────────┐                                                     │
//! │                   ├──► pure function ──► summary struct (Serialize)    │
//! │   reference date ─┘                                                     │
//! │                                                                         │
//! │   The reference date is passed in by the caller. Nothing here reads     │
//! │   the clock, so every report is reproducible in tests.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accounting Basis
//! Revenue counts a sale on its `date`. Expenses are accrual-based: a
//! payable counts in the period of its `due_date` whatever its status.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::store::Store;
use crate::types::{Bill, PaymentMethod, Sale};

/// Portuguese month abbreviations used by the revenue chart.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

// =============================================================================
// Periods
// =============================================================================

/// Reporting period around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    /// Monday-based ISO week.
    Week,
    Month,
    Year,
}

impl Period {
    /// True when `date` falls in the same period as `reference`.
    pub fn contains(&self, reference: NaiveDate, date: NaiveDate) -> bool {
        match self {
            Period::Day => date == reference,
            Period::Week => date.iso_week() == reference.iso_week(),
            Period::Month => date.year() == reference.year() && date.month() == reference.month(),
            Period::Year => date.year() == reference.year(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "dia" | "hoje" => Ok(Period::Day),
            "week" | "semana" => Ok(Period::Week),
            "month" | "mes" | "mês" => Ok(Period::Month),
            "year" | "ano" => Ok(Period::Year),
            other => Err(ValidationError::InvalidFormat {
                field: "periodo".to_string(),
                reason: format!("unknown period '{}'", other),
            }
            .into()),
        }
    }
}

fn revenue_in(sales: &[Sale], period: Period, reference: NaiveDate) -> (usize, Money) {
    sales
        .iter()
        .filter(|s| period.contains(reference, s.date))
        .fold((0, Money::zero()), |(count, total), s| (count + 1, total + s.total))
}

fn expenses_in(store: &Store, period: Period, reference: NaiveDate) -> Money {
    store
        .payables()
        .iter()
        .filter(|p| period.contains(reference, p.due_date))
        .map(|p| p.amount)
        .sum()
}

// =============================================================================
// Dashboard
// =============================================================================

/// The cards on the main dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub revenue_today: Money,
    pub revenue_month: Money,
    pub revenue_year: Money,
    pub expenses_month: Money,
    /// revenue_month − expenses_month.
    pub profit_month: Money,
    pub customer_count: usize,
    /// Products with at least one unit on hand.
    pub products_in_stock: usize,
    /// Products at or below the low-stock threshold.
    pub low_stock_count: usize,
}

/// Computes the dashboard cards for `today`.
pub fn dashboard(store: &Store, today: NaiveDate, low_stock_threshold: i64) -> DashboardMetrics {
    let (_, revenue_today) = revenue_in(store.sales(), Period::Day, today);
    let (_, revenue_month) = revenue_in(store.sales(), Period::Month, today);
    let (_, revenue_year) = revenue_in(store.sales(), Period::Year, today);
    let expenses_month = expenses_in(store, Period::Month, today);

    DashboardMetrics {
        revenue_today,
        revenue_month,
        revenue_year,
        expenses_month,
        profit_month: revenue_month - expenses_month,
        customer_count: store.customers().len(),
        products_in_stock: store.products().iter().filter(|p| p.in_stock()).count(),
        low_stock_count: store
            .products()
            .iter()
            .filter(|p| p.quantity <= low_stock_threshold)
            .count(),
    }
}

// =============================================================================
// Finance
// =============================================================================

/// Totals shown on the finance page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub pending_payables: Money,
    pub pending_receivables: Money,
    /// pending_receivables − pending_payables.
    pub projected_balance: Money,
    pub paid_payables: Money,
    pub received_receivables: Money,
}

fn split_settled<B: Bill>(bills: &[B]) -> (Money, Money) {
    bills.iter().fold((Money::zero(), Money::zero()), |(pending, settled), b| {
        if b.is_settled() {
            (pending, settled + b.amount())
        } else {
            (pending + b.amount(), settled)
        }
    })
}

/// Sums payables and receivables by status.
pub fn finance_summary(store: &Store) -> FinanceSummary {
    let (pending_payables, paid_payables) = split_settled(store.payables());
    let (pending_receivables, received_receivables) = split_settled(store.receivables());

    FinanceSummary {
        pending_payables,
        pending_receivables,
        projected_balance: pending_receivables - pending_payables,
        paid_payables,
        received_receivables,
    }
}

// =============================================================================
// Sales
// =============================================================================

/// Revenue of one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodTotal {
    pub method: PaymentMethod,
    pub count: usize,
    pub revenue: Money,
}

/// Totals shown on the sales page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub count: usize,
    pub revenue: Money,
    /// Zero when there are no sales.
    pub average_ticket: Money,
    /// One entry per method, in form order, including methods never used.
    pub by_payment_method: Vec<PaymentMethodTotal>,
}

/// Summarises every recorded sale.
pub fn sales_summary(store: &Store) -> SalesSummary {
    let sales = store.sales();
    let revenue: Money = sales.iter().map(|s| s.total).sum();

    let by_payment_method = PaymentMethod::ALL
        .iter()
        .map(|&method| {
            let (count, revenue) = sales
                .iter()
                .filter(|s| s.payment_method == method)
                .fold((0, Money::zero()), |(n, total), s| (n + 1, total + s.total));
            PaymentMethodTotal {
                method,
                count,
                revenue,
            }
        })
        .collect();

    SalesSummary {
        count: sales.len(),
        revenue,
        average_ticket: revenue.average_over(sales.len()),
        by_payment_method,
    }
}

// =============================================================================
// Payroll
// =============================================================================

/// Totals shown on the employees page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub headcount: usize,
    pub total: Money,
    /// Zero when there are no employees.
    pub average_salary: Money,
}

pub fn payroll_summary(store: &Store) -> PayrollSummary {
    let employees = store.employees();
    let total: Money = employees.iter().map(|e| e.salary).sum();
    PayrollSummary {
        headcount: employees.len(),
        total,
        average_salary: total.average_over(employees.len()),
    }
}

// =============================================================================
// Period Report
// =============================================================================

/// Indicators for one reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub period: Period,
    #[ts(as = "String")]
    pub reference: NaiveDate,
    pub sales_count: usize,
    pub revenue: Money,
    pub average_ticket: Money,
    /// Customers whose `created_at` falls in the period (UTC date).
    pub new_customers: usize,
    pub expenses: Money,
    pub profit: Money,
    /// profit / revenue in basis points, absent when revenue is zero.
    pub margin_bps: Option<i64>,
}

/// Builds the report for the `period` containing `reference`.
///
/// ## Example
/// ```text
/// period = Month, reference = 2025-03-14
///
/// sales dated 2025-03-01 ..= 2025-03-31     → revenue, count, ticket
/// clientes created in March 2025            → new_customers
/// payables due in March 2025 (any status)   → expenses
/// revenue − expenses                        → profit, margin
/// ```
pub fn period_report(store: &Store, period: Period, reference: NaiveDate) -> PeriodReport {
    let (sales_count, revenue) = revenue_in(store.sales(), period, reference);
    let expenses = expenses_in(store, period, reference);
    let profit = revenue - expenses;

    let new_customers = store
        .customers()
        .iter()
        .filter(|c| period.contains(reference, c.created_at.date_naive()))
        .count();

    PeriodReport {
        period,
        reference,
        sales_count,
        revenue,
        average_ticket: revenue.average_over(sales_count),
        new_customers,
        expenses,
        profit,
        margin_bps: profit.ratio_bps(revenue),
    }
}

// =============================================================================
// Monthly Series
// =============================================================================

/// One bar of the monthly revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub year: i32,
    /// 1-12.
    pub month: u32,
    pub label: String,
    pub revenue: Money,
}

/// Revenue per calendar month for the `months` months ending at the month
/// of `reference`, oldest first.
pub fn monthly_series(store: &Store, reference: NaiveDate, months: u32) -> Vec<MonthlyRevenue> {
    let last = reference.year() * 12 + reference.month0() as i32;

    (0..months as i32)
        .rev()
        .map(|back| {
            let index = last - back;
            let year = index.div_euclid(12);
            let month0 = index.rem_euclid(12) as u32;

            let revenue = store
                .sales()
                .iter()
                .filter(|s| s.date.year() == year && s.date.month0() == month0)
                .map(|s| s.total)
                .sum();

            MonthlyRevenue {
                year,
                month: month0 + 1,
                label: MONTH_LABELS[month0 as usize].to_string(),
                revenue,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, BillAction, CustomerAction, EmployeeAction, ProductAction, SaleAction};
    use crate::types::{Customer, NewBill, NewEmployee, NewProduct, NewSale, NewSaleLine};
    use crate::Outcome;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn add_product(store: &mut Store, cents: i64, qty: i64) -> String {
        let outcome = store
            .dispatch(Action::Product(ProductAction::Add(NewProduct {
                name: "Produto".to_string(),
                price: Money::from_cents(cents),
                quantity: qty,
                category: "Geral".to_string(),
            })))
            .unwrap();
        match outcome {
            Outcome::Product(p) => p.id,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn sell(store: &mut Store, product_id: &str, qty: i64, date: NaiveDate, method: PaymentMethod) {
        store
            .dispatch(Action::Sale(SaleAction::Record(NewSale {
                date,
                items: vec![NewSaleLine {
                    product_id: product_id.to_string(),
                    quantity: qty,
                }],
                customer_id: None,
                payment_method: method,
            })))
            .unwrap();
    }

    fn add_payable(store: &mut Store, cents: i64, due: NaiveDate) -> String {
        let outcome = store
            .dispatch(Action::Payable(BillAction::Add(NewBill {
                description: "Conta".to_string(),
                amount: Money::from_cents(cents),
                due_date: due,
            })))
            .unwrap();
        match outcome {
            Outcome::Payable(p) => p.id,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    fn customer_created(id: &str, y: i32, m: u32, day: u32) -> Customer {
        let at = Utc.with_ymd_and_hms(y, m, day, 12, 0, 0).unwrap();
        Customer {
            id: id.to_string(),
            name: "Cliente".to_string(),
            email: None,
            phone: "111".to_string(),
            total_purchases: Money::zero(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_period_contains() {
        // 2025-03-12 is a Wednesday
        let reference = d(2025, 3, 12);
        assert!(Period::Week.contains(reference, d(2025, 3, 10)));
        assert!(Period::Week.contains(reference, d(2025, 3, 16)));
        assert!(!Period::Week.contains(reference, d(2025, 3, 9)));
        assert!(!Period::Week.contains(reference, d(2025, 3, 17)));

        assert!(Period::Month.contains(reference, d(2025, 3, 31)));
        assert!(!Period::Month.contains(reference, d(2024, 3, 12)));
        assert!(Period::Year.contains(reference, d(2025, 12, 31)));
        assert!(!Period::Day.contains(reference, d(2025, 3, 13)));

        assert_eq!("semana".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Mês".parse::<Period>().unwrap(), Period::Month);
        assert!("quarter".parse::<Period>().is_err());
    }

    #[test]
    fn test_dashboard_metrics() {
        let mut store = Store::new();
        let p1 = add_product(&mut store, 1000, 10);
        add_product(&mut store, 500, 0);
        add_product(&mut store, 200, 5);

        let today = d(2025, 3, 14);
        sell(&mut store, &p1, 2, today, PaymentMethod::Cash);
        sell(&mut store, &p1, 1, d(2025, 3, 1), PaymentMethod::Card);
        sell(&mut store, &p1, 1, d(2025, 1, 20), PaymentMethod::Card);
        sell(&mut store, &p1, 1, d(2024, 12, 31), PaymentMethod::Card);

        add_payable(&mut store, 1500, d(2025, 3, 5));
        add_payable(&mut store, 9999, d(2025, 4, 5));

        store
            .dispatch(Action::Customer(CustomerAction::Loaded(vec![
                customer_created("c1", 2025, 3, 1),
                customer_created("c2", 2024, 1, 1),
            ])))
            .unwrap();

        let metrics = dashboard(&store, today, 5);
        assert_eq!(metrics.revenue_today.cents(), 2000);
        assert_eq!(metrics.revenue_month.cents(), 3000);
        assert_eq!(metrics.revenue_year.cents(), 4000);
        assert_eq!(metrics.expenses_month.cents(), 1500);
        assert_eq!(metrics.profit_month.cents(), 1500);
        assert_eq!(metrics.customer_count, 2);
        // p1 has 5 left after selling 5 units
        assert_eq!(metrics.products_in_stock, 2);
        assert_eq!(metrics.low_stock_count, 3);
    }

    #[test]
    fn test_finance_summary() {
        let mut store = Store::new();
        let rent = add_payable(&mut store, 150_000, d(2025, 3, 5));
        add_payable(&mut store, 20_000, d(2025, 3, 10));
        store
            .dispatch(Action::Payable(BillAction::ToggleStatus { id: rent }))
            .unwrap();
        store
            .dispatch(Action::Receivable(BillAction::Add(NewBill {
                description: "Serviço".to_string(),
                amount: Money::from_cents(50_000),
                due_date: d(2025, 3, 20),
            })))
            .unwrap();

        let summary = finance_summary(&store);
        assert_eq!(summary.pending_payables.cents(), 20_000);
        assert_eq!(summary.paid_payables.cents(), 150_000);
        assert_eq!(summary.pending_receivables.cents(), 50_000);
        assert_eq!(summary.received_receivables, Money::zero());
        assert_eq!(summary.projected_balance.cents(), 30_000);
    }

    #[test]
    fn test_sales_summary() {
        let mut store = Store::new();
        let empty = sales_summary(&store);
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average_ticket, Money::zero());
        assert_eq!(empty.by_payment_method.len(), 4);

        let p = add_product(&mut store, 1001, 100);
        sell(&mut store, &p, 1, d(2025, 3, 1), PaymentMethod::InstantTransfer);
        sell(&mut store, &p, 2, d(2025, 3, 2), PaymentMethod::InstantTransfer);
        sell(&mut store, &p, 1, d(2025, 3, 3), PaymentMethod::Invoice);

        let summary = sales_summary(&store);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.revenue.cents(), 4004);
        assert_eq!(summary.average_ticket.cents(), 1335);

        let pix = summary
            .by_payment_method
            .iter()
            .find(|t| t.method == PaymentMethod::InstantTransfer)
            .unwrap();
        assert_eq!(pix.count, 2);
        assert_eq!(pix.revenue.cents(), 3003);

        let cash = &summary.by_payment_method[0];
        assert_eq!(cash.method, PaymentMethod::Cash);
        assert_eq!(cash.count, 0);
    }

    #[test]
    fn test_payroll_summary() {
        let mut store = Store::new();
        assert_eq!(payroll_summary(&store).average_salary, Money::zero());

        for salary in [250_000, 300_001] {
            store
                .dispatch(Action::Employee(EmployeeAction::Add(NewEmployee {
                    name: "Funcionário".to_string(),
                    role: "Vendedor".to_string(),
                    salary: Money::from_cents(salary),
                    admission_date: d(2024, 6, 1),
                })))
                .unwrap();
        }

        let summary = payroll_summary(&store);
        assert_eq!(summary.headcount, 2);
        assert_eq!(summary.total.cents(), 550_001);
        assert_eq!(summary.average_salary.cents(), 275_001);
    }

    #[test]
    fn test_period_report() {
        let mut store = Store::new();
        let p = add_product(&mut store, 10_000, 100);
        sell(&mut store, &p, 1, d(2025, 3, 3), PaymentMethod::Cash);
        sell(&mut store, &p, 3, d(2025, 3, 20), PaymentMethod::Cash);
        sell(&mut store, &p, 1, d(2025, 2, 28), PaymentMethod::Cash);

        let paid = add_payable(&mut store, 10_000, d(2025, 3, 25));
        store
            .dispatch(Action::Payable(BillAction::ToggleStatus { id: paid }))
            .unwrap();
        add_payable(&mut store, 5_000, d(2025, 3, 26));

        store
            .dispatch(Action::Customer(CustomerAction::Loaded(vec![
                customer_created("c1", 2025, 3, 2),
                customer_created("c2", 2025, 2, 2),
            ])))
            .unwrap();

        let report = period_report(&store, Period::Month, d(2025, 3, 14));
        assert_eq!(report.sales_count, 2);
        assert_eq!(report.revenue.cents(), 40_000);
        assert_eq!(report.average_ticket.cents(), 20_000);
        assert_eq!(report.new_customers, 1);
        // Accrual basis: both payables count regardless of status
        assert_eq!(report.expenses.cents(), 15_000);
        assert_eq!(report.profit.cents(), 25_000);
        assert_eq!(report.margin_bps, Some(6_250));

        let quiet = period_report(&store, Period::Day, d(2025, 3, 15));
        assert_eq!(quiet.sales_count, 0);
        assert_eq!(quiet.average_ticket, Money::zero());
        assert_eq!(quiet.margin_bps, None);
    }

    #[test]
    fn test_monthly_series_crosses_year_boundary() {
        let mut store = Store::new();
        let p = add_product(&mut store, 1000, 100);
        sell(&mut store, &p, 1, d(2024, 8, 15), PaymentMethod::Cash);
        sell(&mut store, &p, 2, d(2024, 12, 31), PaymentMethod::Cash);
        sell(&mut store, &p, 3, d(2025, 2, 1), PaymentMethod::Cash);
        // Before the window
        sell(&mut store, &p, 5, d(2024, 7, 31), PaymentMethod::Cash);

        let series = monthly_series(&store, d(2025, 2, 10), 7);
        let labels: Vec<&str> = series.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Ago", "Set", "Out", "Nov", "Dez", "Jan", "Fev"]);

        assert_eq!(series[0].year, 2024);
        assert_eq!(series[0].month, 8);
        assert_eq!(series[0].revenue.cents(), 1000);
        assert_eq!(series[4].revenue.cents(), 2000);
        assert_eq!(series[5].revenue, Money::zero());
        assert_eq!(series[6].year, 2025);
        assert_eq!(series[6].revenue.cents(), 3000);

        assert!(monthly_series(&store, d(2025, 2, 10), 0).is_empty());
    }
}
