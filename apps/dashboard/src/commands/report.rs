//! # Report Commands
//!
//! Dashboard cards, period reports and the monthly revenue chart.
//!
//! Every report takes its reference date as a parameter. Only the binary
//! reads the clock, so the same store always yields the same numbers.

use chrono::NaiveDate;
use gestor_core::metrics::{
    self, DashboardMetrics, FinanceSummary, MonthlyRevenue, PayrollSummary, Period, PeriodReport,
    SalesSummary,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// One headline card, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub label: String,
    pub value: String,
}

/// Everything the main dashboard page renders in one payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub business_name: String,
    pub currency_code: String,
    pub reference: NaiveDate,
    pub cards: Vec<Card>,
    pub metrics: DashboardMetrics,
    pub finance: FinanceSummary,
    pub sales: SalesSummary,
    pub payroll: PayrollSummary,
    pub month: PeriodReport,
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// Dashboard cards for `today` using the configured low-stock threshold.
pub fn dashboard_metrics(
    store: &StoreState,
    config: &ConfigState,
    today: NaiveDate,
) -> DashboardMetrics {
    let threshold = config.inner().low_stock_threshold;
    store.with_store(|s| metrics::dashboard(s, today, threshold))
}

pub fn sales_summary(store: &StoreState) -> SalesSummary {
    store.with_store(metrics::sales_summary)
}

/// Indicators for the period around `reference`.
pub fn period_report(store: &StoreState, period: Period, reference: NaiveDate) -> PeriodReport {
    store.with_store(|s| metrics::period_report(s, period, reference))
}

/// Same as [`period_report`] with the period given by name ("semana", "month", ...).
pub fn period_report_by_name(
    store: &StoreState,
    period: &str,
    reference: NaiveDate,
) -> Result<PeriodReport, ApiError> {
    let period: Period = period.parse()?;
    Ok(period_report(store, period, reference))
}

/// Revenue per month for the configured window, oldest first.
pub fn monthly_revenue(
    store: &StoreState,
    config: &ConfigState,
    reference: NaiveDate,
) -> Vec<MonthlyRevenue> {
    let months = config.inner().report_months;
    store.with_store(|s| metrics::monthly_series(s, reference, months))
}

/// Builds the full dashboard payload under a single lock.
pub fn dashboard_snapshot(
    store: &StoreState,
    config: &ConfigState,
    today: NaiveDate,
) -> DashboardSnapshot {
    let settings = config.inner();

    let (dashboard, finance, sales, payroll, month, monthly) = store.with_store(|s| {
        (
            metrics::dashboard(s, today, settings.low_stock_threshold),
            metrics::finance_summary(s),
            metrics::sales_summary(s),
            metrics::payroll_summary(s),
            metrics::period_report(s, Period::Month, today),
            metrics::monthly_series(s, today, settings.report_months),
        )
    });

    let card = |label: &str, value: String| Card {
        label: label.to_string(),
        value,
    };
    let cards = vec![
        card("Receita hoje", config.format_money(dashboard.revenue_today)),
        card("Receita do mês", config.format_money(dashboard.revenue_month)),
        card("Despesas do mês", config.format_money(dashboard.expenses_month)),
        card("Lucro do mês", config.format_money(dashboard.profit_month)),
        card("Saldo projetado", config.format_money(finance.projected_balance)),
        card("Clientes", dashboard.customer_count.to_string()),
        card("Estoque baixo", dashboard.low_stock_count.to_string()),
    ];

    DashboardSnapshot {
        business_name: settings.business_name.clone(),
        currency_code: settings.currency_code.clone(),
        reference: today,
        cards,
        metrics: dashboard,
        finance,
        sales,
        payroll,
        month,
        monthly_revenue: monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{finance, product};
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use gestor_core::store::SaleAction;
    use gestor_core::{Action, Money, NewBill, NewProduct, NewSale, NewSaleLine, PaymentMethod};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn seeded() -> StoreState {
        let store = StoreState::new();
        let soap = product::add_product(
            &store,
            NewProduct {
                name: "Sabonete".to_string(),
                price: Money::from_cents(350),
                quantity: 20,
                category: "Higiene".to_string(),
            },
        )
        .unwrap();
        product::add_product(
            &store,
            NewProduct {
                name: "Shampoo".to_string(),
                price: Money::from_cents(1800),
                quantity: 2,
                category: "Higiene".to_string(),
            },
        )
        .unwrap();

        for (date, qty) in [(d(2024, 3, 15), 10), (d(2024, 1, 20), 2)] {
            store
                .dispatch(Action::Sale(SaleAction::Record(NewSale {
                    date,
                    items: vec![NewSaleLine {
                        product_id: soap.id.clone(),
                        quantity: qty,
                    }],
                    customer_id: None,
                    payment_method: PaymentMethod::Cash,
                })))
                .unwrap();
        }

        finance::add_payable(
            &store,
            NewBill {
                description: "Luz".to_string(),
                amount: Money::from_cents(1000),
                due_date: d(2024, 3, 5),
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn test_dashboard_uses_configured_threshold() {
        let store = seeded();
        let strict = ConfigState::new(AppConfig {
            low_stock_threshold: 1,
            ..AppConfig::default()
        });

        assert_eq!(
            dashboard_metrics(&store, &ConfigState::default(), d(2024, 3, 15)).low_stock_count,
            1
        );
        assert_eq!(dashboard_metrics(&store, &strict, d(2024, 3, 15)).low_stock_count, 0);
    }

    #[test]
    fn test_monthly_revenue_window() {
        let store = seeded();
        let config = ConfigState::new(AppConfig {
            report_months: 3,
            ..AppConfig::default()
        });

        let series = monthly_revenue(&store, &config, d(2024, 3, 31));
        let labels: Vec<_> = series.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Fev", "Mar"]);
        assert_eq!(series[0].revenue, Money::from_cents(700));
        assert!(series[1].revenue.is_zero());
        assert_eq!(series[2].revenue, Money::from_cents(3500));
    }

    #[test]
    fn test_period_report_by_name() {
        let store = seeded();

        let report = period_report_by_name(&store, "mês", d(2024, 3, 1)).unwrap();
        assert_eq!(report.sales_count, 1);
        assert_eq!(report.expenses, Money::from_cents(1000));
        assert_eq!(report.profit, Money::from_cents(2500));

        let err = period_report_by_name(&store, "quinzena", d(2024, 3, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_snapshot_formats_cards() {
        let store = seeded();
        let snapshot = dashboard_snapshot(&store, &ConfigState::default(), d(2024, 3, 15));

        assert_eq!(snapshot.business_name, "GestorPro");
        assert_eq!(snapshot.monthly_revenue.len(), 7);
        assert_eq!(snapshot.sales.count, 2);
        let today = snapshot
            .cards
            .iter()
            .find(|c| c.label == "Receita hoje")
            .unwrap();
        assert_eq!(today.value, "R$ 35,00");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["reference"], "2024-03-15");
        assert!(json["metrics"]["revenueMonth"].is_number());
    }
}
