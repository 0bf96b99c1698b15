//! # Finance Commands
//!
//! The Financeiro page: contas a pagar (payables) and contas a receber
//! (receivables). Both share the same action set, so every command comes in
//! a payable and a receivable flavour.

use gestor_core::metrics::{self, FinanceSummary};
use gestor_core::store::BillAction;
use gestor_core::{Action, EntityKind, NewBill, Outcome, Payable, Receivable};
use tracing::info;

use super::unexpected;
use crate::error::ApiError;
use crate::state::StoreState;

// =============================================================================
// Payables
// =============================================================================

pub fn list_payables(store: &StoreState) -> Vec<Payable> {
    store.with_store(|s| s.payables().to_vec())
}

/// Adds a pending payable.
pub fn add_payable(store: &StoreState, input: NewBill) -> Result<Payable, ApiError> {
    match store.dispatch(Action::Payable(BillAction::Add(input)))? {
        Outcome::Payable(bill) => {
            info!(id = %bill.id, amount = %bill.amount, "Payable added");
            Ok(bill)
        }
        other => Err(unexpected(other)),
    }
}

/// Pending ⇄ paid.
pub fn toggle_payable(store: &StoreState, id: &str) -> Result<Payable, ApiError> {
    let action = BillAction::ToggleStatus { id: id.to_string() };
    match store.dispatch(Action::Payable(action))? {
        Outcome::Payable(bill) => Ok(bill),
        other => Err(unexpected(other)),
    }
}

pub fn remove_payable(store: &StoreState, id: &str) -> Result<(), ApiError> {
    remove_bill(store, Action::Payable(BillAction::Remove { id: id.to_string() }))
}

// =============================================================================
// Receivables
// =============================================================================

pub fn list_receivables(store: &StoreState) -> Vec<Receivable> {
    store.with_store(|s| s.receivables().to_vec())
}

/// Adds a pending receivable.
pub fn add_receivable(store: &StoreState, input: NewBill) -> Result<Receivable, ApiError> {
    match store.dispatch(Action::Receivable(BillAction::Add(input)))? {
        Outcome::Receivable(bill) => {
            info!(id = %bill.id, amount = %bill.amount, "Receivable added");
            Ok(bill)
        }
        other => Err(unexpected(other)),
    }
}

/// Pending ⇄ received.
pub fn toggle_receivable(store: &StoreState, id: &str) -> Result<Receivable, ApiError> {
    let action = BillAction::ToggleStatus { id: id.to_string() };
    match store.dispatch(Action::Receivable(action))? {
        Outcome::Receivable(bill) => Ok(bill),
        other => Err(unexpected(other)),
    }
}

pub fn remove_receivable(store: &StoreState, id: &str) -> Result<(), ApiError> {
    remove_bill(store, Action::Receivable(BillAction::Remove { id: id.to_string() }))
}

fn remove_bill(store: &StoreState, action: Action) -> Result<(), ApiError> {
    match store.dispatch(action)? {
        Outcome::Removed { entity, id }
            if matches!(entity, EntityKind::Payable | EntityKind::Receivable) =>
        {
            info!(entity = %entity, id = %id, "Bill removed");
            Ok(())
        }
        other => Err(unexpected(other)),
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Pending and settled totals plus the projected balance.
pub fn finance_summary(store: &StoreState) -> FinanceSummary {
    store.with_store(metrics::finance_summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use gestor_core::{Money, PayableStatus, ReceivableStatus};

    fn bill(description: &str, cents: i64) -> NewBill {
        NewBill {
            description: description.to_string(),
            amount: Money::from_cents(cents),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    #[test]
    fn test_toggle_moves_totals() {
        let store = StoreState::new();
        let rent = add_payable(&store, bill("Aluguel", 150_000)).unwrap();
        let invoice = add_receivable(&store, bill("Fatura 12", 90_000)).unwrap();

        let summary = finance_summary(&store);
        assert_eq!(summary.projected_balance, Money::from_cents(-60_000));

        assert_eq!(toggle_payable(&store, &rent.id).unwrap().status, PayableStatus::Paid);
        assert_eq!(
            toggle_receivable(&store, &invoice.id).unwrap().status,
            ReceivableStatus::Received
        );

        let summary = finance_summary(&store);
        assert!(summary.pending_payables.is_zero());
        assert_eq!(summary.paid_payables, Money::from_cents(150_000));
        assert_eq!(summary.received_receivables, Money::from_cents(90_000));
        assert!(summary.projected_balance.is_zero());
    }

    #[test]
    fn test_remove_and_unknown_ids() {
        let store = StoreState::new();
        let rent = add_payable(&store, bill("Aluguel", 150_000)).unwrap();

        remove_payable(&store, &rent.id).unwrap();
        assert!(list_payables(&store).is_empty());

        assert_eq!(
            toggle_payable(&store, &rent.id).unwrap_err().code,
            ErrorCode::NotFound
        );
        assert_eq!(
            remove_receivable(&store, "missing").unwrap_err().code,
            ErrorCode::NotFound
        );
        assert!(list_receivables(&store).is_empty());
    }

    #[test]
    fn test_blank_description_rejected() {
        let store = StoreState::new();
        let err = add_receivable(&store, bill("  ", 100)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
