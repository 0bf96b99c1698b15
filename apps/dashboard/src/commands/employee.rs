//! # Employee Commands
//!
//! The Funcionários page and its payroll card.

use gestor_core::metrics::{self, PayrollSummary};
use gestor_core::store::EmployeeAction;
use gestor_core::{Action, Employee, NewEmployee, Outcome};
use tracing::info;

use super::unexpected;
use crate::error::ApiError;
use crate::state::StoreState;

pub fn list_employees(store: &StoreState) -> Vec<Employee> {
    store.with_store(|s| s.employees().to_vec())
}

pub fn add_employee(store: &StoreState, input: NewEmployee) -> Result<Employee, ApiError> {
    match store.dispatch(Action::Employee(EmployeeAction::Add(input)))? {
        Outcome::Employee(employee) => {
            info!(id = %employee.id, role = %employee.role, "Employee added");
            Ok(employee)
        }
        other => Err(unexpected(other)),
    }
}

/// Replaces every field of an employee except the id.
pub fn edit_employee(
    store: &StoreState,
    id: &str,
    input: NewEmployee,
) -> Result<Employee, ApiError> {
    let action = EmployeeAction::Edit {
        id: id.to_string(),
        employee: input,
    };
    match store.dispatch(Action::Employee(action))? {
        Outcome::Employee(employee) => Ok(employee),
        other => Err(unexpected(other)),
    }
}

pub fn remove_employee(store: &StoreState, id: &str) -> Result<(), ApiError> {
    store.dispatch(Action::Employee(EmployeeAction::Remove { id: id.to_string() }))?;
    info!(id = %id, "Employee removed");
    Ok(())
}

/// Headcount, total payroll and average salary.
pub fn payroll(store: &StoreState) -> PayrollSummary {
    store.with_store(metrics::payroll_summary)
}
