//! Decision model types.

use std::collections::HashMap;
use std::fmt;

/// Position of a variable in [`DecisionModel::variables`].
pub type VarId = usize;

/// What a binary variable decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// 1 if `facility` serves `customer`.
    Assignment {
        /// Customer index.
        customer: usize,
        /// Facility index.
        facility: usize,
    },
    /// 1 if `facility` is open.
    Enabled {
        /// Facility index.
        facility: usize,
    },
}

/// A binary decision variable with its objective coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// What the variable decides.
    pub kind: VariableKind,
    /// Coefficient in the minimisation objective.
    pub cost: f64,
}

/// Which structural rule a constraint encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `Σ_f x(c, f) = 1`: the customer is served exactly once.
    Completeness {
        /// Customer index.
        customer: usize,
    },
    /// `Σ_c demand(c) · x(c, f) ≤ capacity(f)`.
    Capacity {
        /// Facility index.
        facility: usize,
    },
    /// `x(c, f) − y(f) ≤ 0`: no service from a closed facility.
    Coupling {
        /// Customer index.
        customer: usize,
        /// Facility index.
        facility: usize,
    },
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Completeness { customer } => write!(f, "assign[{customer}]"),
            ConstraintKind::Capacity { facility } => write!(f, "capacity[{facility}]"),
            ConstraintKind::Coupling { customer, facility } => {
                write!(f, "couple[{customer},{facility}]")
            }
        }
    }
}

/// A linear constraint `lower ≤ Σ coef · var ≤ upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Structural rule this row encodes.
    pub kind: ConstraintKind,
    /// Non-zero `(variable, coefficient)` terms.
    pub terms: Vec<(VarId, f64)>,
    /// Lower bound (`f64::NEG_INFINITY` if none).
    pub lower: f64,
    /// Upper bound (`f64::INFINITY` if none).
    pub upper: f64,
}

impl Constraint {
    /// Left-hand side evaluated at `values`.
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(v, coef)| coef * values[v]).sum()
    }

    /// Returns `true` if `values` satisfy the row within `tol`.
    pub fn is_satisfied(&self, values: &[f64], tol: f64) -> bool {
        let lhs = self.activity(values);
        lhs >= self.lower - tol && lhs <= self.upper + tol
    }
}

/// A binary minimisation model over one candidate graph.
///
/// Owns the (customer, facility) → variable mapping; each instance starts
/// from empty containers. Only the assembler mutates it, after which it is
/// handed read-only to a solver.
#[derive(Debug, Clone, Default)]
pub struct DecisionModel {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    assignment_vars: HashMap<(usize, usize), VarId>,
    enabled_vars: Vec<VarId>,
}

impl DecisionModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_assignment(&mut self, customer: usize, facility: usize, cost: f64) -> VarId {
        let id = self.push_variable(VariableKind::Assignment { customer, facility }, cost);
        self.assignment_vars.insert((customer, facility), id);
        id
    }

    pub(crate) fn add_enabled(&mut self, facility: usize, cost: f64) -> VarId {
        let id = self.push_variable(VariableKind::Enabled { facility }, cost);
        debug_assert_eq!(self.enabled_vars.len(), facility);
        self.enabled_vars.push(id);
        id
    }

    pub(crate) fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    fn push_variable(&mut self, kind: VariableKind, cost: f64) -> VarId {
        self.variables.push(Variable { kind, cost });
        self.variables.len() - 1
    }

    /// All variables; every one is binary.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// All constraint rows.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Variable deciding whether `facility` serves `customer`.
    ///
    /// `None` if the pair is not a candidate edge.
    pub fn assignment_var(&self, customer: usize, facility: usize) -> Option<VarId> {
        self.assignment_vars.get(&(customer, facility)).copied()
    }

    /// Variable deciding whether `facility` is open.
    pub fn enabled_var(&self, facility: usize) -> Option<VarId> {
        self.enabled_vars.get(facility).copied()
    }

    /// Number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of assignment variables (candidate edges).
    pub fn num_assignment_vars(&self) -> usize {
        self.assignment_vars.len()
    }

    /// Objective evaluated at `values`.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(values)
            .map(|(var, &x)| var.cost * x)
            .sum()
    }

    /// Rows not satisfied by `values` within `tol`.
    pub fn violated_constraints(&self, values: &[f64], tol: f64) -> Vec<ConstraintKind> {
        self.constraints
            .iter()
            .filter(|row| !row.is_satisfied(values, tol))
            .map(|row| row.kind)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> DecisionModel {
        let mut m = DecisionModel::new();
        let x = m.add_assignment(0, 0, 2.0);
        let y = m.add_enabled(0, 5.0);
        m.add_constraint(Constraint {
            kind: ConstraintKind::Completeness { customer: 0 },
            terms: vec![(x, 1.0)],
            lower: 1.0,
            upper: 1.0,
        });
        m.add_constraint(Constraint {
            kind: ConstraintKind::Coupling {
                customer: 0,
                facility: 0,
            },
            terms: vec![(x, 1.0), (y, -1.0)],
            lower: f64::NEG_INFINITY,
            upper: 0.0,
        });
        m
    }

    #[test]
    fn test_lookup() {
        let m = tiny();
        assert_eq!(m.assignment_var(0, 0), Some(0));
        assert_eq!(m.assignment_var(0, 1), None);
        assert_eq!(m.enabled_var(0), Some(1));
        assert_eq!(m.enabled_var(1), None);
        assert_eq!(m.num_variables(), 2);
        assert_eq!(m.num_assignment_vars(), 1);
    }

    #[test]
    fn test_objective_value() {
        let m = tiny();
        assert!((m.objective_value(&[1.0, 1.0]) - 7.0).abs() < 1e-10);
        assert_eq!(m.objective_value(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_violations() {
        let m = tiny();
        assert!(m.violated_constraints(&[1.0, 1.0], 1e-9).is_empty());
        assert_eq!(
            m.violated_constraints(&[1.0, 0.0], 1e-9),
            vec![ConstraintKind::Coupling {
                customer: 0,
                facility: 0
            }]
        );
        assert_eq!(
            m.violated_constraints(&[0.0, 0.0], 1e-9),
            vec![ConstraintKind::Completeness { customer: 0 }]
        );
    }

    #[test]
    fn test_constraint_names() {
        assert_eq!(ConstraintKind::Capacity { facility: 3 }.to_string(), "capacity[3]");
        assert_eq!(
            ConstraintKind::Coupling {
                customer: 1,
                facility: 2
            }
            .to_string(),
            "couple[1,2]"
        );
    }

    #[test]
    fn test_fresh_models_share_nothing() {
        let a = tiny();
        let b = DecisionModel::new();
        assert_eq!(a.num_variables(), 2);
        assert_eq!(b.num_variables(), 0);
        assert!(b.assignment_var(0, 0).is_none());
    }
}
