//! Driver seam for executing rendered statements.
//!
//! que never talks to a database itself. A [`Driver`] is whatever the caller
//! uses to run SQL: a connection, a transaction, a test double. Closures of
//! the right shape implement it directly.

use crate::param::Params;

/// Something that can execute SQL with parameters.
pub trait Driver {
    /// What a successful execution yields (rows, affected count, ...).
    type Output;
    /// The driver's error type.
    type Error;

    /// Execute `sql` with `params`.
    fn execute(&mut self, sql: &str, params: &Params) -> Result<Self::Output, Self::Error>;
}

impl<F, O, E> Driver for F
where
    F: FnMut(&str, &Params) -> Result<O, E>,
{
    type Output = O;
    type Error = E;

    fn execute(&mut self, sql: &str, params: &Params) -> Result<O, E> {
        self(sql, params)
    }
}
