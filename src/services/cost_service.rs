use std::fmt::Display;
use std::io::{self, Write};
use std::ops::Mul;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::cost::{CostQuote, Number, ParseNumberError};

#[derive(Error, Debug)]
pub enum CostError {
    #[error("Invalid operand type for {operand}: '{value}' is not a number")]
    InvalidOperandType { operand: &'static str, value: String },

    #[error("Operand out of range for {operand}: '{value}' does not fit in a 64-bit integer")]
    OperandOutOfRange { operand: &'static str, value: String },

    #[error("Cost overflow: {qty} * {price} does not fit in a 64-bit integer")]
    Overflow { qty: Number, price: Number },

    #[error("Failed to write cost: {0}")]
    Output(#[from] std::io::Error),
}

/// How a computed cost reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Write the cost as one line and hand nothing back.
    Print,
    /// Hand the cost back for further use.
    Return,
}

/// Multiplies quantity by unit price.
pub fn compute<Q, P>(qty: Q, price: P) -> Q::Output
where
    Q: Mul<P>,
{
    qty * price
}

/// Computes the cost and prints it to stdout. A failed write is logged, not returned.
pub fn compute_and_report<Q, P>(qty: Q, price: P)
where
    Q: Mul<P>,
    Q::Output: Display,
{
    if let Err(e) = compute_and_report_to(&mut io::stdout().lock(), qty, price) {
        error!("{}", e);
    }
}

/// Same as [`compute_and_report`] with an explicit sink.
pub fn compute_and_report_to<W, Q, P>(out: &mut W, qty: Q, price: P) -> Result<(), CostError>
where
    W: Write,
    Q: Mul<P>,
    Q::Output: Display,
{
    deliver(out, compute(qty, price), ReportMode::Print)?;
    Ok(())
}

/// Applies the caller's report policy to an already computed cost.
pub fn deliver<W, T>(out: &mut W, cost: T, mode: ReportMode) -> Result<Option<T>, CostError>
where
    W: Write,
    T: Display,
{
    match mode {
        ReportMode::Print => {
            writeln!(out, "{}", cost)?;
            Ok(None)
        }
        ReportMode::Return => Ok(Some(cost)),
    }
}

pub struct CostService;

impl CostService {
    pub fn new() -> Self {
        Self
    }

    /// Multiplies two dynamic operands with integer/float promotion.
    pub fn compute_numbers(&self, qty: Number, price: Number) -> Result<Number, CostError> {
        qty.checked_mul(price).ok_or_else(|| {
            error!("Integer overflow computing {} * {}", qty, price);
            CostError::Overflow { qty, price }
        })
    }

    /// Parses both operands from text and computes their cost.
    pub fn quote(&self, qty: &str, price: &str) -> Result<CostQuote, CostError> {
        let quantity = parse_operand("quantity", qty)?;
        let unit_price = parse_operand("unit price", price)?;
        let cost = self.compute_numbers(quantity, unit_price)?;

        debug!("Computed cost {} = {} * {}", cost, quantity, unit_price);
        Ok(CostQuote {
            quantity,
            unit_price,
            cost,
        })
    }
}

impl Default for CostService {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_operand(operand: &'static str, raw: &str) -> Result<Number, CostError> {
    raw.parse::<Number>().map_err(|e| {
        debug!("Rejected {} operand: {}", operand, e);
        let value = raw.to_string();
        match e {
            ParseNumberError::Invalid(_) => CostError::InvalidOperandType { operand, value },
            ParseNumberError::OutOfRange(_) => CostError::OperandOutOfRange { operand, value },
        }
    })
}
