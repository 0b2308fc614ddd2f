use crate::{ExError, ExResult};
use num::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The binary operators that can occur in an expression. The variants are listed in order of
/// non-decreasing priority, i.e., `Add = Subtract < Multiply = Divide < Exponent`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::Exponent,
    ];

    /// Translates a character into an operator.
    ///
    /// # Errors
    ///
    /// If `c` is none of `+ - * / ^` we return [`ExError::UnknownOperator`](ExError::UnknownOperator).
    ///
    pub fn from_char(c: char) -> ExResult<Self> {
        match c {
            '+' => Ok(OperatorKind::Add),
            '-' => Ok(OperatorKind::Subtract),
            '*' => Ok(OperatorKind::Multiply),
            '/' => Ok(OperatorKind::Divide),
            '^' => Ok(OperatorKind::Exponent),
            _ => Err(ExError::UnknownOperator(c)),
        }
    }

    /// Representation of the operator in the string to be parsed.
    pub fn repr(&self) -> char {
        match self {
            OperatorKind::Add => '+',
            OperatorKind::Subtract => '-',
            OperatorKind::Multiply => '*',
            OperatorKind::Divide => '/',
            OperatorKind::Exponent => '^',
        }
    }

    /// Priority of the operator. An operator with a higher number binds more tightly.
    pub fn prio(&self) -> i32 {
        match self {
            OperatorKind::Add | OperatorKind::Subtract => 0,
            OperatorKind::Multiply | OperatorKind::Divide => 1,
            OperatorKind::Exponent => 2,
        }
    }

    /// Returns `true` if `self` has a strictly higher priority than `other`. Operators of equal
    /// priority do not bind tighter than each other, which makes them left-associative.
    pub fn binds_tighter_than(&self, other: OperatorKind) -> bool {
        self.prio() > other.prio()
    }

    /// Applies the operator to two numbers. Division by zero follows IEEE-754 and never fails.
    pub fn apply<T: Float>(&self, a: T, b: T) -> T {
        match self {
            OperatorKind::Add => a + b,
            OperatorKind::Subtract => a - b,
            OperatorKind::Multiply => a * b,
            OperatorKind::Divide => a / b,
            OperatorKind::Exponent => a.powf(b),
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

/// Translates a character into an operator, see [`OperatorKind::from_char`](OperatorKind::from_char).
pub fn operator_from_char(c: char) -> ExResult<OperatorKind> {
    OperatorKind::from_char(c)
}
