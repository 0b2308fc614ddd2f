use crate::data_type::FloatData;
use crate::operators::OperatorKind;
use crate::{ExError, ExResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Any mathematical symbol of an expression, either a number or an operator.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol<T: FloatData> {
    Num(T),
    Op(OperatorKind),
}

impl<T: FloatData> Symbol<T> {
    pub fn is_operator(&self) -> bool {
        matches!(self, Symbol::Op(_))
    }

    pub fn num(&self) -> Option<T> {
        match self {
            Symbol::Num(x) => Some(*x),
            Symbol::Op(_) => None,
        }
    }

    pub fn op(&self) -> Option<OperatorKind> {
        match self {
            Symbol::Op(op) => Some(*op),
            Symbol::Num(_) => None,
        }
    }

    /// Returns `true` if the symbol is an operator that binds less tightly than `op`.
    pub(crate) fn is_op_looser_than(&self, op: OperatorKind) -> bool {
        match self {
            Symbol::Op(own) => op.binds_tighter_than(*own),
            Symbol::Num(_) => false,
        }
    }
}

/// Applies `op` to two number symbols and returns a new number symbol.
///
/// # Errors
///
/// If one of the operands is an operator we return
/// [`ExError::OperandIsOperator`](ExError::OperandIsOperator).
///
pub fn apply<T: FloatData>(
    left: Symbol<T>,
    op: OperatorKind,
    right: Symbol<T>,
) -> ExResult<Symbol<T>> {
    match (left, right) {
        (Symbol::Num(a), Symbol::Num(b)) => Ok(Symbol::Num(op.apply(a, b))),
        _ => Err(ExError::OperandIsOperator),
    }
}

impl<T: FloatData> Display for Symbol<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Symbol::Num(x) => write!(f, "{}", x),
            Symbol::Op(op) => write!(f, "{}", op),
        }
    }
}

impl<T: FloatData> From<OperatorKind> for Symbol<T> {
    fn from(op: OperatorKind) -> Self {
        Symbol::Op(op)
    }
}
