#![doc(html_root_url = "https://docs.rs/mathtree/0.1.0")]
//! Mathtree is a simple evaluator of whitespace-delimited arithmetic expressions such as
//! `"1 + 2 * 3"`. Numbers and the binary operators `+`, `-`, `*`, `/`, and `^` are
//! supported.
//!
//! An expression is parsed into a binary tree in a single pass. Each symbol is inserted
//! into the tree as it is read while operator priorities are maintained, i.e., there is no
//! recursive-descent grammar and no separate sorting step. The tree is evaluated bottom-up.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use mathtree::prelude::*;
//! let tree = ExprTree::<f64>::from_string("2 * 3 + 1")?;
//! assert_eq!(tree.evaluate()?, 7.0);
//! #
//! #     Ok(())
//! # }
//! ```
//! Operators of equal priority are applied from left to right. This holds also for the
//! exponent operator, i.e., `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`.
//!
//! Tokens are separated by spaces. Tokens at operand positions are parsed with
//! [`FromStr`](std::str::FromStr). A token at an operator position that is longer than one
//! character ends the expression.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use mathtree::{ExError, ExprTree};
//! assert_eq!(
//!     ExprTree::<f64>::from_string("1 & 2"),
//!     Err(ExError::UnknownOperator('&'))
//! );
//! assert_eq!(
//!     ExprTree::<f64>::from_string("1 + two"),
//!     Err(ExError::NotANumber("two".to_string()))
//! );
//! // the lenient variant keeps what has been parsed before the offending token
//! let tree = ExprTree::<f64>::from_string_lenient("3 * 2 - two")?;
//! assert_eq!(tree.to_preorder_string(), "3*2-");
//! #
//! #     Ok(())
//! # }
//! ```
//! Trees can also be assembled manually from [`Node`](Node)s.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use mathtree::{ExprTree, Node, OperatorKind, Symbol};
//! let mut root = Node::new(Symbol::Op(OperatorKind::Subtract));
//! root.set_left(Node::new(Symbol::Num(5.0)));
//! root.set_right(Node::new(Symbol::Num(8.0)));
//! let tree = ExprTree::from_root(root);
//! assert_eq!(tree.evaluate()?, -3.0);
//! assert_eq!(format!("{}", tree), "5-8");
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! With the feature `serde`, trees, nodes, and symbols can be serialized and deserialized.
//!
mod data_type;
mod definitions;
mod expression;
mod operators;
mod parser;
mod result;
mod symbol;
mod util;

pub use {
    data_type::FloatData,
    expression::{node::Node, tree::ExprTree},
    operators::{operator_from_char, OperatorKind},
    parser::{next_number, next_operator, next_token, tokenize, ParseMode, SymbolVec},
    result::{ExError, ExResult},
    symbol::{apply, Symbol},
};

/// Exports everything needed to parse and evaluate expressions.
pub mod prelude {
    pub use super::{ExError, ExResult, ExprTree, FloatData, Node, OperatorKind, Symbol};
}

/// Parses a string into an expression tree and evaluates it.
///
/// # Errors
///
/// See [`ExprTree::from_string`](ExprTree::from_string) and
/// [`ExprTree::evaluate`](ExprTree::evaluate).
///
pub fn eval_str<T: FloatData>(text: &str) -> ExResult<T> {
    ExprTree::<T>::from_string(text)?.evaluate()
}

#[cfg(test)]
mod tests {
    use crate::{eval_str, util::assert_float_eq_f64};

    #[test]
    fn test_eval() {
        assert_float_eq_f64(eval_str("1.3 + 0.7").unwrap(), 2.0);
        assert_float_eq_f64(eval_str("1.3 + 0.7 * 2").unwrap(), 2.7);
        assert_float_eq_f64(eval_str("1.3 + 0.7 * 2 - 1").unwrap(), 1.7);
        assert_float_eq_f64(eval_str("1.3 + 0.7 * 2 - 1 / 10").unwrap(), 2.6);
        assert!(eval_str::<f64>("1.3 + 0.7 ** 2 - 1 / 10").is_ok());
        assert!(eval_str::<f64>("1.3+0.7").is_err());
        assert_float_eq_f64(eval_str("").unwrap(), 0.0);
    }
}
