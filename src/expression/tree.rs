use crate::data_type::FloatData;
use crate::expression::node::Node;
use crate::operators::OperatorKind;
use crate::parser::{self, ParseMode};
use crate::symbol::Symbol;
use crate::{ExError, ExResult};
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// This is the core data type representing a binary expression tree and the result of
/// parsing a string. Trees are built incrementally, symbol by symbol. A new operator becomes
/// the root if it does not bind tighter than the current root. Otherwise it is inserted into
/// the right spine below the last operator that binds less tightly. Numbers are always
/// appended at the end of the right spine.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use mathtree::ExprTree;
///
/// let tree = ExprTree::<f64>::from_string("1 + 2 * 3")?;
/// assert_eq!(tree.evaluate()?, 7.0);
/// assert_eq!(format!("{}", tree), "1+2*3");
///
/// // operators of equal priority are left-associative, also the exponent
/// let tree = ExprTree::<f64>::from_string("2 ^ 3 ^ 2")?;
/// assert_eq!(tree.evaluate()?, 64.0);
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExprTree<T: FloatData> {
    root: Option<Box<Node<T>>>,
}

impl<T: FloatData> Default for ExprTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatData> ExprTree<T> {
    /// Creates an empty tree that evaluates to zero.
    pub fn new() -> Self {
        ExprTree { root: None }
    }

    pub fn from_root(root: Node<T>) -> Self {
        ExprTree {
            root: Some(Box::new(root)),
        }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Parses a whitespace-delimited expression such as `"1 + 2 * 3"`. An empty string
    /// results in an empty tree.
    ///
    /// # Errors
    ///
    /// [`ExError::NotANumber`](ExError::NotANumber) if a token at an operand position is not
    /// a number, [`ExError::UnknownOperator`](ExError::UnknownOperator) if a single-character
    /// token at an operator position is not an operator.
    ///
    pub fn from_string(text: &str) -> ExResult<Self> {
        Self::from_string_with_mode(text, ParseMode::Strict)
    }

    /// Like [`from_string`](ExprTree::from_string) but a token that is not a number ends the
    /// expression instead of failing, e.g., `"1 + 2 * x"` is parsed as `"1 + 2 *"`.
    ///
    /// # Errors
    ///
    /// [`ExError::UnknownOperator`](ExError::UnknownOperator), see
    /// [`from_string`](ExprTree::from_string).
    ///
    pub fn from_string_lenient(text: &str) -> ExResult<Self> {
        Self::from_string_with_mode(text, ParseMode::Lenient)
    }

    pub fn from_string_with_mode(text: &str, mode: ParseMode) -> ExResult<Self> {
        if text.is_empty() {
            return Ok(Self::new());
        }
        let symbols = parser::tokenize::<T>(text, mode)?;
        Ok(Self::from_symbols(symbols))
    }

    /// Builds a tree from alternating numbers and operators starting and ending with a
    /// number. Other sequences do not fail but result in trees without meaningful values.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol<T>>,
    {
        let mut tree = Self::new();
        for symbol in symbols {
            tree.insert(symbol);
        }
        tree
    }

    /// Inserts the next symbol of an expression into the tree.
    pub fn insert(&mut self, symbol: Symbol<T>) {
        trace!("inserting {}", symbol);
        match symbol {
            Symbol::Num(_) => self.insert_number(symbol),
            Symbol::Op(op) => self.insert_operator(op),
        }
    }

    fn insert_number(&mut self, symbol: Symbol<T>) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = &mut node.right;
        }
        *slot = Some(Box::new(Node::new(symbol)));
    }

    fn insert_operator(&mut self, op: OperatorKind) {
        let mut new_node = Node::new(Symbol::Op(op));
        let mut root = match self.root.take() {
            Some(root) => root,
            None => {
                self.root = Some(Box::new(new_node));
                return;
            }
        };
        let becomes_root = match root.value {
            Symbol::Num(_) => true,
            Symbol::Op(root_op) => !op.binds_tighter_than(root_op),
        };
        if becomes_root {
            trace!("{} becomes root", op);
            new_node.left = Some(root);
            self.root = Some(Box::new(new_node));
        } else {
            // climb down the right spine past all operators that bind less tightly
            let mut slot = &mut root.right;
            let mut depth = 1usize;
            loop {
                let climb = slot
                    .as_deref()
                    .map_or(false, |node| node.value.is_op_looser_than(op));
                if !climb {
                    break;
                }
                match slot {
                    Some(node) => slot = &mut node.right,
                    None => break,
                }
                depth += 1;
            }
            trace!("{} spliced into right spine at depth {}", op, depth);
            new_node.left = slot.take();
            *slot = Some(Box::new(new_node));
            self.root = Some(root);
        }
    }

    /// Evaluates the tree. An empty tree evaluates to zero and a tree that consists of a single
    /// number evaluates to that number.
    ///
    /// # Errors
    ///
    /// See [`Node::evaluate`](Node::evaluate).
    ///
    pub fn evaluate(&self) -> ExResult<T> {
        match self.root.as_deref() {
            None => Ok(T::zero()),
            Some(Node {
                value: Symbol::Num(x),
                ..
            }) => Ok(*x),
            Some(root) => root.evaluate(),
        }
    }

    /// Returns all symbols of the tree, see [`Node::preorder`](Node::preorder).
    pub fn preorder(&self) -> Vec<Symbol<T>> {
        self.root
            .as_deref()
            .map(|root| root.preorder())
            .unwrap_or_default()
    }

    /// Concatenates the textual rendering of all symbols in pre-order. Tokenizing the result
    /// does in general not reproduce the tree, since separating spaces are not rendered.
    pub fn to_preorder_string(&self) -> String {
        self.root
            .as_deref()
            .map(|root| root.to_preorder_string())
            .unwrap_or_default()
    }
}

impl<T: FloatData> FromStr for ExprTree<T> {
    type Err = ExError;
    fn from_str(text: &str) -> ExResult<Self> {
        Self::from_string(text)
    }
}

impl<T: FloatData> Display for ExprTree<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_preorder_string())
    }
}

#[cfg(test)]
mod test {
    use super::ExprTree;
    use crate::expression::node::Node;
    use crate::operators::OperatorKind;
    use crate::symbol::Symbol;
    use crate::{ExError, ExResult};

    fn num(x: f64) -> Node<f64> {
        Node::new(Symbol::Num(x))
    }

    fn op(kind: OperatorKind, left: Node<f64>, right: Node<f64>) -> Node<f64> {
        Node::with_children(Symbol::Op(kind), left, right)
    }

    #[test]
    fn test_tighter_operator_goes_right() -> ExResult<()> {
        let tree = ExprTree::<f64>::from_string("1 + 2 * 3")?;
        let reference = op(
            OperatorKind::Add,
            num(1.0),
            op(OperatorKind::Multiply, num(2.0), num(3.0)),
        );
        assert_eq!(tree, ExprTree::from_root(reference));
        Ok(())
    }

    #[test]
    fn test_looser_operator_becomes_root() -> ExResult<()> {
        let tree = ExprTree::<f64>::from_string("2 * 3 + 1")?;
        let reference = op(
            OperatorKind::Add,
            op(OperatorKind::Multiply, num(2.0), num(3.0)),
            num(1.0),
        );
        assert_eq!(tree.root(), Some(&reference));
        Ok(())
    }

    #[test]
    fn test_equal_priority_becomes_root() -> ExResult<()> {
        let tree = ExprTree::<f64>::from_string("10 - 2 - 3")?;
        let reference = op(
            OperatorKind::Subtract,
            op(OperatorKind::Subtract, num(10.0), num(2.0)),
            num(3.0),
        );
        assert_eq!(tree.root(), Some(&reference));
        let tree = ExprTree::<f64>::from_string("2 ^ 3 ^ 2")?;
        let reference = op(
            OperatorKind::Exponent,
            op(OperatorKind::Exponent, num(2.0), num(3.0)),
            num(2.0),
        );
        assert_eq!(tree.root(), Some(&reference));
        Ok(())
    }

    #[test]
    fn test_climb_right_spine() -> ExResult<()> {
        // ^ climbs past + and * and ends up above the 3
        let tree = ExprTree::<f64>::from_string("1 + 2 * 3 ^ 2")?;
        let reference = op(
            OperatorKind::Add,
            num(1.0),
            op(
                OperatorKind::Multiply,
                num(2.0),
                op(OperatorKind::Exponent, num(3.0), num(2.0)),
            ),
        );
        assert_eq!(tree.root(), Some(&reference));
        // * stops above ^ since ^ binds tighter
        let tree = ExprTree::<f64>::from_string("1 + 2 ^ 3 * 4")?;
        let reference = op(
            OperatorKind::Add,
            num(1.0),
            op(
                OperatorKind::Multiply,
                op(OperatorKind::Exponent, num(2.0), num(3.0)),
                num(4.0),
            ),
        );
        assert_eq!(tree.root(), Some(&reference));
        Ok(())
    }

    #[test]
    fn test_single_and_empty() -> ExResult<()> {
        let tree = ExprTree::<f64>::from_string("42")?;
        assert_eq!(tree.root(), Some(&num(42.0)));
        assert_eq!(tree.evaluate()?, 42.0);
        let tree = ExprTree::<f64>::from_string("")?;
        assert!(tree.is_empty());
        assert_eq!(tree.evaluate()?, 0.0);
        assert_eq!(tree.to_preorder_string(), "");
        assert!(tree.preorder().is_empty());
        Ok(())
    }

    #[test]
    fn test_trailing_operator() -> ExResult<()> {
        let tree = ExprTree::<f64>::from_string("1 +")?;
        assert_eq!(tree.to_preorder_string(), "1+");
        assert_eq!(tree.evaluate(), Err(ExError::MissingOperand));
        Ok(())
    }

    #[test]
    fn test_malformed_sequences() {
        // consecutive numbers hang off the right of a number root
        let tree = ExprTree::from_symbols([Symbol::Num(1.0), Symbol::Num(2.0)]);
        assert_eq!(tree.evaluate(), Ok(1.0));
        let tree = ExprTree::<f64>::from_symbols([
            Symbol::Op(OperatorKind::Add),
            Symbol::Op(OperatorKind::Multiply),
        ]);
        assert_eq!(tree.to_preorder_string(), "+*");
        assert_eq!(tree.evaluate(), Err(ExError::MissingOperand));
    }

    #[test]
    fn test_insert() -> ExResult<()> {
        let mut tree = ExprTree::new();
        tree.insert(Symbol::Num(4.0));
        tree.insert(Symbol::Op(OperatorKind::Divide));
        tree.insert(Symbol::Num(8.0));
        assert_eq!(tree.evaluate()?, 0.5);
        if let Some(root) = tree.root_mut() {
            root.set_right(num(2.0));
        }
        assert_eq!(tree.evaluate()?, 2.0);
        Ok(())
    }

    #[test]
    fn test_long_chain_with_trace_logging() -> ExResult<()> {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
        let text = format!("{}1", "2 * 1 + ".repeat(5_000));
        let tree = ExprTree::<f64>::from_string(&text)?;
        assert_eq!(tree.evaluate()?, 10_001.0);
        Ok(())
    }

    #[test]
    fn test_from_str() -> ExResult<()> {
        let tree: ExprTree<f32> = "3 * 3 - 1".parse()?;
        assert_eq!(tree.evaluate()?, 8.0);
        assert_eq!(
            "3 x 3".parse::<ExprTree<f32>>(),
            Err(ExError::UnknownOperator('x'))
        );
        Ok(())
    }
}
