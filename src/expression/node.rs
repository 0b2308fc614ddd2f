use crate::data_type::FloatData;
use crate::definitions::N_NODES_ON_STACK;
use crate::operators::OperatorKind;
use crate::symbol::{self, Symbol};
use crate::{ExError, ExResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// One position in an expression tree. Each node exclusively owns its children.
///
/// Nodes can be assembled manually, e.g., `1 + 2 * 3` via
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use mathtree::{Node, OperatorKind, Symbol};
/// let mul = Node::with_children(
///     Symbol::Op(OperatorKind::Multiply),
///     Node::new(Symbol::Num(2.0)),
///     Node::new(Symbol::Num(3.0)),
/// );
/// let add = Node::with_children(Symbol::Op(OperatorKind::Add), Node::new(Symbol::Num(1.0)), mul);
/// assert_eq!(add.evaluate()?, 7.0);
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<T: FloatData> {
    pub(crate) value: Symbol<T>,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T: FloatData> Node<T> {
    pub fn new(value: Symbol<T>) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_children(value: Symbol<T>, left: Node<T>, right: Node<T>) -> Self {
        Node {
            value,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn value(&self) -> Symbol<T> {
        self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left child and returns the previous one.
    pub fn set_left(&mut self, left: Node<T>) -> Option<Node<T>> {
        self.left.replace(Box::new(left)).map(|b| *b)
    }

    /// Replaces the right child and returns the previous one.
    pub fn set_right(&mut self, right: Node<T>) -> Option<Node<T>> {
        self.right.replace(Box::new(right)).map(|b| *b)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Flattens the subtree into its symbols by visiting the left subtree, the node itself,
    /// and the right subtree.
    pub fn preorder(&self) -> Vec<Symbol<T>> {
        let mut symbols = Vec::new();
        let mut pending = SmallVec::<[&Node<T>; N_NODES_ON_STACK]>::new();
        let mut cur = Some(self);
        loop {
            while let Some(node) = cur {
                pending.push(node);
                cur = node.left.as_deref();
            }
            match pending.pop() {
                Some(node) => {
                    symbols.push(node.value);
                    cur = node.right.as_deref();
                }
                None => break,
            }
        }
        symbols
    }

    /// Concatenates the textual rendering of all symbols in pre-order.
    pub fn to_preorder_string(&self) -> String {
        self.preorder().iter().map(|s| s.to_string()).collect()
    }

    /// Evaluates the operator of this node with the evaluated children as operands.
    ///
    /// # Errors
    ///
    /// [`ExError::LeafEvaluatedAsOperator`](ExError::LeafEvaluatedAsOperator) if this node is a
    /// number, [`ExError::MissingOperand`](ExError::MissingOperand) if an operator in the subtree
    /// lacks a child.
    ///
    pub fn evaluate(&self) -> ExResult<T> {
        if !self.value.is_operator() {
            return Err(ExError::LeafEvaluatedAsOperator);
        }
        // post-order walk, number children contribute their own value only
        let mut pending = SmallVec::<[Visit<T>; N_NODES_ON_STACK]>::new();
        let mut operands = SmallVec::<[Symbol<T>; N_NODES_ON_STACK]>::new();
        pending.push(Visit::Enter(self));
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => match node.value {
                    Symbol::Num(_) => operands.push(node.value),
                    Symbol::Op(op) => {
                        let left = node.left.as_deref().ok_or(ExError::MissingOperand)?;
                        let right = node.right.as_deref().ok_or(ExError::MissingOperand)?;
                        pending.push(Visit::Reduce(op));
                        pending.push(Visit::Enter(right));
                        pending.push(Visit::Enter(left));
                    }
                },
                Visit::Reduce(op) => {
                    let right = operands.pop().ok_or(ExError::MissingOperand)?;
                    let left = operands.pop().ok_or(ExError::MissingOperand)?;
                    operands.push(symbol::apply(left, op, right)?);
                }
            }
        }
        match operands.pop() {
            Some(Symbol::Num(x)) => Ok(x),
            Some(Symbol::Op(_)) => Err(ExError::OperandIsOperator),
            None => Err(ExError::MissingOperand),
        }
    }
}

enum Visit<'a, T: FloatData> {
    Enter(&'a Node<T>),
    Reduce(OperatorKind),
}

impl<T: FloatData> Drop for Node<T> {
    fn drop(&mut self) {
        // children are detached before they are dropped to keep deep trees off the call stack
        let mut pending = SmallVec::<[Box<Node<T>>; N_NODES_ON_STACK]>::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: FloatData> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_preorder_string())
    }
}
