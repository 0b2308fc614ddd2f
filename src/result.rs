use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if something within Mathtree went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum ExError {
    /// An operator token is not one of `+ - * / ^`.
    UnknownOperator(char),
    /// A token at an operand position cannot be parsed as a number.
    NotANumber(String),
    /// An operator has been applied to something that is not a number.
    OperandIsOperator,
    /// A number leaf has been evaluated as if it were an operator.
    LeafEvaluatedAsOperator,
    /// An operator node lacks a child, e.g., after parsing `"1 +"`.
    MissingOperand,
}
impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ExError::UnknownOperator(c) => write!(f, "unknown operator \"{}\"", c),
            ExError::NotANumber(token) => write!(f, "{} is not a number", token),
            ExError::OperandIsOperator => {
                write!(f, "mathematical operation passed as numeric value")
            }
            ExError::LeafEvaluatedAsOperator => {
                write!(f, "numeric value evaluated as mathematical operator")
            }
            ExError::MissingOperand => write!(f, "operator is missing an operand"),
        }
    }
}
impl Error for ExError {}

/// Mathtree' result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

#[test]
fn test_display() {
    assert_eq!(
        format!("{}", ExError::UnknownOperator('&')),
        "unknown operator \"&\""
    );
    assert_eq!(
        ExError::NotANumber("abc".to_string()).to_string(),
        "abc is not a number"
    );
}
