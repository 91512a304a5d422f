use std::fmt;

use crate::interpreter::token::{Literal, Token};

/// An abstract syntax tree node representing an expression.
///
/// Each node owns its children exclusively; the parser builds a tree once and
/// nothing mutates it afterwards. Operator tokens are kept whole so the
/// evaluator can report runtime errors against their line and lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value (`nil`, boolean, number or string).
    Literal {
        /// The constant value.
        value: Literal,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expression: Box<Self>,
    },
    /// A prefix operation: `-x` or `!x`.
    Unary {
        /// The `-` or `!` token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:     Box<Self>,
        /// The `and` or `or` token.
        operator: Token,
        /// Right operand, evaluated only when the left does not decide.
        right:    Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value.
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The value expression.
        value: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: Literal) -> Self {
        Self::Literal { value }
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn grouping(expression: Self) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a logical node.
    #[must_use]
    pub fn logical(left: Self, operator: Token, right: Self) -> Self {
        Self::Logical { left: Box::new(left),
                        operator,
                        right: Box::new(right) }
    }

    /// Builds an assignment node.
    #[must_use]
    pub fn assign(name: Token, value: Self) -> Self {
        Self::Assign { name,
                       value: Box::new(value) }
    }
}

/// Renders the tree in parenthesized prefix form, e.g. `(* (- 1) (group 2))`.
///
/// String literals are quoted so `"1"` and `1` stay distinguishable.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value: Literal::String(s) } => write!(f, "\"{s}\""),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expression } => write!(f, "(group {expression})"),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Binary { left,
                           operator,
                           right, }
            | Self::Logical { left,
                              operator,
                              right, } => write!(f, "({} {left} {right})", operator.lexeme),
            Self::Variable { name } => f.write_str(&name.lexeme),
            Self::Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
        }
    }
}

/// A statement in the language.
///
/// A program is an ordered sequence of statements, executed once each, in
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects; the result is dropped.
    Expression {
        /// The expression.
        expr: Expr,
    },
    /// Evaluates an expression and sends its rendered text to the output.
    Print {
        /// The expression.
        expr: Expr,
    },
    /// `var name = initializer;`: defines a binding in the current scope.
    Var {
        /// The identifier token.
        name:        Token,
        /// The optional initializer; `nil` when absent.
        initializer: Option<Expr>,
    },
    /// `{ ... }`: runs the inner statements in a new nested scope.
    Block {
        /// The statements inside the braces.
        statements: Vec<Self>,
    },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr } => write!(f, "(; {expr})"),
            Self::Print { expr } => write!(f, "(print {expr})"),
            Self::Var { name,
                        initializer: Some(init), } => write!(f, "(var {} {init})", name.lexeme),
            Self::Var { name, initializer: None } => write!(f, "(var {})", name.lexeme),
            Self::Block { statements } => {
                f.write_str("(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                f.write_str(")")
            },
        }
    }
}
