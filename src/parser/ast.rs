// AST definitions for parsed enum declarations

use std::fmt;

/// A `::`-separated chain of name segments, e.g. `std::uint8_t`.
///
/// Always has at least one segment. A leading empty segment encodes a
/// leading `::` (`::a::b` is stored as `["", "a", "b"]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub segments: Vec<String>,
}

impl QualifiedName {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// Arithmetic operators allowed between chain components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        };
        write!(f, "{}", symbol)
    }
}

/// One operand of a binary-operation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprComponent {
    /// Numeric constant, kept as its source text (`42`, `0x1F`)
    Number(String),
    /// Reference to another name, possibly qualified (`A`, `Other::B`)
    Name(QualifiedName),
    /// Parenthesized subexpression, recursively a chain of its own
    Parenthesized(ExpressionChain),
}

impl fmt::Display for ExprComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprComponent::Number(text) => write!(f, "{}", text),
            ExprComponent::Name(name) => write!(f, "{}", name),
            ExprComponent::Parenthesized(chain) => write!(f, "({})", chain),
        }
    }
}

/// A component together with the operator that follows it.
///
/// `op` is `Some` on every link except the last. The one exception is
/// an initializer written with a dangling operator (`A = 1 +`): the
/// chain ends where the next component would have started, so the
/// final link keeps the operator it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub component: ExprComponent,
    pub op: Option<BinaryOp>,
}

/// A flat, left-to-right chain of operands and arithmetic operators.
///
/// No operator precedence is modeled; the chain records the initializer
/// exactly as written, and evaluation order is left to the consumer. An
/// empty chain means the enumerator had no initializer. A chain written
/// with a trailing operator keeps that operator on its last link (see
/// [`ChainLink`]).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpressionChain {
    pub links: Vec<ChainLink>,
}

impl ExpressionChain {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl fmt::Display for ExpressionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in &self.links {
            write!(f, "{}", link.component)?;
            if let Some(op) = link.op {
                write!(f, " {} ", op)?;
            }
        }
        Ok(())
    }
}

/// One enumerator: its name and the initializer chain, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub value: ExpressionChain,
}

/// A parsed `enum` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Empty for anonymous enums
    pub name: String,
    /// True for `enum class` / `enum struct`
    pub is_scoped: bool,
    /// Qualified names after the `:` clause. The grammar accepts any
    /// number of them, though well-formed C++ has at most one.
    pub base_types: Vec<QualifiedName>,
    pub members: Vec<Member>,
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enum")?;
        if self.is_scoped {
            write!(f, " class")?;
        }
        if !self.name.is_empty() {
            write!(f, " {}", self.name)?;
        }
        if !self.base_types.is_empty() {
            write!(f, " :")?;
            for base in &self.base_types {
                write!(f, " {}", base)?;
            }
        }
        write!(f, " {{ ")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member.name)?;
            if !member.value.is_empty() {
                write!(f, " = {}", member.value)?;
            }
        }
        write!(f, " }};")
    }
}
