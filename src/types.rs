use crate::source::Span;
use std::fmt;

/// One parsed form together with the source bytes it was read from.
/// Values built by hand for printing (diagnostics, tests) can use
/// `Span::default()`; the printer never looks at spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: Sexpr,
    pub span: Span,
}

impl Node {
    pub fn new(kind: Sexpr, span: Span) -> Self {
        Node { kind, span }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Sexpr's Display implementation
        write!(f, "{}", self.kind)
    }
}

/// An S-expression: the single data structure shared by code and data.
///
/// The reader only ever produces the `Symbol`, `Integer`, `Float` and
/// `List` kinds (`#t` reads as a symbol; booleans come from whatever
/// consumes the tree). `Boolean`, `None` and `Ellipsis` exist so the
/// printer can render values handed back by such a consumer.
#[derive(Debug, Clone, PartialEq)]
pub enum Sexpr {
    Symbol(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<Node>),
    None,
    Ellipsis,
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexpr::Symbol(s) => write!(f, "{}", s),
            Sexpr::Integer(i) => write!(f, "{}", i),
            Sexpr::Float(n) => {
                // Keep the decimal point on integral floats so 2.0 never
                // prints indistinguishably from the integer 2.
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Sexpr::Boolean(b) => write!(f, "{}", if *b { "#t" } else { "#f" }),
            Sexpr::List(items) => {
                write!(f, "(")?;
                let mut first = true;
                for item in items {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                    first = false;
                }
                write!(f, ")")
            }
            Sexpr::None => write!(f, "None"),
            Sexpr::Ellipsis => write!(f, "Ellipsis"),
        }
    }
}

/// Renders a form as a single line of Lisp surface syntax.
pub fn lispstr(node: &Node) -> String {
    node.to_string()
}
