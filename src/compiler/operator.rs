use std::fmt;

/// Infix operators of the formula language.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Concat,
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Concat,
        Operator::Eq,
        Operator::NotEq,
        Operator::Gt,
        Operator::Lt,
        Operator::GtEq,
        Operator::LtEq,
    ];

    /// Match a call tag against the operator symbols. Tags are exact: `<>`
    /// is not an alias of `!=`.
    pub fn from_tag(tag: &str) -> Option<Operator> {
        match tag {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "&" => Some(Operator::Concat),
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::NotEq),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            ">=" => Some(Operator::GtEq),
            "<=" => Some(Operator::LtEq),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Concat => "&",
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
        }
    }

    /// Whether `operands` is an acceptable operand count. Only `-` has a
    /// prefix form.
    pub fn accepts(&self, operands: usize) -> bool {
        match self {
            Operator::Sub => operands == 1 || operands == 2,
            _ => operands == 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self)
    }
}
