use crate::{
    compiler::{is_identifier, quote_field, quote_string, CompileError, Operator, FUNCTIONS},
    formula::{Formula, Literal},
    FormulaConfig,
};

/// Turns a resolved formula tree into formula text.
///
/// Field references handed to a backend already carry display names; a
/// backend never sees aliases or field ids.
pub trait FormulaBackend {
    fn compile(&self, formula: &Formula) -> Result<String, CompileError>;
}

/// Default backend writing Airtable formula syntax, e.g.
/// `AND({firstName}="Robert",{age}>35)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormulaCompiler {
    pub allow_unknown_functions: bool,
}

impl FormulaCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormulaConfig) -> Self {
        Self { allow_unknown_functions: config.allow_unknown_functions }
    }

    fn write_node(&self, node: &Formula, out: &mut String) -> Result<(), CompileError> {
        match node {
            Formula::Literal(l) => out.push_str(&Self::literal(l)?),
            Formula::Field(f) => out.push_str(&quote_field(&f.field)),
            Formula::Call { tag, args } => match Operator::from_tag(tag) {
                Some(op) => self.write_operation(op, args, out)?,
                None => self.write_function(tag, args, out)?,
            },
        }
        Ok(())
    }

    fn write_operation(&self, op: Operator, args: &[Formula], out: &mut String) -> Result<(), CompileError> {
        match args {
            [operand] if op.accepts(1) => {
                out.push_str(op.symbol());
                self.write_operand(operand, out)
            }
            [left, right] => {
                self.write_operand(left, out)?;
                out.push_str(op.symbol());
                self.write_operand(right, out)
            }
            _ => Err(CompileError::InvalidArity { operator: op.to_string(), got: args.len() }),
        }
    }

    /// Operands that are operations themselves, or negative numbers, are
    /// wrapped in parentheses so the text keeps the tree's grouping.
    fn write_operand(&self, operand: &Formula, out: &mut String) -> Result<(), CompileError> {
        let wrap = match operand {
            Formula::Call { tag, .. } => Operator::from_tag(tag).is_some(),
            Formula::Literal(Literal::Int(i)) => *i < 0,
            Formula::Literal(Literal::Float(f)) => f.into_inner() < 0.0,
            _ => false,
        };

        if wrap {
            out.push('(');
            self.write_node(operand, out)?;
            out.push(')');
            Ok(())
        } else {
            self.write_node(operand, out)
        }
    }

    fn write_function(&self, tag: &str, args: &[Formula], out: &mut String) -> Result<(), CompileError> {
        let name = match FUNCTIONS.get(tag) {
            Some(canonical) => canonical,
            None if self.allow_unknown_functions && is_identifier(tag) => tag,
            None => return Err(CompileError::UnknownOperator(tag.to_string())),
        };

        out.push_str(name);
        out.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.write_node(arg, out)?;
        }
        out.push(')');
        Ok(())
    }

    fn literal(literal: &Literal) -> Result<String, CompileError> {
        match literal {
            Literal::String(s) => Ok(quote_string(s)),
            Literal::Int(i) => Ok(i.to_string()),
            Literal::Float(f) => {
                let f = f.into_inner();
                if !f.is_finite() {
                    return Err(CompileError::NonFiniteNumber(f));
                }
                // -0 prints as "-0"
                if f == 0.0 { Ok("0".to_string()) } else { Ok(f.to_string()) }
            }
            Literal::Bool(true) => Ok("TRUE()".to_string()),
            Literal::Bool(false) => Ok("FALSE()".to_string()),
        }
    }
}

impl FormulaBackend for FormulaCompiler {
    fn compile(&self, formula: &Formula) -> Result<String, CompileError> {
        let mut out = String::new();
        self.write_node(formula, &mut out)?;
        Ok(out)
    }
}
