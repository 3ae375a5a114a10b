//! Parse-level expression tree.

/// A boolean expression over feature ids, as parsed.
///
/// This is the surface form; evaluation always goes through the CNF
/// normalization in [`super::Cnf`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A feature reference.
    Var(String),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Shorthand constructor for a variable node.
    #[inline]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Iterate the distinct variable names in first-occurrence order.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        self.collect_vars(&mut seen);
        seen
    }

    fn collect_vars<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Var(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Self::Not(inner) => inner.collect_vars(out),
            Self::And(a, b) | Self::Or(a, b) => {
                a.collect_vars(out);
                b.collect_vars(out);
            }
        }
    }
}

impl std::fmt::Display for Expr {
    /// Re-serialize in the source grammar, parenthesizing where the
    /// child binds looser than the parent.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(name) => f.write_str(name),
            Self::Not(inner) => match **inner {
                Expr::Var(_) | Expr::Not(_) => write!(f, "~{inner}"),
                _ => write!(f, "~({inner})"),
            },
            // The grammar is left-associative, so right-nested chains
            // of the same operator need explicit parentheses to
            // reparse into the same tree.
            Self::And(a, b) => {
                let left = matches!(**a, Expr::Or(_, _));
                let right = matches!(**b, Expr::Or(_, _) | Expr::And(_, _));
                match (left, right) {
                    (true, true) => write!(f, "({a}) & ({b})"),
                    (true, false) => write!(f, "({a}) & {b}"),
                    (false, true) => write!(f, "{a} & ({b})"),
                    (false, false) => write!(f, "{a} & {b}"),
                }
            }
            Self::Or(a, b) => {
                if matches!(**b, Expr::Or(_, _)) {
                    write!(f, "{a} | ({b})")
                } else {
                    write!(f, "{a} | {b}")
                }
            }
        }
    }
}
