use crate::expr::{self, Expr};

/// Renders `e` in fully parenthesized prefix form, e.g. `(* (- 123.0) (group 45.67))`.
pub fn print(e: &Expr) -> String {
    let mut printer = AstPrinter {};
    e.accept(&mut printer)
}

struct AstPrinter;

impl AstPrinter {
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut s = String::new();
        s.push('(');
        s.push_str(name);

        for e in exprs.iter() {
            s.push(' ');
            s.push_str(e.accept(self).as_str());
        }

        s.push(')');
        s
    }
}

impl expr::Visitor<String> for AstPrinter {
    fn visit_binary_expr(&mut self, e: &expr::Binary) -> String {
        self.parenthesize(
            e.op.lexeme(),
            &[e.left.as_ref(), e.right.as_ref()]
        )
    }

    fn visit_grouping_expr(&mut self, e: &expr::Grouping) -> String {
        self.parenthesize("group", &[e.expression.as_ref()])
    }

    fn visit_literal_expr(&mut self, e: &expr::Literal) -> String {
        e.value.to_string()
    }

    fn visit_unary_expr(&mut self, e: &expr::Unary) -> String {
        self.parenthesize(e.op.lexeme(), &[e.right.as_ref()])
    }
}
