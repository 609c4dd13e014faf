use astgen::generate_ast;

use crate::{token::Token, value::Literal as Value};

generate_ast!(
    pub Expr,
    [
        Binary   => { left: Box<Expr>, op: Token, right: Box<Expr> };
        Grouping => { expression: Box<Expr> };
        Literal  => { value: Value };
        Unary    => { op: Token, right: Box<Expr> };
    ]
);

impl Binary {
    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn op(&self) -> &Token {
        &self.op
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

impl Grouping {
    pub fn expression(&self) -> &Expr {
        &self.expression
    }
}

impl Literal {
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Unary {
    pub fn op(&self) -> &Token {
        &self.op
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}
