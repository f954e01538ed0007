//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Expressions //

/// `left = right`
pub fn equals(left: Expression, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator: BinaryOperator("=".to_string()),
        right: Box::new(right),
    }
}

/// Fold a list of expressions into a chain of ANDs, starting from `true`.
/// An empty list yields `true` alone.
pub fn and_all(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    expressions
        .into_iter()
        .fold(true_expr(), |acc, expr| Expression::And {
            left: Box::new(acc),
            right: Box::new(expr),
        })
}

// Aliasing //

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

// SELECTs //

/// Build a simple select * with the rest empty.
pub fn star_select(from: From) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
    }
}
