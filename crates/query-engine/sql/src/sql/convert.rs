//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::string::SQL;

/// Render each item with `render`, separated by `separator`.
fn to_sql_separated<T>(
    items: &[T],
    separator: &str,
    sql: &mut SQL,
    render: impl Fn(&T, &mut SQL),
) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            sql.append_syntax(separator);
        }
        render(item, sql);
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        sql.append_syntax(" ");

        self.from.to_sql(sql);

        self.where_.to_sql(sql);

        self.group_by.to_sql(sql);

        self.order_by.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                to_sql_separated(select_list, ",", sql, |(col, expr), sql| {
                    expr.to_sql(sql);
                    sql.append_syntax(" AS ");
                    col.to_sql(sql);
                });
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        to_sql_separated(&self.tables, ",", sql, TableName::to_sql);
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        sql.append_syntax(" WHERE ");
        expression.to_sql(sql);
    }
}

impl GroupBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" GROUP BY ");
            to_sql_separated(&self.elements, ",", sql, Expression::to_sql);
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            to_sql_separated(&self.elements, ",", sql, OrderByElement::to_sql);
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        sql.append_syntax(" ");
        let OrderByDirection(direction) = &self.direction;
        sql.append_syntax(direction);
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            // The WHERE clause is a left-leaning chain of ANDs over simple
            // comparisons, so no parentheses are needed.
            Expression::And { left, right } => {
                left.to_sql(sql);
                sql.append_syntax(" AND ");
                right.to_sql(sql);
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::ColumnReference(column_reference) => column_reference.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::RawSql(text) => sql.append_syntax(text),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        let BinaryOperator(operator) = self;
        sql.append_syntax(" ");
        sql.append_syntax(operator);
        sql.append_syntax(" ");
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
            Value::String(s) => sql.append_string_literal(s),
            Value::Literal(literal) => sql.append_syntax(literal),
        }
    }
}

// names
impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let TableName(name) = self;
        sql.append_syntax(name);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_syntax(name);
    }
}

impl ColumnReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            ColumnReference::TableColumn { table, name } => {
                table.to_sql(sql);
                sql.append_syntax(".");
                name.to_sql(sql);
            }
        }
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers;
    use super::*;
    use similar_asserts::assert_eq;

    fn select_to_sql(select: &Select) -> String {
        let mut sql = SQL::new();
        select.to_sql(&mut sql);
        sql.sql
    }

    #[test]
    fn it_converts_star_select() {
        let select = helpers::star_select(From {
            tables: vec![TableName("submission_record".to_string())],
        });
        assert_eq!(
            select_to_sql(&select),
            "SELECT * FROM submission_record WHERE true"
        );
    }

    #[test]
    fn it_converts_select_list_with_quoted_aliases() {
        let mut select = helpers::star_select(From {
            tables: vec![
                TableName("author_record".to_string()),
                TableName("submission_record".to_string()),
            ],
        });
        select.select_list = SelectList::SelectList(vec![
            (
                helpers::make_column_alias("country".to_string()),
                Expression::RawSql("a_country".to_string()),
            ),
            (
                helpers::make_column_alias("authors".to_string()),
                Expression::RawSql("COUNT(*)".to_string()),
            ),
        ]);
        assert_eq!(
            select_to_sql(&select),
            "SELECT a_country AS `country`,COUNT(*) AS `authors` FROM author_record,submission_record WHERE true"
        );
    }

    #[test]
    fn it_chains_conjunctions_without_parentheses() {
        let mut select = helpers::star_select(From {
            tables: vec![TableName("review_record".to_string())],
        });
        select.where_ = Where(helpers::and_all(vec![
            helpers::equals(
                Expression::ColumnReference(ColumnReference::TableColumn {
                    table: TableName("review_record".to_string()),
                    name: ColumnName("data_set".to_string()),
                }),
                Expression::Value(Value::String("ds".to_string())),
            ),
            Expression::BinaryOperation {
                left: Box::new(Expression::RawSql("r_expertise_level".to_string())),
                operator: BinaryOperator(">=".to_string()),
                right: Box::new(Expression::Value(Value::Literal("3".to_string()))),
            },
        ]));
        select.group_by = GroupBy {
            elements: vec![
                Expression::RawSql("r_reviewer_name".to_string()),
                Expression::RawSql("r_submission_id".to_string()),
            ],
        };
        select.order_by = OrderBy {
            elements: vec![OrderByElement {
                target: Expression::RawSql("r_reviewer_name".to_string()),
                direction: OrderByDirection("DESC".to_string()),
            }],
        };
        assert_eq!(
            select_to_sql(&select),
            "SELECT * FROM review_record WHERE true AND review_record.data_set = 'ds' AND r_expertise_level >= 3 GROUP BY r_reviewer_name,r_submission_id ORDER BY r_reviewer_name DESC"
        );
    }

    #[test]
    fn string_literals_are_not_escaped() {
        let mut sql = SQL::new();
        Value::String("O'Brien".to_string()).to_sql(&mut sql);
        assert_eq!(sql.sql, "'O'Brien'");
    }
}
