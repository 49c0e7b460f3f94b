//! SQL expression operators.

use rusqlite::types::Value;

use crate::{expr::column::Col, traits::Expression};

/// An equality predicate, `column = ?`, with its bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    column: Col,
    value: Value,
}

impl Filter {
    pub fn new(column: Col, value: Value) -> Self {
        Self {
            column,
            value,
        }
    }

    pub fn column(&self) -> Col {
        self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Expression for Filter {
    fn to_sql(&self, prefix: &str, params: &mut Vec<Value>) -> String {
        let left_sql = self.column.to_sql(prefix, params);
        params.push(self.value.clone());
        format!("{} = ?", left_sql)
    }
}
