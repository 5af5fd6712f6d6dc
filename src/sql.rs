use std::fmt;

/// A single value in an `INSERT ... VALUES (...)` list.
///
/// Text is wrapped in single quotes as-is. Nothing is escaped, so a value
/// containing `'` yields broken SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i64),
    Null,
    /// Emitted verbatim, e.g. a scalar subquery.
    Raw(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn nullable(s: Option<&str>) -> Self {
        s.map_or(Value::Null, Value::text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Null => f.write_str("null"),
            Value::Raw(s) => f.write_str(s),
        }
    }
}

pub fn quote(s: &str) -> String {
    Value::text(s).to_string()
}

/// `(SELECT id FROM <table> WHERE <column> = '<value>')`
pub fn lookup_id(table: &str, column: &str, value: &str) -> Value {
    Value::Raw(format!(
        "(SELECT id FROM {} WHERE {} = {})",
        table,
        column,
        quote(value)
    ))
}

#[derive(Debug, Clone)]
pub struct Insert {
    table: String,
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

pub fn insert_into(table: impl Into<String>) -> Insert {
    Insert {
        table: table.into(),
        columns: Vec::new(),
        values: Vec::new(),
    }
}

impl Insert {
    pub fn value(mut self, column: &'static str, value: Value) -> Self {
        self.columns.push(column);
        self.values.push(value);
        self
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(
            f,
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            self.columns.join(", "),
            values.join(", ")
        )
    }
}

pub fn use_database(name: &str) -> String {
    format!("USE {};", name)
}

pub fn create_user(user: &str, password: &str) -> String {
    format!(
        "CREATE USER IF NOT EXISTS {} IDENTIFIED BY {};",
        quote(user),
        quote(password)
    )
}

pub fn create_database(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS {};", name)
}

pub fn grant_all(database: &str, user: &str) -> String {
    format!("GRANT ALL ON {}.* TO {};", database, quote(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_renders_columns_in_order() {
        let sql = insert_into("domains")
            .value("name", Value::text("test.org"))
            .to_string();
        assert_eq!(sql, "INSERT INTO domains (name) VALUES ('test.org');");
    }

    #[test]
    fn mixed_values() {
        let sql = insert_into("t")
            .value("a", Value::Int(3))
            .value("b", Value::nullable(None))
            .value("c", Value::nullable(Some("x")))
            .value("d", lookup_id("domains", "name", "h"))
            .to_string();
        assert_eq!(
            sql,
            "INSERT INTO t (a, b, c, d) VALUES (3, null, 'x', (SELECT id FROM domains WHERE name = 'h'));"
        );
    }

    #[test]
    fn text_is_not_escaped() {
        assert_eq!(quote("it's"), "'it's'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn provisioning_statements() {
        assert_eq!(
            create_user("db", "pw"),
            "CREATE USER IF NOT EXISTS 'db' IDENTIFIED BY 'pw';"
        );
        assert_eq!(create_database("db"), "CREATE DATABASE IF NOT EXISTS db;");
        assert_eq!(grant_all("db", "db"), "GRANT ALL ON db.* TO 'db';");
        assert_eq!(use_database("yellow"), "USE yellow;");
    }
}
