//! SQL dialects: identifier quoting, literal rendering and statement text.
//!
//! Statements are rendered with literal values inlined, one statement per
//! line, each terminated by `;`. Literal rules:
//!
//! | Value                         | Rendered as                        |
//! |-------------------------------|------------------------------------|
//! | NULL                          | `NULL`                             |
//! | int, float                    | unquoted, shortest round-trip text |
//! | string, enum, set             | quoted string                      |
//! | date / time / datetime        | quoted canonical text              |
//! | json                          | quoted compact JSON text           |

use clap::ValueEnum;
use mess_core::Value;

/// SQL dialect selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    /// MySQL / MariaDB / TiDB
    Mysql,
    /// PostgreSQL
    #[value(alias = "postgres")]
    Postgresql,
}

impl DialectKind {
    /// The dialect implementation for this kind.
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Mysql => Box::new(MySql),
            DialectKind::Postgresql => Box::new(PostgreSql),
        }
    }
}

/// Trait for rendering statements in a target SQL dialect.
pub trait Dialect: Send + Sync {
    /// Dialect name, for logs.
    fn name(&self) -> &'static str;

    /// Quote a table or column name.
    fn quote_identifier(&self, name: &str) -> String;

    /// Quote a string literal.
    fn quote_string(&self, text: &str) -> String;

    /// Render a value as a SQL literal.
    fn literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => self.quote_string(s),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => {
                self.quote_string(&value.temporal_text().unwrap_or_default())
            }
            Value::Json(doc) => self.quote_string(&doc.to_string()),
        }
    }

    /// `INSERT INTO t (a, b) VALUES (1, 'x');`
    fn insert(&self, table: &str, columns: &[(&str, &Value)]) -> String {
        let names: Vec<String> = columns
            .iter()
            .map(|(name, _)| self.quote_identifier(name))
            .collect();
        let values: Vec<String> = columns.iter().map(|(_, v)| self.literal(v)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.quote_identifier(table),
            names.join(", "),
            values.join(", ")
        )
    }

    /// `UPDATE t SET a = 1, b = 'x' WHERE id = 7;`
    fn update(&self, table: &str, set: &[(&str, &Value)], key: &[(&str, &Value)]) -> String {
        format!(
            "UPDATE {} SET {} WHERE {};",
            self.quote_identifier(table),
            self.assignments(set, ", "),
            self.assignments(key, " AND ")
        )
    }

    /// `DELETE FROM t WHERE id = 7;`
    fn delete(&self, table: &str, key: &[(&str, &Value)]) -> String {
        format!(
            "DELETE FROM {} WHERE {};",
            self.quote_identifier(table),
            self.assignments(key, " AND ")
        )
    }

    /// `a = 1<sep>b = 'x'`
    fn assignments(&self, columns: &[(&str, &Value)], separator: &str) -> String {
        columns
            .iter()
            .map(|(name, value)| format!("{} = {}", self.quote_identifier(name), self.literal(value)))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// MySQL dialect: backtick identifiers, backslash-escaped strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn quote_string(&self, text: &str) -> String {
        format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// PostgreSQL dialect: double-quoted identifiers, standard-conforming strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSql;

impl Dialect for PostgreSql {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn quote_string(&self, text: &str) -> String {
        format!("'{}'", text.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_literals() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let dt = date.and_hms_opt(3, 4, 5).unwrap();

        assert_eq!(MySql.literal(&Value::Null), "NULL");
        assert_eq!(MySql.literal(&Value::Int(-12)), "-12");
        assert_eq!(MySql.literal(&Value::Float(1.5)), "1.5");
        assert_eq!(MySql.literal(&Value::Float(3.0)), "3");
        assert_eq!(MySql.literal(&Value::Date(date)), "'2024-01-02'");
        assert_eq!(MySql.literal(&Value::Time(dt.time())), "'03:04:05'");
        assert_eq!(MySql.literal(&Value::DateTime(dt)), "'2024-01-02 03:04:05'");
        assert_eq!(
            MySql.literal(&Value::Json(json!({"a": 1}))),
            r#"'{"a":1}'"#
        );
    }

    #[test]
    fn test_mysql_escaping() {
        assert_eq!(
            MySql.literal(&Value::String(r"it's a \ test".into())),
            r"'it\'s a \\ test'"
        );
        assert_eq!(MySql.quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_postgresql_escaping() {
        assert_eq!(
            PostgreSql.literal(&Value::String(r"it's a \ test".into())),
            r"'it''s a \ test'"
        );
        assert_eq!(PostgreSql.quote_identifier("user"), "\"user\"");
        assert_eq!(PostgreSql.quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_insert_statement() {
        let id = Value::Int(1);
        let name = Value::String("a".into());
        let sql = MySql.insert("users", &[("id", &id), ("name", &name)]);
        assert_eq!(sql, "INSERT INTO `users` (`id`, `name`) VALUES (1, 'a');");
    }

    #[test]
    fn test_update_statement() {
        let id = Value::Int(1);
        let tenant = Value::Int(2);
        let name = Value::Null;
        let sql = PostgreSql.update(
            "users",
            &[("name", &name)],
            &[("id", &id), ("tenant", &tenant)],
        );
        assert_eq!(
            sql,
            "UPDATE \"users\" SET \"name\" = NULL WHERE \"id\" = 1 AND \"tenant\" = 2;"
        );
    }

    #[test]
    fn test_delete_statement() {
        let id = Value::Int(9);
        assert_eq!(
            MySql.delete("users", &[("id", &id)]),
            "DELETE FROM `users` WHERE `id` = 9;"
        );
    }

    #[test]
    fn test_dialect_kind() {
        assert_eq!(DialectKind::Mysql.dialect().name(), "mysql");
        assert_eq!(DialectKind::Postgresql.dialect().name(), "postgresql");
        assert_eq!(
            DialectKind::from_str("postgres", true).unwrap(),
            DialectKind::Postgresql
        );
    }
}
