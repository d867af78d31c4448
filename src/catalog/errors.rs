use thiserror::Error;

use super::types::TableKind;

/// Errors that can arise while loading or querying the cafe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Returned when an id lookup finds no record in the named table.
    #[error("no record '{id}' in table {table}")]
    NotFound { table: TableKind, id: String },

    /// Returned when following a soft cross-table reference that points at a
    /// record absent from the target table.
    #[error(
        "{table} record '{id}': field {field} references missing {target_table} record '{target_id}'"
    )]
    DanglingReference {
        table: TableKind,
        id: String,
        field: &'static str,
        target_table: TableKind,
        target_id: String,
    },

    /// The catalog failed its load-time integrity check. Carries every
    /// violation found, not just the first.
    #[error("catalog integrity check failed ({} violation(s)): {}", .0.len(), list(.0))]
    Integrity(Vec<Violation>),

    /// A table name outside the known set.
    #[error("unknown table '{0}'")]
    UnknownTable(String),

    /// Wrapper around IO errors (seed file reads, export writes).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around seed-file serialization and deserialization errors.
    #[error("seed file error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single content defect found by the integrity check. These indicate a
/// content authoring mistake and are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("duplicate id '{id}' in table {table}")]
    DuplicateId { table: TableKind, id: String },

    #[error(
        "{table} record '{id}': field {field} references missing {target_table} record '{target_id}'"
    )]
    DanglingReference {
        table: TableKind,
        id: String,
        field: &'static str,
        target_table: TableKind,
        target_id: String,
    },

    #[error("friendship level 0 must start at 0 points, found {min_points}")]
    LadderBase { min_points: u32 },

    #[error("friendship level {level} has min_points {min_points}, below level {prev_level}'s {prev_min_points}")]
    LadderOrder {
        level: u32,
        min_points: u32,
        prev_level: u32,
        prev_min_points: u32,
    },

    #[error("friendship ladder skips an ordinal: expected level {expected}, found {found}")]
    LadderOrdinal { expected: u32, found: u32 },

    #[error("rabbit '{rabbit}' stat {stat} is {value}, outside 0-100")]
    StatOutOfRange {
        rabbit: String,
        stat: &'static str,
        value: u8,
    },

    #[error("{table} record '{id}' must grant at least 1 friendship point")]
    NonPositivePoints { table: TableKind, id: String },

    #[error("reward tier '{id}' must require at least 1 stamp")]
    ZeroStampThreshold { id: String },
}

fn list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_error_lists_every_violation() {
        let err = CatalogError::Integrity(vec![
            Violation::DuplicateId {
                table: TableKind::Drinks,
                id: "taro-dream".to_string(),
            },
            Violation::LadderBase { min_points: 10 },
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("2 violation(s)"));
        assert!(rendered.contains("duplicate id 'taro-dream'"));
        assert!(rendered.contains("level 0"));
    }

    #[test]
    fn not_found_names_the_table() {
        let err = CatalogError::NotFound {
            table: TableKind::Rabbits,
            id: "nibbles".to_string(),
        };
        assert_eq!(err.to_string(), "no record 'nibbles' in table rabbits");
    }
}
