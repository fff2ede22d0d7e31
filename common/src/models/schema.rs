//! Schema metadata models.
//!
//! Snapshot types produced by enumerating the database server: the visible
//! user databases and the tables inside each.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reserved database names never included in a listing.
pub const SYSTEM_DATABASES: [&str; 5] = [
    "mysql",
    "information_schema",
    "performance_schema",
    "sys",
    "test",
];

/// Returns true if `name` is a reserved system database.
///
/// Matching is exact; MySQL schema names are compared as reported.
pub fn is_system_database(name: &str) -> bool {
    SYSTEM_DATABASES.contains(&name)
}

/// One user database and its tables, in server-reported order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DatabaseSchema {
    /// Database name as reported by the server.
    pub name: String,
    /// Table names inside the database, in reported order.
    pub tables: Vec<String>,
}

/// Snapshot of all user databases on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ServerListing {
    /// User databases, in server-reported order.
    pub databases: Vec<DatabaseSchema>,
}

impl ServerListing {
    /// Number of databases in the snapshot.
    pub fn database_count(&self) -> usize {
        self.databases.len()
    }

    /// Total number of tables across all databases.
    pub fn table_count(&self) -> usize {
        self.databases.iter().map(|db| db.tables.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_databases_are_excluded() {
        for name in SYSTEM_DATABASES {
            assert!(is_system_database(name), "{name} should be reserved");
        }
    }

    #[test]
    fn user_databases_are_not_excluded() {
        assert!(!is_system_database("shop"));
        assert!(!is_system_database("blog"));
        // exact match only: prefixes and case variants pass through
        assert!(!is_system_database("mysql2"));
        assert!(!is_system_database("MySQL"));
    }

    #[test]
    fn listing_counts() {
        let listing = ServerListing {
            databases: vec![
                DatabaseSchema {
                    name: "shop".into(),
                    tables: vec!["users".into(), "orders".into()],
                },
                DatabaseSchema {
                    name: "blog".into(),
                    tables: vec![],
                },
            ],
        };
        assert_eq!(listing.database_count(), 2);
        assert_eq!(listing.table_count(), 2);
    }
}
