use super::models::SharedComparison;
use super::sqlite::Database;
use rusqlite::{params, Result};
use tracing::debug;

impl Database {
    // ── Comparison Results ───────────────────────────────────────

    /// Insert a serialized comparison. An existing share id is a constraint
    /// error, never an overwrite.
    pub fn insert_comparison_result(
        &self,
        share_id: &str,
        data_json: &str,
        hydraulic_groups: i64,
        electric_groups: i64,
        machine_count: i64,
    ) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.connection().execute(
            "INSERT INTO comparison_result \
             (share_id, created_at, hydraulic_groups, electric_groups, machine_count, data) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![share_id, now, hydraulic_groups, electric_groups, machine_count, data_json],
        )?;
        debug!("Stored comparison result {}", share_id);
        Ok(())
    }

    /// Serialized payload for a share id, if present.
    pub fn get_comparison_data(&self, share_id: &str) -> Result<Option<String>> {
        match self.connection().query_row(
            "SELECT data FROM comparison_result WHERE share_id = ?1",
            params![share_id],
            |row| row.get(0),
        ) {
            Ok(data) => Ok(Some(data)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List stored comparisons newest-first.
    /// Returns (page, total_count).
    pub fn list_comparison_results(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<SharedComparison>, i64)> {
        let total: i64 = self
            .connection()
            .query_row("SELECT COUNT(*) FROM comparison_result", [], |row| row.get(0))?;

        let mut stmt = self.connection().prepare(
            "SELECT share_id, created_at, hydraulic_groups, electric_groups, machine_count \
             FROM comparison_result \
             ORDER BY created_at DESC, rowid DESC \
             LIMIT ?1 OFFSET ?2",
        )?;
        let results = stmt
            .query_map(params![limit, offset], |row| {
                Ok(SharedComparison {
                    share_id: row.get(0)?,
                    created_at: row.get(1)?,
                    hydraulic_groups: row.get(2)?,
                    electric_groups: row.get(3)?,
                    machine_count: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok((results, total))
    }

    /// Returns true when a row was removed.
    pub fn delete_comparison_result(&self, share_id: &str) -> Result<bool> {
        let removed = self.connection().execute(
            "DELETE FROM comparison_result WHERE share_id = ?1",
            params![share_id],
        )?;
        Ok(removed > 0)
    }
}
