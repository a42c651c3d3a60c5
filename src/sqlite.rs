use anyhow::{Context, Result};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Result as SqliteResult};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::provider::{normalize_origin, DataProvider};
use crate::stats::{OriginData, OriginStats};

/// Read-only view over an exported snapshot of the extension's data layer.
///
/// Expects an `origins(origin, time_spent, monetized_time_spent, number_of_visits)` table
/// and a `sent_assets(asset_code, amount)` table.
pub struct SqliteProvider {
    conn: Connection,
}

impl SqliteProvider {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Snapshot database not found at {:?}", path);
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("Failed to open snapshot database {:?}", path))?;
        info!(action = "open", component = "sqlite_provider", path = ?path, "Connected to snapshot database");
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    fn sent_assets(&self) -> Result<HashMap<String, f64>> {
        let assets = self
            .conn
            .prepare("SELECT asset_code, amount FROM sent_assets")?
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))?
            .collect::<SqliteResult<HashMap<String, f64>>>()
            .context("Failed to query sent assets")?;
        Ok(assets)
    }
}

impl DataProvider for SqliteProvider {
    fn origin_data_list(&self) -> Result<Option<Vec<OriginData>>> {
        let start_time = Instant::now();

        let origins: Vec<OriginData> = self
            .conn
            .prepare(
                "SELECT origin, COALESCE(monetized_time_spent, 0), COALESCE(number_of_visits, 0)
                 FROM origins ORDER BY origin",
            )?
            .query_map([], |row| Ok(OriginData::new(row.get::<_, String>(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<SqliteResult<Vec<OriginData>>>()
            .context("Failed to query origin list")?;

        let query_time = start_time.elapsed();
        if origins.is_empty() {
            warn!(
                action = "complete",
                component = "origin_list_query",
                duration_ms = query_time.as_millis(),
                "No origin data found"
            );
            return Ok(None);
        }

        info!(
            action = "complete",
            component = "origin_list_query",
            origin_count = origins.len(),
            duration_ms = query_time.as_millis(),
            "Origin list query completed"
        );
        Ok(Some(origins))
    }

    fn load_origin_data(&self, origin: &str) -> Result<Option<OriginData>> {
        let origin = normalize_origin(origin);

        let data = self
            .conn
            .query_row(
                "SELECT origin, COALESCE(monetized_time_spent, 0), COALESCE(number_of_visits, 0)
                 FROM origins WHERE origin = ?1",
                params![origin],
                |row| Ok(OriginData::new(row.get::<_, String>(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()
            .with_context(|| format!("Failed to query origin {}", origin))?;

        info!(action = "load", component = "origin_query", origin = %origin, found = data.is_some(), "Origin lookup completed");
        Ok(data)
    }

    fn load_origin_stats(&self) -> Result<Option<OriginStats>> {
        let start_time = Instant::now();

        let (origin_count, total_time_spent, total_monetized_time_spent, total_visits): (
            u64,
            u64,
            u64,
            u64,
        ) = self
            .conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(time_spent), 0),
                        COALESCE(SUM(monetized_time_spent), 0), COALESCE(SUM(number_of_visits), 0)
                 FROM origins",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .context("Failed to query origin totals")?;

        if origin_count == 0 {
            warn!(
                action = "complete",
                component = "origin_stats_query",
                "No origin totals available"
            );
            return Ok(None);
        }

        let stats = OriginStats {
            total_time_spent,
            total_monetized_time_spent,
            total_visits,
            total_sent_assets_map: Some(self.sent_assets()?),
        };

        info!(
            action = "complete",
            component = "origin_stats_query",
            origin_count,
            total_visits,
            duration_ms = start_time.elapsed().as_millis(),
            "Origin totals query completed"
        );
        Ok(Some(stats))
    }
}
