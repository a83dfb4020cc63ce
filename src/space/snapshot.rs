use serde::{Deserialize, Serialize};

use super::{CoordinateSpace, CoordinateSpaceConfig};
use crate::core::{Box2D, Rectangle};
use crate::error::{ChartError, ChartResult};

pub const COORDINATE_SPACE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable copy of a coordinate space, used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpaceSnapshot {
    pub viewport: Rectangle,
    pub window: Box2D,
    pub previous_window: Box2D,
    pub config: CoordinateSpaceConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpaceSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CoordinateSpaceSnapshot,
}

impl CoordinateSpaceSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CoordinateSpaceSnapshotJsonContractV1 {
            schema_version: COORDINATE_SPACE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CoordinateSpaceSnapshot>(input) {
            return snapshot.validate();
        }
        let payload: CoordinateSpaceSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::Serialization(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != COORDINATE_SPACE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        payload.snapshot.validate()
    }

    fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        self.window.validate()?;
        self.previous_window.validate()?;
        self.config.validate()?;
        Ok(self)
    }
}

impl CoordinateSpace {
    #[must_use]
    pub fn snapshot(&self) -> CoordinateSpaceSnapshot {
        CoordinateSpaceSnapshot {
            viewport: self.viewport,
            window: self.window,
            previous_window: self.previous_window,
            config: self.config,
        }
    }

    /// Rebuilds a space from a snapshot without re-running the aspect fit or
    /// zoom limits.
    pub fn from_snapshot(snapshot: CoordinateSpaceSnapshot) -> ChartResult<Self> {
        let snapshot = snapshot.validate()?;
        Ok(Self {
            viewport: snapshot.viewport,
            window: snapshot.window,
            previous_window: snapshot.previous_window,
            config: snapshot.config,
        })
    }
}
