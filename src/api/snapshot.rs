use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::SelectionRange;
use crate::error::{SliderError, SliderResult};
use crate::interaction::DraggingState;

use super::{GraphRangeSlider, SliderConfig};

pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the slider state for diagnostics and regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub container_width: f64,
    pub element_count: usize,
    pub positions: Vec<f64>,
    pub range: SelectionRange,
    pub dragging: DraggingState,
    pub slider_visible: bool,
    pub config: SliderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SliderSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SliderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<T: Clone, Id: Hash + Eq> GraphRangeSlider<T, Id> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            container_width: self.container_width,
            element_count: self.data.len(),
            positions: self.positions.as_slice().to_vec(),
            range: self.state.range(),
            dragging: self.state.dragging(),
            slider_visible: self.is_slider_visible(),
            config: self.config,
        }
    }

    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
