use serde::{Deserialize, Serialize};

/// Ordering of height buckets in a computed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Ascending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spacing between consecutive height buckets on the x axis.
    pub height_spacing: f32,
    /// Bucket ordering within a frame.
    pub direction: Direction,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height_spacing: 2.0,
            direction: Direction::Ascending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Maximum number of topoheights materialized at once.
    pub max_width: u64,
    /// Step applied per scrub unit while paused.
    pub scrub_stride: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_width: 20,
            scrub_stride: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_view() {
        let config = EngineConfig::default();
        assert_eq!(config.window.max_width, 20);
        assert_eq!(config.window.scrub_stride, 10);
        assert_eq!(config.layout.height_spacing, 2.0);
        assert_eq!(config.layout.direction, Direction::Ascending);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"window":{"max_width":40}}"#).unwrap();
        assert_eq!(config.window.max_width, 40);
        assert_eq!(config.window.scrub_stride, 10);
        assert_eq!(config.layout.height_spacing, 2.0);
    }
}
