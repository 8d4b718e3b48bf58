use gridseek_paths::Variant;

/// Configuration for creating a [`Session`](crate::Session).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub columns: i32,
    pub rows: i32,
    /// Variant preselected for the input layer.
    pub variant: Variant,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
            variant: Variant::UniformCost,
        }
    }
}

impl SessionConfig {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"columns": 8}"#).unwrap();
        assert_eq!(
            cfg,
            SessionConfig {
                columns: 8,
                ..SessionConfig::default()
            }
        );

        let cfg = SessionConfig::new(4, 3).with_variant(Variant::Heuristic);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.variant, Variant::Heuristic);
        assert_eq!((back.columns, back.rows), (4, 3));
    }
}
