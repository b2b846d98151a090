//! Fence profiles: the named sites a user can pick in the demo.

use crate::TelemetrySample;

/// Static configuration for one monitored fence.
///
/// Profiles are read-only during a session; selecting a different one
/// restarts the telemetry walk from that fence's baseline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FenceProfile {
    /// Short identifier, e.g. `FN-001`.
    pub id: String,
    pub name: String,
    pub location: String,
    /// Sensor nodes installed along the fence.
    pub device_count: u32,
    /// Reading the telemetry walk starts from.
    pub baseline: TelemetrySample,
}

impl FenceProfile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        device_count: u32,
        baseline: TelemetrySample,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            device_count,
            baseline,
        }
    }

    /// The demo data set shipped with the dashboard.
    pub fn catalog() -> Vec<FenceProfile> {
        vec![
            FenceProfile::new(
                "FN-001",
                "Thrissur Agricultural Zone",
                "Thrissur, Kerala",
                12,
                TelemetrySample::baseline(),
            ),
            FenceProfile::new(
                "FN-002",
                "Palakkad Paddy Belt",
                "Palakkad, Kerala",
                9,
                TelemetrySample::new(228.4, 12.8, 2.9, 0),
            ),
            FenceProfile::new(
                "FN-003",
                "Wayanad Forest Boundary",
                "Wayanad, Kerala",
                16,
                TelemetrySample::new(226.1, 17.4, 3.9, 0),
            ),
            FenceProfile::new(
                "FN-004",
                "Idukki Plantation Line",
                "Idukki, Kerala",
                7,
                TelemetrySample::new(233.0, 10.6, 2.4, 0),
            ),
        ]
    }

    /// Look up a catalog profile by id (case-insensitive).
    pub fn find(id: &str) -> Option<FenceProfile> {
        Self::catalog()
            .into_iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
    }
}

impl Default for FenceProfile {
    fn default() -> Self {
        Self::new(
            "FN-001",
            "Thrissur Agricultural Zone",
            "Thrissur, Kerala",
            12,
            TelemetrySample::baseline(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_baselines_are_valid() {
        let catalog = FenceProfile::catalog();
        assert_eq!(catalog.len(), 4);
        for profile in &catalog {
            assert!(profile.baseline.is_within_limits(), "{} baseline", profile.id);
        }
    }

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(FenceProfile::default(), FenceProfile::catalog()[0]);
    }

    #[test]
    fn find_ignores_case() {
        let profile = FenceProfile::find("fn-003").unwrap();
        assert_eq!(profile.name, "Wayanad Forest Boundary");
        assert!(FenceProfile::find("FN-999").is_none());
    }
}
