//! Turn-by-turn steps reported by the routing backend

use serde::Deserialize;

/// One maneuver of a route
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RouteStep {
    /// Street name, empty for unnamed roads
    #[serde(default)]
    pub name: String,
    /// Metres
    #[serde(default)]
    pub distance: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}

impl RouteStep {
    /// Name for display, with a placeholder for unnamed roads
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed road"
        } else {
            &self.name
        }
    }
}

/// Totals over a step list
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteSummary {
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteSummary {
    /// Sum distances and durations of all steps
    pub fn from_steps(steps: &[RouteStep]) -> Self {
        steps.iter().fold(Self::default(), |acc, step| Self {
            distance_m: acc.distance_m + step.distance,
            duration_s: acc.duration_s + step.duration,
        })
    }

    /// Estimated travel time as "M min S s"
    pub fn format_duration(&self) -> String {
        let total = self.duration_s.max(0.0).round() as u64;
        format!("{} min {} s", total / 60, total % 60)
    }

    /// Estimated distance as "N m"
    pub fn format_distance(&self) -> String {
        format!("{} m", self.distance_m.max(0.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, distance: f64, duration: f64) -> RouteStep {
        RouteStep {
            name: name.to_string(),
            distance,
            duration,
        }
    }

    #[test]
    fn test_summary_totals() {
        let steps = vec![
            step("Divan Yolu", 420.4, 301.2),
            step("", 80.0, 58.9),
            step("Alemdar Cd.", 12.0, 10.0),
        ];
        let summary = RouteSummary::from_steps(&steps);
        assert!((summary.distance_m - 512.4).abs() < 1e-9);
        assert!((summary.duration_s - 370.1).abs() < 1e-9);
        assert_eq!(summary.format_duration(), "6 min 10 s");
        assert_eq!(summary.format_distance(), "512 m");
    }

    #[test]
    fn test_summary_empty() {
        let summary = RouteSummary::from_steps(&[]);
        assert_eq!(summary.format_duration(), "0 min 0 s");
        assert_eq!(summary.format_distance(), "0 m");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(step("Divan Yolu", 0.0, 0.0).display_name(), "Divan Yolu");
        assert_eq!(step("  ", 0.0, 0.0).display_name(), "Unnamed road");
    }
}
