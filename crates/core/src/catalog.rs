//! Reference data types: exercises, workout templates and goal categories.
//!
//! Catalog values are `'static` and never change at runtime.

/// A single exercise a workout can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    /// Catalog key, e.g. `ex-1`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// cardio, strength, hiit, flexibility
    pub category: &'static str,
    /// Muscle groups worked; empty for cardio
    pub target_muscle_groups: &'static [&'static str],
    /// Equipment options
    pub equipment: &'static [&'static str],
}

/// A preset a workout can be created from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutTemplate {
    /// Catalog key, e.g. `wt-1`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Training style, e.g. cardio
    pub category: &'static str,
    /// Minutes
    pub recommended_duration: f64,
    /// Calories a typical session burns
    pub estimated_calories: f64,
    /// Exercise ids suitable for this template
    pub suitable_exercises: &'static [&'static str],
    /// Goal categories this template helps with
    pub target_goals: &'static [&'static str],
}

impl WorkoutTemplate {
    /// Whether this template helps with goals of `category`.
    pub fn targets(&self, category: &str) -> bool {
        self.target_goals.iter().any(|goal| *goal == category)
    }
}

/// A goal category and the units its goals may be measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalCategory {
    /// Category name, e.g. "weight loss"
    pub name: &'static str,
    /// Units goals in this category may use
    pub metric_units: &'static [MetricUnit],
}

impl GoalCategory {
    /// Whether `unit` is one of this category's units (case-insensitive).
    pub fn allows_unit(&self, unit: &str) -> bool {
        self.metric_units
            .iter()
            .any(|metric| metric.unit.eq_ignore_ascii_case(unit.trim()))
    }
}

/// A measurable quantity within a goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricUnit {
    /// What is measured
    pub title: &'static str,
    /// Unit label
    pub unit: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRENGTH: GoalCategory = GoalCategory {
        name: "strength",
        metric_units: &[
            MetricUnit { title: "Max reps with fixed load", unit: "Count" },
            MetricUnit { title: "Time to complete weighted movements", unit: "Seconds" },
        ],
    };

    #[test]
    fn test_allows_unit_ignores_case() {
        assert!(STRENGTH.allows_unit("count"));
        assert!(STRENGTH.allows_unit(" Seconds "));
        assert!(!STRENGTH.allows_unit("kg"));
    }

    #[test]
    fn test_template_targets() {
        let template = WorkoutTemplate {
            id: "wt-x",
            name: "Test",
            description: "",
            category: "cardio",
            recommended_duration: 30.0,
            estimated_calories: 300.0,
            suitable_exercises: &[],
            target_goals: &["weight loss", "endurance"],
        };
        assert!(template.targets("endurance"));
        assert!(!template.targets("strength"));
    }
}
