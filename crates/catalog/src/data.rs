//! Built-in exercises, workout templates and goal categories.

use fittrack_core::{Exercise, GoalCategory, MetricUnit, WorkoutTemplate};

pub(crate) static EXERCISES: &[Exercise] = &[
    Exercise {
        id: "ex-1",
        name: "Running",
        category: "cardio",
        target_muscle_groups: &[],
        equipment: &["treadmill", "outdoor"],
    },
    Exercise {
        id: "ex-2",
        name: "Cycling",
        category: "cardio",
        target_muscle_groups: &[],
        equipment: &["stationary bike", "outdoor"],
    },
    Exercise {
        id: "ex-3",
        name: "Push-ups",
        category: "strength",
        target_muscle_groups: &["chest", "shoulders", "triceps"],
        equipment: &["bodyweight"],
    },
    Exercise {
        id: "ex-4",
        name: "Pull-ups",
        category: "strength",
        target_muscle_groups: &["back", "biceps"],
        equipment: &["pull-up bar"],
    },
    Exercise {
        id: "ex-5",
        name: "Squats",
        category: "strength",
        target_muscle_groups: &["legs", "glutes"],
        equipment: &["bodyweight", "barbell", "dumbbells"],
    },
    Exercise {
        id: "ex-6",
        name: "Deadlifts",
        category: "strength",
        target_muscle_groups: &["back", "legs", "glutes"],
        equipment: &["barbell", "dumbbells"],
    },
    Exercise {
        id: "ex-7",
        name: "Bench Press",
        category: "strength",
        target_muscle_groups: &["chest", "shoulders", "triceps"],
        equipment: &["barbell", "dumbbells"],
    },
    Exercise {
        id: "ex-8",
        name: "Planks",
        category: "strength",
        target_muscle_groups: &["core"],
        equipment: &["bodyweight"],
    },
    Exercise {
        id: "ex-9",
        name: "Jumping Jacks",
        category: "cardio",
        target_muscle_groups: &[],
        equipment: &["bodyweight"],
    },
    Exercise {
        id: "ex-10",
        name: "Burpees",
        category: "hiit",
        target_muscle_groups: &["full body"],
        equipment: &["bodyweight"],
    },
    Exercise {
        id: "ex-11",
        name: "Mountain Climbers",
        category: "hiit",
        target_muscle_groups: &["core", "shoulders"],
        equipment: &["bodyweight"],
    },
    Exercise {
        id: "ex-12",
        name: "Yoga Flow",
        category: "flexibility",
        target_muscle_groups: &["full body"],
        equipment: &["yoga mat"],
    },
    Exercise {
        id: "ex-13",
        name: "Lunges",
        category: "strength",
        target_muscle_groups: &["legs", "glutes"],
        equipment: &["bodyweight", "dumbbells"],
    },
    Exercise {
        id: "ex-14",
        name: "Shoulder Press",
        category: "strength",
        target_muscle_groups: &["shoulders", "triceps"],
        equipment: &["dumbbells", "barbell"],
    },
    Exercise {
        id: "ex-15",
        name: "Bicep Curls",
        category: "strength",
        target_muscle_groups: &["biceps"],
        equipment: &["dumbbells", "barbell"],
    },
];

pub(crate) static WORKOUT_TEMPLATES: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        id: "wt-1",
        name: "Cardio Blast",
        description: "High-intensity cardio workout to burn calories and improve endurance",
        category: "cardio",
        recommended_duration: 30.0,
        estimated_calories: 300.0,
        suitable_exercises: &["ex-1", "ex-2", "ex-9"],
        target_goals: &["weight loss", "endurance"],
    },
    WorkoutTemplate {
        id: "wt-2",
        name: "Upper Body Strength",
        description: "Focus on building upper body strength and muscle definition",
        category: "strength",
        recommended_duration: 45.0,
        estimated_calories: 250.0,
        suitable_exercises: &["ex-3", "ex-4", "ex-7", "ex-14", "ex-15"],
        target_goals: &["muscle gain", "strength"],
    },
    WorkoutTemplate {
        id: "wt-3",
        name: "Lower Body Strength",
        description: "Target your legs and glutes for strength and toning",
        category: "strength",
        recommended_duration: 45.0,
        estimated_calories: 280.0,
        suitable_exercises: &["ex-5", "ex-6", "ex-13"],
        target_goals: &["muscle gain", "strength"],
    },
    WorkoutTemplate {
        id: "wt-4",
        name: "Full Body HIIT",
        description: "High-intensity interval training for maximum calorie burn",
        category: "hiit",
        recommended_duration: 25.0,
        estimated_calories: 350.0,
        suitable_exercises: &["ex-3", "ex-5", "ex-9", "ex-10", "ex-11"],
        target_goals: &["weight loss", "endurance", "muscle tone"],
    },
    WorkoutTemplate {
        id: "wt-5",
        name: "Core Crusher",
        description: "Focus on strengthening your core and improving stability",
        category: "strength",
        recommended_duration: 30.0,
        estimated_calories: 200.0,
        suitable_exercises: &["ex-8", "ex-11", "ex-5"],
        target_goals: &["muscle tone", "strength"],
    },
    WorkoutTemplate {
        id: "wt-6",
        name: "Flexibility & Recovery",
        description: "Gentle stretching and mobility exercises for recovery days",
        category: "flexibility",
        recommended_duration: 40.0,
        estimated_calories: 150.0,
        suitable_exercises: &["ex-12"],
        target_goals: &["flexibility", "recovery"],
    },
];

pub(crate) static GOAL_CATEGORIES: &[GoalCategory] = &[
    GoalCategory {
        name: "weight loss",
        metric_units: &[
            MetricUnit { title: "Body weight", unit: "kg" },
            MetricUnit { title: "Body fat percentage", unit: "%" },
            MetricUnit { title: "Waist circumference", unit: "cm/inches" },
        ],
    },
    GoalCategory {
        name: "muscle gain",
        metric_units: &[
            MetricUnit { title: "Muscle mass", unit: "kg/lbs" },
            MetricUnit { title: "Max reps with fixed load", unit: "count" },
        ],
    },
    GoalCategory {
        name: "endurance",
        metric_units: &[
            MetricUnit { title: "Cardio duration", unit: "minutes" },
            MetricUnit { title: "Distance covered", unit: "km/miles" },
            MetricUnit { title: "Heart rate recovery time", unit: "seconds" },
            MetricUnit { title: "Max sustained power output", unit: "Watts" },
        ],
    },
    GoalCategory {
        name: "strength",
        metric_units: &[
            MetricUnit { title: "Max reps with fixed load", unit: "Count" },
            MetricUnit { title: "Time to complete weighted movements", unit: "Seconds" },
        ],
    },
    GoalCategory {
        name: "flexibility",
        metric_units: &[
            MetricUnit { title: "Range of motion", unit: "degrees" },
            MetricUnit { title: "Hold duration", unit: "seconds" },
        ],
    },
    GoalCategory {
        name: "muscle tone",
        metric_units: &[
            MetricUnit { title: "Body fat percentage", unit: "%" },
            MetricUnit { title: "Muscle mass", unit: "lbs" },
        ],
    },
    GoalCategory {
        name: "recovery",
        metric_units: &[
            MetricUnit { title: "Resting heart rate", unit: "bpm" },
            MetricUnit { title: "Sleep quality/duration", unit: "hours" },
            MetricUnit { title: "Perceived exertion scale", unit: "RPE 1-10" },
        ],
    },
];
