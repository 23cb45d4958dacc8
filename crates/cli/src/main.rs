//! FitTrack CLI - log workouts and track fitness goals.

mod validate;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use fittrack_core::{Goal, GoalId, GoalType, Time, TrackedMetric, Workout, WorkoutId};
use fittrack_progress::{deadline_status, is_complete, stats, TimeRange};
use fittrack_storage::JsonStorage;
use fittrack_tracker::{Tracker, TrackerConfig, TrackerError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use validate::{GoalForm, ProgressForm, WorkoutForm};

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Log workouts and track fitness goals", long_about = None)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true, env = "FITTRACK_STORAGE", default_value = ".fittrack")]
    storage: PathBuf,

    /// How many deleted workouts `workout undo` can bring back
    #[arg(long, global = true, default_value_t = 10)]
    undo_depth: usize,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log, list and delete workouts
    #[command(subcommand)]
    Workout(WorkoutCommand),
    /// Create goals and record progress
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Browse built-in exercises, templates and goal categories
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Workout totals and chart series
    Stats {
        /// week, month or all
        #[arg(long, default_value = "week")]
        range: TimeRange,
    },
    /// Goals a workout template can be credited to
    Compatible {
        /// Template id, e.g. wt-1
        #[arg(long)]
        template: String,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log a workout from a template
    Add(WorkoutAddArgs),
    /// List workouts, newest first
    List,
    /// Delete a workout
    Delete {
        /// Workout ID
        id: WorkoutId,
    },
    /// Restore the most recently deleted workout
    Undo,
}

#[derive(Args)]
struct WorkoutAddArgs {
    /// Template id, e.g. wt-1
    #[arg(long)]
    template: String,
    /// Name (default: template name)
    #[arg(long)]
    name: Option<String>,
    /// Date as YYYY-MM-DD (default: now)
    #[arg(long)]
    date: Option<String>,
    /// Minutes (default: template recommendation)
    #[arg(long)]
    duration: Option<f64>,
    /// Calories burned (default: template estimate)
    #[arg(long)]
    calories: Option<f64>,
    /// Exercise id from the template, repeatable
    #[arg(long = "exercise")]
    exercises: Vec<String>,
    /// Goal to credit
    #[arg(long)]
    goal: Option<GoalId>,
}

#[derive(Subcommand)]
enum GoalCommand {
    /// Create a goal
    Add(GoalAddArgs),
    /// List goals by target date
    List,
    /// Show a goal with its progress history
    Show {
        /// Goal ID
        id: GoalId,
    },
    /// Delete a goal; its workouts stay but are unlinked
    Delete {
        /// Goal ID
        id: GoalId,
    },
    /// Record a measured value for a goal
    Progress {
        /// Goal ID
        id: GoalId,
        /// Measured value
        #[arg(long)]
        value: f64,
        /// Label for the entry, e.g. "Weigh-in"
        #[arg(long)]
        name: String,
        /// Date as YYYY-MM-DD (default: now)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Args)]
struct GoalAddArgs {
    #[arg(long)]
    name: String,
    /// Goal category, e.g. "weight loss"
    #[arg(long)]
    category: String,
    #[arg(long = "target")]
    target_value: f64,
    #[arg(long = "current", default_value_t = 0.0)]
    current_value: f64,
    /// Unit (default: derived from the metric)
    #[arg(long)]
    unit: Option<String>,
    /// increase or decrease
    #[arg(long = "type", default_value = "increase")]
    goal_type: GoalType,
    /// duration, calories, workouts or custom
    #[arg(long, default_value = "custom")]
    metric: TrackedMetric,
    /// Date as YYYY-MM-DD (default: 30 days from now)
    #[arg(long)]
    target_date: Option<String>,
    /// Accept a unit the category does not list
    #[arg(long)]
    any_unit: bool,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List exercises
    Exercises {
        /// Only exercises suitable for this template
        #[arg(long)]
        template: Option<String>,
    },
    /// List workout templates
    Templates {
        /// Only templates targeting this goal category
        #[arg(long)]
        goal_category: Option<String>,
    },
    /// List goal categories and their units
    Categories,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Command output goes to stdout; keep logs out of it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Catalog(command) => print_catalog(command),
        command => {
            debug!(storage = %cli.storage.display(), "opening storage");
            let storage = JsonStorage::new(&cli.storage).await?;
            let mut tracker = Tracker::open(storage).await?.with_config(TrackerConfig {
                undo_depth: cli.undo_depth,
                ..Default::default()
            });
            run(command, &mut tracker, Utc::now()).await
        }
    }
}

async fn run(command: Commands, tracker: &mut Tracker<JsonStorage>, now: Time) -> Result<()> {
    match command {
        Commands::Workout(command) => run_workout(command, tracker, now).await?,
        Commands::Goal(command) => run_goal(command, tracker, now).await?,
        Commands::Catalog(command) => print_catalog(command)?,
        Commands::Stats { range } => {
            info!(?range, workouts = tracker.workouts().len(), "computing stats");
            print_stats(tracker.workouts(), range, now)
        }
        Commands::Compatible { template } => {
            let template = fittrack_catalog::template_by_id(&template)
                .ok_or_else(|| anyhow!("unknown workout template: {template}"))?;
            let goals = tracker.compatible_goals(template);

            println!("Goals for {} ({})", template.name, goals.len());
            for goal in goals {
                println!("  {} | {} | {}%", goal.id, goal.name, goal.progress_percentage);
            }
        }
    }

    Ok(())
}

async fn run_workout(
    command: WorkoutCommand,
    tracker: &mut Tracker<JsonStorage>,
    now: Time,
) -> Result<()> {
    match command {
        WorkoutCommand::Add(args) => {
            let form = WorkoutForm {
                template_id: args.template,
                name: args.name,
                date: args.date,
                duration: args.duration,
                calories: args.calories,
                exercise_ids: args.exercises,
                goal_id: args.goal,
            };
            let spec = validate::workout(form, tracker.goals(), now)?;
            let template = spec
                .template_id
                .as_deref()
                .and_then(fittrack_catalog::template_by_id)
                .map(|t| t.name)
                .unwrap_or("custom");

            let workout = tracker.add_workout(spec).await?;
            println!("Logged workout: {} - {} ({})", workout.id, workout.name, template);
            if let Some(goal) = workout.goal_id.and_then(|id| tracker.goal(id)) {
                println!("  {}: {}%", goal.name, goal.progress_percentage);
            }
        }
        WorkoutCommand::List => {
            let names = stats::goal_names(tracker.goals());
            let workouts = stats::workouts_newest_first(tracker.workouts());

            println!("Workouts ({})", workouts.len());
            for workout in workouts {
                let goal = workout
                    .goal_id
                    .and_then(|id| names.get(&id))
                    .map(String::as_str)
                    .unwrap_or("-");
                println!(
                    "  {} | {} | {} | {} min | {} cal | {}",
                    workout.id,
                    workout.date.format("%Y-%m-%d"),
                    workout.name,
                    workout.duration,
                    workout.calories,
                    goal,
                );
                if !workout.exercises.is_empty() {
                    println!("      {}", workout.exercises.join(", "));
                }
            }
        }
        WorkoutCommand::Delete { id } => match tracker.delete_workout(id).await? {
            Some(workout) => println!("Deleted workout: {} - {}", workout.id, workout.name),
            None => println!("Workout not found"),
        },
        WorkoutCommand::Undo => match tracker.undo_delete().await {
            Ok(workout) => println!("Restored workout: {} - {}", workout.id, workout.name),
            Err(TrackerError::NothingToUndo) => println!("Nothing to undo"),
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

async fn run_goal(command: GoalCommand, tracker: &mut Tracker<JsonStorage>, now: Time) -> Result<()> {
    match command {
        GoalCommand::Add(args) => {
            let form = GoalForm {
                name: args.name,
                category: args.category,
                target_date: args.target_date,
                target_value: args.target_value,
                current_value: args.current_value,
                unit: args.unit,
                goal_type: args.goal_type,
                metric_to_track: args.metric,
                any_unit: args.any_unit,
            };
            let goal = tracker.add_goal(validate::goal(form, now)?).await?;
            println!("Added goal: {} - {} ({}%)", goal.id, goal.name, goal.progress_percentage);
        }
        GoalCommand::List => {
            let goals = stats::goals_by_target_date(tracker.goals());

            println!("Goals ({})", goals.len());
            for goal in goals {
                println!(
                    "  {} | {} | {} | {}/{} {} | {}% | {}",
                    goal.id,
                    goal.name,
                    goal.category,
                    goal.current_value,
                    goal.target_value,
                    goal.unit,
                    goal.progress_percentage,
                    deadline_label(goal, now),
                );
            }
        }
        GoalCommand::Show { id } => {
            let Some(goal) = tracker.goal(id) else {
                println!("Goal not found");
                return Ok(());
            };
            print_goal(goal, now);
        }
        GoalCommand::Delete { id } => match tracker.delete_goal(id).await? {
            Some(goal) => println!("Deleted goal: {} - {}", goal.id, goal.name),
            None => println!("Goal not found"),
        },
        GoalCommand::Progress { id, value, name, date } => {
            let input = validate::progress(ProgressForm { name, value, date }, now)?;
            let entry = tracker.record_progress(id, input.value, input.date, input.name).await?;
            let percentage = tracker.goal(id).map(|g| g.progress_percentage).unwrap_or(0);
            println!(
                "Recorded {} {} for {} ({}% of the gap, goal at {}%)",
                entry.value,
                entry.unit,
                entry.label(),
                entry.percentage,
                percentage,
            );
        }
    }

    Ok(())
}

fn deadline_label(goal: &Goal, now: Time) -> String {
    if is_complete(goal) {
        "Completed".to_string()
    } else {
        deadline_status(goal, now).to_string()
    }
}

fn print_goal(goal: &Goal, now: Time) {
    println!("Goal: {}", goal.id);
    println!("  Name: {}", goal.name);
    println!("  Category: {}", goal.category);
    println!("  Type: {} ({})", goal.goal_type.as_str(), goal.metric_to_track.as_str());
    println!("  Current: {} {}", goal.current_value, goal.unit);
    println!("  Target: {} {}", goal.target_value, goal.unit);
    println!("  Progress: {}%", goal.progress_percentage);
    println!("  Target date: {} ({})", goal.target_date.format("%Y-%m-%d"), deadline_label(goal, now));

    if goal.progress.is_empty() {
        return;
    }
    println!("  History ({})", goal.progress.len());
    for entry in &goal.progress {
        println!(
            "    {} | {} | {} {} | {}%",
            entry.date.format("%Y-%m-%d"),
            entry.label(),
            entry.value,
            entry.unit,
            entry.percentage,
        );
    }
    print_series("  Chart", &stats::goal_progress_series(goal));
}

fn print_stats(workouts: &[Workout], range: TimeRange, now: Time) {
    let selected = stats::workouts_in_range(workouts, range, now);
    let totals = stats::workout_stats(&selected);

    println!("Stats ({range:?})");
    println!("  Workouts: {}", totals.total_workouts);
    println!("  Calories: {} (avg {})", totals.total_calories, totals.avg_calories);
    println!("  Duration: {} min (avg {})", totals.total_duration, totals.avg_duration);

    if !selected.is_empty() {
        print_series("  Calories", &stats::calories_series(&selected));
        print_series("  Duration", &stats::duration_series(&selected));
    }
}

fn print_series(title: &str, points: &[stats::ChartPoint]) {
    println!("{title}");
    for point in points {
        println!("    {}: {}", point.label, point.value);
    }
}

fn print_catalog(command: CatalogCommand) -> Result<()> {
    match command {
        CatalogCommand::Exercises { template } => {
            let exercises = match template {
                Some(id) => {
                    fittrack_catalog::template_by_id(&id)
                        .ok_or_else(|| anyhow!("unknown workout template: {id}"))?;
                    fittrack_catalog::exercises_for_template(&id)
                }
                None => fittrack_catalog::exercises().iter().collect(),
            };

            println!("Exercises ({})", exercises.len());
            for exercise in exercises {
                println!(
                    "  {} | {} | {} | {}",
                    exercise.id,
                    exercise.name,
                    exercise.category,
                    exercise.equipment.join(", "),
                );
            }
        }
        CatalogCommand::Templates { goal_category } => {
            let templates = match goal_category {
                Some(category) => fittrack_catalog::templates_for_goal_category(&category),
                None => fittrack_catalog::workout_templates().iter().collect(),
            };

            println!("Templates ({})", templates.len());
            for template in templates {
                println!(
                    "  {} | {} | {} min | {} cal | {}",
                    template.id,
                    template.name,
                    template.recommended_duration,
                    template.estimated_calories,
                    template.target_goals.join(", "),
                );
                println!("      {}", template.description);
            }
        }
        CatalogCommand::Categories => {
            for category in fittrack_catalog::categories_and_units() {
                println!("{}", category.name);
                for unit in category.metric_units {
                    println!("  {} ({})", unit.title, unit.unit);
                }
            }
        }
    }

    Ok(())
}
