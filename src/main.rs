use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use sugang::config::Config;
use sugang::core::cli::CliPaths;
use sugang::core::models::CourseSchedule;
use sugang::core::selection::SelectionState;
use sugang::enrollment::EnrollmentManager;
use sugang::errors::Result;
use sugang::grid::GridProjector;
use sugang::logging::{LogTarget, Logger};
use sugang::parser::RawCourse;
use sugang::ui::GridPrinter;

/// Operation plan: the server-supplied initial enrollment plus the session's
/// add/remove/wishlist actions, replayed in order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Plan {
    #[serde(default)]
    initial_enrolled: Vec<String>,
    #[serde(default)]
    operations: Vec<PlanOp>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase", rename_all_fields = "camelCase")]
enum PlanOp {
    Add { course_id: String },
    Remove { course_id: String },
    Wish { course_id: String },
    Unwish { course_id: String },
}

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = run(&paths) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(paths: &CliPaths) -> Result<()> {
    let config = if paths.config_path.exists() {
        Config::load_from(&paths.config_path)?
    } else {
        Config::default()
    };

    let logger = Logger::new();
    logger.set_log_dir(&paths.logs_dir);
    logger.set_file_logging_enabled(config.file_logging_enabled());

    let catalog = load_catalog(&paths.catalog_path, &logger)?;
    let plan = load_plan(&paths.plan_path)?;

    let mut state = initial_state(&plan, &catalog, &config, &logger);
    let manager = EnrollmentManager::new(logger.clone());

    for op in &plan.operations {
        apply_op(op, &catalog, &mut state, &manager, &logger);
    }

    let projector = GridProjector::new(config.window());
    let layout = projector.project(&state);
    if layout.overlap_detected() {
        logger.error(
            "Grid audit found overlapping placements; a mutation bypassed the enrollment policy.",
            LogTarget::ConsoleAndFile,
        );
    }

    let printer = GridPrinter::new();
    let window = config.window();
    print!("{}", printer.render_to_string(&window, &layout));
    logger.info(
        format!(
            "Session done: {} enrolled, {}/{} credits.",
            state.enrolled_len(),
            state.total_credits(),
            state.credit_ceiling()
        ),
        LogTarget::ConsoleAndFile,
    );
    Ok(())
}

fn load_catalog(path: &Path, logger: &Logger) -> Result<HashMap<String, CourseSchedule>> {
    let text = fs::read_to_string(path)?;
    let raw: Vec<RawCourse> = serde_json::from_str(&text)?;

    let mut catalog = HashMap::new();
    for raw_course in raw {
        let (course, skipped) = raw_course.normalize();
        if skipped > 0 {
            logger.warn(
                format!(
                    "Schedule of '{}': skipped {} unparseable fragment(s).",
                    course.course_id, skipped
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        catalog.insert(course.course_id.clone(), course);
    }
    Ok(catalog)
}

fn load_plan(path: &Path) -> Result<Plan> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn initial_state(
    plan: &Plan,
    catalog: &HashMap<String, CourseSchedule>,
    config: &Config,
    logger: &Logger,
) -> SelectionState {
    let mut initial = Vec::new();
    for course_id in &plan.initial_enrolled {
        match catalog.get(course_id) {
            Some(course) => initial.push(course.clone()),
            None => logger.warn(
                format!("Initial enrollment '{}' is not in the catalog.", course_id),
                LogTarget::ConsoleAndFile,
            ),
        }
    }
    SelectionState::from_initial(initial, config.credit_ceiling())
}

fn apply_op(
    op: &PlanOp,
    catalog: &HashMap<String, CourseSchedule>,
    state: &mut SelectionState,
    manager: &EnrollmentManager,
    logger: &Logger,
) {
    let course_id = match op {
        PlanOp::Add { course_id }
        | PlanOp::Remove { course_id }
        | PlanOp::Wish { course_id }
        | PlanOp::Unwish { course_id } => course_id,
    };

    match op {
        PlanOp::Add { .. } => {
            let Some(course) = lookup(catalog, course_id, logger) else {
                return;
            };
            let decision = manager.add_course(state, course);
            if decision.is_accepted() {
                logger.info(format!("add {course_id}: accepted"), LogTarget::ConsoleOnly);
            } else {
                let reason = decision
                    .reason
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let detail = if decision.conflicting_course_ids.is_empty() {
                    String::new()
                } else {
                    format!(" with {}", decision.conflicting_course_ids.join(", "))
                };
                logger.info(
                    format!("add {course_id}: rejected ({reason}{detail})"),
                    LogTarget::ConsoleOnly,
                );
            }
        }
        PlanOp::Remove { .. } => match manager.withdraw(state, course_id) {
            Ok(_) => logger.info(format!("remove {course_id}: done"), LogTarget::ConsoleOnly),
            Err(err) => logger.warn(format!("remove {course_id}: {err}"), LogTarget::ConsoleOnly),
        },
        PlanOp::Wish { .. } => {
            let Some(course) = lookup(catalog, course_id, logger) else {
                return;
            };
            let outcome = manager.wishlist_add(state, course);
            logger.info(
                format!("wish {course_id}: {outcome:?}"),
                LogTarget::ConsoleOnly,
            );
        }
        PlanOp::Unwish { .. } => {
            let removed = manager.wishlist_remove(state, course_id);
            logger.info(
                format!(
                    "unwish {course_id}: {}",
                    if removed { "removed" } else { "not wishlisted" }
                ),
                LogTarget::ConsoleOnly,
            );
        }
    }
}

fn lookup<'a>(
    catalog: &'a HashMap<String, CourseSchedule>,
    course_id: &str,
    logger: &Logger,
) -> Option<&'a CourseSchedule> {
    let found = catalog.get(course_id);
    if found.is_none() {
        logger.warn(
            format!("Course '{}' is not in the catalog.", course_id),
            LogTarget::ConsoleAndFile,
        );
    }
    found
}
