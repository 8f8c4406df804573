use std::path::PathBuf;

use board_logging::{board_info, board_warn};
use tutorboard_catalog::{CatalogSource, CourseRecord};
use tutorboard_core::{CourseStatus, CourseSummary, Effect, Msg};

use crate::persistence;

/// Executes core effects against the injected catalog source.
pub struct EffectRunner {
    source: Box<dyn CatalogSource>,
    prefs_path: PathBuf,
}

impl EffectRunner {
    pub fn new(source: Box<dyn CatalogSource>, prefs_path: PathBuf) -> Self {
        Self { source, prefs_path }
    }

    /// Run every effect and collect the follow-up messages for the core.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::LoadCatalog => match self.source.load() {
                    Ok(records) => {
                        board_info!("catalog loaded: {} courses", records.len());
                        follow_ups.push(Msg::CatalogLoaded(
                            records.into_iter().map(summarize).collect(),
                        ));
                    }
                    Err(err) => {
                        board_warn!("catalog load failed: {err}");
                        follow_ups.push(Msg::CatalogFailed(err.to_string()));
                    }
                },
                Effect::PersistView(prefs) => {
                    persistence::save_view_prefs(&self.prefs_path, &prefs);
                }
            }
        }
        follow_ups
    }
}

fn summarize(record: CourseRecord) -> CourseSummary {
    CourseSummary {
        id: record.id,
        title: record.title,
        status: map_status(record.status),
        learners: record.learners,
    }
}

fn map_status(status: tutorboard_catalog::CourseStatus) -> CourseStatus {
    match status {
        tutorboard_catalog::CourseStatus::Published => CourseStatus::Published,
        tutorboard_catalog::CourseStatus::Draft => CourseStatus::Draft,
    }
}
