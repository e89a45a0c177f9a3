use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub const STORAGE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Weekly,
    #[default]
    Monthly,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineCategory {
    Health,
    Fitness,
    Work,
    Learning,
    Mindfulness,
    Personal,
    #[default]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    pub fn create(payload: TaskCreate) -> Self {
        let now = now_stamp();
        Self {
            id: new_id(),
            title: payload.title.trim().to_string(),
            description: payload.description,
            deadline: normalize_optional(payload.deadline),
            priority: payload.priority,
            completed: payload.completed,
            completed_at: payload.completed.then(|| now.clone()),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(deadline) = update.deadline {
            self.deadline = normalize_optional(Some(deadline));
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(completed) = update.completed {
            if completed != self.completed {
                self.completed_at = completed.then(now_stamp);
            }
            self.completed = completed;
        }
        self.updated_at = now_stamp();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    pub fn create(payload: NoteCreate) -> Self {
        let now = now_stamp();
        Self {
            id: new_id(),
            title: payload.title.trim().to_string(),
            content: payload.content,
            tags: payload.tags,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = now_stamp();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub linked_tasks: Vec<String>,
}

impl Milestone {
    fn from_input(input: MilestoneInput) -> Self {
        Self {
            id: normalize_optional(input.id).unwrap_or_else(new_id),
            title: input.title.trim().to_string(),
            completed: input.completed,
            linked_tasks: input.linked_tasks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub period: GoalPeriod,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Goal {
    pub fn create(payload: GoalCreate) -> Self {
        let now = now_stamp();
        let mut goal = Self {
            id: new_id(),
            title: payload.title.trim().to_string(),
            description: payload.description,
            period: payload.period,
            target_date: normalize_optional(payload.target_date),
            progress: payload.progress,
            milestones: payload.milestones.into_iter().map(Milestone::from_input).collect(),
            completed: false,
            created_at: now.clone(),
            updated_at: now,
        };
        goal.recalc_progress();
        goal
    }

    pub fn apply(&mut self, update: GoalUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(period) = update.period {
            self.period = period;
        }
        if let Some(target_date) = update.target_date {
            self.target_date = normalize_optional(Some(target_date));
        }
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(milestones) = update.milestones {
            self.milestones = milestones.into_iter().map(Milestone::from_input).collect();
        }
        self.recalc_progress();
        self.updated_at = now_stamp();
    }

    pub fn recalc_progress(&mut self) {
        if !self.milestones.is_empty() {
            let done = self.milestones.iter().filter(|m| m.completed).count();
            self.progress = percentage(done, self.milestones.len());
        }
        self.progress = self.progress.min(100);
        self.completed = self.progress >= 100;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: RoutineCategory,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub completions: BTreeMap<NaiveDate, bool>,
    pub created_at: String,
    pub updated_at: String,
}

impl Routine {
    pub fn create(payload: RoutineCreate) -> Self {
        let now = now_stamp();
        Self {
            id: new_id(),
            title: payload.title.trim().to_string(),
            description: payload.description,
            start_time: normalize_optional(payload.start_time),
            end_time: normalize_optional(payload.end_time),
            category: payload.category,
            active: payload.active,
            completions: BTreeMap::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: RoutineUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(start_time) = update.start_time {
            self.start_time = normalize_optional(Some(start_time));
        }
        if let Some(end_time) = update.end_time {
            self.end_time = normalize_optional(Some(end_time));
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        self.updated_at = now_stamp();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub tasks: BTreeMap<String, Task>,
    #[serde(default)]
    pub notes: BTreeMap<String, Note>,
    #[serde(default)]
    pub goals: BTreeMap<String, Goal>,
    #[serde(default)]
    pub routines: BTreeMap<String, Routine>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            version: default_version(),
            tasks: BTreeMap::new(),
            notes: BTreeMap::new(),
            goals: BTreeMap::new(),
            routines: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NoteCreate {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct MilestoneInput {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub linked_tasks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoalCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub period: GoalPeriod,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub milestones: Vec<MilestoneInput>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub period: Option<GoalPeriod>,
    pub target_date: Option<String>,
    pub progress: Option<u32>,
    pub milestones: Option<Vec<MilestoneInput>>,
}

#[derive(Debug, Deserialize)]
pub struct RoutineCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub category: RoutineCategory,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoutineUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Option<RoutineCategory>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCompletion {
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct RoutineHistoryResponse {
    pub routine_id: String,
    pub streak: u32,
    pub completion_rate: u32,
    pub history: Vec<DayCompletion>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Report {
    Daily(DailyReport),
    Weekly(WeeklyReport),
    Monthly(MonthlyReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub generated_at: NaiveDateTime,
    pub title: String,
    pub summary: DailySummary,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub tasks_created: usize,
    pub tasks_completed: usize,
    pub completion_rate: u32,
    pub overdue_tasks: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub tasks_created: usize,
    pub tasks_completed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub generated_at: NaiveDateTime,
    pub title: String,
    pub period: ReportPeriod,
    pub summary: WeeklySummary,
    pub daily_breakdown: Vec<DayActivity>,
    pub trends: WeeklyTrends,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub tasks_created: usize,
    pub tasks_completed: usize,
    pub completion_rate: u32,
    pub active_goals: usize,
    pub goals_completed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyTrends {
    pub most_productive_day: DayActivity,
    pub average_tasks_per_day: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekActivity {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub tasks_created: usize,
    pub tasks_completed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub generated_at: NaiveDateTime,
    pub title: String,
    pub period: ReportPeriod,
    pub summary: MonthlySummary,
    pub weekly_breakdown: Vec<WeekActivity>,
    pub trends: MonthlyTrends,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub tasks_created: usize,
    pub tasks_completed: usize,
    pub completion_rate: u32,
    pub monthly_goals: usize,
    pub goals_completed: usize,
    pub goal_completion_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrends {
    pub most_productive_week: WeekActivity,
    pub average_tasks_per_week: u32,
    pub productivity_score: u32,
}

#[derive(Debug, Serialize)]
pub struct ExportPayload {
    pub version: String,
    pub export_date: String,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub goals: Vec<Goal>,
    pub routines: Vec<Routine>,
}

#[derive(Debug, Deserialize)]
pub struct ImportPayload {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
    #[serde(default)]
    pub goals: Option<Vec<Goal>>,
    #[serde(default)]
    pub routines: Option<Vec<Routine>>,
}

#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub tasks: usize,
    pub notes: usize,
    pub goals: usize,
    pub routines: usize,
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_stamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.3f")
        .to_string()
}

pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_true() -> bool {
    true
}

fn default_version() -> String {
    STORAGE_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_progress_follows_milestones() {
        let mut goal = Goal::create(GoalCreate {
            title: "Ship the redesign".to_string(),
            description: String::new(),
            period: GoalPeriod::Monthly,
            target_date: None,
            progress: 0,
            milestones: vec![
                MilestoneInput {
                    id: None,
                    title: "Wireframes".to_string(),
                    completed: true,
                    linked_tasks: Vec::new(),
                },
                MilestoneInput {
                    id: None,
                    title: "Build".to_string(),
                    completed: false,
                    linked_tasks: Vec::new(),
                },
                MilestoneInput {
                    id: None,
                    title: "Launch".to_string(),
                    completed: false,
                    linked_tasks: Vec::new(),
                },
            ],
        });

        assert_eq!(goal.progress, 33);
        assert!(!goal.completed);
        assert!(goal.milestones.iter().all(|m| !m.id.is_empty()));

        for milestone in &mut goal.milestones {
            milestone.completed = true;
        }
        goal.recalc_progress();
        assert_eq!(goal.progress, 100);
        assert!(goal.completed);
    }

    #[test]
    fn goal_without_milestones_keeps_manual_progress() {
        let mut goal = Goal::create(GoalCreate {
            title: "Read 12 books".to_string(),
            description: String::new(),
            period: GoalPeriod::Custom,
            target_date: None,
            progress: 250,
            milestones: Vec::new(),
        });
        assert_eq!(goal.progress, 100);
        assert!(goal.completed);

        goal.apply(GoalUpdate {
            progress: Some(40),
            ..GoalUpdate::default()
        });
        assert_eq!(goal.progress, 40);
        assert!(!goal.completed);
    }

    #[test]
    fn task_completion_flip_maintains_completed_at() {
        let mut task = Task::create(TaskCreate {
            title: "  Write the brief  ".to_string(),
            description: String::new(),
            deadline: Some("   ".to_string()),
            priority: Priority::High,
            completed: false,
        });
        assert_eq!(task.title, "Write the brief");
        assert_eq!(task.deadline, None);
        assert!(task.completed_at.is_none());

        task.apply(TaskUpdate {
            completed: Some(true),
            ..TaskUpdate::default()
        });
        assert!(task.completed);
        assert!(task.completed_at.is_some());

        task.apply(TaskUpdate {
            completed: Some(false),
            ..TaskUpdate::default()
        });
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn percentage_rounds_and_guards_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(3, 3), 100);
    }
}
