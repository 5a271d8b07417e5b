/* src/mobile.rs
 *
 * UniFFI interface exposing the task board, the budget ledger and the
 * settings to the Android app.
 */

use crate::color_utils::{emphasis_rgb, rgb_to_hex};
use crate::config::{Config, Language};
use crate::context::{SharedContext, StandardContext};
use crate::controller::BoardController;
use crate::model::budget::{BudgetLedger, format_signed_yen, format_yen};
use crate::model::display::{TaskDisplay, group_label, move_action_label};
use crate::model::{BoardGroup, BudgetKind, BudgetLine, Emphasis, TaskRecord};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum MobileError {
    Generic(String),
}
impl From<String> for MobileError {
    fn from(e: String) -> Self {
        Self::Generic(e)
    }
}
impl From<&str> for MobileError {
    fn from(e: &str) -> Self {
        Self::Generic(e.to_string())
    }
}
impl From<anyhow::Error> for MobileError {
    fn from(e: anyhow::Error) -> Self {
        Self::Generic(format!("{:#}", e))
    }
}
impl std::fmt::Display for MobileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MobileError::Generic(s) => write!(f, "{}", s),
        }
    }
}
impl std::error::Error for MobileError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileBoardGroup {
    Todo,
    InProgress,
    Done,
}

impl From<BoardGroup> for MobileBoardGroup {
    fn from(g: BoardGroup) -> Self {
        match g {
            BoardGroup::Todo => MobileBoardGroup::Todo,
            BoardGroup::InProgress => MobileBoardGroup::InProgress,
            BoardGroup::Done => MobileBoardGroup::Done,
        }
    }
}

impl From<MobileBoardGroup> for BoardGroup {
    fn from(g: MobileBoardGroup) -> Self {
        match g {
            MobileBoardGroup::Todo => BoardGroup::Todo,
            MobileBoardGroup::InProgress => BoardGroup::InProgress,
            MobileBoardGroup::Done => BoardGroup::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileEmphasis {
    Highlighted,
    Neutral,
    Muted,
}

impl From<Emphasis> for MobileEmphasis {
    fn from(e: Emphasis) -> Self {
        match e {
            Emphasis::Highlighted => MobileEmphasis::Highlighted,
            Emphasis::Neutral => MobileEmphasis::Neutral,
            Emphasis::Muted => MobileEmphasis::Muted,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileTask {
    pub uid: String,
    pub title: String,
    pub is_urgent: bool,
    pub tag_label: String,
    pub start_label: Option<String>,
    pub deadline_label: Option<String>,
    pub emphasis: MobileEmphasis,
    /// "#RRGGBB", or None for a transparent bar.
    pub side_bar_color: Option<String>,
}

fn task_to_mobile(t: &TaskRecord, lang: Language) -> MobileTask {
    MobileTask {
        uid: t.uid.clone(),
        title: t.title.clone(),
        is_urgent: t.priority.is_urgent(),
        tag_label: t.tag_label(lang).to_string(),
        start_label: t.start_label.clone(),
        deadline_label: t.deadline_label.clone(),
        emphasis: t.emphasis.into(),
        side_bar_color: emphasis_rgb(t.emphasis).map(rgb_to_hex),
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileBoardColumn {
    pub group: MobileBoardGroup,
    pub label: String,
    pub tasks: Vec<MobileTask>,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileBudgetLine {
    pub title: String,
    pub is_income: bool,
    pub budget: u64,
    pub actual: u64,
    pub variance: Option<i64>,
    pub budget_text: String,
    pub actual_text: String,
    /// Signed amount, or None while income is still being collected.
    pub variance_text: Option<String>,
}

fn budget_line_to_mobile(l: &BudgetLine) -> MobileBudgetLine {
    let variance = l.variance();
    MobileBudgetLine {
        title: l.title.clone(),
        is_income: l.kind == BudgetKind::Income,
        budget: l.budget,
        actual: l.actual,
        variance,
        budget_text: format_yen(l.budget),
        actual_text: format_yen(l.actual),
        variance_text: variance.map(format_signed_yen),
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileBudgetSummary {
    pub lines: Vec<MobileBudgetLine>,
    pub total_budget_text: String,
    pub total_actual_text: String,
    pub total_variance_text: String,
}

/// One entry of a card's "move to" menu.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileMoveOption {
    pub target: MobileBoardGroup,
    pub label: String,
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileConfig {
    pub japanese: bool,
    pub dark_theme: bool,
    pub notifications_enabled: bool,
}

/// Implemented on the Kotlin side; called whenever a board group changes.
#[uniffi::export(with_foreign)]
pub trait BoardObserver: Send + Sync {
    fn on_group_changed(&self, group: MobileBoardGroup, tasks: Vec<MobileTask>);
}

#[derive(uniffi::Object)]
pub struct EventArchitectMobile {
    controller: BoardController,
    ctx: SharedContext,
    config: Arc<Mutex<Config>>,
    ledger: Mutex<BudgetLedger>,
    observers: Mutex<Vec<JoinHandle<()>>>,
}

#[uniffi::export(async_runtime = "tokio")]
impl EventArchitectMobile {
    #[uniffi::constructor]
    pub fn new(android_files_dir: String) -> Self {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("EventArchitectRust"),
        );

        let ctx: SharedContext = Arc::new(StandardContext::new(Some(PathBuf::from(
            android_files_dir,
        ))));
        let config = Config::load_or_default(ctx.as_ref()).unwrap_or_else(|e| {
            log::warn!("Falling back to default config: {:#}", e);
            Config::default()
        });
        config.language.apply();
        let ledger = if config.load_sample_data {
            BudgetLedger::sample(config.language)
        } else {
            BudgetLedger::new()
        };

        Self {
            controller: BoardController::default(),
            ctx,
            config: Arc::new(Mutex::new(config)),
            ledger: Mutex::new(ledger),
            observers: Mutex::new(Vec::new()),
        }
    }

    // --- TASK BOARD ---

    /// Returns the created task, or None when the title was blank.
    pub async fn add_task(
        &self,
        title: String,
        is_urgent: bool,
        start_label: Option<String>,
        deadline_label: Option<String>,
    ) -> Option<MobileTask> {
        let lang = self.language().await;
        self.controller
            .add_task(
                &title,
                is_urgent,
                start_label.as_deref(),
                deadline_label.as_deref(),
            )
            .await
            .map(|t| task_to_mobile(&t, lang))
    }

    pub async fn move_task(
        &self,
        uid: String,
        from: MobileBoardGroup,
        to: MobileBoardGroup,
    ) -> Option<MobileTask> {
        let lang = self.language().await;
        self.controller
            .move_task(&uid, from.into(), to.into())
            .await
            .map(|t| task_to_mobile(&t, lang))
    }

    pub async fn delete_task(&self, uid: String, from: MobileBoardGroup) -> bool {
        self.controller
            .delete_task(&uid, from.into())
            .await
            .is_some()
    }

    pub async fn get_board(&self) -> Vec<MobileBoardColumn> {
        let lang = self.language().await;
        self.controller
            .board()
            .await
            .into_iter()
            .map(|(group, tasks)| MobileBoardColumn {
                group: group.into(),
                label: group_label(group, lang),
                tasks: tasks.iter().map(|t| task_to_mobile(t, lang)).collect(),
            })
            .collect()
    }

    /// Menu entries for moving a card out of `from`, labelled in the
    /// configured language.
    pub async fn move_options(&self, from: MobileBoardGroup) -> Vec<MobileMoveOption> {
        let lang = self.language().await;
        BoardGroup::from(from)
            .move_targets()
            .into_iter()
            .map(|target| MobileMoveOption {
                target: target.into(),
                label: move_action_label(target, lang),
            })
            .collect()
    }

    pub async fn load_sample_board(&self) {
        self.controller.load_sample().await;
    }

    /// Pushes every change of `group` to `observer`, starting with the
    /// current contents.
    pub async fn add_observer(&self, group: MobileBoardGroup, observer: Arc<dyn BoardObserver>) {
        let handle = self
            .controller
            .forward_changes(group.into(), self.config.clone(), move |lang, tasks| {
                let tasks = tasks.iter().map(|t| task_to_mobile(t, lang)).collect();
                observer.on_group_changed(group, tasks);
            })
            .await;
        self.observers.lock().await.push(handle);
    }

    pub async fn clear_observers(&self) {
        for handle in self.observers.lock().await.drain(..) {
            handle.abort();
        }
    }

    // --- BUDGET ---

    pub async fn get_budget(&self) -> MobileBudgetSummary {
        let ledger = self.ledger.lock().await;
        let totals = ledger.expense_totals();
        MobileBudgetSummary {
            lines: ledger.lines.iter().map(budget_line_to_mobile).collect(),
            total_budget_text: format_yen(totals.budget),
            total_actual_text: format_yen(totals.actual),
            total_variance_text: format_signed_yen(totals.variance),
        }
    }

    pub async fn add_budget_line(
        &self,
        title: String,
        is_income: bool,
        budget: u64,
        actual: u64,
    ) -> Result<(), MobileError> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Item name must not be empty".into());
        }
        let line = if is_income {
            BudgetLine::income(title, budget, actual)
        } else {
            BudgetLine::expense(title, budget, actual)
        };
        self.ledger.lock().await.push(line);
        Ok(())
    }

    // --- SETTINGS ---

    pub async fn get_config(&self) -> MobileConfig {
        let config = self.config.lock().await;
        MobileConfig {
            japanese: config.language == Language::Japanese,
            dark_theme: config.theme.is_dark(),
            notifications_enabled: config.notifications_enabled,
        }
    }

    pub async fn save_config(&self, update: MobileConfig) -> Result<(), MobileError> {
        let mut config = self.config.lock().await;
        config.language = if update.japanese {
            Language::Japanese
        } else {
            Language::English
        };
        config.theme = if update.dark_theme {
            crate::config::AppTheme::Dark
        } else {
            crate::config::AppTheme::Light
        };
        config.notifications_enabled = update.notifications_enabled;
        config.save(self.ctx.as_ref())?;
        config.language.apply();
        Ok(())
    }
}

impl EventArchitectMobile {
    async fn language(&self) -> Language {
        self.config.lock().await.language
    }
}

impl Drop for EventArchitectMobile {
    fn drop(&mut self) {
        for handle in self.observers.get_mut().drain(..) {
            handle.abort();
        }
    }
}
