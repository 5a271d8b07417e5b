// File: ./src/cli.rs
//! Command-line front end: argument parsing, logging setup and text
//! rendering of the board and the budget.
use crate::color_utils::{
    BRAND_ACCENT, emphasis_rgb, is_dark, parse_hex_to_u8, priority_tag_rgb, variance_rgb,
};
use crate::config::{Config, Language};
use crate::context::{AppContext, StandardContext};
use crate::controller::BoardController;
use crate::model::budget::{BudgetLedger, format_signed_yen, format_yen};
use crate::model::display::{TaskDisplay, group_label, pad_to_width, truncate_to_width};
use crate::model::{BoardGroup, BudgetKind, TaskDraft, TaskRecord};
use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use crossterm::style::{Color, Stylize, style};
use crossterm::tty::IsTty;
use rust_i18n::t;
use std::fs::File;
use std::path::PathBuf;

const TITLE_COLS: usize = 28;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Board {
        json: bool,
    },
    Add {
        title: String,
        urgent: bool,
        start: Option<NaiveDateTime>,
        due: Option<NaiveDateTime>,
    },
    Budget,
    ConfigPath,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
    pub color: bool,
}

/// Parses `args` (without the binary name). Global flags are read up to the
/// `add` subcommand; everything after it belongs to `add`.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut root = None;
    let mut color = true;
    let mut rest = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                let value = args.get(i + 1).context("--root needs a path")?;
                root = Some(PathBuf::from(value));
                i += 1;
            }
            "--no-color" => color = false,
            "--help" | "-h" | "help" => {
                return Ok(CliArgs {
                    root,
                    command: Command::Help,
                    color,
                });
            }
            "add" if rest.is_empty() => {
                rest.extend(args[i..].iter().cloned());
                break;
            }
            other => rest.push(other.to_string()),
        }
        i += 1;
    }

    let command = match rest.first().map(String::as_str) {
        None | Some("board") | Some("--json") => Command::Board {
            json: rest.iter().any(|a| a == "--json"),
        },
        Some("budget") => Command::Budget,
        Some("config") => Command::ConfigPath,
        Some("add") => parse_add(&rest[1..])?,
        Some(other) => bail!("Unknown command '{}'. See --help.", other),
    };

    Ok(CliArgs {
        root,
        command,
        color,
    })
}

fn parse_add(args: &[String]) -> Result<Command> {
    let mut title_words = Vec::new();
    let mut urgent = false;
    let mut start = None;
    let mut due = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--urgent" | "-u" => urgent = true,
            "--start" => {
                let value = args.get(i + 1).context("--start needs a date")?;
                start = Some(parse_schedule(value)?);
                i += 1;
            }
            "--due" => {
                let value = args.get(i + 1).context("--due needs a date")?;
                due = Some(parse_schedule(value)?);
                i += 1;
            }
            word => title_words.push(word),
        }
        i += 1;
    }

    Ok(Command::Add {
        title: title_words.join(" "),
        urgent,
        start,
        due,
    })
}

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM` or a bare `YYYY-MM-DD`
/// (midnight).
fn parse_schedule(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    for fmt in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD [HH:MM]", value))
}

/// Terminal gets warnings, the log file gets everything from debug up.
pub fn init_logging(ctx: &dyn AppContext) -> Result<()> {
    use simplelog::{
        ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
        TerminalMode, WriteLogger,
    };

    let log_config = ConfigBuilder::new().build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        LevelFilter::Warn,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    if let Some(path) = ctx.get_log_file_path() {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, log_config, file));
    }

    CombinedLogger::init(loggers).context("Logger already initialized")?;
    Ok(())
}

pub async fn run(args: CliArgs) -> Result<()> {
    if args.command == Command::Help {
        print_help("event-architect");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    if let Err(e) = init_logging(&ctx) {
        eprintln!("Logging disabled: {:#}", e);
    }
    let config = Config::load_or_default(&ctx)?;
    config.language.apply();
    let color = args.color && std::io::stdout().is_tty();

    let controller = BoardController::default();
    if config.load_sample_data {
        controller.load_sample().await;
    }

    match args.command {
        Command::Help => {}
        Command::ConfigPath => println!("{}", Config::get_path_string(&ctx)?),
        Command::Board { json: true } => {
            let board = controller.board().await;
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        Command::Board { json: false } => {
            let board = controller.board().await;
            print!("{}", brand_header(color));
            print!("{}", render_board(&board, &config, color));
        }
        Command::Add {
            title,
            urgent,
            start,
            due,
        } => {
            let draft = TaskDraft {
                title,
                is_urgent: urgent,
                start,
                deadline: due,
            };
            if !controller.submit_draft(&draft).await {
                bail!("Task name must not be empty");
            }
            let board = controller.board().await;
            print!("{}", brand_header(color));
            print!("{}", render_board(&board, &config, color));
        }
        Command::Budget => {
            let ledger = if config.load_sample_data {
                BudgetLedger::sample(config.language)
            } else {
                BudgetLedger::new()
            };
            print!("{}", render_budget(&ledger, config.language, color));
        }
    }
    Ok(())
}

fn to_color(rgb: (f32, f32, f32)) -> Color {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb {
        r: to_u8(rgb.0),
        g: to_u8(rgb.1),
        b: to_u8(rgb.2),
    }
}

fn paint(text: &str, rgb: (f32, f32, f32), color: bool) -> String {
    if color {
        style(text).with(to_color(rgb)).to_string()
    } else {
        text.to_string()
    }
}

/// App name line, with the logo badge in the brand accent when colour is on.
pub fn brand_header(color: bool) -> String {
    let name = "Event Architect";
    match parse_hex_to_u8(BRAND_ACCENT) {
        Some((r, g, b)) if color => {
            let text = if is_dark(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0) {
                Color::White
            } else {
                Color::Black
            };
            let badge = style(" EA ").with(text).on(Color::Rgb { r, g, b }).bold();
            format!("{} {}\n\n", badge, name)
        }
        _ => format!("{}\n\n", name),
    }
}

pub fn render_board(
    board: &[(BoardGroup, Vec<TaskRecord>)],
    config: &Config,
    color: bool,
) -> String {
    let lang = config.language;
    let mut out = String::new();
    for (group, tasks) in board {
        out.push_str(&format!("{} ({})\n", group_label(*group, lang), tasks.len()));
        for task in tasks {
            out.push_str(&render_card(task, config, color));
        }
        out.push('\n');
    }
    out
}

fn render_card(task: &TaskRecord, config: &Config, color: bool) -> String {
    let lang = config.language;
    let bar = task.side_bar_symbol();
    let tag = task.tag_label(lang);
    let title = pad_to_width(&truncate_to_width(&task.title, TITLE_COLS), TITLE_COLS);

    let bar = match emphasis_rgb(task.emphasis) {
        Some(rgb) => paint(bar, rgb, color),
        None => bar.to_string(),
    };
    let tag = paint(
        &tag,
        priority_tag_rgb(task.priority, config.theme.is_dark()),
        color,
    );

    format!(
        "  {} {} [{}]  {}\n",
        bar,
        title,
        tag,
        task.schedule_line(lang)
    )
}

pub fn render_budget(ledger: &BudgetLedger, lang: Language, color: bool) -> String {
    let locale = lang.locale();
    let budget_h = t!("budget_budget", locale = locale);
    let actual_h = t!("budget_actual", locale = locale);
    let diff_h = t!("budget_diff", locale = locale);
    let paint_variance = |v: i64| paint(&format_signed_yen(v), variance_rgb(v), color);

    let mut out = String::new();
    for line in &ledger.lines {
        let kind = match line.kind {
            BudgetKind::Expense => t!("budget_expense", locale = locale),
            BudgetKind::Income => t!("budget_income", locale = locale),
        };
        let diff = match line.variance() {
            Some(v) => paint_variance(v),
            None => t!("budget_in_progress", locale = locale).to_string(),
        };
        out.push_str(&format!(
            "{} ({})\n  {} {}  {} {}  {} {}\n",
            line.title,
            kind,
            budget_h,
            format_yen(line.budget),
            actual_h,
            format_yen(line.actual),
            diff_h,
            diff
        ));
    }

    let totals = ledger.expense_totals();
    out.push_str(&format!(
        "\n{}\n  {} {}  {} {}  {} {}\n",
        t!("budget_total", locale = locale),
        budget_h,
        format_yen(totals.budget),
        actual_h,
        format_yen(totals.actual),
        diff_h,
        paint_variance(totals.variance)
    ));
    out
}

pub fn print_help(binary_name: &str) {
    println!(
        "Event Architect v{} - event planning board and budget",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [--no-color] [board] [--json]", binary_name);
    println!(
        "    {} add <title> [--urgent] [--start <date>] [--due <date>]",
        binary_name
    );
    println!("    {} budget", binary_name);
    println!("    {} config", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    --no-color            Plain output without colours (also off when not a terminal).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("DATES:");
    println!("    YYYY-MM-DD HH:MM, YYYY-MM-DDTHH:MM or YYYY-MM-DD (midnight).");
    println!();
    println!("NOTES:");
    println!("    The board lives in memory only; every run starts fresh.");
    println!("    Sample data can be turned off with load_sample_data = false in config.toml.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_command_is_board() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed.command, Command::Board { json: false });
        assert!(parsed.color);

        let parsed = parse_args(&args(&["--json", "--no-color"])).unwrap();
        assert_eq!(parsed.command, Command::Board { json: true });
        assert!(!parsed.color);
    }

    #[test]
    fn add_collects_flags_and_title_words() {
        let parsed = parse_args(&args(&[
            "--root",
            "/tmp/ea",
            "add",
            "Book",
            "venue",
            "--urgent",
            "--start",
            "2025-11-01 10:00",
            "--due",
            "2025-11-10",
        ]))
        .unwrap();
        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/ea")));
        assert_eq!(
            parsed.command,
            Command::Add {
                title: "Book venue".to_string(),
                urgent: true,
                start: NaiveDate::from_ymd_opt(2025, 11, 1).and_then(|d| d.and_hms_opt(10, 0, 0)),
                due: NaiveDate::from_ymd_opt(2025, 11, 10).and_then(|d| d.and_hms_opt(0, 0, 0)),
            }
        );
    }

    #[test]
    fn add_title_words_are_not_global_flags() {
        let parsed = parse_args(&args(&["add", "help", "desk"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Add {
                title: "help desk".to_string(),
                urgent: false,
                start: None,
                due: None,
            }
        );

        let parsed = parse_args(&args(&["--no-color", "add", "fix", "-r", "--no-color"])).unwrap();
        assert!(!parsed.color);
        assert_eq!(parsed.root, None);
        assert!(matches!(parsed.command, Command::Add { ref title, .. } if title == "fix -r --no-color"));

        // Before the subcommand, help still wins.
        let parsed = parse_args(&args(&["help", "add", "x"])).unwrap();
        assert_eq!(parsed.command, Command::Help);
    }

    #[test]
    fn schedule_dates_accept_picker_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 3).and_then(|d| d.and_hms_opt(9, 30, 0));
        assert_eq!(parse_schedule("2025-11-03 09:30").ok(), expected);
        assert_eq!(parse_schedule("2025-11-03T09:30").ok(), expected);
        assert!(parse_schedule("11/3").is_err());
        assert!(parse_args(&args(&["add", "x", "--start", "tomorrow"])).is_err());
    }

    #[test]
    fn missing_flag_values_are_errors() {
        assert!(parse_args(&args(&["--root"])).is_err());
        assert!(parse_args(&args(&["add", "x", "--due"])).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
    }

    #[test]
    fn budget_render_shows_totals() {
        let out = render_budget(&BudgetLedger::sample(Language::English), Language::English, false);
        assert!(out.contains("Venue (expense)\n"));
        assert!(out.contains("Diff -¥50,000"));
        assert!(out.contains("Diff In progress"));
        assert!(out.contains("Total expenditure\n  Budget ¥2,250,000  Actual ¥1,850,000  Diff +¥400,000"));
    }

    #[test]
    fn budget_render_in_japanese() {
        let out = render_budget(&BudgetLedger::sample(Language::Japanese), Language::Japanese, false);
        assert!(out.starts_with("会場費 (支出)\n  予算 ¥750,000  実績 ¥800,000  差分 -¥50,000\n"));
        assert!(out.contains("チケット販売収入 (収入)"));
        assert!(out.contains("差分 進行中"));
        assert!(out.contains("合計支出\n"));
    }

    #[test]
    fn board_render_lists_groups_with_counts() {
        let record = TaskRecord::new("Book venue", true, Some("11/1"), Some("11/10")).unwrap();
        let board = vec![
            (BoardGroup::Todo, vec![record]),
            (BoardGroup::InProgress, vec![]),
            (BoardGroup::Done, vec![]),
        ];
        let out = render_board(&board, &Config::default(), false);
        assert!(out.starts_with("To Do (1)\n"));
        assert!(out.contains("[Urgent]  Start: 11/1  Due: 11/10"));
        assert!(out.contains("In Progress (0)"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn coloured_render_keeps_text() {
        let record = TaskRecord::new("Book venue", true, None, None).unwrap();
        let board = vec![(BoardGroup::Todo, vec![record])];
        let out = render_board(&board, &Config::default(), true);
        assert!(out.contains("Book venue"));
        assert!(out.contains("Urgent"));
        assert!(brand_header(true).contains("Event Architect"));
        assert_eq!(brand_header(false), "Event Architect\n\n");
    }
}
