use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use serde::Serialize;

use quest_session::Session;

use crate::cli::root_commands::PlayArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{position_of, start_session};
use crate::context::AppContext;
use crate::output::views::render_schema;
use crate::output::{TableView, ViewOptions, output};
use crate::repl::{HELP, InputBuffer, InputResult, MetaCommand};
use crate::ui;

const PROMPT: &str = "sql> ";
const CONTINUATION: &str = " ..> ";

/// Handle `sqlquest play`.
pub async fn handle(args: &PlayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let start_id = args.start.or_else(|| ctx.config.general.start_puzzle());
    let position = match start_id {
        Some(id) => position_of(&ctx.catalog, id)?,
        None => 0,
    };
    let mut session = start_session(ctx.catalog.clone(), position).await?;
    let screen = Screen {
        format: flags.format,
        options: ViewOptions::from_prefs(&ctx.config.display),
        interactive: ui::prefs().interactive,
    };

    let config = Config::builder().auto_add_history(true).build();
    let mut editor: Editor<(), DefaultHistory> =
        Editor::with_config(config).context("failed to initialize line editor")?;
    let history_path = ctx.config.display.history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    if screen.interactive {
        println!("🗝️  SQL Puzzle Quest: SQLクエリを解いて宝箱を開けよう");
        println!("Type :help for help, :quit to exit\n");
    }
    screen.arrive(&session)?;

    let mut input = InputBuffer::new();
    loop {
        let prompt = if input.is_empty() { PROMPT } else { CONTINUATION };

        match editor.readline(prompt) {
            Ok(line) => match input.process_line(&line) {
                InputResult::MetaCommand(command) => {
                    if !run_command(&mut session, command, &screen).await? {
                        break;
                    }
                }
                InputResult::Query(sql) => submit(&mut session, &sql, &screen).await?,
                InputResult::Incomplete | InputResult::Empty => {}
            },
            Err(ReadlineError::Interrupted) => {
                if input.is_empty() {
                    println!("Use :quit or Ctrl-D to exit");
                } else {
                    input.clear();
                    println!("^C");
                }
            }
            Err(ReadlineError::Eof) => {
                if let Some(sql) = input.force_submit() {
                    submit(&mut session, &sql, &screen).await?;
                }
                break;
            }
            Err(error) => return Err(error).context("failed to read input"),
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(error) = editor.save_history(path) {
            tracing::warn!(%error, path = %path.display(), "failed to save history");
        }
    }

    screen.show(&session.progress())
}

async fn submit(session: &mut Session, sql: &str, screen: &Screen) -> anyhow::Result<()> {
    let response = session.submit(sql).await;
    screen.show(&response)?;
    if response.is_correct() && screen.interactive {
        println!(":explain で解説、:next で次の問題へ");
    }
    Ok(())
}

/// Run one meta-command. Returns `false` when the session should end.
async fn run_command(
    session: &mut Session,
    command: MetaCommand,
    screen: &Screen,
) -> anyhow::Result<bool> {
    match command {
        MetaCommand::Hint => {
            if session.toggle_hint() {
                println!("💡 ヒント\n{}", session.current().hint);
            } else {
                println!("ヒントを隠しました");
            }
        }
        MetaCommand::Explain => match session.reveal_explanation() {
            Ok(explanation) => println!("📖 解説\n{explanation}"),
            Err(error) => println!("{error}"),
        },
        MetaCommand::Next => {
            if session.next().await? {
                screen.arrive(session)?;
            } else {
                println!("これが最後の問題です");
            }
        }
        MetaCommand::Prev => {
            if session.previous().await? {
                screen.arrive(session)?;
            } else {
                println!("これが最初の問題です");
            }
        }
        MetaCommand::Goto(id) => match session.catalog().position_of(id) {
            Some(position) => {
                session.go_to(position).await?;
                screen.arrive(session)?;
            }
            None => println!("no puzzle with id {id}"),
        },
        MetaCommand::Schema => {
            let schema = render_schema(&session.current().table_schema, screen.options.table);
            println!("{schema}");
        }
        MetaCommand::Status => screen.show(&session.progress())?,
        MetaCommand::List => screen.show(&session.summaries())?,
        MetaCommand::Help => println!("{HELP}"),
        MetaCommand::Quit => return Ok(false),
        MetaCommand::Unknown(message) => eprintln!("{message}"),
    }
    Ok(true)
}

/// Where play output goes, in the format the learner asked for.
struct Screen {
    format: OutputFormat,
    options: ViewOptions,
    /// Greeting and follow-up tips are printed.
    interactive: bool,
}

impl Screen {
    const fn is_text(&self) -> bool {
        matches!(self.format, OutputFormat::Table)
    }

    fn show<T: Serialize + TableView + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        output(value, self.format, &self.options)
    }

    /// Progress line, then the puzzle that was just loaded.
    fn arrive(&self, session: &Session) -> anyhow::Result<()> {
        self.show(&session.progress())?;
        if self.is_text() {
            println!();
        }
        self.show(&session.view())?;
        if self.is_text() {
            println!();
        }
        Ok(())
    }
}
