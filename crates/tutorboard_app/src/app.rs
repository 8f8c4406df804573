use std::io::{BufRead, Write};
use std::path::PathBuf;

use board_logging::board_info;
use tutorboard_catalog::CatalogSource;
use tutorboard_core::{update, DashboardState, Msg};

use crate::commands::{self, Command};
use crate::effects::EffectRunner;
use crate::{persistence, render};

const HELP_TEXT: &str = "\
commands:
  all | published | drafts   switch the status filter
  page N                     jump to page N
  next | prev                step one page
  refresh                    reload the catalog
  help                       show this text
  quit                       exit";

/// Drive the dashboard loop over line-based input until `quit` or EOF.
pub fn run(
    page_size: u32,
    source: Box<dyn CatalogSource>,
    prefs_path: PathBuf,
    input: impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let mut state = DashboardState::new(page_size)?;
    let runner = EffectRunner::new(source, prefs_path.clone());

    // Initial load, then pick up where the user left off last run.
    state = dispatch(state, Msg::RefreshRequested, &runner);
    if let Some(prefs) = persistence::load_view_prefs(&prefs_path) {
        state = dispatch(state, Msg::RestoreView(prefs), &runner);
    }
    render_if_dirty(&mut state, output)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = commands::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(output, "unrecognized command; try `help`")?;
            }
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP_TEXT}")?;
                continue;
            }
            _ => {}
        }
        if let Some(msg) = commands::to_msg(command, &state.view()) {
            state = dispatch(state, msg, &runner);
        }
        render_if_dirty(&mut state, output)?;
    }

    board_info!("dashboard session ended");
    Ok(())
}

/// Apply one message, then run its effects and any follow-up messages to
/// completion before returning, so every render sees a settled state.
fn dispatch(state: DashboardState, msg: Msg, runner: &EffectRunner) -> DashboardState {
    let (mut state, effects) = update(state, msg);
    for follow_up in runner.run(effects) {
        state = dispatch(state, follow_up, runner);
    }
    state
}

fn render_if_dirty(state: &mut DashboardState, output: &mut impl Write) -> std::io::Result<()> {
    let view = state.view();
    if state.consume_dirty() {
        writeln!(output, "{}", render::render(&view))?;
    }
    Ok(())
}
