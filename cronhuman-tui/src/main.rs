//! cronhuman-tui - interactive cron expression explorer
//!
//! Type an expression and watch its plain-English meaning and next run
//! times update live. Tab cycles focus between the input field, the option
//! toggles, and the expression history.

use std::time::{Duration, Instant};

use clap::Parser;

use cronhuman_tui::{
    app::{event::EventHandler, reduce, Action, AppState, NOTIFICATION_TTL_MS},
    error::Result,
    preview::preview_for,
    services::ClipboardHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "cronhuman-tui")]
#[command(about = "Interactive TUI for exploring cron expressions", long_about = None)]
#[command(version)]
struct Cli {
    /// Timezone for run projection (default: system timezone)
    #[arg(long)]
    tz: Option<String>,

    /// Start with 6-field/seconds support enabled
    #[arg(long)]
    seconds: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Refuse a bad zone before taking over the screen
    if let Some(tz) = &cli.tz {
        libcronhuman::engine::resolve_timezone(tz)?;
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, cli);

    restore_terminal(terminal)?;
    result
}

fn run_app(terminal: &mut Tui, cli: Cli) -> Result<()> {
    let mut state = AppState::new();
    state.timezone = cli.tz;
    state.allow_seconds = cli.seconds;

    let clipboard = ClipboardHandle::new()?;
    let events = EventHandler::new(state.config.tick_rate_ms);

    // The preview is derived state; recompute only when its inputs change.
    // The timezone is fixed at launch, so it is not part of the cache key.
    let mut preview = preview_for(&state);
    let mut preview_inputs = (state.expression.clone(), state.allow_seconds);

    // Deadline of the live notification timer, keyed by its seq
    let mut notify_deadline: Option<(Instant, u64)> = None;

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &preview))?;

        let action: Action = events.next()?.into();

        let prev_paste = state.paste_seq;
        let prev_copy = state.copy_seq;

        state = reduce(state, action);

        // Clipboard completions re-enter as ordinary actions, strictly
        // after the key events that preceded them
        while let Some(completion) = clipboard.try_recv() {
            state = reduce(state, completion);
        }

        // Side effects the reducer requested this turn
        if state.paste_seq > prev_paste {
            clipboard.read(state.paste_seq);
        }
        if state.copy_seq > prev_copy {
            if let Some(entry) = state.history.selected() {
                clipboard.write(entry.expression.clone());
            }
        }

        // The newest notification owns the countdown; expiry events for
        // superseded notifications are filtered out by the reducer anyway
        match &state.notification {
            Some(n) => {
                let stale = notify_deadline.map(|(_, seq)| seq != n.seq).unwrap_or(true);
                if stale {
                    let deadline = Instant::now() + Duration::from_millis(NOTIFICATION_TTL_MS);
                    notify_deadline = Some((deadline, n.seq));
                }
            }
            None => notify_deadline = None,
        }
        if let Some((deadline, seq)) = notify_deadline {
            if Instant::now() >= deadline {
                state = reduce(state, Action::NotificationExpired { seq });
                notify_deadline = None;
            }
        }

        let inputs = (state.expression.clone(), state.allow_seconds);
        if inputs != preview_inputs {
            preview = preview_for(&state);
            preview_inputs = inputs;
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
