use crate::app::commands::{Command, HELP};
use crate::core::session::{Session, SessionEvents};
use crate::domain::model::{SessionEvent, SessionSummary, Tab};
use crate::domain::ports::Presenter;
use crate::utils::error::{FelineError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

enum Flow {
    Continue,
    Quit,
}

/// Drives a session from line input and timer events until `quit` or end of input.
pub async fn run_session<R, P>(
    mut session: Session,
    mut events: SessionEvents,
    input: R,
    presenter: &mut P,
) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    P: Presenter,
{
    presenter.show_banner(session.page())?;
    show_active_tab(&session, presenter)?;

    let mut lines = input.lines();
    let mut events_open = true;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match handle_line(&mut session, &line, presenter) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) if e.is_recoverable() => {
                        let notice = format!(
                            "{} ({})",
                            e.user_friendly_message(),
                            e.recovery_suggestion()
                        );
                        presenter.show_notice(&notice)?;
                    }
                    Err(e) => return Err(e),
                }
            }
            event = events.recv(), if events_open => match event {
                Some(SessionEvent::FactAdvanced { index, fact }) => {
                    if session.active_tab() == Tab::Facts {
                        presenter.show_fact(index, session.fact_count(), &fact)?;
                    }
                }
                None => events_open = false,
            },
        }
    }

    Ok(session.close().await)
}

fn handle_line<P: Presenter>(session: &mut Session, line: &str, presenter: &mut P) -> Result<Flow> {
    match line.parse::<Command>()? {
        Command::Next => {
            let (index, fact) = session.advance_indexed();
            if session.active_tab() != Tab::Facts {
                session.select_tab(Tab::Facts);
                presenter.show_tab(Tab::Facts)?;
            }
            presenter.show_fact(index, session.fact_count(), &fact)?;
        }
        Command::Like(reference) => {
            let id = session
                .resolve_breed(&reference)
                .map(str::to_string)
                .ok_or(FelineError::UnknownBreed { id: reference })?;
            session.toggle_like(&id)?;
            presenter.show_like(&session.breed_view(&id)?)?;
        }
        Command::Show(tab) => {
            session.select_tab(tab);
            show_active_tab(session, presenter)?;
        }
        Command::State => {
            let json = serde_json::to_string_pretty(&session.snapshot())?;
            presenter.show_notice(&json)?;
        }
        Command::Help => presenter.show_notice(HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn show_active_tab<P: Presenter>(session: &Session, presenter: &mut P) -> Result<()> {
    let tab = session.active_tab();
    presenter.show_tab(tab)?;
    match tab {
        Tab::Facts => presenter.show_fact(
            session.fact_index(),
            session.fact_count(),
            &session.current_fact(),
        ),
        Tab::Breeds => presenter.show_breeds(&session.breeds()),
    }
}
