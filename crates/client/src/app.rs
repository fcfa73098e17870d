//! Frame loop: paces the simulation, paints it, and reacts to input.
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use runtime::{Clock, IntervalClock, ManualClock, Simulation};
use sim_core::NullRenderer;
use tokio::time::{self, Duration};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::presentation::{Hud, Scene, TerminalGuard, Tui, terminal, ui};

const INPUT_POLL_INTERVAL_MS: u64 = 8;

/// What the input handler wants the loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Continue,
    Quit,
}

/// Runs the simulation inside the terminal until the user quits.
pub async fn run_terminal(config: &ClientConfig) -> Result<()> {
    let mut tui = terminal::init().context("failed to initialize terminal")?;
    let _guard = TerminalGuard;

    let size = tui.size()?;
    let area = ui::board_area(Rect::new(0, 0, size.width, size.height));
    let mut sim = Simulation::new(config.runtime.clone(), area.width.into(), area.height.into())?;
    sim.populate();

    let mut clock = IntervalClock::new(config.runtime.frame_interval);
    let mut scene = Scene::default();
    let mut hud = Hud::default();

    sim.draw(&mut scene);
    draw(&mut tui, &scene, &hud)?;

    loop {
        tokio::select! {
            _ = clock.next_frame() => {
                if !hud.paused {
                    let report = sim.step()?;
                    hud.frame = report.frame;
                    hud.captured += report.captured;
                }
                sim.draw(&mut scene);
                draw(&mut tui, &scene, &hud)?;
            }
            _ = time::sleep(Duration::from_millis(INPUT_POLL_INTERVAL_MS)) => {
                if handle_input(&mut sim, &mut hud)? == Control::Quit {
                    break;
                }
            }
        }
    }

    info!(
        frames = sim.frame(),
        captured = hud.captured,
        "terminal session finished"
    );
    Ok(())
}

/// Runs a fixed number of frames without touching the terminal.
pub async fn run_headless(config: &ClientConfig, frames: u64) -> Result<()> {
    let (width, height) = config.headless_size;
    let mut sim = Simulation::new(config.runtime.clone(), width, height)?;
    sim.populate();

    let mut clock = ManualClock::new();
    let summary = sim.run(&mut clock, &mut NullRenderer, Some(frames)).await?;

    info!(
        frames = summary.frames,
        captured = summary.captured,
        targets = sim.board().target_count(),
        "headless run finished"
    );
    println!(
        "frames: {}  captured: {}  targets left: {}",
        summary.frames,
        summary.captured,
        sim.board().target_count()
    );
    Ok(())
}

fn draw(tui: &mut Tui, scene: &Scene, hud: &Hud) -> Result<()> {
    tui.draw(|frame| ui::render(frame, scene, hud))?;
    Ok(())
}

/// Drains pending terminal events without blocking.
fn handle_input(sim: &mut Simulation, hud: &mut Hud) -> Result<Control> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(key, hud) == Control::Quit {
                    return Ok(Control::Quit);
                }
            }
            Event::Resize(width, height) => {
                let area = ui::board_area(Rect::new(0, 0, width, height));
                sim.resize(area.width.into(), area.height.into());
            }
            _ => {}
        }
    }
    Ok(Control::Continue)
}

fn handle_key(key: KeyEvent, hud: &mut Hud) -> Control {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            hud.paused = !hud.paused;
            debug!(paused = hud.paused, "pause toggled");
            Control::Continue
        }
        _ => Control::Continue,
    }
}

#[cfg(test)]
mod tests {
    use runtime::RuntimeConfig;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut hud = Hud::default();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut hud), Control::Quit);
        assert_eq!(handle_key(press(KeyCode::Esc), &mut hud), Control::Quit);
        assert_eq!(
            handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut hud
            ),
            Control::Quit
        );
        assert_eq!(handle_key(press(KeyCode::Char('c')), &mut hud), Control::Continue);
    }

    #[test]
    fn pause_toggles() {
        let mut hud = Hud::default();
        handle_key(press(KeyCode::Char('p')), &mut hud);
        assert!(hud.paused);
        handle_key(press(KeyCode::Char(' ')), &mut hud);
        assert!(!hud.paused);
    }

    #[tokio::test]
    async fn headless_run_completes() {
        let config = ClientConfig {
            runtime: RuntimeConfig::default().with_seed(3),
            headless_frames: Some(40),
            headless_size: ClientConfig::DEFAULT_HEADLESS_SIZE,
            log_dir: None,
            session_id: None,
        };
        run_headless(&config, 40).await.expect("headless run");
    }
}
