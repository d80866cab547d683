//! Interactive cooking session.
//!
//! Lines from the input are typed stand-ins for speech transcripts. The
//! countdown ticks concurrently on a tokio interval that only exists while
//! the guide's timer runs. When input closes, the session waits for a
//! running timer to finish before printing the final guide.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use simmer_core::{
    display::{GuideView, Notice},
    CookingAssistant, EventLog, GuideEvent, ListenHandle, ListeningSession, Settings, Step, Tick,
    VoiceAction,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    time::{self, Interval, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

enum Flow {
    Continue,
    Quit,
}

/// A cooking session bound to one recipe's steps.
pub struct Kitchen<'a> {
    assistant: CookingAssistant<EventLog>,
    session: ListeningSession,
    listening: Option<ListenHandle>,
    tick_period: Duration,
    renderer: &'a TerminalRenderer,
}

impl<'a> Kitchen<'a> {
    pub fn new(steps: Vec<Step>, settings: &Settings, renderer: &'a TerminalRenderer) -> Self {
        Self {
            assistant: CookingAssistant::new(steps, EventLog::new()),
            session: ListeningSession::new(settings.listen_timeout()),
            listening: None,
            tick_period: settings.tick_period(),
            renderer,
        }
    }

    /// Run until `quit`, or until input closes and no timer is left running.
    pub async fn run<R>(mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        info!(
            "Cooking session started with {} steps",
            self.assistant.guide().steps().len()
        );
        self.renderer
            .render(self.assistant.apply(&VoiceAction::RepeatInstruction))?;

        self.serve(input).await?;

        self.renderer.render(GuideView(self.assistant.guide()))?;
        Ok(())
    }

    async fn serve<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut cadence: Option<Cadence> = None;
        let mut input_open = true;

        loop {
            self.sync_cadence(&mut cadence);
            if !input_open && cadence.is_none() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if input_open => match line? {
                    Some(line) => {
                        if let Flow::Quit = self.handle_line(line.trim())? {
                            break;
                        }
                    }
                    None => {
                        debug!("Input closed");
                        input_open = false;
                    }
                },
                () = next_tick(&mut cadence) => self.on_tick()?,
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let command = words.next().map(str::to_ascii_lowercase);

        match command.as_deref() {
            None => {}
            Some("quit" | "exit") => return Ok(Flow::Quit),
            Some("done") => self.complete(words.next())?,
            Some("status") => self.renderer.render(GuideView(self.assistant.guide()))?,
            Some("listen") => match self.session.start(Instant::now()) {
                Ok(handle) => {
                    self.listening = Some(handle);
                    self.renderer.render(Notice::done("Listening..."))?;
                }
                Err(e) => self.renderer.render(Notice::error(e.to_string()))?,
            },
            Some(_) => self.transcript(line)?,
        }
        self.flush_events()?;
        Ok(Flow::Continue)
    }

    fn complete(&mut self, step: Option<&str>) -> Result<()> {
        let completed = match step {
            None => self.assistant.complete_focused(),
            Some(raw) => match raw.parse::<u32>() {
                Ok(number) => self.assistant.guide_mut().mark_step_complete(number),
                Err(_) => {
                    return self
                        .renderer
                        .render(Notice::error(format!("Not a step number: {raw}")));
                }
            },
        };
        if !completed {
            self.renderer
                .render(Notice::alert("Nothing to mark: step unknown or already done"))?;
        }
        Ok(())
    }

    fn transcript(&mut self, line: &str) -> Result<()> {
        let reply = match self.listening.take() {
            Some(handle) => {
                let delivered = self.session.deliver(handle, line, Instant::now());
                self.session.stop(handle);
                match delivered {
                    Ok(Some(action)) => Ok(self.assistant.apply(&action)),
                    Ok(None) => {
                        return self.renderer.render(Notice::alert(
                            "Listening timed out, say \"listen\" to try again",
                        ));
                    }
                    Err(e) => Err(e),
                }
            }
            None => self.assistant.handle_transcript(line),
        };

        match reply {
            Ok(reply) => self.renderer.render(reply),
            Err(e) => self.renderer.render(Notice::error(e.to_string())),
        }
    }

    fn on_tick(&mut self) -> Result<()> {
        if let Tick::Expired = self.assistant.tick() {
            debug!("Countdown expired");
        }
        self.flush_events()
    }

    /// Render and clear everything the guide reported since the last call.
    fn flush_events(&mut self) -> Result<()> {
        let events = self.assistant.guide_mut().sink_mut().drain();
        for event in &events {
            let guide = self.assistant.guide();
            self.renderer.render(Notice::for_event(event, guide))?;
            if matches!(event, GuideEvent::StepCompleted { .. }) && guide.progress().is_finished() {
                self.renderer
                    .render(Notice::done("All steps complete. Enjoy your meal!"))?;
            }
        }
        Ok(())
    }

    /// Start a fresh interval for every countdown run, so the first tick
    /// lands one full period after the timer was (re)started, and drop it
    /// when the countdown stops.
    fn sync_cadence(&self, cadence: &mut Option<Cadence>) {
        let guide = self.assistant.guide();
        if !guide.is_timer_running() {
            *cadence = None;
            return;
        }

        let run = guide.timer_run();
        if cadence.as_ref().is_some_and(|current| current.run == run) {
            return;
        }
        debug!("Starting cadence for countdown run {run}");
        let mut interval =
            time::interval_at(time::Instant::now() + self.tick_period, self.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        *cadence = Some(Cadence { run, interval });
    }
}

/// Tick interval bound to one countdown run.
struct Cadence {
    run: u64,
    interval: Interval,
}

async fn next_tick(cadence: &mut Option<Cadence>) {
    match cadence {
        Some(cadence) => {
            cadence.interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
