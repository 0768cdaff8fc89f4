use booking::{BookingFlow, LogSubmission, SubmissionHandler};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::Action,
    config::Config,
    pages::{self, Page},
    tui::{Event, EventResponse, Tui},
};

pub const TITLE: &str = "Book appointment";

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub flow: BookingFlow,
    pub pages: Vec<Box<dyn Page>>,
    pub submission: Box<dyn SubmissionHandler>,
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl App {
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        Self::with_handler(config, tick_rate, frame_rate, Box::new(LogSubmission))
    }

    pub fn with_handler(
        config: Config,
        tick_rate: f64,
        frame_rate: f64,
        submission: Box<dyn SubmissionHandler>,
    ) -> Result<Self> {
        let mut pages = pages::all();
        for page in pages.iter_mut() {
            page.register_config_handler(config.clone())?;
        }
        let mut app = Self {
            config,
            tick_rate,
            frame_rate,
            flow: BookingFlow::new(),
            pages,
            submission,
            should_quit: false,
            should_suspend: false,
        };
        app.enter_active_page()?;
        Ok(app)
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                self.handle_event(e, &action_tx)?;
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    debug!("{action:?}");
                }
                match action {
                    Action::ClearScreen => tui.terminal.clear()?,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.render(&mut tui, &action_tx)?;
                    }
                    Action::Render | Action::Update => self.render(&mut tui, &action_tx)?,
                    action => self.update(action)?,
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.resume()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    /// Turn a terminal event into an action on the queue.
    pub fn handle_event(&mut self, event: Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        let action = match event {
            Event::Quit => Some(Action::Quit),
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
            Event::Resize(x, y) => Some(Action::Resize(x, y)),
            Event::Key(key) => self.handle_key_event(key)?,
            _ => None,
        };
        if let Some(action) = action {
            action_tx.send(action)?;
        }
        Ok(())
    }

    /// The active page sees the key first; global keys apply unless it
    /// stopped the key.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let step = self.flow.step();
        let response = match self.pages.iter_mut().find(|page| page.step() == step) {
            Some(page) => page.handle_key_events(key, &mut self.flow)?,
            None => None,
        };
        Ok(match response {
            Some(EventResponse::Stop(action)) => Some(action),
            Some(EventResponse::Continue(action)) => Some(action),
            None => global_action(key),
        })
    }

    /// Apply an action that does not need the terminal.
    pub fn update(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Submit => self.submit()?,
            Action::Error(msg) => error!("{msg}"),
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let before = self.flow.step();
        for effect in self.flow.submit() {
            if let Err(err) = effect.execute(self.submission.as_mut()) {
                error!(%err, "failed to hand off the booking");
            }
        }
        let after = self.flow.step();
        if after != before {
            info!(from = %before, to = %after, "step changed");
            self.enter_active_page()?;
        }
        Ok(())
    }

    fn enter_active_page(&mut self) -> Result<()> {
        let step = self.flow.step();
        if let Some(page) = self.pages.iter_mut().find(|page| page.step() == step) {
            page.on_enter(&self.flow)?;
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            if let Err(err) = self.draw(f) {
                action_tx
                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                    .ok();
            }
        })?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            header,
        );

        let step = self.flow.step();
        if let Some(page) = self.pages.iter_mut().find(|page| page.step() == step) {
            page.draw(frame, body, &self.flow)?;
            let hints: Vec<Span> = page
                .hints()
                .iter()
                .flat_map(|(key, what)| {
                    [
                        Span::styled(*key, Style::default().fg(Color::White)),
                        Span::styled(format!(": {what}   "), Style::default().fg(Color::DarkGray)),
                    ]
                })
                .collect();
            frame.render_widget(Line::from(hints), footer);
        }
        Ok(())
    }
}

fn global_action(key: KeyEvent) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') => Some(Action::Quit),
        KeyCode::Char('z') => Some(Action::Suspend),
        _ => None,
    }
}
