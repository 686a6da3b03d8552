// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        consts::{MSG_ISSUES_FAILED, MSG_SCHEDULE_FAILED},
        options::PageKind,
        state::AppState,
    },
    data::{IssueRecord, ScheduleSnapshot},
    error::FetchError,
};

use super::{
    components,
    pages::Page,
    request::{RequestSeq, Ticket},
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Vehicle Tracking Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Result of one background fetch.
pub enum Outcome {
    Schedule(Result<ScheduleSnapshot, FetchError>),
    Issues(Result<Vec<IssueRecord>, FetchError>),
}

pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current results, each replaced wholesale when a fetch lands
    pub schedule: Option<ScheduleSnapshot>,
    pub issues: Option<Vec<IssueRecord>>,

    // at most one user-facing message
    pub error: Option<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,

    pub requests: RequestSeq,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::channel();
        logf!("Init: pages={}, default page={:?}", router::all_pages().len(), PageKind::Schedule);

        Self {
            state,
            schedule: None,
            issues: None,
            error: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            requests: RequestSeq::new(),
            tx,
            rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn loading(&self) -> bool { self.requests.is_loading() }

    /// Channel end handed to worker threads.
    pub fn sender(&self) -> mpsc::Sender<Completion> { self.tx.clone() }

    /// Drain finished fetches. Called once per frame.
    pub fn poll_completions(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            self.apply(done);
        }
    }

    /// Land one completion. Stale tickets are dropped; on failure the
    /// previous result stays on screen and the page's message is set.
    pub fn apply(&mut self, done: Completion) {
        let page = router::page_for(done.ticket.kind);
        if !self.requests.complete(&done.ticket) {
            logd!("Fetch: dropping stale {} response (seq {})", page.title(), done.ticket.seq);
            return;
        }

        match done.outcome {
            Outcome::Schedule(Ok(snap)) => {
                logf!("Fetch: schedule {} landed (employees={})", snap.date, snap.employees.len());
                self.schedule = Some(snap);
            }
            Outcome::Issues(Ok(list)) => {
                logf!("Fetch: issues landed ({} row(s))", list.len());
                self.issues = Some(list);
            }
            Outcome::Schedule(Err(e)) => {
                loge!("Fetch: schedule failed: {e}");
                self.error = Some(s!(MSG_SCHEDULE_FAILED));
            }
            Outcome::Issues(Err(e)) => {
                loge!("Fetch: issues failed: {e}");
                self.error = Some(s!(MSG_ISSUES_FAILED));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_completions();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Vehicle Tracking Dashboard");
            ui.add_space(4.0);
            components::tabs::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::error_banner::draw(ui, self);
            let page = self.current_page();
            page.draw(ui, self);
        });

        // Workers request a repaint when they finish; this keeps the
        // spinner and progress text moving meanwhile.
        if self.loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
