// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    session::Session,
    shuffle,
    source::DataSource,
    store::{ListingData, PlansData, ProfileData},
};

use super::router::{self, Route};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Coach Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Per-view load slot. Keeps "never loaded" apart from "loaded but the
/// record isn't there" — a lookup miss only means something once the
/// slot is Ready.
#[derive(Clone, Debug, Default)]
pub enum Slot<T> {
    #[default]
    Idle,
    Failed(String),
    Ready(T),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub source: DataSource,

    pub route: Route,

    // per-view data, rebuilt on every activation
    pub listing: Slot<ListingData>,
    pub profile: Slot<ProfileData>,
    pub plans: Slot<PlansData>,

    // duration picks + active profile tab for the current view
    pub session: Session,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let source = state.options.source();
        logf!("Init: source={:?}", source);

        let mut app = Self {
            state,
            source,
            route: Route::Listing,
            listing: Slot::Idle,
            profile: Slot::Idle,
            plans: Slot::Idle,
            session: Session::default(),
            status: String::from("Idle"),
        };
        app.navigate(Route::Listing);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Navigation is view activation: drop the old view's data and
    /// session, fetch fresh, then shuffle/lookup as the view requires.
    /// Loads are synchronous; nothing here outlives the call.
    pub fn navigate(&mut self, route: Route) {
        logf!("Nav: {:?} → {:?}", self.route, route);

        match &route {
            Route::Listing => {
                self.session = Session::default();
                self.listing = match ListingData::load(&self.source) {
                    Ok(mut data) => {
                        // fresh ordering on every activation
                        shuffle::shuffle(&mut data.coaches, &mut rand::thread_rng());
                        self.status(format!("{} coaches", data.coaches.len()));
                        Slot::Ready(data)
                    }
                    Err(e) => {
                        loge!("Nav: listing load failed: {e}");
                        self.status(format!("Unavailable: {e}"));
                        Slot::Failed(e.to_string())
                    }
                };
            }
            Route::Profile(id) => {
                self.session = Session::default();
                self.profile = match ProfileData::load(&self.source, id) {
                    Ok(data) => {
                        if data.coach.is_some() {
                            self.status(format!("{} review(s)", data.reviews.len()));
                        } else {
                            self.status(format!("No coach with id {id:?}"));
                        }
                        Slot::Ready(data)
                    }
                    Err(e) => {
                        loge!("Nav: profile load failed: {e}");
                        self.status(format!("Unavailable: {e}"));
                        Slot::Failed(e.to_string())
                    }
                };
            }
            Route::Plans(id) => {
                self.plans = match PlansData::load(&self.source, id) {
                    Ok(data) => {
                        // every plan starts at the 12 week tier
                        self.session = Session::for_plans(data.plan_names());
                        self.status(format!("{} plan(s)", data.plans.len()));
                        Slot::Ready(data)
                    }
                    Err(e) => {
                        loge!("Nav: plans load failed: {e}");
                        self.session = Session::default();
                        self.status(format!("Unavailable: {e}"));
                        Slot::Failed(e.to_string())
                    }
                };
            }
        }

        self.route = route;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            super::components::nav_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            router::draw(ui, self);
        });
    }
}
