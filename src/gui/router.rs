// src/gui/router.rs
use eframe::egui;

use super::app::App;
use super::pages;

/// Where the app is looking. Profile and Plans carry the coach id the
/// listing handed over (the route-supplied identifier).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Listing,
    Profile(String),
    Plans(String),
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Listing => "Coaches",
            Route::Profile(_) => "Profile",
            Route::Plans(_) => "Plans",
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.route {
        Route::Listing => pages::listing::draw(ui, app),
        Route::Profile(_) => pages::profile::draw(ui, app),
        Route::Plans(_) => pages::plans::draw(ui, app),
    }
}
