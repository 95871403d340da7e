// src/gui/components/nav_bar.rs
//
// Top strip: app title, the Coaches tab, a crumb for the active coach
// view, and the status line on the right.

use eframe::egui::{self, Align, Layout, RichText};

use crate::gui::{app::App, router::Route};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut goto: Option<Route> = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Coach Scout").strong());
        ui.separator();

        let on_listing = app.route == Route::Listing;
        if ui.selectable_label(on_listing, "Coaches").clicked() && !on_listing {
            goto = Some(Route::Listing);
        }

        match &app.route {
            Route::Listing => {}
            Route::Profile(id) => {
                ui.label(RichText::new(format!("{} · {}", app.route.title(), id)).weak());
            }
            Route::Plans(id) => {
                ui.label(RichText::new(format!("{} · {}", app.route.title(), id)).weak());
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(&app.status).weak());
        });
    });

    if let Some(route) = goto {
        app.navigate(route);
    }
}
