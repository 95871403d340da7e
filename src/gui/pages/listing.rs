// src/gui/pages/listing.rs
//
// The coach directory, in the shuffled order chosen at activation.
// Clicking a name opens the profile; "See plans" jumps straight to
// the pricing view.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::{App, Slot};
use crate::gui::router::Route;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Fitness & Nutrition Coaches");
    ui.separator();

    let mut goto: Option<Route> = None;

    match &app.listing {
        Slot::Idle => {
            ui.label("Loading…");
        }
        Slot::Failed(err) => {
            ui.colored_label(Color32::LIGHT_RED, format!("Coach list unavailable: {err}"));
            if ui.button("Retry").clicked() {
                goto = Some(Route::Listing);
            }
        }
        Slot::Ready(data) => {
            let coaches = &data.coaches;

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::initial(200.0).resizable(true).at_least(120.0))
                .column(Column::initial(70.0))
                .column(Column::initial(130.0))
                .column(Column::initial(90.0))
                .column(Column::initial(120.0))
                .column(Column::remainder())
                .header(24.0, |mut header| {
                    for title in ["Name", "Rating", "People coached", "Slots", "Plan", ""] {
                        header.col(|ui| {
                            ui.label(RichText::new(title).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(22.0, coaches.len(), |mut row| {
                        let coach = &coaches[row.index()];
                        let id = coach.field("id").to_string();

                        row.col(|ui| {
                            if ui.link(coach.field("name")).clicked() {
                                goto = Some(Route::Profile(id.clone()));
                            }
                        });
                        row.col(|ui| {
                            ui.label(format!("{} ☆", coach.field("rating")));
                        });
                        row.col(|ui| {
                            ui.label(coach.field("peopleCoached"));
                        });
                        row.col(|ui| {
                            ui.label(format!("{} open", coach.field("slot")));
                        });
                        row.col(|ui| {
                            ui.label(coach.field("plan"));
                        });
                        row.col(|ui| {
                            if ui.button("See plans").clicked() {
                                goto = Some(Route::Plans(id.clone()));
                            }
                        });
                    });
                });
        }
    }

    if let Some(route) = goto {
        app.navigate(route);
    }
}
