// src/gui/pages/profile.rs
//
// One coach: headline, stats, specialities, certifications, and the
// Reviews/About tab pair. The tab choice lives in the Session and is
// reset whenever the view is (re)activated.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::{App, Slot};
use crate::gui::router::Route;
use crate::records::Record;
use crate::session::Tab;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let id = match &app.route {
        Route::Profile(id) => id.clone(),
        _ => return,
    };

    let mut goto: Option<Route> = None;
    let mut pick_tab: Option<Tab> = None;

    match &app.profile {
        Slot::Idle => {
            ui.label("Loading…");
        }
        Slot::Failed(err) => {
            ui.colored_label(Color32::LIGHT_RED, format!("Profile unavailable: {err}"));
            if ui.button("Retry").clicked() {
                goto = Some(Route::Profile(id.clone()));
            }
        }
        Slot::Ready(data) => match &data.coach {
            None => {
                // Loaded fine, the id just isn't in the table.
                ui.label(format!("No coach with id {id:?}."));
                if ui.button("Back to coaches").clicked() {
                    goto = Some(Route::Listing);
                }
            }
            Some(coach) => {
                ui.horizontal(|ui| {
                    ui.heading(coach.field("name"));
                    ui.label(RichText::new(coach.field("plan")).italics().weak());
                });
                ui.horizontal(|ui| {
                    if ui.button("See plans").clicked() {
                        goto = Some(Route::Plans(id.clone()));
                    }
                    if ui.button("Back to coaches").clicked() {
                        goto = Some(Route::Listing);
                    }
                });

                ui.separator();

                ui.horizontal(|ui| {
                    stat(ui, coach.field("followers"), "Followers");
                    stat(ui, coach.field("following"), "Following");
                    stat(ui, coach.field("peopleCoached"), "People coached");
                    let rating = format!(
                        "{} ({} reviews)",
                        coach.field("rating"),
                        coach.field("reviews")
                    );
                    stat(ui, &rating, "Rating");
                });

                ui.separator();

                ui.label(RichText::new("Speciality").strong());
                ui.horizontal_wrapped(|ui| {
                    for tag in coach.list("specialities") {
                        let _ = ui.small_button(tag);
                    }
                });

                ui.label(RichText::new("Certifications").strong());
                for cert in coach.list("certifications") {
                    ui.label(format!("• {cert}"));
                }

                ui.separator();

                ui.horizontal(|ui| {
                    for tab in [Tab::Reviews, Tab::About] {
                        let selected = app.session.tab() == tab;
                        if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                            pick_tab = Some(tab);
                        }
                    }
                });
                ui.separator();

                match app.session.tab() {
                    Tab::Reviews => reviews_list(ui, &data.reviews),
                    Tab::About => {
                        if data.about.is_empty() {
                            ui.label(RichText::new("Nothing here yet.").weak());
                        } else {
                            ui.label(data.about.as_str());
                        }
                    }
                }
            }
        },
    }

    if let Some(tab) = pick_tab {
        logf!("UI: profile tab → {:?}", tab);
        app.session = std::mem::take(&mut app.session).set_tab(tab);
    }
    if let Some(route) = goto {
        app.navigate(route);
    }
}

fn stat(ui: &mut egui::Ui, value: &str, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value).strong());
        ui.label(RichText::new(label).weak());
    });
    ui.separator();
}

fn reviews_list(ui: &mut egui::Ui, reviews: &[Record]) {
    if reviews.is_empty() {
        ui.label(RichText::new("No reviews yet.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("profile_reviews")
        .show(ui, |ui| {
            for review in reviews {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(review.field("name")).strong());
                    ui.label(RichText::new(review.field("date")).weak());
                });
                ui.label(super::stars(review.field("rating")));
                ui.label(review.field("review"));
                ui.separator();
            }
        });
}
