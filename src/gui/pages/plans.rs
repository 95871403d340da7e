// src/gui/pages/plans.rs
//
// The pricing view: one card per plan, duration buttons for the three
// commitment tiers, and the quote the Pricing Calculator derives from
// the current pick. Duration picks live in the Session keyed by plan
// name and reset to 12 weeks whenever the view is activated.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::{App, Slot};
use crate::gui::router::Route;
use crate::pricing::{self, Duration};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let id = match &app.route {
        Route::Plans(id) => id.clone(),
        _ => return,
    };

    let mut goto: Option<Route> = None;
    let mut pick: Option<(String, Duration)> = None;

    ui.heading("Choose your transformation package");
    ui.label("Take a step towards a longer, healthier and happier life!");
    ui.separator();

    match &app.plans {
        Slot::Idle => {
            ui.label("Loading…");
        }
        Slot::Failed(err) => {
            ui.colored_label(Color32::LIGHT_RED, format!("Plans unavailable: {err}"));
            if ui.button("Retry").clicked() {
                goto = Some(Route::Plans(id.clone()));
            }
        }
        Slot::Ready(data) => {
            match &data.coach {
                Some(coach) => {
                    ui.label(format!("Coaching with {}", coach.field("name")));
                }
                None => {
                    ui.label(format!("No coach with id {id:?}."));
                }
            }
            ui.horizontal(|ui| {
                if ui.button("Back to profile").clicked() {
                    goto = Some(Route::Profile(id.clone()));
                }
                if ui.button("All coaches").clicked() {
                    goto = Some(Route::Listing);
                }
            });
            ui.separator();

            if data.plans.is_empty() {
                ui.label(RichText::new("No plans on offer.").weak());
            }

            egui::ScrollArea::vertical()
                .id_salt("plan_cards")
                .show(ui, |ui| {
                    for plan in &data.plans {
                        let name = plan.field("name");
                        let duration = app.session.duration_for(name);

                        ui.group(|ui| {
                            ui.label(RichText::new(name).strong().size(16.0));

                            ui.horizontal(|ui| {
                                for d in Duration::ALL {
                                    let selected = d == duration;
                                    let label = format!("{} week", d.weeks());
                                    if ui.selectable_label(selected, label).clicked() && !selected {
                                        pick = Some((name.to_string(), d));
                                    }
                                }
                            });

                            price_lines(ui, plan.field("price"), duration);

                            let _ = ui.button("Proceed");
                        });
                        ui.add_space(6.0);
                    }

                    // Static sales copy below the cards; the headline
                    // tracks the first plan's selected tier.
                    let weeks = data
                        .plans
                        .first()
                        .map(|p| app.session.duration_for(p.field("name")))
                        .unwrap_or_default()
                        .weeks();

                    ui.separator();
                    ui.label(
                        RichText::new(format!("What you will get in {weeks} weeks plan?"))
                            .strong()
                            .size(16.0),
                    );
                    for line in [
                        "Plans designed only for you",
                        "Accountability and Progress Tracking",
                        "Continuous Support",
                        "FITTR CVD Compensation Policy",
                    ] {
                        ui.label(format!("• {line}"));
                    }

                    ui.separator();
                    ui.label(RichText::new("How it works").strong().size(16.0));
                    for (i, step) in [
                        "You enroll in a package of your choice",
                        "You fill up additional key details like food preferences, \
                         preferred time to contact, any medical issues etc",
                        "Coach calls you within 24 hours at your preferred time",
                        "Coach understands your goals, sets expectations about how this will work",
                        "Coach evaluates and prepares the best plan for you",
                        "Coach assesses your weekly progress and makes course adjustments",
                        "You get results, yay!",
                    ]
                    .iter()
                    .enumerate()
                    {
                        ui.label(format!("{}. {step}", i + 1));
                    }
                });
        }
    }

    if let Some((plan, duration)) = pick {
        logf!("UI: duration {plan:?} → {duration} wk");
        app.session = std::mem::take(&mut app.session).set_duration(&plan, duration);
    }
    if let Some(route) = goto {
        app.navigate(route);
    }
}

fn price_lines(ui: &mut egui::Ui, price_cell: &str, duration: Duration) {
    let base: f64 = match price_cell.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            ui.colored_label(Color32::LIGHT_RED, "Price unavailable");
            return;
        }
    };

    match pricing::quote(base, duration) {
        Ok(q) => {
            ui.label(RichText::new(format!("₹{}/week", q.per_week)).strong());
            ui.label(format!("₹{} total", q.total));
            if q.discount_percent > 0 {
                ui.colored_label(Color32::LIGHT_GREEN, format!("Save {}%", q.discount_percent));
            }
        }
        Err(e) => {
            ui.colored_label(Color32::LIGHT_RED, format!("Pricing error: {e}"));
        }
    }
}
