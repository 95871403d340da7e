// tests/session.rs
//
// View-state transitions: duration picks per plan, active profile tab.
//
use coach_scout::pricing::Duration;
use coach_scout::session::{Session, Tab};

#[test]
fn plans_default_to_twelve_weeks() {
    let s = Session::for_plans(["Silver", "Gold"]);
    assert_eq!(s.duration_for("Silver"), Duration::W12);
    assert_eq!(s.duration_for("Gold"), Duration::W12);
    assert_eq!(s.tab(), Tab::Reviews);
}

#[test]
fn set_duration_touches_only_that_plan() {
    let s = Session::for_plans(["A", "B"]);
    let s = s.set_duration("A", Duration::W24);
    assert_eq!(s.duration_for("A"), Duration::W24);
    assert_eq!(s.duration_for("B"), Duration::W12);
}

#[test]
fn unknown_plan_names_are_permitted() {
    // Plan identity is caller-supplied; a name the session never saw
    // simply gains an entry. This is also what makes a stale session
    // harmless after navigation.
    let s = Session::default().set_duration("Mystery", Duration::W52);
    assert_eq!(s.duration_for("Mystery"), Duration::W52);
}

#[test]
fn untracked_plans_read_as_twelve_weeks() {
    let s = Session::default();
    assert_eq!(s.duration_for("anything"), Duration::W12);
}

#[test]
fn tab_transitions() {
    let s = Session::default();
    assert_eq!(s.tab(), Tab::Reviews);
    let s = s.set_tab(Tab::About);
    assert_eq!(s.tab(), Tab::About);
    let s = s.set_tab(Tab::Reviews);
    assert_eq!(s.tab(), Tab::Reviews);
}

#[test]
fn tab_changes_leave_durations_alone() {
    let s = Session::for_plans(["Gold"]).set_duration("Gold", Duration::W52);
    let s = s.set_tab(Tab::About);
    assert_eq!(s.duration_for("Gold"), Duration::W52);
}

#[test]
fn tab_parsing_is_closed() {
    assert_eq!("reviews".parse::<Tab>().unwrap(), Tab::Reviews);
    assert_eq!("about".parse::<Tab>().unwrap(), Tab::About);
    assert!("profile".parse::<Tab>().is_err());
    assert!("Reviews".parse::<Tab>().is_err());
    assert!("".parse::<Tab>().is_err());
}
