// src/store.rs
//
// Per-view record collections. Each view builds its data fresh on
// activation and drops it on navigation; nothing here survives across
// views or sessions. Transport failure propagates; malformed rows do
// not (the parser pads, never fails); a missing coach is a plain None.

use std::error::Error;

use crate::records::{self, Record, parse_table};
use crate::source::{DataSource, Table};

/// Listing view: the coach directory.
#[derive(Clone, Debug, Default)]
pub struct ListingData {
    pub coaches: Vec<Record>,
}

impl ListingData {
    pub fn load(source: &DataSource) -> Result<Self, Box<dyn Error>> {
        let text = source.fetch(Table::Coaches)?;
        let coaches: Vec<Record> = parse_table(&text)
            .into_iter()
            .filter(|r| !r.field("id").is_empty())
            .collect();
        logf!("Store: coaches loaded ({})", coaches.len());
        Ok(Self { coaches })
    }
}

/// Profile view: one coach's extended attributes, plus reviews and bio.
#[derive(Clone, Debug, Default)]
pub struct ProfileData {
    pub coach: Option<Record>,
    pub reviews: Vec<Record>,
    pub about: String,
}

impl ProfileData {
    pub fn load(source: &DataSource, id: &str) -> Result<Self, Box<dyn Error>> {
        let profiles = parse_table(&source.fetch(Table::Profiles)?);
        let reviews = parse_table(&source.fetch(Table::Reviews)?);
        let about_rows = parse_table(&source.fetch(Table::About)?);

        let coach = records::find_by_id(&profiles, id).cloned();
        // Only the first row of about_me carries content; the rest is ignored.
        let about = about_rows
            .first()
            .map(|r| r.field("content").to_string())
            .unwrap_or_default();

        logf!(
            "Store: profile id={id} found={} reviews={}",
            coach.is_some(),
            reviews.len()
        );
        Ok(Self { coach, reviews, about })
    }
}

/// Plans view: the selected coach plus the plan table.
#[derive(Clone, Debug, Default)]
pub struct PlansData {
    pub coach: Option<Record>,
    pub plans: Vec<Record>,
}

impl PlansData {
    pub fn load(source: &DataSource, id: &str) -> Result<Self, Box<dyn Error>> {
        let coaches = parse_table(&source.fetch(Table::Coaches)?);
        let plans: Vec<Record> = parse_table(&source.fetch(Table::Plans)?)
            .into_iter()
            .filter(|r| !r.field("name").is_empty())
            .collect();

        let coach = records::find_by_id(&coaches, id).cloned();
        logf!(
            "Store: plans id={id} found={} plans={}",
            coach.is_some(),
            plans.len()
        );
        Ok(Self { coach, plans })
    }

    pub fn plan_names(&self) -> Vec<&str> {
        self.plans.iter().map(|p| p.field("name")).collect()
    }
}
