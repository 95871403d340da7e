// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use crate::csv::{self, Delim};
use crate::pricing::{self, Duration};
use crate::records::{Record, parse_table};
use crate::session::Session;
use crate::shuffle;
use crate::source::{DataSource, Table};
use crate::store::{ListingData, ProfileData};

const LIST_COLUMNS: [&str; 6] = ["id", "name", "rating", "peopleCoached", "slot", "plan"];

enum Command {
    List,
    Coach(String),
    Plans,
}

pub struct Params {
    command: Option<Command>,
    data_dir: Option<PathBuf>,
    remote: bool,
    shuffle: bool,
    duration: Option<Duration>,
    format: Delim,
    out: Option<PathBuf>,
}

impl Params {
    fn new() -> Self {
        Self {
            command: None,
            data_dir: None,
            remote: false,
            shuffle: false,
            duration: None,
            format: Delim::Csv,
            out: None,
        }
    }

    fn source(&self) -> DataSource {
        if self.remote {
            DataSource::Remote
        } else {
            match &self.data_dir {
                Some(dir) => DataSource::Dir(dir.clone()),
                None => DataSource::default(),
            }
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;
    let source = params.source();

    match &params.command {
        Some(Command::List) => list_coaches(&params, &source),
        Some(Command::Coach(id)) => show_coach(&source, id),
        Some(Command::Plans) => show_plans(&params, &source),
        None => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
    }
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list" | "-l" => params.command = Some(Command::List),
            "--coach" | "-c" => {
                let id = args.next().ok_or("Missing coach id")?;
                params.command = Some(Command::Coach(id));
            }
            "--plans" | "-p" => params.command = Some(Command::Plans),
            "--data" | "-d" => {
                let dir = args.next().ok_or("Missing value for --data")?;
                params.data_dir = Some(PathBuf::from(dir));
            }
            "--remote" => params.remote = true,
            "--shuffle" => params.shuffle = true,
            "--duration" => {
                let v = args.next().ok_or("Missing value for --duration")?;
                params.duration = Some(v.parse()?);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn list_coaches(params: &Params, source: &DataSource) -> Result<(), Box<dyn Error>> {
    let data = ListingData::load(source)?;
    let coaches = if params.shuffle {
        shuffle::shuffled(data.coaches)
    } else {
        data.coaches
    };

    let headers: Vec<String> = LIST_COLUMNS.iter().map(|s| s.to_string()).collect();
    let rows: Vec<Vec<String>> = coaches
        .iter()
        .map(|c| LIST_COLUMNS.iter().map(|col| c.field(col).to_string()).collect())
        .collect();

    let text = csv::rows_to_string(Some(headers.as_slice()), &rows, params.format);
    match &params.out {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn show_coach(source: &DataSource, id: &str) -> Result<(), Box<dyn Error>> {
    let data = ProfileData::load(source, id)?;
    let coach = data
        .coach
        .as_ref()
        .ok_or_else(|| format!("No coach with id {id:?}"))?;

    println!("{} — {}", coach.field("name"), coach.field("plan"));
    println!(
        "  rating {} ({} reviews), {} people coached",
        coach.field("rating"),
        coach.field("reviews"),
        coach.field("peopleCoached"),
    );
    println!(
        "  {} followers / {} following, {} slots open",
        coach.field("followers"),
        coach.field("following"),
        coach.field("slot"),
    );

    let specialities = coach.list("specialities");
    if !specialities.is_empty() {
        println!("  speciality: {}", specialities.join(", "));
    }
    for cert in coach.list("certifications") {
        println!("  cert: {cert}");
    }

    if !data.about.is_empty() {
        println!();
        println!("{}", data.about);
    }
    if !data.reviews.is_empty() {
        println!();
        for review in &data.reviews {
            println!(
                "[{}] {} — {}",
                review.field("rating"),
                review.field("name"),
                review.field("review"),
            );
        }
    }
    Ok(())
}

fn show_plans(params: &Params, source: &DataSource) -> Result<(), Box<dyn Error>> {
    let text = source.fetch(Table::Plans)?;
    let plans: Vec<Record> = parse_table(&text)
        .into_iter()
        .filter(|r| !r.field("name").is_empty())
        .collect();
    if plans.is_empty() {
        return Err("No plans found".into());
    }

    // Same defaulting the GUI uses: every plan opens on the 12 week tier.
    let session = Session::for_plans(plans.iter().map(|p| p.field("name")));

    for plan in &plans {
        let name = plan.field("name");
        let base: f64 = plan
            .field("price")
            .trim()
            .parse()
            .map_err(|_| format!("Bad price for {name:?}: {:?}", plan.field("price")))?;

        println!("{name}");
        for d in Duration::ALL {
            if let Some(only) = params.duration {
                if d != only {
                    continue;
                }
            }
            let q = pricing::quote(base, d)?;
            let marker = if d == session.duration_for(name) { "*" } else { " " };
            let save = if q.discount_percent > 0 {
                format!("  save {}%", q.discount_percent)
            } else {
                String::new()
            };
            println!(
                "  {marker} {:>2} wk  {:>7}/week  {:>8} total{save}",
                d.weeks(),
                q.per_week,
                q.total,
            );
        }
    }
    Ok(())
}
