// src/gui/pages/mod.rs

pub mod listing;
pub mod plans;
pub mod profile;

/// 0–5 star strip for a numeric-string rating cell. Junk parses as 0.
pub fn stars(rating: &str) -> String {
    let n = rating
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0)
        .round()
        .clamp(0.0, 5.0) as usize;

    let mut s = String::with_capacity(5 * '★'.len_utf8());
    for i in 0..5 {
        s.push(if i < n { '★' } else { '☆' });
    }
    s
}
