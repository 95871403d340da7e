// tests/records.rs
//
// Tabular parsing and id lookup.
//
use coach_scout::records::{Record, find_by_id, parse_table};

const COACHES: &str = "\
id,name,rating
c01,Anita,4.8
c02,Rahul,4.6
c03,Meera,4.9
";

#[test]
fn one_record_per_row_with_every_header_key() {
    let records = parse_table(COACHES);
    assert_eq!(records.len(), 3);
    for r in &records {
        assert_eq!(r.len(), 3);
        assert!(r.get("id").is_some());
        assert!(r.get("name").is_some());
        assert!(r.get("rating").is_some());
    }
    assert_eq!(records[1].field("name"), "Rahul");
    assert_eq!(records[2].field("rating"), "4.9");
}

#[test]
fn header_row_is_not_a_record() {
    let records = parse_table("id,name\n");
    assert!(records.is_empty());
}

#[test]
fn empty_input_is_empty_not_an_error() {
    assert!(parse_table("").is_empty());
}

#[test]
fn short_rows_leave_trailing_columns_absent() {
    let records = parse_table("id,name,rating\nc01,Anita\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some("Anita"));
    assert_eq!(records[0].get("rating"), None);
    // the "" convenience accessor pads for display code
    assert_eq!(records[0].field("rating"), "");
}

#[test]
fn extra_cells_past_the_header_are_dropped() {
    let records = parse_table("id,name\nc01,Anita,4.8,extra\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0].field("name"), "Anita");
}

#[test]
fn duplicate_header_last_column_wins() {
    let records = parse_table("id,name,name\nc01,first,second\n");
    assert_eq!(records[0].get("name"), Some("second"));
}

#[test]
fn quoted_cells_keep_commas_and_quotes() {
    let records = parse_table(
        "id,specialities\nc01,\"Fat Loss, Strength\"\nc02,\"says \"\"hi\"\"\"\n",
    );
    assert_eq!(records[0].field("specialities"), "Fat Loss, Strength");
    assert_eq!(records[1].field("specialities"), "says \"hi\"");
}

#[test]
fn comma_joined_lists_split_and_trim() {
    let r: Record = [("certifications", "ACE CPT,  PN L1 , ")].into_iter().collect();
    assert_eq!(r.list("certifications"), vec!["ACE CPT", "PN L1"]);
    assert!(r.list("missing").is_empty());
}

#[test]
fn field_count_tracks_contents() {
    let r: Record = [("id", "c01"), ("name", "Asha")].into_iter().collect();
    assert_eq!(r.len(), 2);
    assert!(!r.is_empty());

    let empty: Record = std::iter::empty::<(&str, &str)>().collect();
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn find_by_id_exact_match() {
    let records = parse_table(COACHES);
    let hit = find_by_id(&records, "c02").expect("c02 exists");
    assert_eq!(hit.field("name"), "Rahul");
    // exact string equality, no trimming or case folding
    assert!(find_by_id(&records, "C02").is_none());
    assert!(find_by_id(&records, "c02 ").is_none());
}

#[test]
fn find_by_id_first_match_wins_on_duplicates() {
    let records = parse_table("id,name\ndup,first\ndup,second\n");
    assert_eq!(find_by_id(&records, "dup").unwrap().field("name"), "first");
}

#[test]
fn find_by_id_miss_and_empty_collection() {
    let records = parse_table(COACHES);
    assert!(find_by_id(&records, "c99").is_none());
    assert!(find_by_id(&[], "c01").is_none());
}
