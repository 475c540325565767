use chrono::NaiveDate;
use hledger_tools::model::Posting;
use hledger_tools::parse;
use indoc::indoc;

fn document_lines(text: &str) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n').map(str::to_string).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn blank_lines_and_dated_lines_delimit_blocks() {
    let input = indoc! {"
        2024-01-01 Coffee Shop
          Expenses:Dining  $5
          Assets:Checking  -$5

        2024-01-02 Gym
          Expenses:Health  $30
    "};

    let transactions = parse::parse_transactions(&document_lines(input));

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].date, date(2024, 1, 1));
    assert_eq!(transactions[0].description.as_deref(), Some("Coffee Shop"));
    assert_eq!(
        transactions[0].body,
        "2024-01-01 Coffee Shop\n  Expenses:Dining  $5\n  Assets:Checking  -$5"
    );
    assert_eq!(transactions[1].date, date(2024, 1, 2));
    assert_eq!(transactions[1].body, "2024-01-02 Gym\n  Expenses:Health  $30");
}

#[test]
fn consecutive_dated_lines_open_new_blocks() {
    let lines = vec![
        "2024-01-01 First".to_string(),
        "2024-01-02 Second".to_string(),
    ];

    let transactions = parse::parse_transactions(&lines);

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].body, "2024-01-01 First");
    assert_eq!(transactions[1].body, "2024-01-02 Second");
}

#[test]
fn continuation_lines_before_the_first_date_are_dropped() {
    // Historical behavior of these filters: orphan lines ahead of the first
    // dated line belong to no block and vanish from the output.
    let lines = vec![
        "  Orphan:Posting  $1".to_string(),
        "2024-01-01 Entry".to_string(),
        "  Expenses:Misc  $2".to_string(),
    ];

    let transactions = parse::parse_transactions(&lines);

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].body, "2024-01-01 Entry\n  Expenses:Misc  $2");
}

#[test]
fn malformed_dates_fold_into_the_open_block() {
    let lines = vec![
        "2024-01-01 Entry".to_string(),
        "2024-13-01 not a date".to_string(),
        "note".to_string(),
    ];

    let transactions = parse::parse_transactions(&lines);

    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0].body,
        "2024-01-01 Entry\n2024-13-01 not a date\nnote"
    );
}

#[test]
fn head_line_description_is_optional() {
    let transactions = parse::parse_transactions(&["2024-01-01".to_string()]);
    assert_eq!(transactions[0].description, None);

    let transactions = parse::parse_transactions(&["2024-01-01 ".to_string()]);
    assert_eq!(transactions[0].description.as_deref(), Some(""));

    let transactions = parse::parse_transactions(&["2024-01-01 Shop".to_string()]);
    assert_eq!(transactions[0].description.as_deref(), Some("Shop"));
}

#[test]
fn entry_dates_live_in_the_first_ten_characters() {
    assert_eq!(
        parse::parse_entry_date("2024-01-05 Coffee"),
        Some(date(2024, 1, 5))
    );
    assert_eq!(parse::parse_entry_date("2024-01-05"), Some(date(2024, 1, 5)));
    assert_eq!(parse::parse_entry_date("2024-13-01 Bad"), None);
    assert_eq!(parse::parse_entry_date("2024-1-5 x"), None);
    assert_eq!(parse::parse_entry_date("short"), None);
    assert_eq!(parse::parse_entry_date(""), None);
}

#[test]
fn postings_need_an_indent_and_a_two_space_gap() {
    assert_eq!(
        parse::parse_posting("  Expenses:Dining  $4.50"),
        Some(Posting {
            label: "  Expenses:Dining",
            amount: "$4.50",
        })
    );
    assert_eq!(
        parse::parse_posting("  a     $5"),
        Some(Posting {
            label: "  a",
            amount: "$5",
        })
    );

    // One space before the amount is not a posting.
    assert_eq!(parse::parse_posting("  Rent $1200"), None);
    // Unindented lines never qualify, gap or not.
    assert_eq!(parse::parse_posting("Total  $99"), None);
    // The amount must close the line.
    assert_eq!(parse::parse_posting("  Expenses:Dining  $4.50 "), None);
    assert_eq!(parse::parse_posting("   "), None);
}
