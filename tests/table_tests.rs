use rpontocsv::utils::table::Table;

#[test]
fn test_table_aligns_accented_labels() {
    let mut table = Table::with_headers(&["date", "entry"]);
    table.add_row(vec!["2024-02-03".into(), "SÁBADO".into()]);
    table.add_row(vec!["2024-02-05".into(), "08:30".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "date       entry  ");
    assert_eq!(lines[1], "2024-02-03 SÁBADO ");
    assert_eq!(lines[2], "2024-02-05 08:30  ");
}
