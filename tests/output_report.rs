use bls_rs::models::ApiResponse;
use bls_rs::output::write_report;

fn report(raw: &str) -> String {
    let response = ApiResponse::parse(raw).unwrap();
    let mut buf = Vec::new();
    write_report(&mut buf, &response, raw).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn one_line_per_data_point_in_input_order() {
    let raw = r#"{"status":"REQUEST_SUCCEEDED","responseTime":81,"Results":{"series":[
      {"seriesID":"SMU18000000000000001","data":[
        {"year":"2024","period":"M12","periodName":"December","value":"3254.3","footnotes":[{}]},
        {"year":"2024","period":"M11","periodName":"November","value":"3251.0","footnotes":[{}]},
        {"year":"2024","period":"M10","periodName":"October","value":"3248.7","footnotes":[{}]}
      ]}
    ]}}"#;
    let out = report(raw);

    assert!(out.starts_with("Status: REQUEST_SUCCEEDED\nResponse Time: 81\n"));
    assert!(out.contains(raw));
    assert!(out.contains("\nSeries ID: SMU18000000000000001\n"));

    let data_lines: Vec<&str> = out
        .lines()
        .filter(|l| l.starts_with("Year: "))
        .collect();
    assert_eq!(
        data_lines,
        vec![
            "Year: 2024, Month: December, Value: 3254.3",
            "Year: 2024, Month: November, Value: 3251.0",
            "Year: 2024, Month: October, Value: 3248.7",
        ]
    );
}

#[test]
fn empty_series_list_prints_headers_only() {
    let raw = r#"{"status":"REQUEST_SUCCEEDED","responseTime":12,"Results":{"series":[]}}"#;
    let out = report(raw);
    assert!(out.contains("Status: REQUEST_SUCCEEDED"));
    assert!(out.contains("Response Time: 12"));
    assert!(out.contains(raw));
    assert!(!out.contains("Series ID:"));
    assert!(!out.contains("Year: "));
}

#[test]
fn missing_status_and_results_do_not_panic() {
    let raw = r#"{"message":["Request could not be serviced"]}"#;
    let out = report(raw);
    assert!(out.contains("Status: unknown"));
    assert!(out.contains("Response Time: unknown"));
    // Messages appear only inside the raw body, never as separate lines.
    assert!(out.contains(raw));
    assert!(!out.lines().any(|l| l.starts_with("Message:")));
    assert!(!out.contains("Series ID:"));
}

#[test]
fn multiple_series_each_get_a_header() {
    let raw = r#"{"status":"REQUEST_SUCCEEDED","responseTime":44,"Results":{"series":[
      {"seriesID":"AAA","data":[{"year":"2023","period":"M01","periodName":"January","value":"1.0","footnotes":[{}]}]},
      {"seriesID":"BBB","data":[{"year":"2023","period":"M01","periodName":"January","value":"2.0","footnotes":[{}]}]}
    ]}}"#;
    let out = report(raw);
    let aaa = out.find("Series ID: AAA").unwrap();
    let bbb = out.find("Series ID: BBB").unwrap();
    assert!(aaa < bbb);
}
