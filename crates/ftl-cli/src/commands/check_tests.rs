use super::check::check_input;
use super::source_loader::Input;

fn input(text: &str) -> Input {
    Input {
        name: "app.ftl".to_string(),
        path: None,
        text: text.to_string(),
    }
}

#[test]
fn clean_input_has_no_report() {
    assert_eq!(check_input(&input("hello = Hello\n"), false), None);
}

#[test]
fn report_names_code_and_input() {
    let report = check_input(&input("ok = Fine\n%%%\n"), false).unwrap();

    assert!(report.contains("E0002"));
    assert!(report.contains("Expected an entry start"));
    assert!(report.contains("app.ftl:2:1"));
    assert!(!report.contains('\x1b'));
}

#[test]
fn every_junk_entry_is_reported() {
    let report = check_input(&input("a =\nb = { \nc = C\n"), false).unwrap();

    assert!(report.contains("E0005"));
    assert!(report.contains("E0003"));
}

#[test]
fn colored_report() {
    let report = check_input(&input("%%%\n"), true).unwrap();
    assert!(report.contains('\x1b'));
}
