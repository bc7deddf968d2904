use std::path::PathBuf;

use version_stamp::boundary::BoundaryWarning;
use version_stamp::ui;

#[test]
fn test_pattern_not_found_display() {
    let warning = BoundaryWarning::PatternNotFound {
        path: PathBuf::from("src/version.h"),
        pattern: r"APP_VERSION\s".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("not found"),
        "Message should contain 'not found', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("src/version.h"),
        "Message should contain the path, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains(r"APP_VERSION\s"),
        "Message should contain the pattern, got: {}",
        display_msg
    );
}

#[test]
fn test_already_current_display() {
    let warning = BoundaryWarning::AlreadyCurrent {
        path: PathBuf::from("build.sh"),
        version: "1.2.3".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("build.sh"));
    assert!(display_msg.contains("already at version 1.2.3"));
}

#[test]
fn test_placeholder_missing_display() {
    let warning = BoundaryWarning::PlaceholderMissing {
        path: PathBuf::from("templates/LICENSE"),
        placeholder: "{VERSION}".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("LICENSE"));
    assert!(display_msg.contains("{VERSION}"));
}

#[test]
fn test_empty_template_dir_display() {
    let warning = BoundaryWarning::EmptyTemplateDir {
        dir: PathBuf::from("templates"),
    };
    assert_eq!(warning.to_string(), "Template directory 'templates' is empty");
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::EmptyTemplateDir {
        dir: PathBuf::from("templates"),
    };
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    // Visual verification test - output is printed to stderr
    ui::display_boundary_warning(&BoundaryWarning::EmptyTemplateDir {
        dir: PathBuf::from("templates"),
    });
}

#[test]
fn test_verify_ignored_display() {
    let warning = BoundaryWarning::VerifyIgnored {
        mode: "template expansion".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "--verify has no effect on template expansion"
    );
}
