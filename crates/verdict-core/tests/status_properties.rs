//! Behavioral tests for status construction and aggregation
//!
//! Exercises the public API the way a calling service would: build statuses
//! through the builders, chain them, and read them back.

use std::error::Error as StdError;
use std::io;

use verdict_core::status::{self, HelpType, StatusArgs};
use verdict_core::{CONTACT_SUPPORT_HELP, Cause, Status, StatusResult};

fn as_error(status: &Status) -> &(dyn StdError + 'static) {
    status
}

#[test]
fn test_fault_builders_set_http_status() {
    for (status, code) in [
        (Status::your_bad("missing id"), 400),
        (Status::our_bad("db offline"), 500),
    ] {
        assert_eq!(status.http_status(), code);
        assert!(status.is_error());
        assert_eq!(status::http_status(as_error(&status)), code);
    }
}

#[test]
fn test_message_defaults_to_cause_text() {
    let status = Status::new(StatusArgs {
        cause: Some(Cause::new(io::Error::new(
            io::ErrorKind::NotFound,
            "config.toml missing",
        ))),
        ..Default::default()
    });
    assert_eq!(status.message(), "config.toml missing");
}

#[test]
fn test_failure_always_has_cause() {
    let status = Status::new(StatusArgs {
        success: false,
        message: "upload rejected".to_string(),
        ..Default::default()
    });
    let cause = status.cause().expect("failure must carry a cause");
    assert_eq!(cause.to_string(), status.message());
}

#[test]
fn test_empty_help_resolves_to_contact_support() {
    let status = Status::new(StatusArgs::default());
    assert_eq!(status.get_help(HelpType::All), CONTACT_SUPPORT_HELP);
    assert_eq!(status.get_help(HelpType::Api), CONTACT_SUPPORT_HELP);
    assert_eq!(status.get_help(HelpType::Cli), CONTACT_SUPPORT_HELP);
}

#[test]
fn test_help_cascade_then_override() {
    let status = Status::simple_success().with_help(HelpType::All, "X");
    assert_eq!(status.get_help(HelpType::Api), "X");
    assert_eq!(status.get_help(HelpType::Cli), "X");

    let status = status.with_help(HelpType::Api, "Y");
    assert_eq!(status.get_help(HelpType::All), "X");
    assert_eq!(status.get_help(HelpType::Api), "Y");
    assert_eq!(status.get_help(HelpType::Cli), "X");
}

#[test]
fn test_full_help_dedup_and_tagging() {
    let same = Status::simple_success().with_all_help("see runbook");
    assert_eq!(same.full_help(), "see runbook");
    assert!(!same.full_help().contains('['));

    let cli = same.with_cli_help("run `verdict doctor`");
    let help = cli.full_help();
    assert!(help.starts_with("see runbook"));
    assert_eq!(help.matches("[CLI]").count(), 1);
    assert_eq!(help.matches('[').count(), 1);
}

#[test]
fn test_three_level_chain() {
    let c = Status::success("C");
    let b = Status::wrap(c, Some(StatusArgs { message: "B".to_string(), ..Default::default() }));
    let a = Status::wrap(b, Some(StatusArgs { message: "A".to_string(), ..Default::default() }));
    assert_eq!(a.long_message(), "A; B; C");

    // std::error::Error::source walks the same chain
    let mut messages = vec![a.to_string()];
    let mut current = a.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }
    assert_eq!(messages, vec!["A", "B", "C"]);
}

#[test]
fn test_warn_builder() {
    let status = Status::warn("low disk");
    assert!(status.is_success());
    assert!(status.is_warn());
    assert!(!status.is_error());
}

#[test]
fn test_wrap_plain_error() {
    let plain = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let expected = plain.to_string();
    let status = Status::wrap(plain, None);

    let cause = status.cause().expect("cause");
    let inner = cause.downcast_ref::<io::Error>().expect("wrapped io::Error");
    assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(status.message(), expected);
    assert!(status.is_error());
    assert_eq!(status.http_status(), 500);
}

#[test]
fn test_module_helpers_on_plain_errors() {
    let plain = io::Error::new(io::ErrorKind::Other, "boom");
    let err: &(dyn StdError + 'static) = &plain;
    assert_eq!(status::http_status(err), 0);
    assert_eq!(status::message(err), "");
    assert!(status::is_error(Some(err)));
    assert!(!status::is_success(Some(err)));
    assert!(status::is_success(None));
}

#[test]
fn test_is_predicates() {
    let failed = Status::our_bad("x");
    assert!(verdict_core::is::error(Some(&failed)));
    assert!(verdict_core::is::success(None));
}

fn load_user(id: &str) -> StatusResult<String> {
    if id.is_empty() {
        return Err(Status::your_bad("user id is required").with_error_code(1001));
    }
    let raw: serde_json::Value = serde_json::from_str(id)?;
    Ok(raw.to_string())
}

#[test]
fn test_status_as_propagated_error() {
    let err = load_user("").unwrap_err();
    assert_eq!(err.http_status(), 400);
    assert_eq!(err.error_code(), 1001);

    let err = load_user("{").unwrap_err();
    assert_eq!(err.http_status(), 500);
    assert!(err.is_error());
}

#[test]
fn test_serialized_chain() {
    let inner = Status::your_bad("bad input").with_details("field: name");
    let outer = Status::wrap(
        inner,
        Some(StatusArgs {
            message: "request rejected".to_string(),
            http_status: 422,
            ..Default::default()
        }),
    );
    let value: serde_json::Value = serde_json::from_slice(&outer.to_json()).unwrap();
    assert_eq!(value["status"], "failure");
    assert_eq!(value["httpstatus"], "422");

    let nested: serde_json::Value =
        serde_json::from_str(value["cause"].as_str().unwrap()).unwrap();
    assert_eq!(nested["details"], "field: name");
    assert_eq!(nested["httpstatus"], "400");
}
