mod common;
use common::{open_db, seed_request, setup_test_db};

use chrono::NaiveDate;
use invigil::core::sweep::run_sweep;
use invigil::db::queries::{load_notifications, load_request};
use invigil::models::status::RequestStatus;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn completes_todays_request_once_the_slot_has_passed() {
    let db = setup_test_db("sweep_today");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 10:00", RequestStatus::Confirmed);

    // 09:59 — still running.
    let outcome = run_sweep(&conn, day("2024-01-20"), 9 * 60 + 59).unwrap();
    assert!(outcome.completed.is_empty());
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Confirmed);

    // 10:00 sharp — end not yet exceeded.
    let outcome = run_sweep(&conn, day("2024-01-20"), 10 * 60).unwrap();
    assert!(outcome.completed.is_empty());

    // 10:01 — done.
    let outcome = run_sweep(&conn, day("2024-01-20"), 10 * 60 + 1).unwrap();
    assert_eq!(outcome.completed, vec![id]);
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Completed);
}

#[test]
fn past_dated_requests_complete_regardless_of_clock() {
    let db = setup_test_db("sweep_past");
    let conn = open_db(&db);

    // Left behind from yesterday; must not stay scheduled forever.
    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-19", "09:00 - 17:00", RequestStatus::Assigned);

    let outcome = run_sweep(&conn, day("2024-01-20"), 0).unwrap();
    assert_eq!(outcome.completed, vec![id]);
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Completed);
}

#[test]
fn future_requests_are_left_alone() {
    let db = setup_test_db("sweep_future");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-21", "09:00 - 10:00", RequestStatus::Confirmed);

    let outcome = run_sweep(&conn, day("2024-01-20"), 23 * 60).unwrap();
    assert!(outcome.completed.is_empty());
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Confirmed);
}

#[test]
fn second_sweep_is_a_no_op() {
    let db = setup_test_db("sweep_idempotent");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-19", "09:00 - 10:00", RequestStatus::Confirmed);

    let first = run_sweep(&conn, day("2024-01-20"), 600).unwrap();
    assert_eq!(first.completed, vec![id]);

    // The completed row is no longer scanned, so nothing is rewritten and
    // no duplicate notifications go out.
    let before = load_notifications(&conn, Some("drjones"), false).unwrap().len();
    let second = run_sweep(&conn, day("2024-01-20"), 600).unwrap();
    assert_eq!(second.scanned, 0);
    assert!(second.completed.is_empty());
    let after = load_notifications(&conn, Some("drjones"), false).unwrap().len();
    assert_eq!(before, after);
}

#[test]
fn requested_and_cancelled_rows_are_not_swept() {
    let db = setup_test_db("sweep_inactive");
    let conn = open_db(&db);

    let requested = seed_request(&conn, "a", "Lab A", "2024-01-19", "09:00 - 10:00", RequestStatus::Requested);
    let cancelled = seed_request(&conn, "b", "Lab B", "2024-01-19", "09:00 - 10:00", RequestStatus::Cancelled);

    let outcome = run_sweep(&conn, day("2024-01-20"), 600).unwrap();
    assert!(outcome.completed.is_empty());
    assert_eq!(load_request(&conn, requested).unwrap().status, RequestStatus::Requested);
    assert_eq!(load_request(&conn, cancelled).unwrap().status, RequestStatus::Cancelled);
}

#[test]
fn unparseable_slot_is_reported_not_fatal() {
    let db = setup_test_db("sweep_garbled");
    let conn = open_db(&db);

    // Bypass validation on purpose: simulate a legacy row with a free-text slot.
    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 10:00", RequestStatus::Confirmed);
    conn.execute("UPDATE requests SET time = 'after lunch' WHERE id = ?1", [id])
        .unwrap();

    let outcome = run_sweep(&conn, day("2024-01-20"), 23 * 60).unwrap();
    assert!(outcome.completed.is_empty());
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].0, id);
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Confirmed);
}

#[test]
fn completion_notifies_requester_and_assignees() {
    let db = setup_test_db("sweep_notify");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-19", "09:00 - 10:00", RequestStatus::Confirmed);
    invigil::db::queries::insert_assignment(&conn, id, "alice").unwrap();

    run_sweep(&conn, day("2024-01-20"), 0).unwrap();

    let for_alice = load_notifications(&conn, Some("alice"), true).unwrap();
    assert_eq!(for_alice.len(), 1);
    assert!(for_alice[0].message.contains("completed"));

    let for_requester = load_notifications(&conn, Some("drjones"), true).unwrap();
    assert_eq!(for_requester.len(), 1);
}
