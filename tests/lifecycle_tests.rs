mod common;
use common::{coordinator, lecturer, open_db, seed_request, setup_test_db};

use invigil::core::lifecycle::{
    AssignLogic, CancelLogic, ConfirmLogic, CreateLogic, EditLogic, EditPatch, PostponeLogic,
};
use invigil::db::queries::load_request;
use invigil::errors::AppError;
use invigil::models::request::RequestDraft;
use invigil::models::status::RequestStatus;

fn draft(user: &str, venue: &str, date: &str, time: &str) -> RequestDraft {
    RequestDraft {
        subject: "Compilers".to_string(),
        venue: venue.to_string(),
        lecturer: user.to_string(),
        user_id: user.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        student_count: 25,
        invigilator_count: 2,
        notes: String::new(),
    }
}

#[test]
fn create_assign_confirm_happy_path() {
    let db = setup_test_db("lc_happy");
    let conn = open_db(&db);

    let req = CreateLogic::apply(&conn, &lecturer("drjones"), draft("drjones", "Lab A", "2024-01-20", "09:00 - 12:00")).unwrap();
    assert_eq!(req.status, RequestStatus::Requested);

    let req = AssignLogic::apply(&conn, &coordinator("coord"), req.id, &["alice".to_string(), "bob".to_string()]).unwrap();
    assert_eq!(req.status, RequestStatus::Assigned);
    assert_eq!(req.assigned, vec!["alice".to_string(), "bob".to_string()]);

    let req = ConfirmLogic::apply(&conn, &coordinator("coord"), req.id).unwrap();
    assert_eq!(req.status, RequestStatus::Confirmed);
}

#[test]
fn create_rejects_invalid_draft_with_field_errors() {
    let db = setup_test_db("lc_invalid");
    let conn = open_db(&db);

    let mut bad = draft("drjones", "Lab A", "2024-01-20", "09:00 - 12:00");
    bad.student_count = -1;

    let err = CreateLogic::apply(&conn, &lecturer("drjones"), bad).unwrap_err();
    match err {
        AppError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains_key("student_count"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn create_refuses_a_conflicting_slot() {
    let db = setup_test_db("lc_conflict");
    let conn = open_db(&db);

    seed_request(&conn, "x", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Confirmed);

    let err = CreateLogic::apply(&conn, &lecturer("drjones"), draft("drjones", "Lab A", "2024-01-20", "11:00 - 13:00")).unwrap_err();
    assert!(matches!(err, AppError::VenueConflict { .. }));
}

#[test]
fn assign_requires_a_scheduling_role() {
    let db = setup_test_db("lc_authz");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);

    let err = AssignLogic::apply(&conn, &lecturer("drjones"), id, &["alice".to_string()]).unwrap_err();
    assert!(matches!(err, AppError::NotAuthorized { .. }));
}

#[test]
fn assign_enforces_the_invigilator_limit() {
    let db = setup_test_db("lc_limit");
    let conn = open_db(&db);

    // invigilator_count is 2 in the seeded request.
    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);

    let err = AssignLogic::apply(
        &conn,
        &coordinator("coord"),
        id,
        &["a".to_string(), "b".to_string(), "c".to_string()],
    )
    .unwrap_err();
    assert!(matches!(err, AppError::TooManyInvigilators { requested: 3, limit: 2 }));

    // Re-assigning an already assigned user is a no-op, not a limit breach.
    AssignLogic::apply(&conn, &coordinator("coord"), id, &["a".to_string(), "b".to_string()]).unwrap();
    let req = AssignLogic::apply(&conn, &coordinator("coord"), id, &["a".to_string()]).unwrap();
    assert_eq!(req.assigned.len(), 2);
}

#[test]
fn cancel_requires_a_reason() {
    let db = setup_test_db("lc_reason");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);

    let err = CancelLogic::apply(&conn, &coordinator("coord"), id, "   ").unwrap_err();
    assert!(matches!(err, AppError::MissingReason));

    let req = CancelLogic::apply(&conn, &coordinator("coord"), id, "venue flooded").unwrap();
    assert_eq!(req.status, RequestStatus::Cancelled);
    assert!(req.notes.contains("venue flooded"));
}

#[test]
fn requester_may_cancel_their_own_request_but_not_others() {
    let db = setup_test_db("lc_cancel_owner");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);

    let err = CancelLogic::apply(&conn, &lecturer("mallory"), id, "not mine").unwrap_err();
    assert!(matches!(err, AppError::NotAuthorized { .. }));

    let req = CancelLogic::apply(&conn, &lecturer("drjones"), id, "exam moved online").unwrap();
    assert_eq!(req.status, RequestStatus::Cancelled);
}

#[test]
fn terminal_statuses_reject_all_further_actions() {
    let db = setup_test_db("lc_terminal");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Completed);

    assert!(matches!(
        AssignLogic::apply(&conn, &coordinator("coord"), id, &["alice".to_string()]),
        Err(AppError::InvalidTransition { .. })
    ));
    assert!(matches!(
        CancelLogic::apply(&conn, &coordinator("coord"), id, "too late"),
        Err(AppError::InvalidTransition { .. })
    ));
    assert!(matches!(
        EditLogic::apply(&conn, &coordinator("coord"), id, &EditPatch { subject: Some("X".into()), ..Default::default() }),
        Err(AppError::InvalidTransition { .. })
    ));
}

#[test]
fn postpone_rechecks_the_venue_and_sets_status() {
    let db = setup_test_db("lc_postpone");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Confirmed);
    seed_request(&conn, "other", "Lab A", "2024-01-21", "09:00 - 12:00", RequestStatus::Confirmed);

    // New slot collides with the other confirmed booking.
    let err = PostponeLogic::apply(&conn, &coordinator("coord"), id, "2024-01-21", "10:00 - 11:00").unwrap_err();
    assert!(matches!(err, AppError::VenueConflict { .. }));

    let req = PostponeLogic::apply(&conn, &coordinator("coord"), id, "2024-01-21", "13:00 - 15:00").unwrap();
    assert_eq!(req.status, RequestStatus::Postponed);
    assert_eq!(req.date_str(), "2024-01-21");

    // A postponed request can be confirmed again.
    let req = ConfirmLogic::apply(&conn, &coordinator("coord"), req.id).unwrap();
    assert_eq!(req.status, RequestStatus::Confirmed);
}

#[test]
fn confirm_after_postpone_rechecks_the_venue() {
    let db = setup_test_db("lc_confirm_recheck");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Confirmed);
    let req = PostponeLogic::apply(&conn, &coordinator("coord"), id, "2024-02-01", "09:00 - 12:00").unwrap();
    assert_eq!(req.status, RequestStatus::Postponed);

    // While postponed the request holds no slot, so the new slot can be
    // taken by someone else in the meantime.
    let other = seed_request(&conn, "other", "Lab A", "2024-02-01", "09:00 - 12:00", RequestStatus::Confirmed);

    let err = ConfirmLogic::apply(&conn, &coordinator("coord"), id).unwrap_err();
    assert!(matches!(err, AppError::VenueConflict { .. }));
    assert_eq!(load_request(&conn, id).unwrap().status, RequestStatus::Postponed);

    // Once the competing booking is gone the confirmation goes through.
    CancelLogic::apply(&conn, &coordinator("coord"), other, "room reshuffle").unwrap();
    let req = ConfirmLogic::apply(&conn, &coordinator("coord"), id).unwrap();
    assert_eq!(req.status, RequestStatus::Confirmed);
}

#[test]
fn edit_rechecks_availability_when_the_slot_changes() {
    let db = setup_test_db("lc_edit");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Confirmed);
    seed_request(&conn, "other", "Lab B", "2024-01-20", "09:00 - 12:00", RequestStatus::Confirmed);

    let err = EditLogic::apply(
        &conn,
        &lecturer("drjones"),
        id,
        &EditPatch { venue: Some("Lab B".to_string()), ..Default::default() },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::VenueConflict { .. }));

    // Editing a non-slot field never trips the venue check.
    let req = EditLogic::apply(
        &conn,
        &lecturer("drjones"),
        id,
        &EditPatch { subject: Some("Advanced Compilers".to_string()), ..Default::default() },
    )
    .unwrap();
    assert_eq!(req.subject, "Advanced Compilers");
}

#[test]
fn edit_cannot_shrink_invigilator_count_below_assignments() {
    let db = setup_test_db("lc_edit_count");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);
    AssignLogic::apply(&conn, &coordinator("coord"), id, &["alice".to_string(), "bob".to_string()]).unwrap();

    let err = EditLogic::apply(
        &conn,
        &coordinator("coord"),
        id,
        &EditPatch { invigilator_count: Some(1), ..Default::default() },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::TooManyInvigilators { requested: 2, limit: 1 }));
}

#[test]
fn status_transitions_are_written_through() {
    let db = setup_test_db("lc_reload");
    let conn = open_db(&db);

    let id = seed_request(&conn, "drjones", "Lab A", "2024-01-20", "09:00 - 12:00", RequestStatus::Requested);
    AssignLogic::apply(&conn, &coordinator("coord"), id, &["alice".to_string()]).unwrap();

    let reloaded = load_request(&conn, id).unwrap();
    assert_eq!(reloaded.status, RequestStatus::Assigned);
    assert_eq!(reloaded.assigned, vec!["alice".to_string()]);
}
