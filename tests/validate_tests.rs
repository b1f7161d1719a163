use invigil::core::validate::validate;
use invigil::models::request::RequestDraft;

fn valid_draft() -> RequestDraft {
    RequestDraft {
        subject: "Operating Systems".to_string(),
        venue: "Lab A".to_string(),
        lecturer: "drjones".to_string(),
        user_id: "drjones".to_string(),
        date: "2024-01-20".to_string(),
        time: "09:00 - 12:00".to_string(),
        student_count: 30,
        invigilator_count: 2,
        notes: String::new(),
    }
}

#[test]
fn valid_draft_produces_no_errors() {
    assert!(validate(&valid_draft()).is_empty());
}

#[test]
fn negative_student_count_is_the_only_error() {
    let mut draft = valid_draft();
    draft.student_count = -1;

    let errors = validate(&draft);
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("student_count"));
}

#[test]
fn zero_invigilators_rejected() {
    let mut draft = valid_draft();
    draft.invigilator_count = 0;

    let errors = validate(&draft);
    assert!(errors.contains_key("invigilator_count"));
}

#[test]
fn blank_required_fields_reported_together() {
    let draft = RequestDraft {
        subject: "   ".to_string(),
        venue: String::new(),
        date: String::new(),
        time: String::new(),
        student_count: -3,
        invigilator_count: 0,
        ..valid_draft()
    };

    let errors = validate(&draft);
    // Everything wrong at once, not just the first failure.
    for field in ["subject", "venue", "date", "time", "student_count", "invigilator_count"] {
        assert!(errors.contains_key(field), "missing error for {}", field);
    }
}

#[test]
fn garbled_time_fails_structural_validation() {
    let mut draft = valid_draft();
    draft.time = "nineish to noon".to_string();
    assert!(validate(&draft).contains_key("time"));

    draft.time = "09:00 -- 12:00".to_string();
    assert!(validate(&draft).contains_key("time"));
}

#[test]
fn malformed_date_rejected() {
    let mut draft = valid_draft();
    draft.date = "20/01/2024".to_string();
    assert!(validate(&draft).contains_key("date"));
}

#[test]
fn time_without_end_segment_is_accepted() {
    let mut draft = valid_draft();
    draft.time = "09:00".to_string();
    assert!(validate(&draft).is_empty());
}
