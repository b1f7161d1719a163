#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use invigil::db::initialize::init_db;
use invigil::db::queries::{insert_request, update_status};
use invigil::models::actor::{ActorContext, Role};
use invigil::models::request::RequestDraft;
use invigil::models::status::RequestStatus;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ivg() -> Command {
    cargo_bin_cmd!("invigil")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_invigil.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Open a connection with the full schema in place.
pub fn open_db(db_path: &str) -> Connection {
    let conn = Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");
    conn
}

pub fn coordinator(user: &str) -> ActorContext {
    ActorContext {
        user_id: user.to_string(),
        role: Role::Coordinator,
    }
}

pub fn lecturer(user: &str) -> ActorContext {
    ActorContext {
        user_id: user.to_string(),
        role: Role::Lecturer,
    }
}

/// Insert a request directly through the store layer and force its status.
/// Returns the assigned id.
pub fn seed_request(
    conn: &Connection,
    user: &str,
    venue: &str,
    date: &str,
    time: &str,
    status: RequestStatus,
) -> i64 {
    let draft = RequestDraft {
        subject: "Algorithms".to_string(),
        venue: venue.to_string(),
        lecturer: user.to_string(),
        user_id: user.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        student_count: 40,
        invigilator_count: 2,
        notes: String::new(),
    };
    let req = draft.into_request().expect("valid draft");
    let id = insert_request(conn, &req).expect("insert request");
    update_status(conn, id, status).expect("set status");
    id
}

/// Seed a small dataset through the CLI: one request at Lab A, assigned and
/// confirmed, ready to conflict with overlapping submissions.
pub fn init_db_with_confirmed_request(db_path: &str) {
    ivg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ivg()
        .args([
            "--db", db_path, "--user", "drjones", "add",
            "--subject", "Databases",
            "--venue", "Lab A",
            "--date", "2024-01-20",
            "--time", "09:00 - 12:00",
            "--students", "35",
            "--invigilators", "2",
        ])
        .assert()
        .success();

    ivg()
        .args([
            "--db", db_path, "--user", "coord", "--role", "coordinator",
            "assign", "1", "--invigilator", "alice",
        ])
        .assert()
        .success();

    ivg()
        .args([
            "--db", db_path, "--user", "coord", "--role", "coordinator",
            "confirm", "1",
        ])
        .assert()
        .success();
}
