#![allow(dead_code)]

use anybox::{AnyBox, BoxError};

/// Demonstrates dispatching heterogeneous event payloads held in boxes

#[derive(Clone, Debug)]
struct PageView {
    page: String,
}

#[derive(Clone, Debug)]
struct Login {
    username: String,
}

#[derive(Clone, Debug)]
struct Error {
    code: u32,
    message: String,
}

fn record(log: &mut Vec<AnyBox>, payload: impl Clone + 'static) {
    log.push(AnyBox::new(payload));
}

fn describe(event: &AnyBox) -> String {
    if let Some(view) = event.downcast_ref::<PageView>() {
        format!("page view: {}", view.page)
    } else if let Some(login) = event.downcast_ref::<Login>() {
        format!("login: {}", login.username)
    } else if let Some(error) = event.downcast_ref::<Error>() {
        format!("error {}: {}", error.code, error.message)
    } else if event.is::<chrono::DateTime<chrono::Local>>() {
        "session marker".to_string()
    } else {
        match event.type_name() {
            Ok(name) => format!("unknown event type: {}", name),
            Err(_) => "empty event".to_string(),
        }
    }
}

fn main() -> Result<(), BoxError> {
    let mut log: Vec<AnyBox> = Vec::new();

    // A timestamp marks the start of the session
    record(&mut log, chrono::Local::now());

    record(
        &mut log,
        Login {
            username: "alice".to_string(),
        },
    );
    record(
        &mut log,
        PageView {
            page: "home".to_string(),
        },
    );
    record(
        &mut log,
        PageView {
            page: "profile".to_string(),
        },
    );
    record(
        &mut log,
        Error {
            code: 404,
            message: "no such page".to_string(),
        },
    );

    println!("EVENT LOG:");
    println!("==========");
    for (i, event) in log.iter().enumerate() {
        println!("{:3}  {}", i, describe(event));
    }

    // Count one payload kind without touching the others
    let views = log.iter().filter(|e| e.is::<PageView>()).count();
    println!("\nPage views this session: {}", views);

    // Pull the session start back out with its exact type
    let started = log[0].get::<chrono::DateTime<chrono::Local>>()?;
    let elapsed = chrono::Local::now().signed_duration_since(*started);
    println!("Session age: {} ms", elapsed.num_milliseconds());

    // An archived copy of the log is fully independent
    let archive = log.clone();
    log.clear();
    println!("Archived {} events", archive.len());

    Ok(())
}
