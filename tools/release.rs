use std::fs;
use std::process::Command;
use toml_edit::{value, DocumentMut};

const USAGE: &str = "usage: release <major|minor|patch> [--dry-run]";

fn bump_version(current: &str, level: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut parts = current.split('.');
    let major: u64 = parts.next().ok_or("Malformed version")?.parse()?;
    let minor: u64 = parts.next().ok_or("Malformed version")?.parse()?;
    let patch: u64 = parts.next().ok_or("Malformed version")?.parse()?;

    let bumped = match level {
        "major" => format!("{}.0.0", major + 1),
        "minor" => format!("{}.{}.0", major, minor + 1),
        "patch" => format!("{}.{}.{}", major, minor, patch + 1),
        _ => return Err(USAGE.into()),
    };
    Ok(bumped)
}

fn get_latest_tag() -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()?;

    if !output.status.success() {
        // No tags exist yet
        return Ok(String::new());
    }

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn get_commit_history(previous_tag: &str) -> Result<String, Box<dyn std::error::Error>> {
    let range = if previous_tag.is_empty() {
        // No previous tag, list all commits
        None
    } else {
        Some(format!("{}..HEAD", previous_tag))
    };

    let mut args = vec!["log".to_string(), "--pretty=format:- %s".to_string()];
    if let Some(range) = range {
        args.push(range);
    }

    let output = Command::new("git").args(&args).output()?;
    Ok(String::from_utf8(output.stdout)?)
}

fn prepend_changelog_section(
    version: &str,
    notes: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let existing = fs::read_to_string("CHANGELOG.md").unwrap_or_default();
    let date = Command::new("date").arg("+%Y-%m-%d").output()?;
    let date = String::from_utf8(date.stdout)?.trim().to_string();

    let mut section = format!("## {} - {}\n\n", version, date);
    if notes.is_empty() {
        section.push_str("- No recorded changes\n");
    } else {
        section.push_str(notes);
        section.push('\n');
    }
    section.push('\n');

    // Keep the header line, insert the new section right below it
    let updated = match existing.split_once("\n\n") {
        Some((header, rest)) => format!("{}\n\n{}{}", header, section, rest),
        None => format!("# Changelog\n\n{}", section),
    };

    fs::write("CHANGELOG.md", updated)?;
    Ok(())
}

fn run(cmd: &str, error_msg: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Executing: {}", cmd);
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;
    if !status.success() {
        return Err(error_msg.to_string().into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let level = args.first().ok_or(USAGE)?;
    let dry_run = args.iter().any(|a| a == "--dry-run");

    // Read current Cargo.toml
    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo_content.parse::<DocumentMut>()?;

    let current_version = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?
        .to_string();
    let new_version = bump_version(&current_version, level)?;

    println!("Current version: {}", current_version);
    println!("New version:     {}", new_version);

    // Collect release notes from the commit history
    let previous_tag = get_latest_tag()?;
    println!(
        "Previous tag: {}",
        if previous_tag.is_empty() {
            "None"
        } else {
            &previous_tag
        }
    );

    let commit_history = get_commit_history(&previous_tag)?;
    if commit_history.is_empty() {
        println!("Warning: No commit history found between previous tag and HEAD.");
    } else {
        println!("Release notes:");
        println!("{}", commit_history);
    }

    if dry_run {
        println!("Dry run: no files changed, no git commands executed.");
        return Ok(());
    }

    // Update Cargo.toml and CHANGELOG.md
    doc["package"]["version"] = value(new_version.as_str());
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Updated Cargo.toml with new version: {}", new_version);

    prepend_changelog_section(&new_version, &commit_history)?;
    println!("Updated CHANGELOG.md");

    // Commit and tag
    run(
        "git add Cargo.toml CHANGELOG.md",
        "Failed to stage release files",
    )?;
    run(
        &format!("git commit -m \"Bump version to {}\"", new_version),
        "Failed to commit version bump",
    )?;
    run(
        &format!("git tag -a v{} -m \"Version {}\"", new_version, new_version),
        "Failed to create tag",
    )?;

    println!("Successfully prepared release {}", new_version);
    println!("Push with: git push && git push --tags");
    Ok(())
}
