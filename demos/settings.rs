use anybox::{AnyBox, BoxError};

// A single mutable slot whose held type evolves as the program learns more
// about its input: raw text first, a parsed structure once validation passes.

#[derive(Clone, Debug)]
struct Settings {
    theme: String,
    font_size: u32,
}

fn parse_settings(raw: &str) -> Option<Settings> {
    let mut theme = None;
    let mut font_size = None;
    for line in raw.lines() {
        match line.split_once('=') {
            Some((key, value)) => match key.trim() {
                "theme" => theme = Some(value.trim().to_string()),
                "font_size" => font_size = value.trim().parse().ok(),
                _ => {}
            },
            None => {}
        }
    }
    Some(Settings {
        theme: theme?,
        font_size: font_size?,
    })
}

fn main() -> Result<(), BoxError> {
    let mut slot = AnyBox::empty();
    println!("Slot starts out {:?}", slot);

    // Stage 1: hold the raw text
    slot.replace("theme = dark\nfont_size = 14\n".to_string());
    println!("Loaded raw text, slot is now {:?}", slot);

    // Asking for the wrong type is reported, never converted
    match slot.get::<Settings>() {
        Ok(settings) => println!("Settings: {:?}", settings),
        Err(BoxError::TypeMismatch { actual, requested }) => {
            println!("Not parsed yet: slot holds {}, not {}", actual, requested)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    // Stage 2: parse and swap the held type
    let raw: String = slot.take_value()?;
    match parse_settings(&raw) {
        Some(settings) => {
            slot.replace(settings);
            println!("Parsed, slot is now {:?}", slot);
        }
        None => println!("Input did not parse, slot left empty"),
    }

    // Now the typed view works
    let settings = slot.get::<Settings>()?;
    println!(
        "Theme: {}, font size: {}",
        settings.theme, settings.font_size
    );

    // Update a field in place
    slot.get_mut::<Settings>()?.font_size = 16;
    println!("Font size bumped to {}", slot.get::<Settings>()?.font_size);

    // And the raw text is gone for good
    match slot.get::<String>() {
        Ok(_) => println!("This shouldn't happen - the raw text was consumed"),
        Err(e) => println!("Correctly refused: {}", e),
    }

    Ok(())
}
