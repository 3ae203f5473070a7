// Reads a small render settings file, with required and optional fields

use sjson::{Parser, ParserError, StringView};

const SETTINGS: &str = r#"
// Render settings
window = {
    title = "SJSON demo"
    size = [1280, 720]
    /* vsync = true */
}
clear_color = [0.1, 0.1, 0.15, 1.0]
"#;

#[derive(Debug)]
struct Settings<'a> {
    title: StringView<'a>,
    size: [u32; 2],
    vsync: bool,
    clear_color: [f32; 4],
}

fn load(input: &str) -> Result<Settings<'_>, ParserError> {
    let mut parser = Parser::new(input);
    let mut settings = Settings {
        title: StringView::empty(),
        size: [0; 2],
        vsync: true,
        clear_color: [0.0; 4],
    };

    let required = parser.object_begins_named("window")
        && parser.read("title", &mut settings.title)
        && parser.read_array("size", &mut settings.size);

    if required {
        // Optional: keep the default when it is missing
        let mut vsync = false;
        if parser.try_read("vsync", &mut vsync) {
            settings.vsync = vsync;
        }
    }

    let ok = required
        && parser.object_ends()
        && parser.read_array("clear_color", &mut settings.clear_color)
        && parser.remainder_is_comments_and_whitespace();

    match parser.error() {
        Some(error) if !ok => Err(error),
        _ => Ok(settings),
    }
}

fn main() {
    println!("Input:{SETTINGS}");

    match load(SETTINGS) {
        Ok(settings) => {
            println!("title:       {}", settings.title);
            println!("size:        {}x{}", settings.size[0], settings.size[1]);
            println!("vsync:       {}", settings.vsync);
            println!("clear_color: {:?}", settings.clear_color);
        }
        Err(error) => println!("Failed to load settings: {error}"),
    }

    println!();
    match load("window = { title = \"broken\" size = [1280 720] }") {
        Ok(settings) => println!("Unexpectedly parsed: {settings:?}"),
        Err(error) => println!("Broken input rejected: {error}"),
    }
}
