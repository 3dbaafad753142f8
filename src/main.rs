use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use gesturekit::{init_logging, read_stroke, Config, Shape, BUILD_DATE, VERSION};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("GestureKit {} (built {})", VERSION, BUILD_DATE);

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let mut recognizer = config
        .build_recognizer::<2, Shape>()
        .context("Invalid recognizer settings")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    for shape in Shape::ALL {
        writeln!(stdout, "Draw a {} (one point per line, blank line to finish):", shape)?;
        stdout.flush()?;
        let stroke = read_stroke::<2, _>(&mut input)?
            .with_context(|| format!("Input ended before the {} template", shape))?;
        recognizer
            .add_template(shape, &config.configure_path(stroke))
            .with_context(|| format!("Could not register the {} template", shape))?;
    }
    info!("Registered {} templates", recognizer.example_count());

    loop {
        writeln!(stdout, "Draw a shape:")?;
        stdout.flush()?;
        let Some(stroke) = read_stroke::<2, _>(&mut input)? else {
            break;
        };

        match recognizer.recognize_with(&config.configure_path(stroke), config.recognizer.policy) {
            Ok(result) => {
                info!("Recognized {} at distance {:.3}", result.label, result.distance);
                writeln!(stdout, "{} ({:.3})", result.label, result.score)?;
            }
            Err(e) => {
                warn!("Stroke not recognized: {}", e);
                writeln!(stdout, "unrecognized: {}", e)?;
            }
        }
    }

    Ok(())
}
