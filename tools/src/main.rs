//! orrery-runner: headless driver for the orrery engine.
//!
//! Usage:
//!   orrery-runner --ticks 5 --data-dir ./data
//!   orrery-runner --at 2024-06-01T12:30:00Z --select mars --age 37
//!   orrery-runner --ipc-mode

use anyhow::Result;
use orrery_core::{
    catalog::CardBlurb,
    clock::{ClockDriver, ObservationInstant},
    command::ViewCommand,
    config::OrreryConfig,
    engine::Orrery,
    light_time::LightReport,
    snapshot::OrrerySnapshot,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick {
        count: u64,
    },
    Command {
        command: ViewCommand,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 5u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("./data");
    let at = flag_value(&args, "--at");
    let select = flag_value(&args, "--select");
    let age = flag_value(&args, "--age");

    let config = if Path::new(data_dir).is_dir() {
        OrreryConfig::load(data_dir)?
    } else {
        log::warn!("data dir {data_dir} not found, using built-in catalogs");
        OrreryConfig::builtin()?
    };

    let clock = match at {
        Some(text) => ClockDriver::manual(ObservationInstant::parse(text)?),
        None       => ClockDriver::system(),
    }
    .with_interval(config.tick_interval);

    let mut engine = Orrery::new(config, clock);

    if let Some(id) = select {
        engine.apply(ViewCommand::SelectBody { id: id.to_string() });
    }
    if let Some(input) = age {
        engine.apply(ViewCommand::SubmitAge { input: input.to_string() });
    }

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        println!("Orrery runner");
        println!("  ticks:     {ticks}");
        println!("  data_dir:  {data_dir}");
        println!("  clock:     {}", at.map_or("system", |_| "manual"));
        println!();
        engine.run_ticks(ticks);
        print_summary(&engine.snapshot()?);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut Orrery) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let Some(reply) = handle_ipc_line(engine, &buffer) else {
            break;
        };
        writeln!(stdout, "{reply}")?;
        stdout.flush()?;
    }
    Ok(())
}

/// Handle one IPC message. Returns the reply line, or None on quit.
/// Failures become an `{"error": ...}` reply so the loop keeps serving.
fn handle_ipc_line(engine: &mut Orrery, line: &str) -> Option<String> {
    let cmd: IpcCommand = match serde_json::from_str(line) {
        Ok(c) => c,
        Err(e) => return Some(error_reply(e)),
    };

    match cmd {
        IpcCommand::Quit => return None,
        IpcCommand::Tick { count } => {
            engine.run_ticks(count);
        }
        IpcCommand::GetState => {}
        IpcCommand::Command { command } => {
            engine.apply(command);
        }
    }

    let reply = match engine.snapshot() {
        Ok(snapshot) => serde_json::to_string(&snapshot).map_err(anyhow::Error::from),
        Err(e)       => Err(e.into()),
    };
    Some(reply.unwrap_or_else(|e| {
        log::error!("snapshot failed: {e:#}");
        error_reply(e)
    }))
}

fn error_reply(e: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

fn print_summary(snapshot: &OrrerySnapshot) {
    println!("=== {} (tick {}) ===", snapshot.instant, snapshot.tick);
    println!("  UTC time:       {}", snapshot.globe.utc_time);
    println!("  globe rotation: {:.1}°", snapshot.globe.rotation);

    println!();
    println!("=== EARTH TIME ===");
    for marker in &snapshot.globe.markers {
        let pos = marker.position.to_percent();
        println!(
            "  {:<24} {}  at ({:5.1}%, {:5.1}%)",
            marker.label, marker.local_time, pos.x, pos.y
        );
    }

    println!();
    println!("=== SOLAR SYSTEM TIME ===");
    for card in &snapshot.planets {
        let mark = if card.selected { "*" } else { " " };
        println!(
            " {mark}{:<10} local {}  turn {:6.1}°  day {} / year {} Earth days",
            card.name,
            card.local_time,
            card.rotation_degrees,
            card.rotation_period_days,
            card.orbit_period_days
        );
        if let Some(blurb) = &card.blurb {
            match blurb {
                CardBlurb::FunFact(_)     => println!("     {}", blurb.render()),
                CardBlurb::Description(_) => println!("     {}", blurb.text()),
            }
        }
    }

    if !snapshot.ages.is_empty() {
        println!();
        println!("=== AGE ACROSS THE SOLAR SYSTEM ===");
        for result in &snapshot.ages {
            println!(
                "  On {:<10} {} years old",
                result.body.name, result.age_in_body_years
            );
        }
    }

    println!();
    println!("=== LIGHT SPEED COMMUNICATION ===");
    match &snapshot.light {
        LightReport::NoSelection { placeholder } => println!("  ({placeholder})"),
        LightReport::From { origin_name, routes, .. } => {
            for route in routes {
                println!("  {origin_name} → {:<10} {}", route.name, route.label);
            }
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
