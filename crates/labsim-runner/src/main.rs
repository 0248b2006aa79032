use std::path::PathBuf;
use std::process;

use labsim_core::config::SimConfig;
use labsim_rules::builtin;
use labsim_runner::report::{self, Transcript};
use labsim_runner::script;
use labsim_sim::Session;

fn usage() {
    eprintln!("Usage: labsim-runner [OPTIONS]");
    eprintln!("  --practice <id>    Practice to run (default: {})", builtin::EXOTHERM_PRACTICE_ID);
    eprintln!("  --script <path>    RON list of intents to replay");
    eprintln!("  --config <path>    RON session config");
    eprintln!("  --output <path>    Save the transcript as JSON");
    eprintln!("  --list             List bundled practices and exit");
}

fn value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut practice_id = builtin::EXOTHERM_PRACTICE_ID.to_string();
    let mut script_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut list = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--practice" => {
                i += 1;
                practice_id = value(&args, i, "--practice");
            }
            "--script" => {
                i += 1;
                script_path = Some(PathBuf::from(value(&args, i, "--script")));
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(value(&args, i, "--config")));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(value(&args, i, "--output")));
            }
            "--list" => list = true,
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let catalog = match builtin::catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    if list {
        println!("{}", report::format_catalog(&catalog));
        return;
    }

    let config = match config_path {
        Some(ref path) => script::load_config(path).unwrap_or_else(|e| {
            log::error!("{}", e);
            process::exit(1);
        }),
        None => SimConfig::default(),
    };

    // Without a script the bundled walkthrough only fits its own practice.
    let intents = match script_path {
        Some(ref path) => script::load_script(path),
        None if practice_id == builtin::EXOTHERM_PRACTICE_ID => script::parse_script(script::EXOTHERM_SCRIPT),
        None => Ok(Vec::new()),
    }
    .unwrap_or_else(|e| {
        log::error!("{}", e);
        process::exit(1);
    });

    let mut session = match Session::new(&catalog, &practice_id, &config) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let outcomes = session.replay(&intents);
    for (n, outcome) in outcomes.iter().enumerate() {
        log::info!("[{:>3}] {}", n + 1, report::describe_outcome(outcome));
    }

    let transcript = Transcript {
        practice_id,
        outcomes,
        snapshot: session.snapshot(),
    };

    match serde_json::to_string_pretty(&transcript.snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }

    if let Some(ref path) = output_path {
        if let Err(e) = report::save_transcript(path, &transcript) {
            log::error!("Failed to save transcript: {}", e);
            process::exit(1);
        }
        log::info!("Saved transcript to {}", path.display());
    }

    log::info!(
        "Finished at step {} of {} ({:.0}%)",
        transcript.snapshot.state.current_step_index + 1,
        session.practice().step_count(),
        transcript.snapshot.progress
    );
}
