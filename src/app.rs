use crate::cli::{Cli, Commands};
use houseflow::household::{self, DEMO_INVITE_CODES, InviteCode, Roster};
use houseflow::{config, logging, ui};
use std::process;

pub fn run(cli: Cli) {
    let config = config::Config::load().unwrap_or_default();

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Walkthrough { join, json } => handle_walkthrough(join.as_deref(), json),
            Commands::Codes => handle_codes(),
            Commands::Invite { count } => handle_invite(count),
            Commands::Leaderboard => handle_leaderboard(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui(&config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

fn handle_walkthrough(join: Option<&str>, json: bool) {
    let walkthrough = match household::walkthrough::run(join) {
        Ok(walkthrough) => walkthrough,
        Err(e) => {
            eprintln!("Walkthrough failed: {}", e);
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&walkthrough) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize walkthrough: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("{}", walkthrough.transcript());
    if let Some(house) = &walkthrough.snapshot.house {
        println!();
        println!("House: {}", house.name);
        if let Some(code) = &house.invite_code {
            println!("Invite code: {}", code);
        }
    }
    let done = walkthrough
        .snapshot
        .chores
        .iter()
        .filter(|c| c.is_done)
        .count();
    println!(
        "Chores: {} total, {} done",
        walkthrough.snapshot.chores.len(),
        done
    );
}

fn handle_codes() {
    println!("Accepted invite codes:");
    for code in DEMO_INVITE_CODES {
        println!("- {}", code);
    }
}

fn handle_invite(count: usize) {
    for _ in 0..count.max(1) {
        println!("{}", InviteCode::generate());
    }
}

fn handle_leaderboard() {
    let roster = Roster::demo();
    for (rank, user) in roster.leaderboard().iter().enumerate() {
        println!(
            "{:>2}. {:<4} {:<16} {:>3} pts",
            rank + 1,
            user.initials(),
            user.name,
            user.points
        );
    }
    if let Some(leader) = roster.weekly_leader() {
        println!("Weekly leader: {}", leader.name);
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            match toml::to_string_pretty(&cfg) {
                Ok(text) => println!("{}", text),
                Err(_) => println!("{:#?}", cfg),
            }
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            }
            match config::Config::config_path() {
                Ok(path) => println!("Default config saved to {}", path.display()),
                Err(e) => println!("Default config saved (path unknown): {:#}", e),
            }
        }
    }
}
