use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use advisor_core::{update, AppState, Msg};
use advisor_logging::{advisor_info, advisor_warn};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use super::config::{Args, ClientConfig};
use super::effects::EffectRunner;
use super::event::AppEvent;
use super::input::{parse_line, HELP_LINES};
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ClientConfig::resolve(&args)?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(config.log, level);
    advisor_info!(
        "Starting advisor chat={} ingest={}",
        config.chat_base_url,
        config.ingest_base_url
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.service_settings(), event_tx.clone())
        .context("failed to start request engine")?;

    let mut out = io::stdout().lock();
    print_lines(
        &mut out,
        &ui::layout::initial_lines(&config.chat_base_url, &config.ingest_base_url),
    )?;

    spawn_input_reader(event_tx);

    let mut state = AppState::new();
    'events: while let Ok(first) = event_rx.recv() {
        // Lines expand to several events; render once per burst.
        let mut batch = vec![first];
        batch.extend(event_rx.try_iter());

        for event in batch {
            match event {
                AppEvent::Msg(msg) => {
                    if msg == Msg::ChatSubmitted && !state.launcher().is_open() {
                        writeln!(out, "{}", ui::constants::CHAT_CLOSED)?;
                    }
                    let (next, effects) = update(state, msg);
                    state = next;
                    runner.run(effects);
                }
                AppEvent::Rejected(reason) => {
                    advisor_warn!("Rejected input: {}", reason);
                    writeln!(out, "! {reason}")?;
                }
                AppEvent::Help => {
                    let help: Vec<String> =
                        HELP_LINES.iter().map(|line| line.to_string()).collect();
                    print_lines(&mut out, &help)?;
                }
                AppEvent::Quit => break 'events,
            }
        }

        if state.consume_dirty() {
            print_lines(&mut out, &ui::render::render(&state.view()))?;
        }
    }

    advisor_info!("Advisor shutting down");
    Ok(())
}

/// Reads stdin on its own thread so replies render while the user types.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        forward_lines(io::stdin().lock(), &tx);
        // EOF behaves like /quit.
        let _ = tx.send(AppEvent::Quit);
    });
}

/// Parses each input line into events until EOF, a read error, or a closed
/// receiver. Lines that are not UTF-8 are reported and skipped.
fn forward_lines(input: impl BufRead, tx: &mpsc::Sender<AppEvent>) {
    for line in input.lines() {
        let events = match line {
            Ok(line) => parse_line(&line),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                vec![AppEvent::Rejected("input line is not valid UTF-8".to_string())]
            }
            Err(err) => {
                advisor_warn!("Stopped reading input: {}", err);
                return;
            }
        };
        for event in events {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}
