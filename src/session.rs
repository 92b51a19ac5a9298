// Read-eval-render loop over any line source

use crate::app::{App, Outcome};
use crate::command::{self, Command, Line};
use crate::render::{RenderOptions, render};
use clap::CommandFactory;
use colored::Colorize;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Feed each input line to the app and redraw after it
///
/// Bad input and rejected events are reported on `out` and the loop goes on;
/// `quit` or the end of input stops it.
pub fn run<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    out: &mut W,
    options: &RenderOptions,
    interactive: bool,
) -> Result<()> {
    draw(out, app, options, interactive)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        let command = match command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e.render().to_string().trim_end())?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", Line::command().render_long_help())?;
                continue;
            }
            Command::Dump => {
                let visible: Vec<_> = app.store().list_visible(app.filter()).collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
                continue;
            }
            command => {
                for event in command.into_events() {
                    match app.handle(event) {
                        Ok(Outcome::Added(id)) => info!(%id, "Task added"),
                        Ok(Outcome::Removed(id)) => info!(%id, "Task removed"),
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "Command rejected");
                            let message = format!("Error: {}", e);
                            if options.color {
                                writeln!(out, "{}", message.red())?;
                            } else {
                                writeln!(out, "{}", message)?;
                            }
                            break;
                        }
                    }
                }
            }
        }

        draw(out, app, options, interactive)?;
    }

    Ok(())
}

fn draw<W: Write>(out: &mut W, app: &App, options: &RenderOptions, interactive: bool) -> Result<()> {
    writeln!(out, "{}", render(app, options))?;
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
