use crate::display;
use alerter::{share_results, ShareOutcome, TelegramShare};
use chrono::Utc;
use core_types::InputField;
use engine::CalculatorSession;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// A command typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set(InputField, String),
    Show,
    Export,
    Share,
    ToggleLead,
    Email(String),
    Submit,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  set <field> <value>  edit one input (visitors, conversion, order-value, cac, youth)
  show                 show the full projection
  export               download the text report
  share                share the monthly impact
  lead                 open or close the strategy-guide form
  email <address>      type an email into the form
  submit               send the strategy-guide form
  help                 show this help
  quit                 leave the calculator";

/// Parses one line of input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let field = parts
                .next()
                .ok_or_else(|| "usage: set <field> <value>".to_string())?
                .parse::<InputField>()
                .map_err(|e| e.to_string())?;
            // A missing value is an empty entry, which coerces to zero.
            let value = parts.collect::<Vec<_>>().join(" ");
            ShellCommand::Set(field, value)
        }
        "show" => ShellCommand::Show,
        "export" | "download" => ShellCommand::Export,
        "share" => ShellCommand::Share,
        "lead" | "guide" => ShellCommand::ToggleLead,
        "email" => ShellCommand::Email(parts.collect::<Vec<_>>().join(" ")),
        "submit" | "send" => ShellCommand::Submit,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{}', type 'help'", other)),
    };
    Ok(Some(command))
}

/// Runs the line-oriented calculator until `quit` or end of input.
pub async fn run_interactive(
    mut session: CalculatorSession,
    native_share: Option<&TelegramShare>,
    output_dir: &Path,
) -> anyhow::Result<()> {
    display::print_session(&session);
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("yuva> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        if session.tick(Utc::now()) {
            tracing::debug!("Lead form reset.");
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            ShellCommand::Set(field, value) => {
                if session.set_field(field, &value) {
                    if let Some(report) = session.results() {
                        println!("{}", display::summary_line(report));
                    }
                } else {
                    println!(
                        "{} set to {}. Projection unchanged: conversion rate and average order value must be non-zero.",
                        field.label(),
                        session.inputs().get(field)
                    );
                }
            }
            ShellCommand::Show => display::print_session(&session),
            ShellCommand::Export => match session.export_report() {
                Ok(report) => {
                    let path = report.write_to(output_dir)?;
                    println!("Report saved to {}", path.display());
                }
                Err(e) => println!("{}", e),
            },
            ShellCommand::Share => match session.share_payload() {
                Ok(payload) => match share_results(native_share, &payload).await {
                    ShareOutcome::Shared => println!("Shared."),
                    ShareOutcome::Alerted(text) => display::alert(&text),
                },
                Err(e) => println!("{}", e),
            },
            ShellCommand::ToggleLead => {
                session.toggle_lead_form();
                if session.lead_form().is_visible() {
                    println!("Strategy-guide form open. Use 'email <address>' then 'submit'.");
                } else {
                    println!("Strategy-guide form closed.");
                }
            }
            ShellCommand::Email(email) => {
                session.set_lead_email(&email);
                println!("Email: {}", session.lead_form().email());
            }
            ShellCommand::Submit => match session.submit_lead(Utc::now()) {
                Ok(_) => println!("{}", session.lead_form().button_label()),
                Err(e) => println!("{}", e),
            },
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}
