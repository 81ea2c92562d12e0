//! Line-based front end.
//!
//! One command per line; the reply is printed to stdout. `help` lists the
//! commands available in every mode.

use mr_core::auth::ApartmentForm;
use mr_core::profile::ResidentStatus;
use mr_core::requests::{RequestCategory, RequestDraft};
use mr_shell::commands::{assistant, auth, navigation, onboarding, requests, session};
use mr_shell::{AppRuntime, SessionView};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
onboarding: next | skip
auth:       phone <number> | code <digits> | change-number
            apartment <number> <entrance> <owner|tenant> <complex name>
main:       go <screen> | back | profile | logout
            ask <text> | voice | messages              (on the ai screen)
            request <category> <title> | <description>
            requests
any:        status | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Next,
    Skip,
    Phone(String),
    Code(String),
    ChangeNumber,
    Apartment(ApartmentForm),
    Go(String),
    Back,
    Profile,
    Logout,
    Ask(String),
    Voice,
    Messages,
    Request(RequestDraft),
    Requests,
    Status,
    Help,
    Quit,
}

fn parse_status(raw: &str) -> Option<ResidentStatus> {
    match raw {
        "owner" => Some(ResidentStatus::Owner),
        "tenant" => Some(ResidentStatus::Tenant),
        _ => None,
    }
}

fn parse_category(raw: &str) -> Option<RequestCategory> {
    Some(match raw {
        "plumbing" => RequestCategory::Plumbing,
        "electricity" => RequestCategory::Electricity,
        "elevator" => RequestCategory::Elevator,
        "heating" => RequestCategory::Heating,
        "common_area" => RequestCategory::CommonArea,
        "other" => RequestCategory::Other,
        _ => return None,
    })
}

/// Parses one input line. Field validation is left to the flows.
pub fn parse(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match head {
        "next" => ConsoleCommand::Next,
        "skip" => ConsoleCommand::Skip,
        "phone" => ConsoleCommand::Phone(rest.to_string()),
        "code" => ConsoleCommand::Code(rest.to_string()),
        "change-number" => ConsoleCommand::ChangeNumber,
        "apartment" => {
            let mut parts = rest.splitn(4, ' ');
            let apartment = parts.next().unwrap_or_default().to_string();
            let entrance = parts.next().unwrap_or_default().to_string();
            let status = parts.next().unwrap_or_default();
            let status = parse_status(status).ok_or_else(|| format!("unknown status: {status}"))?;
            let complex = parts.next().unwrap_or_default().trim().to_string();
            ConsoleCommand::Apartment(ApartmentForm {
                apartment,
                entrance,
                complex,
                status,
            })
        }
        "go" => ConsoleCommand::Go(rest.to_string()),
        "back" => ConsoleCommand::Back,
        "profile" => ConsoleCommand::Profile,
        "logout" => ConsoleCommand::Logout,
        "ask" => ConsoleCommand::Ask(rest.to_string()),
        "voice" => ConsoleCommand::Voice,
        "messages" => ConsoleCommand::Messages,
        "request" => {
            let (category, body) = rest.split_once(' ').unwrap_or((rest, ""));
            let (title, description) = body.split_once('|').unwrap_or((body, ""));
            ConsoleCommand::Request(RequestDraft {
                title: title.trim().to_string(),
                category: parse_category(category),
                description: description.trim().to_string(),
            })
        }
        "requests" => ConsoleCommand::Requests,
        "status" => ConsoleCommand::Status,
        "help" | "" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

fn describe(view: &SessionView) -> String {
    let mut out = format!("[{}]", view.state);
    if let Some(slide) = view.onboarding_slide {
        out.push_str(&format!(" slide {}", slide + 1));
    }
    if let Some(step) = view.auth_step {
        out.push_str(&format!(" step {step:?}"));
    }
    if let Some(screen) = view.screen {
        out.push_str(&format!(" screen {screen}"));
    }
    out
}

async fn execute(runtime: &AppRuntime, command: ConsoleCommand) -> Result<String, String> {
    let view = |v: SessionView| describe(&v);
    Ok(match command {
        ConsoleCommand::Next => view(onboarding::next_slide(runtime).await?),
        ConsoleCommand::Skip => view(onboarding::skip_onboarding(runtime).await?),
        ConsoleCommand::Phone(phone) => view(auth::submit_phone(runtime, phone).await?),
        ConsoleCommand::Code(code) => view(auth::submit_code(runtime, code).await?),
        ConsoleCommand::ChangeNumber => view(auth::change_number(runtime).await?),
        ConsoleCommand::Apartment(form) => view(auth::submit_apartment(runtime, form).await?),
        ConsoleCommand::Go(screen) => {
            format!("screen {}", navigation::navigate(runtime, &screen).await?)
        }
        ConsoleCommand::Back => format!("screen {}", navigation::back(runtime).await?),
        ConsoleCommand::Profile => match navigation::screen_profile(runtime).await? {
            Some(p) => format!(
                "{} · {}, подъезд {}, кв. {} · {:?}",
                p.phone, p.complex, p.entrance, p.apartment, p.status
            ),
            None => "profile is not shown on this screen".to_string(),
        },
        ConsoleCommand::Logout => view(session::logout(runtime).await?),
        ConsoleCommand::Ask(text) => {
            if assistant::send_message(runtime, &text).await? {
                "sent".to_string()
            } else {
                "nothing to send".to_string()
            }
        }
        ConsoleCommand::Voice => {
            if assistant::toggle_voice_input(runtime).await? {
                "listening".to_string()
            } else {
                "stopped".to_string()
            }
        }
        ConsoleCommand::Messages => assistant::messages(runtime)
            .await?
            .iter()
            .map(|m| format!("{:?}: {}", m.sender, m.text))
            .collect::<Vec<_>>()
            .join("\n"),
        ConsoleCommand::Request(draft) => {
            let created = requests::create_request(runtime, draft).await?;
            format!("#{} {} ({})", created.id, created.title, created.category.label())
        }
        ConsoleCommand::Requests => {
            let active = requests::active_request_count(runtime).await?;
            let lines: Vec<String> = requests::list_requests(runtime)
                .await?
                .iter()
                .map(|r| format!("{} [{:?}] {} · {}", r.created_on, r.status, r.title, r.category.label()))
                .collect();
            format!("{active} active\n{}", lines.join("\n"))
        }
        ConsoleCommand::Status => view(session::current_view(runtime).await?),
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Quit => String::new(),
    })
}

pub async fn run(runtime: &AppRuntime, initial: SessionView) -> anyhow::Result<()> {
    println!("{}", describe(&initial));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        if command == ConsoleCommand::Quit {
            break;
        }
        match execute(runtime, command).await {
            Ok(output) => println!("{output}"),
            Err(err) => println!("error: {err}"),
        }
    }
    Ok(())
}
