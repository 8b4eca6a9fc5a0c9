//! campus - Campus platform client
//!
//! A command-line front end for the session/auth core, playing the part
//! the browser dashboards play in the web client.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as a student
//! campus auth login student@demo.com --password secret1 --role student
//!
//! # See who is signed in
//! campus auth whoami --pretty
//!
//! # Open the gate-protected dashboard
//! campus dashboard student
//! ```

mod account_commands;
mod auth_commands;
mod cli;
mod commands;
mod logger;
mod profile_commands;

#[cfg(test)]
mod tests;

use crate::{
    account_commands::AccountCommands,
    auth_commands::{AuthCommands, RoleFlags, registration_details},
    cli::Cli,
    commands::Commands,
    profile_commands::ProfileCommands,
};

use campus_config::{Config, CredentialStore};
use campus_core::{ProfileUpdate, Registration, Role};
use campus_session::{
    ApiClient, GateDecision, Notice, Notifier, RegistrationOutcome, RouteRequirement, Session,
    Severity,
};

use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config dir: --config-dir flag > CAMPUS_CONFIG_DIR > ./.campus
    let config = match &cli.config_dir {
        Some(dir) => Config::load_from(dir),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(config.logging.level, config.logging.colored) {
        eprintln!("Error initializing logger: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let client = ApiClient::new(&server_url, Duration::from_secs(config.server.timeout_secs));

    let store = match &cli.config_dir {
        Some(dir) => CredentialStore::with_dir(dir),
        None => match CredentialStore::open() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error opening credential store: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let mut session = Session::new(client, store).with_notifier(Box::new(StderrNotifier));

    // Re-hydrate from the stored credential before dispatching; a
    // failure here just means the command runs signed out
    session.bootstrap().await;
    debug!("Session phase after startup verification: {:?}", session.phase());

    run(cli, &mut session).await
}

async fn run(cli: Cli, session: &mut Session) -> ExitCode {
    match cli.command {
        // Authentication commands
        Commands::Auth { action } => match action {
            AuthCommands::Login {
                identifier,
                password,
                role,
            } => {
                let Some(role) = parse_role(&role) else {
                    return ExitCode::FAILURE;
                };
                match session.login(&identifier, &password, role).await {
                    Ok(()) => print_user(session, cli.pretty),
                    // The notifier already surfaced the classified line
                    Err(_) => ExitCode::FAILURE,
                }
            }

            AuthCommands::Register {
                username,
                email,
                password,
                first_name,
                last_name,
                role,
                student_id,
                grade_level,
                employee_id,
                department,
                experience_years,
            } => {
                let Some(role) = parse_role(&role) else {
                    return ExitCode::FAILURE;
                };
                let flags = RoleFlags {
                    student_id,
                    grade_level,
                    employee_id,
                    department,
                    experience_years,
                };
                let details = match registration_details(role, flags) {
                    Ok(details) => details,
                    Err(message) => {
                        eprintln!("error: {message}");
                        return ExitCode::FAILURE;
                    }
                };
                let registration = Registration {
                    username,
                    email,
                    password,
                    first_name,
                    last_name,
                    details,
                };
                match session.register(&registration).await {
                    Ok(RegistrationOutcome::SignedIn) => print_user(session, cli.pretty),
                    Ok(RegistrationOutcome::PendingApproval) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                }
            }

            AuthCommands::Logout => {
                session.logout().await;
                ExitCode::SUCCESS
            }

            AuthCommands::Whoami => print_user(session, cli.pretty),
        },

        // Profile commands
        Commands::Profile { action } => match action {
            ProfileCommands::Show => match session.refresh().await {
                Ok(()) => print_user(session, cli.pretty),
                Err(e) => {
                    eprintln!("error: {}", e.user_message());
                    ExitCode::FAILURE
                }
            },

            ProfileCommands::Update {
                first_name,
                last_name,
                email,
            } => {
                let update = ProfileUpdate {
                    first_name,
                    last_name,
                    email,
                };
                match session.update_profile(&update).await {
                    Ok(()) => print_user(session, cli.pretty),
                    Err(_) => ExitCode::FAILURE,
                }
            }

            ProfileCommands::ChangePassword {
                current,
                new,
                confirm,
            } => match session.change_password(&current, &new, &confirm).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            },
        },

        // Account commands
        Commands::Account { action } => match action {
            AccountCommands::Delete { confirm } => {
                match session.delete_account(&confirm).await {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                }
            }
        },

        // Protected dashboards
        Commands::Dashboard { role } => {
            let Some(role) = parse_role(&role) else {
                return ExitCode::FAILURE;
            };
            open_dashboard(session, role)
        }
    }
}

/// Consult the gate the way a protected route wrapper would, then
/// either render the dashboard placeholder or explain the redirect.
fn open_dashboard(session: &Session, role: Role) -> ExitCode {
    let requirement = RouteRequirement::approved_role(role);
    match session.gate(&requirement) {
        GateDecision::Render => {
            if let Some(user) = session.user() {
                println!("=== {role} dashboard ===");
                println!("Welcome, {}", user.display_name());
                println!("  username: {}", user.username);
                println!("  email:    {}", user.email);
                if let Some(profile) = &user.student_profile {
                    println!("  student id: {}", profile.student_id);
                    if let Some(gpa) = profile.gpa {
                        println!("  gpa:        {gpa:.2}");
                    }
                    if let Some(grade) = &profile.grade_level {
                        println!("  grade:      {grade}");
                    }
                }
                if let Some(profile) = &user.teacher_profile {
                    println!("  employee id: {}", profile.employee_id);
                    if let Some(department) = &profile.department {
                        println!("  department:  {department}");
                    }
                }
            }
            ExitCode::SUCCESS
        }
        GateDecision::Loading => {
            eprintln!("Session verification is still in flight; try again.");
            ExitCode::FAILURE
        }
        GateDecision::RedirectToLogin => {
            eprintln!("Not signed in.");
            eprintln!();
            eprintln!("Sign in first:");
            eprintln!("  campus auth login <identifier> --password <password> --role {role}");
            ExitCode::FAILURE
        }
        GateDecision::RedirectToUnauthorized => {
            eprintln!("This account is not authorized to view the {role} dashboard.");
            ExitCode::FAILURE
        }
        GateDecision::RedirectToPendingApproval => {
            eprintln!("Your account is awaiting review by an administrator.");
            eprintln!("The {role} dashboard opens once it is approved.");
            ExitCode::FAILURE
        }
    }
}

fn parse_role(value: &str) -> Option<Role> {
    match Role::from_str(value) {
        Ok(role) => Some(role),
        Err(_) => {
            eprintln!("error: unknown role {value:?} (expected student, teacher or admin)");
            None
        }
    }
}

/// Print the signed-in identity as JSON on stdout
fn print_user(session: &Session, pretty: bool) -> ExitCode {
    let Some(user) = session.user() else {
        eprintln!("Not signed in.");
        return ExitCode::FAILURE;
    };

    let output = if pretty {
        serde_json::to_string_pretty(user)
    } else {
        serde_json::to_string(user)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints notices the way the web client shows toasts
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.severity {
            Severity::Info => eprintln!("{}", notice.message),
            Severity::Warning => eprintln!("warning: {}", notice.message),
            Severity::Error => eprintln!("error: {}", notice.message),
        }
    }
}
