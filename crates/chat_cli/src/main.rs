use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use backend_client::{ChatBackend, HttpBackend};
use chat_core::{Role, Turn};
use chat_session::{SessionConfig, SessionController};
use chat_state::ConversationStore;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;

const GREETING: &str =
    "Hi! Ask me anything about college: rules, placements, fees, scholarships.";

const SUGGESTED_QUESTIONS: [&str; 6] = [
    "What's the attendance policy?",
    "Tell me about placements",
    "What are the hostel timings?",
    "Scholarship eligibility?",
    "Fee structure details",
    "Anti-ragging helpline?",
];

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Ask the campus knowledge backend from the terminal")]
#[command(version)]
struct Cli {
    /// Base URL of the backend service
    #[arg(long, env = "CHAT_BACKEND_URL", default_value = "http://localhost:8000")]
    backend_url: String,

    /// Trailing turns sent as context with each request (0 = none)
    #[arg(long, default_value_t = chat_session::config::DEFAULT_HISTORY_WINDOW)]
    history_window: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single message and print the reply
    Send {
        /// Message content
        message: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let backend = Arc::new(HttpBackend::with_timeout(
        cli.backend_url.clone(),
        Duration::from_secs(cli.timeout_secs),
    )?);
    let store = Arc::new(ConversationStore::with_greeting(GREETING));
    let controller = SessionController::with_config(
        Arc::clone(&store),
        Arc::clone(&backend) as Arc<dyn ChatBackend>,
        SessionConfig {
            history_window: cli.history_window,
        },
    );

    match cli.command {
        Some(Commands::Send { message }) => send_once(&controller, &message).await,
        None => run_interactive_chat(&controller, &backend).await,
    }
}

async fn send_once(controller: &SessionController, message: &str) -> anyhow::Result<()> {
    let before = controller.transcript().len();
    controller.submit(message).await;
    for turn in &controller.transcript()[before..] {
        print_turn(turn);
    }
    Ok(())
}

async fn run_interactive_chat(
    controller: &SessionController,
    backend: &HttpBackend,
) -> anyhow::Result<()> {
    println!("{}", "🎓 College AI".bold());
    print_health(backend).await;

    println!("\nTry one of these, or type your own question (\"exit\" to quit):");
    for question in SUGGESTED_QUESTIONS {
        println!("  {}", question.dimmed());
    }
    println!();

    // The seeded greeting.
    for turn in controller.transcript() {
        print_turn(&turn);
    }

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let before = controller.transcript().len();
        let outcome = controller.submit(input).await;
        debug!("submit outcome: {outcome:?}");

        // Print everything appended by this submission except the
        // echoed user turn.
        for turn in &controller.transcript()[before..] {
            if turn.role == Role::Assistant {
                print_turn(turn);
            }
        }
    }

    Ok(())
}

async fn print_health(backend: &HttpBackend) {
    match backend.health().await {
        Ok(status) if status.ready => println!("{}", "● online".green()),
        Ok(_) => println!("{}", "● backend starting up (not ready yet)".yellow()),
        Err(err) => {
            debug!("health probe failed: {err}");
            println!("{}", "● offline".red());
        }
    }
}

fn print_turn(turn: &Turn) {
    match turn.role {
        Role::User => println!("{} {}", "you>".cyan().bold(), turn.content),
        Role::Assistant => println!("{} {}", "ai>".green().bold(), turn.content),
    }
}
