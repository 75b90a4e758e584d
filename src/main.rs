use std::io::Write as _;

use vanii_client::config::ClientConfig;
use vanii_client::content::{ContentClient, ContentConfig};
use vanii_client::flows::{LoginFlow, LoginOutcome};
use vanii_client::gateway::Gateway;
use vanii_client::nav::Navigation;
use vanii_client::session::SessionHandle;
use vanii_client::wizard::{Advance, OnboardingWizard, StepKind, OTHER_LANGUAGE};

fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let command = std::env::args().nth(1).unwrap_or_default();
    if command == "blogs" {
        // The blog listing needs no backend, only the content store.
        let content = ContentClient::new(ContentConfig::default());
        let (posts, popular) = content.front_page().await?;
        for post in &posts {
            println!("{}  {}", post.published_at.format("%Y-%m-%d"), post.title);
        }
        println!("\nPopular:");
        for post in &popular {
            println!("  {}", post.title);
        }
        return Ok(());
    }

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export VANII_BACKEND_URL=https://...");
        std::process::exit(1);
    });

    eprintln!("Vanii client v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  Backend: {}\n", config.base_url);

    let gateway = Gateway::over_http(&config.base_url)?;
    let session = SessionHandle::new();

    match command.as_str() {
        "login" => {
            let flow = LoginFlow::new(gateway, session);
            let phone = read_line("Phone (national number): ");
            let password = read_line("Password: ");
            match flow.login(&phone, &password).await {
                LoginOutcome::LoggedIn { navigation } => {
                    let snapshot = flow.session().snapshot().await;
                    eprintln!("Logged in as {} → navigate to {navigation}", snapshot.id);
                }
                LoginOutcome::Failed { error } => eprintln!("Login failed: {}", error.user_message()),
                LoginOutcome::Stale => {}
            }
        }
        "onboarding" => {
            run_wizard(OnboardingWizard::new(gateway)).await;
        }
        other => {
            eprintln!("Usage: vanii-client <login|onboarding|blogs>");
            if !other.is_empty() {
                eprintln!("Unknown command: {other}");
            }
        }
    }

    Ok(())
}

async fn run_wizard(mut wizard: OnboardingWizard) {
    loop {
        let step = wizard.current_step().clone();
        println!(
            "\nStep {} of {} — {}",
            wizard.current_index() + 1,
            wizard.steps().len(),
            step.prompt
        );

        match step.kind {
            StepKind::Choice => {
                for (i, choice) in step.choices.iter().enumerate() {
                    println!("  {}. {choice}", i + 1);
                }
                let input = read_line("Choice number ('back' to go back): ");
                if input == "back" {
                    wizard.retreat();
                    continue;
                }
                if let Ok(n @ 1..) = input.parse::<usize>() {
                    if let Some(choice) = step.choices.get(n - 1) {
                        if choice == OTHER_LANGUAGE {
                            let other = read_line("Please specify your language: ");
                            wizard.set_other_language(other);
                        }
                        wizard.set_answer(step.answer_key.clone(), choice.clone());
                    }
                }
            }
            StepKind::FreeText => {
                let input = read_line("Your response ('back' to go back): ");
                if input == "back" {
                    wizard.retreat();
                    continue;
                }
                wizard.set_answer(step.answer_key.clone(), input);
            }
        }

        match wizard.advance().await {
            Advance::Held(message) => println!("  !! {message}"),
            Advance::Moved(_) => {}
            Advance::Submitted(outcome) => {
                match outcome.navigation {
                    Navigation::Learn => println!("\nThanks! Navigating to the learning page."),
                    _ => println!(
                        "\n{}",
                        outcome.error.unwrap_or_else(|| "Submission failed".to_string())
                    ),
                }
                return;
            }
        }
    }
}
