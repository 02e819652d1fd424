use colored::*;
use hrd_backend::client::{ClientError, HrdClient, DEFAULT_BASE_URL};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let base_url = std::env::var("HRD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let username = std::env::var("HRD_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("HRD_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    println!("{}", "Starting HRD API smoke test".bold().green());
    println!("Target URL: {}", base_url);

    match run(&base_url, &username, &password).await {
        Ok(()) => {
            println!("\n{}", "All checks passed".bold().green());
            ExitCode::SUCCESS
        }
        Err(ClientError::Network(e)) => {
            eprintln!("{} {}", "Server is NOT reachable:".red().bold(), e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", "Check failed:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(base_url: &str, username: &str, password: &str) -> Result<(), ClientError> {
    let client = HrdClient::new(base_url)?;

    println!("\n{}", "Logging in...".yellow());
    let user = client.login(username, password).await?;
    println!("  {} {} ({}, {})", "✔".green(), user.username, user.email, user.role);

    println!("\n{}", "Fetching divisions...".yellow());
    let divisions = client.list_divisions().await?;
    println!("  {} found {} divisions", "✔".green(), divisions.len());
    for division in &divisions {
        println!("    - {} ({} active employees)", division.name, division.employee_count);
    }

    println!("\n{}", "Fetching dashboard...".yellow());
    let stats = client.dashboard().await?;
    println!("  {} employees: {}, divisions: {}, ending soon: {}, expired: {}",
        "✔".green(),
        stats.total_employees,
        stats.total_divisions,
        stats.contracts_ending_soon,
        stats.expired_contracts,
    );

    println!("\n{}", "Fetching contract announcements...".yellow());
    let announcements = client.contract_announcements().await?;
    println!("  {} {} announcements", "✔".green(), announcements.len());
    for a in &announcements {
        println!("    - [{:?}] {}: {}", a.urgency, a.name, a.message);
    }

    Ok(())
}
