use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use errors_as_values::{
    greet, greet_safe, square_of_second_element, with_deadline, InMemoryDirectory, LookupFailure,
    PricingRule, Quoter, User, UserDetails,
};

const PRICING_VAR: &str = "QUOTATION_PRICING";

const USERS_JSON: &str = r#"[
    {"name": "John Watson", "email": "john@example.com"},
    {"name": "   ", "email": "blank@example.com"},
    {"email": "ghost@example.com"}
]"#;

fn load_pricing() -> Result<PricingRule> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--pricing" {
            let path = args.next().context("--pricing needs a file path")?;
            return PricingRule::from_file(&path)
                .with_context(|| format!("Failed to load pricing rules from {path}"));
        }
    }
    PricingRule::from_env_or_default(PRICING_VAR)
        .with_context(|| format!("Failed to load pricing rules named by {PRICING_VAR}"))
}

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn show_indexing() {
    section("Safe Indexing");
    let samples: [&[i64]; 3] = [&[], &[7], &[1, 2, 3]];
    for values in samples {
        println!("  {:?} -> {}", values, square_of_second_element(values));
    }
}

fn show_greetings() -> Result<()> {
    section("Greeting (EAFP vs LBYL)");
    let users: Vec<User> = serde_json::from_str(USERS_JSON).context("Failed to parse demo users")?;
    for user in &users {
        let forgiving = greet(user);
        let careful = greet_safe(user);
        let verdict = if forgiving == careful {
            "same".green()
        } else {
            "DIFFERENT".red()
        };
        println!(
            "  {:<20} EAFP: {:<10} LBYL: {:<10} [{}]",
            user.email,
            format!("{forgiving:?}"),
            format!("{careful:?}"),
            verdict
        );
    }
    Ok(())
}

async fn show_quotations(quoter: Quoter) {
    let directory = InMemoryDirectory::new()
        .with_user("u-young", UserDetails::new("Mary", "mary@example.com", 20))
        .with_user("u-thirty", UserDetails::new("Tom", "tom@example.com", 30))
        .with_user("u-older", UserDetails::new("Ann", "ann@example.com", 35))
        .with_latency(Duration::from_millis(20));

    section("Quotation (exception style)");
    for id in ["u-young", "u-thirty", "u-older", "u-nobody"] {
        let premium = quoter
            .quote_with_exception_handling(id, |id| directory.fetch(id))
            .await;
        println!("  {id:<10} -> {premium}");
    }

    section("Quotation (result type)");
    directory.set_available(false);
    for id in ["u-young", "u-nobody"] {
        match quoter.try_quote(id, |id| directory.lookup(id)).await {
            Ok(premium) => println!("  {id:<10} -> {}", premium.to_string().green()),
            Err(LookupFailure::ServiceNotAvailable) => {
                println!("  {id:<10} -> {} (try again later)", "service down".yellow())
            }
            Err(LookupFailure::UserNotFound) => {
                println!("  {id:<10} -> {} (ask them to sign up)", "unknown user".red())
            }
        }
    }
    directory.set_available(true);
    for id in ["u-young", "u-nobody"] {
        match quoter.try_quote(id, |id| directory.lookup(id)).await {
            Ok(premium) => println!("  {id:<10} -> {}", premium.to_string().green()),
            Err(failure) => println!("  {id:<10} -> {}", failure.to_string().red()),
        }
    }

    section("Quotation with an explicit deadline");
    for deadline in [Duration::from_millis(5), Duration::from_millis(100)] {
        let premium = quoter
            .quote_with_result_type("u-young", |id| with_deadline(deadline, directory.lookup(id)))
            .await;
        println!("  deadline {deadline:?} -> {premium}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let quoter = Quoter::new(load_pricing()?);
    let rule = quoter.rule();
    println!(
        "{} under {}: {}, otherwise {}",
        "Pricing".bold(),
        rule.age_threshold,
        rule.young_premium,
        rule.standard_premium
    );

    show_indexing();
    show_greetings()?;
    show_quotations(quoter).await;

    section("Key Points");
    println!("1. slice::get returns an Option instead of panicking");
    println!("2. EAFP and LBYL greet every user identically");
    println!("3. The exception-style quote cannot tell why it failed");
    println!("4. The result-style quote makes the caller match every failure");

    Ok(())
}
