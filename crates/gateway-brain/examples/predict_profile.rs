//! Run a prediction for a hand-written profile, without touching the X API.
//!
//! Run with: cargo run -p gateway-brain --example predict_profile
//! Or with a custom bio: cargo run -p gateway-brain --example predict_profile -- "Serial founder. 5am club."
//!
//! Make sure to set environment variables in .env:
//!   LOVABLE_API_KEY - AI gateway API key

use gateway_brain::{PredictionBrain, PredictionSource, RawProfile};
use predict_core::{finalize, normalize};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let bio = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Building the future of finance on-chain. Cold brew enjoyer. Sleep is for the weak."
            .to_string()
    };

    let brain = PredictionBrain::from_env()?;
    println!("Brain initialized: {}", brain.name());
    println!("Gateway: {}", brain.config().api_url);
    println!("Model: {}", brain.config().model);
    println!();

    let profile = RawProfile::new("example_user", "Example User").with_bio(bio);

    println!("Bio: \"{}\"", profile.bio.as_deref().unwrap_or_default());
    println!("Waiting for response...\n");

    let raw = brain.generate_prediction(&profile).await?;
    println!("=== Raw output ===");
    println!("{}", raw);
    println!("==================\n");

    let result = finalize(&profile, normalize(&raw)?);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
