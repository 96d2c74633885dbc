//! Utility binary for verifying the completion API configuration
//! This is not part of the main application

use ignitehub_backend::chat::{CompletionClient, OpenAiClient, SYSTEM_PROMPT};
use ignitehub_backend::chat::replies::reply_for;
use ignitehub_backend::config::Config;
use tokio::time::{timeout, Duration};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("Checking IdeaForge++ completion setup...\n");

    let config = Config::from_env();

    // Check 1: API key
    println!("1. Checking for OPENAI_API_KEY environment variable...");
    if config.completion.api_key.is_empty() {
        eprintln!("   ✗ OPENAI_API_KEY not found in environment");
        eprintln!("   Make sure to export it: export OPENAI_API_KEY=\"your-key\"");
        anyhow::bail!("OpenAI API key not configured");
    }
    println!(
        "   ✓ OPENAI_API_KEY is set (length: {} chars)",
        config.completion.api_key.len()
    );

    // Check 2: endpoint and model
    println!("\n2. Endpoint settings...");
    println!("   Base URL: {}", config.completion.base_url);
    println!("   Model:    {}", config.completion.model);

    // Check 3: send a test prompt
    println!("\n3. Sending test prompt...");
    let prompt = "Suggest one beginner project idea in a single sentence.";
    println!("   Prompt: '{}'", prompt);

    let client = OpenAiClient::new(reqwest::Client::new(), config.completion.clone());

    match timeout(Duration::from_secs(30), client.complete(SYSTEM_PROMPT, prompt)).await {
        Ok(Ok(reply)) => {
            println!("   ✓ Response received:");
            println!("   {}", reply.trim());
        }
        Ok(Err(e)) => {
            eprintln!("   ✗ Request failed: {}", e);
            eprintln!("   Chat would show: {}", reply_for(&e));
            return Err(e.into());
        }
        Err(_) => {
            eprintln!("   ✗ Request timed out after 30 seconds");
            anyhow::bail!("completion request timed out");
        }
    }

    println!("\n✓ All checks completed!");
    Ok(())
}
