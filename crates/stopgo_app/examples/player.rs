//! Player screen demo
//!
//! Simulates press/release cycles against the toggle control and prints the
//! label and render asset after each step.
//!
//! Run with: cargo run -p stopgo_app --example player

use stopgo_app::PlayerScreen;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let screen = PlayerScreen::new();
    println!("initial: asset={}", screen.button().current_asset().name());

    for cycle in 1..=3 {
        screen.button().press_began();
        println!(
            "cycle {cycle}: pressed  -> label={:?} asset={}",
            screen.status_text(),
            screen.button().current_asset().name()
        );

        screen.button().press_ended();
        println!(
            "cycle {cycle}: released -> label={:?} asset={}",
            screen.status_text(),
            screen.button().current_asset().name()
        );
    }

    Ok(())
}
