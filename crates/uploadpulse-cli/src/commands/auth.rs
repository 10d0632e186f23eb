use clap::Subcommand;
use uploadpulse_core::integrations::keyring_store;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the YouTube Data API key in the OS keyring
    SetYoutubeKey { key: String },
    /// Store the Resend API key in the OS keyring
    SetResendKey { key: String },
    /// Show which credentials are configured
    Status,
    /// Remove all stored credentials
    Clear,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::SetYoutubeKey { key } => {
            keyring_store::set("youtube_api_key", &key)?;
            println!("YouTube API key stored");
        }
        AuthAction::SetResendKey { key } => {
            keyring_store::set("resend_api_key", &key)?;
            println!("Resend API key stored");
        }
        AuthAction::Status => {
            for name in ["youtube_api_key", "resend_api_key"] {
                let state = match keyring_store::get(name)? {
                    Some(_) => "configured",
                    None => "not configured",
                };
                println!("{name}: {state}");
            }
        }
        AuthAction::Clear => {
            keyring_store::delete("youtube_api_key")?;
            keyring_store::delete("resend_api_key")?;
            println!("credentials cleared");
        }
    }
    Ok(())
}
