use chrono::Utc;
use uploadpulse_core::integrations::{resend::ResendNotifier, resend_api_key};
use uploadpulse_core::{EvaluationReport, Evaluator};

use super::common;

/// One reminder evaluation, meant to be invoked by an external scheduler.
///
/// Skips print a success report; only unrecoverable failures (missing
/// config, provider unreachable, send failure) exit non-zero, with the
/// structured error payload still on stdout.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = common::load_config()?;
    if config.reminder.recipient.is_empty() {
        return Err(
            "no reminder recipient configured; run `uploadpulse-cli config set reminder.recipient <email>`"
                .into(),
        );
    }

    let provider = common::provider()?;
    let notifier = ResendNotifier::new(resend_api_key()?, config.reminder.from.clone())?;
    let evaluator = Evaluator {
        provider: &provider,
        notifier: &notifier,
        config: &config,
    };

    match evaluator.run(Utc::now()) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) => {
            let report = EvaluationReport::from_error(&err);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Err(err.into())
        }
    }
}
