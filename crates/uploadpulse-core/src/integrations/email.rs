//! Reminder email body.

use chrono::DateTime;
use chrono::Utc;

use crate::timeref::TimeRef;

/// HTML body for the upload reminder email.
///
/// States when the last video went up (as a local date), the target
/// cadence, and that reminders repeat until the upload happens.
pub fn reminder_body_html(
    channel_handle: &str,
    last_published: DateTime<Utc>,
    target_interval_days: u32,
    window_end_hour: u8,
    timeref: TimeRef,
) -> String {
    let last_date = timeref.local(last_published).format("%A, %B %-d, %Y");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #ff0000;">Hey!</h2>

  <p>It's upload day for your channel (<strong>{channel_handle}</strong>).</p>

  <p>Your last video went up on <strong>{last_date}</strong>.</p>

  <p>On your every-{target_interval_days}-days schedule, a new one is due today.</p>

  <p style="font-size: 24px;">You've got this!</p>

  <hr style="border: none; border-top: 1px solid #eee; margin: 20px 0;">

  <p style="color: #666; font-size: 12px;">
    This is an automated reminder from Uploadpulse.<br>
    It will repeat until {window_end_hour}:00 or until the video is up.
  </p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_body_mentions_handle_date_and_cadence() {
        let last = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
        let body = reminder_body_html("@somecreator", last, 2, 22, TimeRef::utc());
        assert!(body.contains("@somecreator"));
        assert!(body.contains("Friday, March 15, 2024"));
        assert!(body.contains("every-2-days"));
        assert!(body.contains("until 22:00"));
    }

    #[test]
    fn test_last_date_uses_local_calendar() {
        // 23:30 UTC on the 15th is already the 16th at UTC+2.
        let last = Utc.with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();
        let body = reminder_body_html("@c", last, 2, 22, TimeRef::fixed_hours(2));
        assert!(body.contains("Saturday, March 16, 2024"));
    }
}
