// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

//! HTML email templates
//!
//! Submitter text is escaped before it is placed into markup: text nodes
//! with `html_escape::encode_text`, attribute values with
//! `ammonia::clean_text`. Message newlines become `<br>` after escaping.
//! Styles are inline because most mail clients drop `<style>` blocks.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use folio_config::BrandingConfig;

use crate::types::ContactSubmission;

/// Subject of the sender confirmation
pub const CONFIRMATION_SUBJECT: &str = "Thank You For Contacting Me!";

const ACCENT: &str = "#10b981";
const SECONDARY: &str = "#3b82f6";
const FONT_STACK: &str =
    "'Iceberg', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif";
const HEADING_FONT: &str = "'Silkscreen', 'Arial Black', Impact, Arial, sans-serif";

/// Subject of the admin notification
pub fn admin_subject(submission: &ContactSubmission) -> String {
    format!("New Contact Form Submission from {}", submission.name())
}

/// Escape text placed between tags
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a value placed inside a quoted attribute
pub fn escape_attribute(value: &str) -> String {
    ammonia::clean_text(value)
}

/// Escape text and turn its line breaks into `<br>`
pub fn escape_multiline(text: &str) -> String {
    text.lines().map(escape_text).collect::<Vec<_>>().join("<br>")
}

/// Receipt time in the configured zone, e.g. `March 4, 2025, 09:15:02 PM IST`
pub fn format_received_at(received_at: DateTime<Utc>, branding: &BrandingConfig) -> String {
    let offset = FixedOffset::east_opt(branding.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix());
    format!(
        "{} {}",
        received_at.with_timezone(&offset).format("%B %-d, %Y, %I:%M:%S %p"),
        branding.timezone_label
    )
}

/// Notification sent to the site owner
pub fn render_admin_email(
    submission: &ContactSubmission,
    branding: &BrandingConfig,
    received_at: DateTime<Utc>,
) -> String {
    let name = escape_text(submission.name());
    let email = escape_text(submission.email());
    let email_href = escape_attribute(submission.email());
    let message = escape_multiline(submission.message());
    let timestamp = escape_text(&format_received_at(received_at, branding));

    let body = format!(
        r#"<tr>
            <td style="padding: 40px 30px 8px 30px; text-align: center; border-bottom: 3px solid {ACCENT};">
                <h1 style="margin: 0; font-size: 24px; color: {ACCENT}; font-family: {HEADING_FONT}; text-transform: uppercase; letter-spacing: 2px;">New Contact Message</h1>
                <p style="margin: 12px 0 24px 0; font-size: 13px; color: #6b7280;">Serverless Contact API</p>
            </td>
        </tr>
        <tr>
            <td style="padding: 40px 30px;">
                {name_field}
                {email_field}
                {message_field}
                <div style="margin-top: 32px; text-align: center;">
                    <a href="mailto:{email_href}" style="display: inline-block; padding: 14px 36px; background: {ACCENT}; color: #000000; text-decoration: none; font-weight: 700; font-size: 14px; font-family: {HEADING_FONT}; text-transform: uppercase;">Reply to {name}</a>
                </div>
            </td>
        </tr>
        <tr>
            <td style="background: #000000; padding: 24px 30px; text-align: center; border-top: 2px solid #1f2937;">
                <div style="color: {ACCENT}; font-weight: 600; font-size: 12px; margin-bottom: 8px;">{timestamp}</div>
                <div style="color: #6b7280; font-size: 11px;">Automated Message Delivery</div>
            </td>
        </tr>"#,
        name_field = field_block("Name", ACCENT, &name),
        email_field = field_block(
            "Email Address",
            ACCENT,
            &format!(r#"<a href="mailto:{email_href}" style="color: {ACCENT}; text-decoration: underline;">{email}</a>"#),
        ),
        message_field = field_block("Message", SECONDARY, &message),
    );

    wrap_document("New Contact Message", &body)
}

/// Acknowledgement sent back to the submitter
pub fn render_confirmation_email(submission: &ContactSubmission, branding: &BrandingConfig) -> String {
    let name = escape_text(submission.name());
    let message = escape_multiline(submission.message());
    let owner_name = escape_text(&branding.owner_name);
    let owner_title = escape_text(&branding.owner_title);
    let response_window = escape_text(&branding.response_window);

    let links = branding
        .social_links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{url}" style="display: inline-block; margin: 0 6px; padding: 10px 20px; border: 2px solid {ACCENT}; color: {ACCENT}; text-decoration: none; font-size: 12px; font-weight: 700; font-family: {HEADING_FONT}; text-transform: uppercase;">{label}</a>"#,
                url = escape_attribute(&link.url),
                label = escape_text(&link.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    let body = format!(
        r#"<tr>
            <td style="padding: 50px 30px 20px 30px; text-align: center; border-bottom: 3px solid {ACCENT};">
                <h1 style="margin: 0; font-size: 32px; color: {ACCENT}; font-family: {HEADING_FONT}; text-transform: uppercase; letter-spacing: 2px;">Message Received!</h1>
                <p style="margin: 12px 0 0 0; font-size: 14px; color: #6b7280;">Thank You For Reaching Out</p>
            </td>
        </tr>
        <tr>
            <td style="padding: 40px 30px;">
                <p style="font-size: 16px; margin: 0 0 20px 0;">Hi <strong style="color: {ACCENT};">{name}</strong>,</p>
                <p style="font-size: 15px; margin: 0 0 25px 0; color: #9ca3af;">I've Successfully Received Your Message And Will Get Back To You As Soon As Possible.</p>
                {message_field}
                <div style="margin: 25px 0; padding: 24px; border: 2px solid {SECONDARY}; text-align: center;">
                    <div style="color: {SECONDARY}; font-weight: 600; font-size: 12px; text-transform: uppercase;">Typical Response Time</div>
                    <div style="color: {ACCENT}; font-weight: 700; font-size: 18px; margin-top: 8px;">{response_window}</div>
                </div>
                <p style="font-size: 14px; margin: 25px 0; color: #6b7280;">If You Need Immediate Assistance, Feel Free To Connect With Me On Other Platforms.</p>
                <p style="color: #6b7280; margin: 0 0 8px 0; font-size: 14px;">Best Regards,</p>
                <div style="font-size: 20px; color: {ACCENT}; font-weight: 700; font-family: {HEADING_FONT};">{owner_name}</div>
                <div style="color: #6b7280; font-size: 13px;">{owner_title}</div>
                <div style="margin-top: 25px; text-align: center;">
                    {links}
                </div>
            </td>
        </tr>
        <tr>
            <td style="background: #000000; padding: 30px 20px; text-align: center; border-top: 2px solid #1f2937;">
                <div style="color: #6b7280; font-size: 12px;">This Is An Automated Confirmation From The Serverless Contact API.</div>
                <div style="color: #ef4444; font-weight: 600; margin-top: 12px; font-size: 11px; text-transform: uppercase;">Please Do Not Reply To This Email</div>
            </td>
        </tr>"#,
        message_field = field_block("Your Message", SECONDARY, &message),
    );

    wrap_document("Message Received", &body)
}

fn field_block(label: &str, color: &str, content_html: &str) -> String {
    format!(
        r#"<table width="100%" cellpadding="0" cellspacing="0" border="0" style="margin-bottom: 24px;">
                    <tr><td style="padding-bottom: 10px;"><span style="font-size: 11px; font-weight: 700; color: {color}; text-transform: uppercase; letter-spacing: 1.5px; font-family: {HEADING_FONT};">{label}</span></td></tr>
                    <tr><td style="background: #000000; padding: 18px; border-left: 4px solid {color};"><div style="color: #f9fafb; font-size: 15px; line-height: 1.8; word-break: break-word;">{content_html}</div></td></tr>
                </table>"#
    )
}

fn wrap_document(title: &str, rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body style="margin: 0; padding: 20px 12px; font-family: {FONT_STACK}; line-height: 1.6; color: #e5e7eb; background: #000000;">
    <table width="100%" cellpadding="0" cellspacing="0" border="0" style="max-width: 600px; margin: 0 auto; background: #0a0a0a; border: 2px solid {ACCENT}; border-radius: 8px;">
        {rows}
    </table>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactRequest;
    use crate::validation::validate_submission;
    use chrono::TimeZone;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        validate_submission(ContactRequest::new(name, email, message)).unwrap()
    }

    #[test]
    fn test_admin_subject() {
        let s = submission("Jane Doe", "jane@example.com", "Hi");
        assert_eq!(admin_subject(&s), "New Contact Form Submission from Jane Doe");
    }

    #[test]
    fn test_admin_email_contents() {
        let s = submission("Jane Doe", "jane@example.com", "Hello\nWorld");
        let html = render_admin_email(&s, &BrandingConfig::default(), Utc::now());

        assert!(html.contains("mailto:jane@example.com"));
        assert!(html.contains("Hello<br>World"));
        assert!(html.contains(">Jane Doe<"));
        assert!(!html.contains("&#32;"));
    }

    #[test]
    fn test_submitter_markup_is_escaped() {
        let s = submission("<script>alert(1)</script>", "jane@example.com", "<b>bold</b>\nnext");
        let html = render_admin_email(&s, &BrandingConfig::default(), Utc::now());

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>bold"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<br>next"));
    }

    #[test]
    fn test_confirmation_email_contents() {
        let s = submission("Jane", "jane@example.com", "Line one\r\nLine two");
        let branding = BrandingConfig::default();
        let html = render_confirmation_email(&s, &branding);

        assert!(html.contains("Line one<br>Line two"));
        assert!(html.contains("24-48 Hours"));
        assert!(html.contains("Message Received!"));
        for link in &branding.social_links {
            assert!(html.contains(&format!(r#"href="{}""#, escape_attribute(&link.url))));
            assert!(html.contains(&link.label));
        }
    }

    #[test]
    fn test_received_at_uses_configured_offset() {
        let received_at = Utc.with_ymd_and_hms(2025, 3, 4, 15, 45, 2).unwrap();
        let branding = BrandingConfig::default();
        assert_eq!(
            format_received_at(received_at, &branding),
            "March 4, 2025, 09:15:02 PM IST"
        );

        let utc = BrandingConfig {
            utc_offset_minutes: 0,
            timezone_label: "UTC".to_string(),
            ..BrandingConfig::default()
        };
        assert_eq!(format_received_at(received_at, &utc), "March 4, 2025, 03:45:02 PM UTC");
    }
}
