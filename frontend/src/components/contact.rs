use chrono::{DateTime, Timelike, Utc};
use chrono_tz::America::Vancouver;
use gloo_timers::callback::Timeout;
use log::{error, info};
use thiserror::Error;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, CLOCK_TICK_MS, COPIED_TOAST_MS};
use crate::viewport::use_is_mobile;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?;
    Ok(())
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub fn mailto_link(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

#[derive(Clone, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let now = use_state(Utc::now);
    let copy_status = use_state(|| CopyStatus::Idle);
    let is_mobile = use_is_mobile();

    {
        let now = now.clone();
        use_interval(move || now.set(Utc::now()), CLOCK_TICK_MS);
    }

    let on_copy = {
        let copy_status = copy_status.clone();
        Callback::from(move |_: MouseEvent| {
            let copy_status = copy_status.clone();
            spawn_local(async move {
                match copy_text(config::CONTACT_EMAIL).await {
                    Ok(()) => {
                        info!("Copied contact email to clipboard");
                        copy_status.set(CopyStatus::Copied);
                    }
                    Err(e) => {
                        error!("Failed to copy email: {}", e);
                        copy_status.set(CopyStatus::Failed);
                    }
                }
                let reset = copy_status.clone();
                Timeout::new(COPIED_TOAST_MS, move || reset.set(CopyStatus::Idle)).forget();
            });
        })
    };

    let local: DateTime<_> = now.with_timezone(&Vancouver);
    let (user, domain) = config::CONTACT_EMAIL
        .split_once('@')
        .unwrap_or((config::CONTACT_EMAIL, ""));

    let copy_label = match *copy_status {
        CopyStatus::Idle => "Copy email",
        CopyStatus::Copied => "Copied!",
        CopyStatus::Failed => "Couldn't copy, try selecting it instead",
    };

    html! {
        <section id="contact" class={classes!("contact-section", (!is_mobile).then(|| "reveal"))}>
            <div class="contact-inner">
                <p class="contact-greeting">
                    {format!("{}, from Vancouver", greeting(local.hour()))}
                    <span class="contact-clock">{local.format("%I:%M %p").to_string()}</span>
                </p>
                <h2 class="contact-heading">{"Let's create something real together."}</h2>
                <a class="contact-email" href={mailto_link(config::CONTACT_EMAIL, "Photography inquiry")}>
                    <span>{user}</span>
                    <span class="contact-email-at">{"@"}</span>
                    <span>{domain}</span>
                </a>
                <button
                    class={classes!("contact-copy", (*copy_status == CopyStatus::Failed).then(|| "failed"))}
                    onclick={on_copy}
                >
                    {copy_label}
                </button>
                <a class="contact-instagram" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                    {config::INSTAGRAM_HANDLE}
                </a>
            </div>
            <style>
                {r#"
                .contact-section {
                    min-height: 80vh;
                    background: #1A2B3C;
                    color: #FAFBFC;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1.5rem;
                }
                .contact-inner {
                    max-width: 900px;
                    width: 100%;
                    text-align: center;
                }
                .contact-greeting {
                    color: #A8C5DA;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                }
                .contact-clock {
                    margin-left: 0.75rem;
                    opacity: 0.7;
                }
                .contact-heading {
                    font-family: 'Libre Baskerville', serif;
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    margin: 1.5rem 0 2.5rem;
                }
                .contact-email {
                    display: inline-block;
                    color: #FAFBFC;
                    text-decoration: none;
                    font-size: clamp(1rem, 3vw, 1.875rem);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    padding-bottom: 0.25rem;
                }
                .contact-email-at {
                    color: #6B9080;
                }
                .contact-copy {
                    display: block;
                    margin: 1.25rem auto 0;
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #FAFBFC;
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    cursor: pointer;
                }
                .contact-copy.failed {
                    border-color: #E57373;
                }
                .contact-instagram {
                    display: inline-block;
                    margin-top: 2.5rem;
                    color: #A8C5DA;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn greeting_changes_at_noon_and_six() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good afternoon");
        assert_eq!(greeting(18), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn greeting_uses_vancouver_hour() {
        // 19:00 UTC in July is noon in Vancouver (PDT).
        let utc = Utc.with_ymd_and_hms(2024, 7, 1, 19, 0, 0).unwrap();
        let local = utc.with_timezone(&Vancouver);
        assert_eq!(local.hour(), 12);
        assert_eq!(greeting(local.hour()), "Good afternoon");
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("a@b.com", "Photography inquiry"),
            "mailto:a@b.com?subject=Photography%20inquiry"
        );
    }
}
