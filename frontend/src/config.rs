use log::Level;

// EmailJS credentials for the contact form relay. The public key is meant to
// ship in client code.
pub const EMAILJS_SERVICE_ID: &str = "service_ovqj59a";
pub const EMAILJS_TEMPLATE_ID: &str = "template_jiiw76m";
pub const EMAILJS_PUBLIC_KEY: &str = "d2lrjqEE4VNkIzVPQ";

/// How long a single submission may stay pending before it is reported as failed.
pub const SUBMISSION_TIMEOUT_MS: u32 = 15_000;

/// Where every platform's download button currently points.
pub const DOWNLOAD_URL: &str =
    "https://drive.google.com/file/d/1e126EVbSOjKMm4N4rnx88ZvOulqcBeBW/view?usp=sharing";

pub const SUPPORT_EMAIL: &str = "support@growwbook.com";

pub fn get_mail_relay_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

#[cfg(debug_assertions)]
pub fn get_splash_duration_ms() -> u32 {
    500 // Keep reloads snappy while developing
}

#[cfg(not(debug_assertions))]
pub fn get_splash_duration_ms() -> u32 {
    3000
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
