use serde::Serialize;

#[derive(Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

impl SendEmail {
    pub fn plain(to: &str, subject: &str, body: &str) -> Self {
        SendEmail {
            from: crate::config::config().mail.sender.clone(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            html: None,
            text: Some(body.to_string()),
        }
    }
}
