use serde_json::json;

use moodtunes::auth::Session;

use super::Output;
use crate::cli::TokenCommands;

pub fn handle(action: &TokenCommands, session: &Session, out: Output) -> anyhow::Result<()> {
    match action {
        TokenCommands::Set { token } => {
            let user = session.sign_in(token)?;
            out.emit(
                &json!({ "stored": true, "user_id": user.as_ref().map(|u| u.id.clone()) }),
                || match &user {
                    Some(u) => format!("Signed in as {}", u.id),
                    None => "Token stored (claims unreadable or expired)".into(),
                },
            )
        }
        TokenCommands::Clear => {
            session.sign_out()?;
            out.emit(&json!({ "stored": false }), || "Signed out".into())
        }
        TokenCommands::Status => status(session, out),
    }
}

fn status(session: &Session, out: Output) -> anyhow::Result<()> {
    let has_token = session.token().is_some();
    let user = session.current_user();
    let path = session.store().path().display().to_string();

    out.emit(
        &json!({
            "token_path": &path,
            "has_token": has_token,
            "authenticated": user.is_some(),
            "user_id": user.as_ref().map(|u| u.id.clone()),
            "expires_at": user.as_ref().and_then(|u| u.expires_at).map(|t| t.to_rfc3339()),
        }),
        || match (&user, has_token) {
            (Some(u), _) => match u.expires_at {
                Some(exp) => format!("Signed in as {} (token expires {})", u.id, exp.to_rfc3339()),
                None => format!("Signed in as {}", u.id),
            },
            (None, true) => format!("Token at {} is expired or unreadable; sign in again", path),
            (None, false) => "Not signed in".into(),
        },
    )
}
