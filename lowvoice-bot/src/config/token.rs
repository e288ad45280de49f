//! Bot token lookup: explicit override, then `BOT_TOKEN`, then a token file.

use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Token file read when `BOT_TOKEN` is unset; `BOT_TOKEN_FILE` overrides the path.
pub const DEFAULT_TOKEN_FILE: &str = "./.BOT_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("bot token unspecified: set BOT_TOKEN or write it to {}", .0.display())]
    TokenUnspecified(PathBuf),

    #[error("{key} is set but invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Resolves the bot token. Empty values are treated as unset; the file content is trimmed.
pub fn load_token(token: Option<String>) -> Result<String, ConfigError> {
    let non_empty = |t: String| Some(t.trim().to_string()).filter(|t| !t.is_empty());
    if let Some(token) = token
        .and_then(non_empty)
        .or_else(|| env::var("BOT_TOKEN").ok().and_then(non_empty))
    {
        return Ok(token);
    }

    let path = env::var("BOT_TOKEN_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE));
    read_token_file(&path)
}

fn read_token_file(path: &Path) -> Result<String, ConfigError> {
    let token = std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if token.is_empty() {
        return Err(ConfigError::TokenUnspecified(path.to_path_buf()));
    }
    Ok(token)
}

/// Masks a secret for display: first 7 + `***` + last 4 chars; 11 chars or fewer become `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
