//! Responders for the standard command set.
//!
//! Consumes a parsed [`Invocation`] and produces reply text. Real
//! deployments route invocations to their own collaborators; these handlers
//! cover the built-in tables and double as a worked example of reading an
//! invocation.

use herald_parser::registry::CommandRegistry;
use herald_parser::{Invocation, Trailing};
use thiserror::Error;

/// A recoverable error while generating a response.
///
/// Reported back as text, exactly like a parse failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    /// The help topic was not an integer.
    #[error("topic index must be an integer, got `{0}`")]
    NonIntegerTopic(String),

    /// The help topic was outside the command's usage lines.
    #[error("topic index {index} is out of range (1..={len})")]
    TopicOutOfRange {
        /// The requested 1-based index.
        index: usize,
        /// Number of usage lines available.
        len: usize,
    },
}

/// Generates the reply for an invocation of the standard commands.
///
/// # Errors
///
/// Returns a [`ResponseError`] for recoverable user mistakes; the caller
/// renders it as reply text.
pub fn respond(
    registry: &CommandRegistry,
    invocation: &Invocation,
) -> Result<String, ResponseError> {
    match invocation.base.as_str() {
        "ping" => Ok(respond_ping(invocation)),
        "base" => respond_base(registry, invocation),
        "mod" => Ok(respond_mod(invocation)),
        "owner" => Ok(respond_owner(invocation)),
        "debug" => Ok(format!("Parsed: {invocation:?}")),
        other => Ok(format!("Your command was: {other}")),
    }
}

fn respond_ping(invocation: &Invocation) -> String {
    match &invocation.trailing {
        Trailing::Joined(text) if !text.is_empty() => format!("Pong!\n{text}"),
        _ => "Pong!".to_string(),
    }
}

fn respond_base(
    registry: &CommandRegistry,
    invocation: &Invocation,
) -> Result<String, ResponseError> {
    match invocation.rule_index {
        0 => Ok(format!("Herald v{}", env!("CARGO_PKG_VERSION"))),
        1 => Ok("https://github.com/herald-bot/herald".to_string()),
        2 => Ok("Bot has been up since forever ago.".to_string()),
        _ => respond_help(registry, invocation),
    }
}

/// Renders help for the command named by the `-help` argument, narrowed to
/// one usage line when `-topic <index>` is given.
fn respond_help(
    registry: &CommandRegistry,
    invocation: &Invocation,
) -> Result<String, ResponseError> {
    let target = invocation.option("help").unwrap_or_default();
    let Some(spec) = registry.command(target) else {
        return Ok(format!("No manual entry for `{target}`."));
    };

    if let Some(topic) = invocation.option("topic") {
        let usage = spec.manual().map(|m| m.usage.as_slice()).unwrap_or(&[]);
        let index: usize = topic
            .parse()
            .map_err(|_| ResponseError::NonIntegerTopic(topic.to_string()))?;
        let (syntax, explanation) =
            usage
                .get(index.wrapping_sub(1))
                .ok_or(ResponseError::TopicOutOfRange {
                    index,
                    len: usage.len(),
                })?;
        return Ok(format!("{target} {syntax}\n  {explanation}"));
    }

    let mut reply = String::new();
    if let Some(manual) = spec.manual() {
        reply.push_str(&manual.description);
        reply.push('\n');
    }
    reply.push_str("Usage:\n");
    reply.push_str(&spec.usage_text());
    if let Some(other) = spec.manual().and_then(|m| m.other.as_deref()) {
        reply.push_str(other);
        reply.push('\n');
    }
    Ok(reply)
}

fn respond_mod(invocation: &Invocation) -> String {
    match invocation.rule_index {
        0 => "This is the info command!".to_string(),
        1 => format!(
            "You're trying to block: {}",
            invocation.option("block").unwrap_or_default()
        ),
        2 => format!(
            "You're trying to unblock: {}",
            invocation.option("unblock").unwrap_or_default()
        ),
        _ => "Pretend there is a lot of text here.".to_string(),
    }
}

fn respond_owner(invocation: &Invocation) -> String {
    match invocation.rule_index {
        0 => "You can't stop this train.".to_string(),
        1 => "You can't restart this train.".to_string(),
        2 => format!(
            "You're trying to add an admin: {}",
            invocation.option("add").unwrap_or_default()
        ),
        3 => format!(
            "You're trying to remove an admin: {}",
            invocation.option("remove").unwrap_or_default()
        ),
        4 => "192.168.something.something".to_string(),
        _ => "There is no backup server yet!".to_string(),
    }
}
