//! Bot commands: map recognized text onto resolver and client calls and
//! render the localized replies.

mod actions;
mod namespace;

#[cfg(test)]
mod tests;

use crate::i18n;
use whisk_core::{resolver::NamespaceResolver, traits::ActionService};
use whisk_memory::activity::{ActivityEntry, ActivityLogger, ActivityStatus};

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub resolver: &'a NamespaceResolver,
    pub service: &'a dyn ActionService,
    pub activity: Option<&'a ActivityLogger>,
    pub channel: &'a str,
    pub sender_id: &'a str,
    pub sender_name: Option<&'a str>,
    pub bot_name: &'a str,
    pub lang: &'a str,
}

/// Known bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ListNamespaces,
    ListActions,
    /// Invoke an action; `None` when the name could not be extracted.
    Invoke(Option<String>),
    ShowNamespace,
    /// Change the active namespace; `None` when the name could not be extracted.
    SetNamespace(Option<String>),
}

impl Command {
    /// Parse a command from message text.
    ///
    /// Accepts slash commands (`/namespaces`, `/invoke hello`, optionally with
    /// an `@botname` suffix) and `openwhisk ...` phrases anywhere in the text
    /// (`@whisk openwhisk list actions`). Keywords are case-insensitive;
    /// action and namespace names are kept verbatim.
    pub fn parse(text: &str) -> Option<Self> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let first = *words.first()?;

        if first.starts_with('/') {
            return Self::parse_slash(first, &words[1..]);
        }

        let start = words
            .iter()
            .position(|w| w.eq_ignore_ascii_case("openwhisk"))?;
        Self::parse_phrase(&words[start + 1..])
    }

    fn parse_slash(first: &str, args: &[&str]) -> Option<Self> {
        // Strip @botname suffix (e.g. "/help@whisk_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first).to_lowercase();
        match cmd.as_str() {
            "/help" => Some(Self::Help),
            "/namespaces" => Some(Self::ListNamespaces),
            "/actions" => Some(Self::ListActions),
            "/invoke" => Some(Self::Invoke(join_arg(args))),
            "/namespace" => match join_arg(args) {
                Some(name) => Some(Self::SetNamespace(Some(name))),
                None => Some(Self::ShowNamespace),
            },
            _ => None,
        }
    }

    fn parse_phrase(words: &[&str]) -> Option<Self> {
        let is = |i: usize, options: &[&str]| {
            words
                .get(i)
                .is_some_and(|w| options.iter().any(|o| w.eq_ignore_ascii_case(o)))
        };

        if is(0, &["help"]) {
            Some(Self::Help)
        } else if is(0, &["list", "show"]) && is(1, &["namespaces"]) {
            Some(Self::ListNamespaces)
        } else if is(0, &["list", "show"]) && is(1, &["actions"]) {
            Some(Self::ListActions)
        } else if is(0, &["invoke"]) && is(1, &["action"]) {
            Some(Self::Invoke(join_arg(&words[2..])))
        } else if is(0, &["set", "use"]) && is(1, &["namespace"]) {
            Some(Self::SetNamespace(join_arg(&words[2..])))
        } else if is(0, &["namespace"]) {
            Some(Self::ShowNamespace)
        } else {
            None
        }
    }
}

/// Remaining words as a single argument, `None` if there are none.
fn join_arg(words: &[&str]) -> Option<String> {
    let arg = words.join(" ");
    (!arg.is_empty()).then_some(arg)
}

/// Handle a command and return the replies, in the order they should be sent.
pub async fn handle(cmd: Command, ctx: &CommandContext<'_>) -> Vec<String> {
    match cmd {
        Command::Help => vec![i18n::help(ctx.lang, ctx.bot_name)],
        Command::ListNamespaces => namespace::handle_list(ctx).await,
        Command::ShowNamespace => namespace::handle_show(ctx).await,
        Command::SetNamespace(Some(name)) => namespace::handle_set(ctx, &name).await,
        Command::SetNamespace(None) => vec![i18n::t("set_namespace_usage", ctx.lang).to_string()],
        Command::ListActions => actions::handle_list(ctx).await,
        Command::Invoke(Some(action)) => actions::handle_invoke(ctx, &action).await,
        Command::Invoke(None) => vec![i18n::t("invoke_usage", ctx.lang).to_string()],
    }
}

/// Record a bot activity. Failures are logged and otherwise ignored.
async fn record(
    ctx: &CommandContext<'_>,
    activity_id: &'static str,
    detail: Option<&str>,
    status: ActivityStatus,
) {
    let Some(logger) = ctx.activity else {
        return;
    };
    let entry = ActivityEntry {
        channel: ctx.channel.to_string(),
        sender_id: ctx.sender_id.to_string(),
        activity_id,
        detail: detail.map(str::to_string),
        status,
    };
    if let Err(e) = logger.log(&entry).await {
        tracing::warn!("activity log failed: {e}");
    }
}
