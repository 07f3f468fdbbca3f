//! Action commands: list and invoke in the sender's active namespace.

use super::{record, CommandContext};
use crate::i18n;
use serde_json::Map;
use tracing::{error, info};
use whisk_memory::activity::{self, ActivityStatus};

pub(super) async fn handle_list(ctx: &CommandContext<'_>) -> Vec<String> {
    let namespace = ctx.resolver.active_namespace(Some(ctx.sender_id)).await;
    info!("Showing OpenWhisk actions for {namespace}");
    let mut replies = vec![i18n::show_in_progress(ctx.lang, &namespace)];

    match ctx.service.list_actions(&namespace).await {
        Ok(actions) => {
            replies.push(i18n::show_actions(ctx.lang, &namespace, &actions));
            record(ctx, activity::LIST_ACTIONS, Some(&namespace), ActivityStatus::Ok).await;
        }
        Err(e) => {
            error!("list actions in {namespace} failed: {e}");
            replies.push(i18n::show_failure(ctx.lang, &namespace));
            record(ctx, activity::LIST_ACTIONS, Some(&namespace), ActivityStatus::Error).await;
        }
    }
    replies
}

pub(super) async fn handle_invoke(ctx: &CommandContext<'_>, action: &str) -> Vec<String> {
    let namespace = ctx.resolver.active_namespace(Some(ctx.sender_id)).await;
    info!("Invoking OpenWhisk action {action} in {namespace}");
    let mut replies = vec![i18n::invoke_in_progress(ctx.lang, action)];

    // Chat invocations carry no parameters.
    let body = Map::new();
    let accepted = match ctx.service.invoke(action, &namespace, &body).await {
        Ok(result) if result.is_accepted() => {
            info!(
                "action {action} accepted, activation {}",
                result.activation_id.as_deref().unwrap_or_default()
            );
            true
        }
        Ok(_) => {
            error!("invoke {action}: response carried no activation id");
            false
        }
        Err(e) => {
            error!("invoke {action} failed: {e}");
            false
        }
    };

    if accepted {
        replies.push(i18n::invoke_success(ctx.lang, action));
        record(ctx, activity::INVOKE_ACTION, Some(action), ActivityStatus::Ok).await;
    } else {
        replies.push(i18n::invoke_failure(ctx.lang, action));
        record(ctx, activity::INVOKE_ACTION, Some(action), ActivityStatus::Error).await;
    }
    replies
}
