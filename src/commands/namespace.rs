//! Namespace commands: list, show, set.

use super::{record, CommandContext};
use crate::i18n;
use tracing::{error, info};
use whisk_core::error::WhiskError;
use whisk_memory::activity::{self, ActivityStatus};

pub(super) async fn handle_list(ctx: &CommandContext<'_>) -> Vec<String> {
    info!("Listing OpenWhisk namespaces for {}", ctx.sender_id);
    let mut replies = vec![i18n::t("namespaces_in_progress", ctx.lang).to_string()];

    match ctx.service.list_namespaces().await {
        Ok(namespaces) => {
            replies.push(format!(
                "{}\n{}",
                i18n::t("namespaces_header", ctx.lang),
                namespaces.join("\n")
            ));
            record(ctx, activity::LIST_NAMESPACES, None, ActivityStatus::Ok).await;
        }
        Err(e) => {
            error!("list namespaces failed: {e}");
            replies.push(i18n::t("namespaces_failure", ctx.lang).to_string());
            record(ctx, activity::LIST_NAMESPACES, None, ActivityStatus::Error).await;
        }
    }
    replies
}

pub(super) async fn handle_show(ctx: &CommandContext<'_>) -> Vec<String> {
    if let Some(name) = ctx.sender_name {
        info!("Requested current namespace for {name} ({})", ctx.sender_id);
    }
    let namespace = ctx.resolver.active_namespace(Some(ctx.sender_id)).await;
    vec![i18n::namespace_current(ctx.lang, &namespace)]
}

pub(super) async fn handle_set(ctx: &CommandContext<'_>, name: &str) -> Vec<String> {
    info!("Setting namespace {name} for {}", ctx.sender_id);

    match ctx.resolver.set_namespace(ctx.sender_id, name).await {
        Ok(()) => {
            record(ctx, activity::SET_NAMESPACE, Some(name), ActivityStatus::Ok).await;
            vec![i18n::namespace_new(ctx.lang, name)]
        }
        Err(WhiskError::NotFound(_)) => {
            info!("OpenWhisk namespace {name} not found");
            vec![i18n::namespace_not_found(ctx.lang, name)]
        }
        Err(e @ WhiskError::Memory(_)) => {
            error!("saving namespace {name} failed: {e}");
            record(ctx, activity::SET_NAMESPACE, Some(name), ActivityStatus::Error).await;
            vec![i18n::t("namespace_save_failed", ctx.lang).to_string()]
        }
        Err(e) => {
            error!("set namespace {name} failed: {e}");
            record(ctx, activity::SET_NAMESPACE, Some(name), ActivityStatus::Error).await;
            vec![i18n::t("namespace_none", ctx.lang).to_string()]
        }
    }
}
