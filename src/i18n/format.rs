//! Format helpers for strings with interpolation.

use super::t;

/// Format the current namespace reply.
pub fn namespace_current(lang: &str, namespace: &str) -> String {
    match lang {
        "Spanish" => format!("Tu namespace activo de OpenWhisk es *{namespace}*."),
        "Portuguese" => format!("Seu namespace ativo do OpenWhisk \u{00e9} *{namespace}*."),
        _ => format!("Your active OpenWhisk namespace is *{namespace}*."),
    }
}

/// Format the namespace-changed confirmation.
pub fn namespace_new(lang: &str, namespace: &str) -> String {
    match lang {
        "Spanish" => format!("Tu namespace activo de OpenWhisk ahora es *{namespace}*."),
        "Portuguese" => format!("Seu namespace ativo do OpenWhisk agora \u{00e9} *{namespace}*."),
        _ => format!("Your active OpenWhisk namespace is now *{namespace}*."),
    }
}

/// Format the namespace-not-found reply.
pub fn namespace_not_found(lang: &str, namespace: &str) -> String {
    match lang {
        "Spanish" => format!("No se encontr\u{00f3} el namespace de OpenWhisk *{namespace}*."),
        "Portuguese" => format!("O namespace do OpenWhisk *{namespace}* n\u{00e3}o foi encontrado."),
        _ => format!("The OpenWhisk namespace *{namespace}* was not found."),
    }
}

/// Format the actions-listing progress line.
pub fn show_in_progress(lang: &str, namespace: &str) -> String {
    match lang {
        "Spanish" => format!("Obteniendo las acciones de OpenWhisk del namespace *{namespace}*..."),
        "Portuguese" => format!("Obtendo as a\u{00e7}\u{00f5}es do OpenWhisk do namespace *{namespace}*..."),
        _ => format!("Getting the OpenWhisk actions in namespace *{namespace}*..."),
    }
}

/// Format the actions-listing failure.
pub fn show_failure(lang: &str, namespace: &str) -> String {
    match lang {
        "Spanish" => format!("No se pudieron obtener las acciones del namespace *{namespace}*."),
        "Portuguese" => format!("N\u{00e3}o foi poss\u{00ed}vel obter as a\u{00e7}\u{00f5}es do namespace *{namespace}*."),
        _ => format!("Unable to retrieve the actions in namespace *{namespace}*."),
    }
}

/// Format the action listing: header plus one line per action.
pub fn show_actions(lang: &str, namespace: &str, actions: &[whisk_core::model::Action]) -> String {
    let header = match lang {
        "Spanish" => format!("Acciones de OpenWhisk en *{namespace}*:"),
        "Portuguese" => format!("A\u{00e7}\u{00f5}es do OpenWhisk em *{namespace}*:"),
        _ => format!("OpenWhisk actions in *{namespace}*:"),
    };
    if actions.is_empty() {
        return format!("{header}\n{}", t("no_actions", lang));
    }
    let mut out = header;
    for a in actions {
        let publish = if a.publish {
            t("published", lang)
        } else {
            t("not_published", lang)
        };
        out.push_str(&format!(
            "\n- {} ({} {}, {publish})",
            a.name,
            t("version", lang),
            a.version
        ));
    }
    out
}

/// Format the invoke progress line.
pub fn invoke_in_progress(lang: &str, action: &str) -> String {
    match lang {
        "Spanish" => format!("Invocando la acci\u{00f3}n de OpenWhisk *{action}*..."),
        "Portuguese" => format!("Invocando a a\u{00e7}\u{00e3}o do OpenWhisk *{action}*..."),
        _ => format!("Invoking OpenWhisk action *{action}*..."),
    }
}

/// Format the invoke success.
pub fn invoke_success(lang: &str, action: &str) -> String {
    match lang {
        "Spanish" => format!("La acci\u{00f3}n de OpenWhisk *{action}* fue invocada."),
        "Portuguese" => format!("A a\u{00e7}\u{00e3}o do OpenWhisk *{action}* foi invocada."),
        _ => format!("OpenWhisk action *{action}* was invoked."),
    }
}

/// Format the invoke failure.
pub fn invoke_failure(lang: &str, action: &str) -> String {
    match lang {
        "Spanish" => format!("No se pudo invocar la acci\u{00f3}n de OpenWhisk *{action}*."),
        "Portuguese" => format!("N\u{00e3}o foi poss\u{00ed}vel invocar a a\u{00e7}\u{00e3}o do OpenWhisk *{action}*."),
        _ => format!("Unable to invoke OpenWhisk action *{action}*."),
    }
}

/// Format the help text for the bot called `bot_name`.
pub fn help(lang: &str, bot_name: &str) -> String {
    format!(
        "{}\n\n\
         {bot_name} openwhisk invoke action [action] - {}\n\
         {bot_name} openwhisk list|show namespaces - {}\n\
         {bot_name} openwhisk list|show actions - {}\n\
         {bot_name} openwhisk namespace - {}\n\
         {bot_name} openwhisk set|use namespace [namespace] - {}",
        t("help_header", lang),
        t("help_invoke_action", lang),
        t("help_show_namespaces", lang),
        t("help_show_actions", lang),
        t("help_namespace", lang),
        t("help_set_namespace", lang),
    )
}
