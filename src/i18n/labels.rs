//! Static labels, help descriptions, and fixed replies.

pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    let s = match key {
        // --- Help ---
        "help_header" => match lang {
            "Spanish" => "*Comandos de OpenWhisk*",
            "Portuguese" => "*Comandos do OpenWhisk*",
            _ => "*OpenWhisk commands*",
        },
        "help_invoke_action" => match lang {
            "Spanish" => "Invoca una acci\u{00f3}n de OpenWhisk.",
            "Portuguese" => "Invoca uma a\u{00e7}\u{00e3}o do OpenWhisk.",
            _ => "Invoke an OpenWhisk action.",
        },
        "help_show_namespaces" => match lang {
            "Spanish" => "Muestra tus namespaces de OpenWhisk.",
            "Portuguese" => "Mostra seus namespaces do OpenWhisk.",
            _ => "Show your OpenWhisk namespaces.",
        },
        "help_show_actions" => match lang {
            "Spanish" => "Muestra las acciones de tu namespace activo.",
            "Portuguese" => "Mostra as a\u{00e7}\u{00f5}es do seu namespace ativo.",
            _ => "Show the actions in your active namespace.",
        },
        "help_namespace" => match lang {
            "Spanish" => "Muestra tu namespace activo de OpenWhisk.",
            "Portuguese" => "Mostra seu namespace ativo do OpenWhisk.",
            _ => "Show your active OpenWhisk namespace.",
        },
        "help_set_namespace" => match lang {
            "Spanish" => "Cambia tu namespace activo de OpenWhisk.",
            "Portuguese" => "Altera seu namespace ativo do OpenWhisk.",
            _ => "Set your active OpenWhisk namespace.",
        },

        // --- Namespaces ---
        "namespaces_in_progress" => match lang {
            "Spanish" => "Obteniendo la lista de namespaces de OpenWhisk...",
            "Portuguese" => "Obtendo a lista de namespaces do OpenWhisk...",
            _ => "Getting the list of OpenWhisk namespaces...",
        },
        "namespaces_header" => match lang {
            "Spanish" => "Namespaces:",
            "Portuguese" => "Namespaces:",
            _ => "Namespaces:",
        },
        "namespaces_failure" => match lang {
            "Spanish" => "No se pudo obtener la lista de namespaces de OpenWhisk.",
            "Portuguese" => "N\u{00e3}o foi poss\u{00ed}vel obter a lista de namespaces do OpenWhisk.",
            _ => "Unable to retrieve the list of OpenWhisk namespaces.",
        },
        "namespace_none" => match lang {
            "Spanish" => "No se pudieron consultar los namespaces de OpenWhisk. Int\u{00e9}ntalo m\u{00e1}s tarde.",
            "Portuguese" => "N\u{00e3}o foi poss\u{00ed}vel consultar os namespaces do OpenWhisk. Tente mais tarde.",
            _ => "The OpenWhisk namespaces could not be retrieved. Try again later.",
        },
        "namespace_save_failed" => match lang {
            "Spanish" => "No se pudo guardar tu namespace activo. Int\u{00e9}ntalo m\u{00e1}s tarde.",
            "Portuguese" => "N\u{00e3}o foi poss\u{00ed}vel salvar seu namespace ativo. Tente mais tarde.",
            _ => "Your active namespace could not be saved. Try again later.",
        },

        // --- Actions ---
        "no_actions" => match lang {
            "Spanish" => "No hay acciones.",
            "Portuguese" => "Nenhuma a\u{00e7}\u{00e3}o.",
            _ => "No actions found.",
        },
        "version" => match lang {
            "Spanish" => "versi\u{00f3}n",
            "Portuguese" => "vers\u{00e3}o",
            _ => "version",
        },
        "published" => match lang {
            "Spanish" => "publicada",
            "Portuguese" => "publicada",
            _ => "published",
        },
        "not_published" => match lang {
            "Spanish" => "no publicada",
            "Portuguese" => "n\u{00e3}o publicada",
            _ => "not published",
        },

        // --- Usage ---
        "invoke_usage" => match lang {
            "Spanish" => "No entend\u{00ed} el nombre de la acci\u{00f3}n. Uso: openwhisk invoke action <acci\u{00f3}n>",
            "Portuguese" => "N\u{00e3}o entendi o nome da a\u{00e7}\u{00e3}o. Uso: openwhisk invoke action <a\u{00e7}\u{00e3}o>",
            _ => "I didn't catch the action name. Usage: openwhisk invoke action <action>",
        },
        "set_namespace_usage" => match lang {
            "Spanish" => "No entend\u{00ed} el namespace. Uso: openwhisk set namespace <namespace>",
            "Portuguese" => "N\u{00e3}o entendi o namespace. Uso: openwhisk set namespace <namespace>",
            _ => "I didn't catch the namespace. Usage: openwhisk set namespace <namespace>",
        },
        "unknown_command" => match lang {
            "Spanish" => "No conozco ese comando. Prueba `openwhisk help`.",
            "Portuguese" => "N\u{00e3}o conhe\u{00e7}o esse comando. Tente `openwhisk help`.",
            _ => "I don't know that command. Try `openwhisk help`.",
        },
        _ => return None,
    };
    Some(s)
}
