//! User-facing texts of the taskpane.
//!
//! Every message shown to authors lives here so the state and update logic
//! only decide *when* to show one. Messages are in Spanish, like the rest of
//! the add-in's interface.

/// Shown in place of the list when the active tab has no fields at all.
pub const EMPTY_LIST_MESSAGE: &str = "Carga un XML o cambia de pestaña";

/// Shown when cleanup is requested but tokens were written as field codes,
/// which are never removed automatically.
pub const MANUAL_FIELD_CODE_CLEANUP: &str = "Para limpiar los campos: Presiona Alt+F9 para ver los códigos, luego Ctrl+Shift+F9 para convertirlos a texto";

/// Notice for a definition file that could not be parsed. The previous
/// catalog stays loaded.
pub fn load_failed_notice(source_name: &str) -> String {
    format!(
        "No se pudo leer {}: el archivo no es un XML válido. Se mantienen los campos anteriores.",
        source_name
    )
}

/// Notice after hidden regions were unwrapped.
pub fn cleanup_notice(removed: usize) -> String {
    match removed {
        0 => "No hay campos que limpiar.".to_string(),
        1 => "Se limpió 1 campo.".to_string(),
        n => format!("Se limpiaron {} campos.", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_notice_names_the_file() {
        assert!(load_failed_notice("plantilla.fields").contains("plantilla.fields"));
    }

    #[test]
    fn test_cleanup_notice_plural() {
        assert_eq!(cleanup_notice(0), "No hay campos que limpiar.");
        assert_eq!(cleanup_notice(1), "Se limpió 1 campo.");
        assert_eq!(cleanup_notice(3), "Se limpiaron 3 campos.");
    }
}
