//! Checks on the generated TypeScript bindings
//! Export them with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::types::*;
    use crate::shared::settings::AppSettings;
    use ts_rs::TS;

    #[test]
    fn test_request_binding_uses_string_value() {
        let decl = ConvertUnitsRequest::decl();
        assert!(decl.contains("value: string"), "{}", decl);
        assert!(decl.contains("from_unit: string"), "{}", decl);
    }

    #[test]
    fn test_response_binding_has_numeric_result() {
        let decl = ConvertUnitsResponse::decl();
        assert!(decl.contains("result: number"), "{}", decl);
        assert!(decl.contains("formatted_result: string"), "{}", decl);
    }

    #[test]
    fn test_units_binding_references_unit_dto() {
        let decl = GetUnitsResponse::decl();
        assert!(decl.contains("Array<UnitDTO>"), "{}", decl);
    }

    #[test]
    fn test_settings_binding_names() {
        assert_eq!(AppSettings::name(), "AppSettings");
    }
}
