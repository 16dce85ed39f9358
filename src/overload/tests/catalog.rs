mod well_formed_lines {
    use pretty_assertions::assert_eq;

    use crate::overload::catalog::{parse_catalog, Parameter, Signature, BUILTINS};

    #[test]
    fn test_parse_two_parameter_signature() {
        let parsed = parse_catalog("float pow(float x, float y)").unwrap();
        let expected = vec![Signature {
            return_type: "float".to_string(),
            name: "pow".to_string(),
            parameters: vec![
                Parameter {
                    type_name: "float".to_string(),
                    name: "x".to_string(),
                },
                Parameter {
                    type_name: "float".to_string(),
                    name: "y".to_string(),
                },
            ],
        }];
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_zero_parameter_signature() {
        let parsed = parse_catalog("float seed()").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].return_type, "float");
        assert_eq!(parsed[0].name, "seed");
        assert_eq!(parsed[0].parameters, vec![]);
    }

    #[test]
    fn test_parameter_order_is_preserved() {
        let parsed = parse_catalog("vec3 refract(vec3 I, vec3 N, float eta)").unwrap();
        let names: Vec<&str> = parsed[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let types: Vec<&str> = parsed[0]
            .parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        assert_eq!(names, vec!["I", "N", "eta"]);
        assert_eq!(types, vec!["vec3", "vec3", "float"]);
    }

    #[test]
    fn test_unknown_type_tokens_are_accepted() {
        // Forward compatibility: type names are not validated.
        let parsed = parse_catalog("f16vec2 halve(f16vec2 v)").unwrap();
        assert_eq!(parsed[0].return_type, "f16vec2");
        assert_eq!(parsed[0].parameters[0].type_name, "f16vec2");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "float sin(float angle)\n\nfloat cos(float angle)\n";
        let parsed = parse_catalog(text).unwrap();
        let names: Vec<&str> = parsed.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["sin", "cos"]);
    }

    #[test]
    fn test_builtin_table_parses() {
        let signatures = parse_catalog(BUILTINS).unwrap();
        assert_eq!(signatures.len(), 205);
        assert_eq!(signatures.first().unwrap().name, "radians");
        assert_eq!(signatures.last().unwrap().name, "not");
    }
}

mod malformed_lines {
    use pretty_assertions::assert_eq;

    use crate::overload::catalog::{parse_catalog, CatalogError};

    #[test]
    fn test_line_without_parentheses() {
        let result = parse_catalog("badline no parens");
        assert_eq!(
            result,
            Err(CatalogError::MalformedSignature(
                "badline no parens".to_string(),
                1
            ))
        );
    }

    #[test]
    fn test_error_reports_the_offending_line_number() {
        let text = "float sin(float angle)\n\nbadline no parens";
        let result = parse_catalog(text);
        assert_eq!(
            result,
            Err(CatalogError::MalformedSignature(
                "badline no parens".to_string(),
                3
            ))
        );
    }

    #[test]
    fn test_missing_return_type() {
        assert!(parse_catalog("pow(float x, float y)").is_err());
    }

    #[test]
    fn test_argument_with_missing_name() {
        assert!(parse_catalog("float pow(float, float y)").is_err());
    }

    #[test]
    fn test_argument_with_extra_tokens() {
        assert!(parse_catalog("float pow(in float x, float y)").is_err());
    }

    #[test]
    fn test_trailing_text_after_parameter_list() {
        assert!(parse_catalog("float pow(float x, float y) junk").is_err());
    }
}
