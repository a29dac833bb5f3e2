use dtp::variants::{CaseStyle, VariantSet};

#[test]
fn test_simple_name() {
    let variants = VariantSet::derive("MyComponent");

    assert_eq!(
        variants,
        VariantSet {
            pascal: "MyComponent".to_string(),
            camel: "myComponent".to_string(),
            kebab: "my-component".to_string(),
            snake: "my_component".to_string(),
        }
    );
}

#[test]
fn test_multiple_capital_letters() {
    let variants = VariantSet::derive("MyUiComponent");

    assert_eq!(variants.pascal, "MyUiComponent");
    assert_eq!(variants.camel, "myUiComponent");
    assert_eq!(variants.kebab, "my-ui-component");
    assert_eq!(variants.snake, "my_ui_component");
}

#[test]
fn test_pascal_is_unchanged_and_camel_differs_in_first_char_only() {
    for name in ["Button", "DataGrid", "HTMLParser", "Item2Row", "A"] {
        let variants = VariantSet::derive(name);
        assert_eq!(variants.pascal, name);
        assert_eq!(variants.camel.len(), name.len());
        assert_eq!(&variants.camel[1..], &name[1..]);
        assert_eq!(variants.camel[..1], name[..1].to_lowercase());
    }
}

#[test]
fn test_acronym_run_is_not_split() {
    let variants = VariantSet::derive("HTMLParser");
    assert_eq!(variants.kebab, "htmlparser");

    let variants = VariantSet::derive("UseHTMLParser");
    assert_eq!(variants.kebab, "use-htmlparser");
    assert_eq!(variants.snake, "use_htmlparser");
}

#[test]
fn test_lowercase_led_name_keeps_camel_equal_to_pascal() {
    let variants = VariantSet::derive("button");
    assert_eq!(variants.pascal, variants.camel);
}

#[test]
fn test_get_matches_fields() {
    let variants = VariantSet::derive("MyComponent");
    assert_eq!(variants.get(CaseStyle::Pascal), "MyComponent");
    assert_eq!(variants.get(CaseStyle::Camel), "myComponent");
    assert_eq!(variants.get(CaseStyle::Kebab), "my-component");
    assert_eq!(variants.get(CaseStyle::Snake), "my_component");
}
