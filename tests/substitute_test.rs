use dtp::placeholder::PlaceholderScheme;
use dtp::substitute::{rename_for_template, restore_content, restore_file_name, substitute_content};
use dtp::variants::VariantSet;

const COMPONENT: &str = r#"
      import { Something } from './utils';

      export const MyComponent = () => {
        const myComponent = useMyComponent();
        return <div className="my-component">
          <span>{my_component}</span>
        </div>;
      };

      export default MyComponent;
    "#;

fn variants() -> VariantSet {
    VariantSet::derive("MyComponent")
}

#[test]
fn test_replaces_all_case_variations() {
    let out = substitute_content(COMPONENT, &variants(), PlaceholderScheme::Handlebars);

    assert!(out.contains("export const {{pascalCase name}}"));
    assert!(out.contains("const {{camelCase name}} = use{{pascalCase name}}()"));
    assert!(out.contains(r#"className="{{kebabCase name}}""#));
    assert!(out.contains("{{{snakeCase name}}}"));
    assert!(out.contains("export default {{pascalCase name}};"));
    assert!(!out.contains("MyComponent"));
}

#[test]
fn test_jinja_scheme_tokens() {
    let out = substitute_content(COMPONENT, &variants(), PlaceholderScheme::Jinja);

    assert!(out.contains("export const {{pascal_name}}"));
    assert!(out.contains("const {{camel_name}}"));
    assert!(out.contains(r#"className="{{kebab_name}}""#));
    assert!(out.contains("{{{snake_name}}}"));
}

#[test]
fn test_no_matches_leaves_content_unchanged() {
    let text = "No component names here!";
    assert_eq!(substitute_content(text, &variants(), PlaceholderScheme::Handlebars), text);
    assert_eq!(substitute_content("", &variants(), PlaceholderScheme::Handlebars), "");
}

#[test]
fn test_restore_round_trip() {
    for scheme in [PlaceholderScheme::Handlebars, PlaceholderScheme::Jinja] {
        let templated = substitute_content(COMPONENT, &variants(), scheme);
        assert_eq!(restore_content(&templated, &variants(), scheme), COMPONENT);
    }
}

#[test]
fn test_rename_pascal_file() {
    let renamed = rename_for_template("MyComponent.tsx", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(renamed, "{{pascalCase name}}.tsx.hbs");
}

#[test]
fn test_rename_snake_only_file() {
    let renamed = rename_for_template("my_component_utils.py", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(renamed, "{{snakeCase name}}_utils.py.hbs");
}

#[test]
fn test_rename_without_match_only_appends_suffix() {
    let renamed = rename_for_template("index.ts", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(renamed, "index.ts.hbs");

    let renamed = rename_for_template("index.ts", &variants(), PlaceholderScheme::Jinja);
    assert_eq!(renamed, "index.ts.j2");
}

#[test]
fn test_rename_substitutes_first_matching_variant_only() {
    let renamed =
        rename_for_template("MyComponent.my_component.ts", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(renamed, "{{pascalCase name}}.my_component.ts.hbs");
}

#[test]
fn test_rename_replaces_every_occurrence_of_the_matched_variant() {
    let renamed =
        rename_for_template("my-component.my-component.css", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(renamed, "{{kebabCase name}}.{{kebabCase name}}.css.hbs");
}

#[test]
fn test_restore_file_name() {
    let name = restore_file_name("{{kebabCase name}}.css.hbs", &variants(), PlaceholderScheme::Handlebars);
    assert_eq!(name, "my-component.css");

    let name = restore_file_name("{{pascal_name}}.tsx.j2", &variants(), PlaceholderScheme::Jinja);
    assert_eq!(name, "MyComponent.tsx");
}
