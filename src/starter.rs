//! Bundled starter templates.
//!
//! Each starter is a small template tree, already in handlebars form,
//! compiled into the binary and written out on request.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// A bundled template tree.
#[derive(Debug)]
pub struct Starter {
    pub key: &'static str,
    pub description: &'static str,
    /// `(relative path, content)` pairs
    pub files: &'static [(&'static str, &'static str)],
}

/// Key used when no interactive choice can be made.
pub const DEFAULT_STARTER: &str = "react";

pub const STARTERS: &[Starter] = &[
    Starter {
        key: "react",
        description: "React function component with CSS module and test",
        files: &[
            (
                "{{pascalCase name}}.tsx.hbs",
                r#"import styles from './{{pascalCase name}}.module.css';

export interface {{pascalCase name}}Props {
  children?: React.ReactNode;
}

export const {{pascalCase name}} = ({ children }: {{pascalCase name}}Props) => {
  return <div className={styles['{{kebabCase name}}']}>{children}</div>;
};

export default {{pascalCase name}};
"#,
            ),
            (
                "{{pascalCase name}}.module.css.hbs",
                ".{{kebabCase name}} {\n  display: block;\n}\n",
            ),
            (
                "{{pascalCase name}}.test.tsx.hbs",
                r#"import { render } from '@testing-library/react';
import { {{pascalCase name}} } from './{{pascalCase name}}';

test('renders {{kebabCase name}}', () => {
  const { container } = render(<{{pascalCase name}} />);
  expect(container.firstChild).toBeTruthy();
});
"#,
            ),
            ("index.ts.hbs", "export * from './{{pascalCase name}}';\n"),
        ],
    },
    Starter {
        key: "vue",
        description: "Vue single-file component with composable",
        files: &[
            (
                "{{pascalCase name}}.vue.hbs",
                r#"<script setup lang="ts">
import { use{{pascalCase name}} } from './use{{pascalCase name}}';

const { {{camelCase name}}State } = use{{pascalCase name}}();
</script>

<template>
  <div class="{{kebabCase name}}">{{ {{camelCase name}}State }}</div>
</template>
"#,
            ),
            (
                "use{{pascalCase name}}.ts.hbs",
                r#"import { ref } from 'vue';

export function use{{pascalCase name}}() {
  const {{camelCase name}}State = ref('{{snakeCase name}}');
  return { {{camelCase name}}State };
}
"#,
            ),
        ],
    },
];

/// Looks up a starter by key.
pub fn find_starter(key: &str) -> Result<&'static Starter> {
    STARTERS.iter().find(|starter| starter.key == key).ok_or_else(|| {
        let keys: Vec<&str> = STARTERS.iter().map(|starter| starter.key).collect();
        Error::StarterError(format!("unknown starter '{key}' (available: {})", keys.join(", ")))
    })
}

/// Asks `prompt` which starter to use.
pub fn choose_starter(prompt: &dyn Prompter) -> Result<&'static Starter> {
    let items: Vec<&str> = STARTERS.iter().map(|starter| starter.description).collect();
    let default = STARTERS.iter().position(|starter| starter.key == DEFAULT_STARTER).unwrap_or(0);
    let index = prompt.select("Choose a starter template", &items, default)?;
    STARTERS
        .get(index)
        .ok_or_else(|| Error::StarterError(format!("no starter at index {index}")))
}

/// Writes every file of `starter` beneath `output_dir`.
///
/// Returns the number of files written.
pub fn write_starter<P: AsRef<Path>>(starter: &Starter, output_dir: P) -> Result<usize> {
    let output_dir = output_dir.as_ref();
    for (relative_path, content) in starter.files {
        let target = output_dir.join(relative_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Writing starter file: {}", target.display());
        fs::write(&target, content)?;
    }
    Ok(starter.files.len())
}
