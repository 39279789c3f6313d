//! Jinja templates for generated sources
//!
//! Templates are rendered with block trimming enabled so each `{% ... %}`
//! tag on its own line leaves no trace in the output.

use minijinja::{AutoEscape, Environment};

/// React function component wrapping the converted JSX tree
///
/// The local `binding` must differ from `React`, `SVGProps` and `Memo`.
pub const COMPONENT_TEMPLATE: &str = r#"import * as React from 'react';
{% if typescript %}
import type { SVGProps } from 'react';
{% endif %}

const {{ binding }} = ({{ params }}) => (
{{ jsx }}
);
{% if memo %}

const Memo = React.memo({{ binding }});
export default Memo;
{% else %}

export default {{ binding }};
{% endif %}
"#;

/// Index module re-exporting every generated component
pub const INDEX_TEMPLATE: &str = r#"{% for name in components %}
export { default as {{ name }} } from '{{ import_dir }}/{{ name }}';
{% else %}
export {};
{% endfor %}
"#;

/// Build the environment shared by every generated source
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}
