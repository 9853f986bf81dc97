use constcat::concat;

mod components;
mod variables;

pub use variables::CSS_VARIABLES;

pub const LANDING_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-6);
}
"#,
    CSS_VARIABLES,
    components::HERO,
    components::PORTFOLIO,
    components::MODAL,
    components::FORMS
);
