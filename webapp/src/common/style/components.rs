// hero, sticky bar and off-canvas menu
pub const HERO: &str = r#"
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  background: linear-gradient(160deg, var(--surface), var(--background));
}

.hero__screen {
  height: 60vh;
  background-size: cover;
  background-position: top center;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  transition: background-image 0.4s ease;
}

.hero__bar {
  height: var(--bar-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
  background: var(--surface);
  border-top: 1px solid var(--border);
  z-index: 50;
}

.hero__bar.is-fixed-bottom,
.hero__bar.is-fixed-top {
  position: fixed;
  left: 0;
  right: 0;
  box-shadow: var(--shadow);
}

.hero__bar.is-fixed-bottom { bottom: 0; }
.hero__bar.is-fixed-top { top: 0; }

.hero__bar-placeholder {
  display: none;
  height: var(--bar-height);
}

.nav__links { display: flex; gap: var(--space-4); list-style: none; }

.nav__link { color: var(--text-secondary); padding: var(--space-2); }
.nav__link.is-active { color: var(--primary); font-weight: 600; }

.nav__toggle { display: none; }

@media (max-width: 55.99rem) {
  .nav__toggle { display: inline-block; }

  #primary-menu {
    position: fixed;
    inset: 0 0 0 30%;
    flex-direction: column;
    padding: var(--space-16) var(--space-6);
    background: var(--surface);
    transform: translateX(100%);
    transition: transform 0.25s ease;
  }

  #primary-menu.is-open { transform: translateX(0); }
}
"#;

// portfolio filter grid
pub const PORTFOLIO: &str = r#"
.filter__btn {
  padding: var(--space-2) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  color: var(--text-primary);
}

.filter__btn.is-active { background: var(--primary); color: var(--surface); }

.portfolio__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: var(--space-6);
}

.column { display: none; }
.column.show { display: block; }
"#;

// modal dialog
pub const MODAL: &str = r#"
.modal {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
  z-index: 100;
}

.modal.is-open { display: flex; }

.modal__dialog {
  max-width: 600px;
  width: 92%;
  padding: var(--space-8);
  border-radius: var(--radius);
  background: var(--surface);
  box-shadow: var(--shadow);
}
"#;

// contact and subscribe forms
pub const FORMS: &str = r#"
.field { display: flex; flex-direction: column; gap: var(--space-2); margin-bottom: var(--space-4); }

.field input, .field textarea {
  padding: var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
  color: var(--text-primary);
}

.field input[aria-invalid="true"], .field textarea[aria-invalid="true"] { border-color: var(--error); }

.fieldErr { color: var(--error); font-size: 0.875rem; min-height: 1.25em; }

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

.formMsg { min-height: 1.5em; }
.formMsg.is-success { color: var(--success); }
.formMsg.is-error { color: var(--error); }
"#;
