pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #0F766E;
  --primary-light: #14B8A6;
  --accent: #F59E0B;

  --background: #F8FAFC;
  --surface: #FFFFFF;
  --text-primary: #0F172A;
  --text-secondary: #475569;
  --border: #E2E8F0;

  --success: #15803D;
  --error: #B91C1C;

  --bar-height: 64px;
  --container-width: 1120px;

  --space-2: 8px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-16: 64px;

  --radius: 10px;
  --shadow: 0 6px 24px rgba(15, 23, 42, 0.12);
}

:root[data-theme="dark"] {
  --primary: #2DD4BF;
  --primary-light: #5EEAD4;

  --background: #0B1120;
  --surface: #111827;
  --text-primary: #E2E8F0;
  --text-secondary: #94A3B8;
  --border: #1E293B;

  --shadow: 0 6px 24px rgba(0, 0, 0, 0.5);
}
"#;
