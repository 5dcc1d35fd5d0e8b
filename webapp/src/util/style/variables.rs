pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #0366D6;
  --primary-dark: #0550AE;

  --neutral-100: #F4F7FA;
  --neutral-200: #E8EBED;
  --neutral-400: #9BA6B2;
  --neutral-600: #4E5C6E;
  --neutral-900: #111319;

  --error: #FF5C80;
  --badge-yellow: #FFD95A;

  --background: #FFFFFF;
  --surface: #FFFFFF;

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-200);
  --border-focus: var(--primary);

  --header-height: 60px;
  --container-width: 960px;

  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --radius-sm: 2px;
  --radius-md: 4px;
  --radius-lg: 8px;
}
"#;
