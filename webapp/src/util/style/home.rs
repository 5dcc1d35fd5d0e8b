pub const HOME_STYLES: &str = r#"
.scene {
  padding: var(--space-8) 0;
}

.scene-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-6);
}

.scene-title {
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.scene-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.heading {
  font-size: 2.25rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
}

.help-text {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.badge {
  display: inline-block;
  padding: 0 var(--space-1);
  border-radius: var(--radius-md);
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
}

.badge-yellow {
  background-color: var(--badge-yellow);
  color: var(--neutral-900);
}

.notice {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-4);
  margin-bottom: var(--space-6);
  background-color: var(--neutral-100);
  border-radius: var(--radius-lg);
  font-size: 0.875rem;
}

.tabs {
  display: flex;
  gap: var(--space-6);
  border-bottom: 1px solid var(--border);
  margin-bottom: var(--space-4);
}

.tab {
  padding: var(--space-2) 0;
  font-weight: 500;
  color: var(--text-tertiary);
  border-bottom: 3px solid transparent;
}

.tab.active {
  color: var(--text-primary);
  border-bottom-color: var(--text-primary);
}

.document-row {
  display: block;
  padding: var(--space-3) var(--space-2);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
}

.document-row:hover {
  background-color: var(--neutral-100);
}

.document-title {
  font-size: 1rem;
  font-weight: 600;
}

.document-meta {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.color-dot {
  display: inline-block;
  width: 8px;
  height: 8px;
  border-radius: 50%;
  margin-right: var(--space-1);
}

.menu {
  position: relative;
}

.menu-items {
  position: absolute;
  right: 0;
  top: calc(100% + var(--space-1));
  min-width: 200px;
  padding: var(--space-1) 0;
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  z-index: 20;
}

.menu-item {
  display: flex;
  align-items: center;
  width: 100%;
  padding: var(--space-2) var(--space-4);
  background: none;
  border: none;
  text-align: left;
  cursor: pointer;
}

.menu-item:hover {
  background-color: var(--neutral-100);
}

.menu-empty,
.menu-error {
  display: block;
  padding: var(--space-2) var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.menu-error {
  color: var(--error);
}

.document-text {
  white-space: pre-wrap;
  margin-top: var(--space-6);
}
"#;
