//! Global CSS styles for Card Catalog.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b1b34;
  --panel: #12284d;
  --panel-border: rgba(255, 255, 255, 0.12);

  /* Text */
  --ink: #e7eefc;
  --muted: #a9b8d9;

  /* Accents */
  --accent: #6aa9ff;
  --accent-glow: rgba(106, 169, 255, 0.25);
  --danger: #ff6b81;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;

  /* Layout */
  --sidebar-width: 240px;
  --mobile-breakpoint: 768px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: linear-gradient(180deg, #081427 0%, var(--bg) 60%, #0a1830 100%);
  min-height: 100vh;
  line-height: 1.6;
}

.catalog-shell {
  min-height: 100vh;
  outline: none;
}

/* === Header === */
.catalog-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--panel-border);
}

.catalog-title {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.2px;
  margin-right: auto;
}

.drawer-toggle {
  display: none;
  background: transparent;
  border: 1px solid var(--panel-border);
  color: var(--ink);
  border-radius: 10px;
  padding: 0.4rem 0.7rem;
  cursor: pointer;
}

/* === Search === */
.search-input-wrapper {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid var(--panel-border);
  border-radius: 12px;
  padding: 0.3rem 0.75rem;
  background: rgba(255, 255, 255, 0.04);
  transition: box-shadow var(--transition-fast);
}

.search-input-wrapper:focus-within {
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.search-input {
  background: transparent;
  border: none;
  outline: none;
  color: var(--ink);
  font: inherit;
  min-width: 14rem;
}

.search-input:disabled {
  opacity: 0.5;
}

/* === Layout === */
.catalog-body {
  display: flex;
  gap: 1.5rem;
  max-width: 1100px;
  margin: 1.5rem auto;
  padding: 0 1rem;
}

.catalog-main {
  flex: 1;
  min-width: 0;
}

/* === Category Selectors === */
.category-sidebar {
  width: var(--sidebar-width);
  flex-shrink: 0;
}

.sidebar-title {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--muted);
  margin-bottom: 0.5rem;
}

.category-list {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.category-control {
  text-align: left;
  background: transparent;
  border: 1px solid transparent;
  color: var(--ink);
  border-radius: 10px;
  padding: 0.4rem 0.75rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.category-control:hover {
  background: rgba(255, 255, 255, 0.06);
}

.category-control.active {
  border-color: var(--accent);
  background: var(--accent-glow);
}

/* === Cards === */
.card-count {
  color: var(--muted);
  font-size: 0.9rem;
  margin-bottom: 0.75rem;
}

.card-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card {
  background: linear-gradient(180deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.03));
  border: 1px solid var(--panel-border);
  border-radius: 16px;
  padding: 1.25rem;
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  gap: 1rem;
}

.card-question {
  font-size: 1.05rem;
}

.card-category {
  border: 1px solid var(--panel-border);
  border-radius: 999px;
  padding: 0.1rem 0.6rem;
  font-size: 0.75rem;
  color: var(--muted);
  white-space: nowrap;
}

.card-tags {
  display: block;
  font-size: 0.8rem;
  color: var(--accent);
  margin-top: 0.25rem;
}

.card-answer {
  margin-top: 0.75rem;
}

.card-answer p {
  min-height: 1em;
}

.card-answer pre {
  font-family: var(--font-mono);
  font-size: 0.85rem;
  background: rgba(0, 0, 0, 0.35);
  border-radius: 10px;
  padding: 0.75rem;
  margin: 0.5rem 0;
  overflow-x: auto;
  white-space: pre;
}

/* === Indicators === */
.empty-state, .loading {
  color: var(--muted);
  text-align: center;
  padding: 3rem 0;
}

.load-failure {
  color: var(--danger);
  text-align: center;
  padding: 3rem 0;
}

/* === Drawer === */
.drawer-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  z-index: 50;
}

.drawer-panel {
  position: absolute;
  top: 0;
  left: 0;
  bottom: 0;
  width: min(320px, 85vw);
  background: var(--panel);
  border-right: 1px solid var(--panel-border);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  overflow-y: auto;
}

.drawer-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.drawer-close {
  background: transparent;
  border: none;
  color: var(--ink);
  font-size: 1.5rem;
  cursor: pointer;
}

/* === Responsive === */
@media (max-width: 768px) {
  .category-sidebar {
    display: none;
  }

  .drawer-toggle {
    display: inline-block;
  }

  .catalog-header .search-input-wrapper {
    display: none;
  }
}
"#;
