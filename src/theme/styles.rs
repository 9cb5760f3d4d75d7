//! Global CSS styles for AssetGrid.
//!
//! Card visibility is never styled here: it is the inline `display` value
//! written by the filter, so these rules must not set `display` on cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0e1116;
  --bg-raised: #161b22;
  --border: #262c36;

  /* Accents */
  --accent: #3fb6a8;
  --accent-glow: rgba(63, 182, 168, 0.25);
  --heading: #e3b341;

  /* TEXT */
  --text-primary: #e6edf3;
  --text-secondary: rgba(230, 237, 243, 0.7);
  --text-muted: rgba(230, 237, 243, 0.45);

  /* SEMANTIC */
  --danger: #f85149;

  /* Typography */
  --font-sans: 'Inter', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-2xl: 2rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--heading);
}

/* === Inventory Page === */
.inventory-page,
.asset-detail {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

.inventory-header {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

/* === Filter Input === */
.filter-input-wrapper {
  position: relative;
}

.search-icon {
  position: absolute;
  left: 0.85rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  opacity: 0.6;
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem 0.75rem 2.5rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--accent);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: all 0.2s ease;
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 1px var(--accent), 0 0 20px var(--accent-glow);
}

.input-label {
  margin-bottom: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Product Grid === */
.grid-summary {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-bottom: 0.75rem;
}

.products {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
}

.cardd {
  padding: 1rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 6px;
  cursor: pointer;
  transition: border-color 0.15s ease;
}

.cardd:hover {
  border-color: var(--accent);
}

.cardd .title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card-row {
  font-size: var(--text-sm);
}

.card-label {
  color: var(--text-muted);
  margin-right: 0.5rem;
}

.card-kind {
  float: right;
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
}

.cardd .matched {
  color: var(--accent);
  font-weight: 600;
}

.card-details,
.asset-fields {
  display: grid;
  grid-template-columns: max-content 1fr;
  column-gap: 1rem;
  margin-top: 0.75rem;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.asset-fields {
  font-size: var(--text-base);
  margin-top: 1.5rem;
}

.asset-fields .missing {
  color: var(--danger);
  font-style: italic;
}

.asset-id {
  font-family: var(--font-mono);
  color: var(--text-muted);
}

/* === States === */
.loading-state,
.error-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 300px;
}

.loading-message,
.grid-empty {
  color: var(--text-secondary);
}

.error-message {
  color: var(--danger);
}

/* === Ghost Button === */
.btn-ghost {
  padding: 0.5rem 1rem;
  background: transparent;
  border: 1px solid transparent;
  border-radius: 4px;
  color: var(--text-secondary);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn-ghost:hover {
  color: var(--text-primary);
  border-color: var(--border);
}
"#;
