//! Global CSS styles for the Dof3a feed.
//!
//! Light blue-on-white palette: accent #3A86FF on a #F5F9FF page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-bg: #F5F9FF;
  --surface: #ffffff;
  --accent: #3A86FF;
  --accent-dark: #245bbf;
  --accent-soft: #e3edff;
  --border: #e5e7eb;
  --border-soft: #f3f4f6;

  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --text-input: #495867;

  /* Reaction accents */
  --like-bg: #dbeafe;
  --like-fg: #2563eb;
  --love-bg: #fce7f3;
  --love-fg: #db2777;
  --laugh-bg: #fef9c3;
  --laugh-fg: #ca8a04;

  --navbar-height: 81px;
  --sidebar-width: 20rem;

  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'Segoe UI', Arial, sans-serif;
  background: var(--page-bg);
  color: var(--text-primary);
  min-height: 100vh;
}

button {
  font: inherit;
  border: none;
  background: none;
  cursor: pointer;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: var(--navbar-height);
  z-index: 50;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0 1rem;
  background: var(--page-bg);
  border-bottom: 1px solid var(--accent);
}

.navbar-logo {
  font-weight: 800;
  font-size: 1.75rem;
  letter-spacing: 0.05em;
  color: var(--accent);
}

.navbar-links {
  display: flex;
  gap: 5rem;
}

.navbar-link {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  color: var(--accent);
  transition: transform var(--transition-normal);
}

.navbar-link:hover {
  transform: scale(1.1);
}

.navbar-tooltip {
  position: absolute;
  left: 50%;
  top: 2.5rem;
  transform: translateX(-50%);
  background: var(--accent);
  color: white;
  font-size: 0.75rem;
  border-radius: 1rem;
  padding: 0.25rem 0.75rem;
  opacity: 0;
  pointer-events: none;
  white-space: nowrap;
  transition: opacity var(--transition-normal);
}

.navbar-link:hover .navbar-tooltip {
  opacity: 1;
}

.navbar-profile {
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 9999px;
}

/* === Sidebar === */
.sidebar {
  position: fixed;
  left: 0;
  top: var(--navbar-height);
  height: 100%;
  width: var(--sidebar-width);
  display: flex;
  flex-direction: column;
  padding: 2.5rem 2rem;
  background: var(--surface);
  border-right: 2px solid var(--accent);
  color: var(--accent);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
}

.sidebar-profile {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 2.5rem;
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  text-decoration: none;
  transition: background var(--transition-normal);
}

.sidebar-profile:hover,
.sidebar-link:hover {
  background: var(--accent-soft);
}

.sidebar-profile-name {
  font-weight: 700;
  font-size: 1.5rem;
  color: black;
}

.sidebar-logout {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
  padding: 0.75rem 1.25rem;
  border-radius: 1rem;
  background: var(--accent);
  color: white;
  font-weight: 600;
  transition: background var(--transition-normal);
}

.sidebar-logout:hover {
  background: var(--accent-dark);
}

.sidebar-search {
  margin-bottom: 2.5rem;
  padding: 0.5rem 1rem;
  border-radius: 1rem;
  border: 2px solid var(--accent);
  background: var(--page-bg);
  color: var(--text-input);
  outline: none;
}

.sidebar-search::placeholder {
  color: var(--accent);
}

.sidebar-nav {
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.sidebar-link {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border-radius: 1rem;
  font-size: 1.25rem;
  text-decoration: none;
  color: var(--accent);
  transition: background var(--transition-normal);
}

.sidebar-link-label {
  font-weight: 600;
  color: black;
}

/* === Feed === */
.feed-main {
  margin-left: var(--sidebar-width);
  padding: calc(var(--navbar-height) + 2rem) 1rem 2rem;
}

.feed-empty {
  text-align: center;
  color: var(--text-muted);
}

/* === Post Card === */
.post-card {
  position: relative;
  max-width: 36rem;
  margin: 2rem auto;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.post-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1rem 0.5rem;
}

.avatar {
  border-radius: 9999px;
  border: 1px solid #d1d5db;
  object-fit: cover;
}

.avatar-lg {
  width: 48px;
  height: 48px;
}

.avatar-sm {
  width: 32px;
  height: 32px;
}

.post-poster {
  font-weight: 600;
}

.post-time {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.post-body {
  padding: 0 1rem 0.5rem;
}

.post-content {
  margin-bottom: 0.5rem;
  font-size: 1.15rem;
}

.post-image {
  width: 100%;
  margin-bottom: 0.5rem;
  border: 1px solid var(--border-soft);
  border-radius: 0.5rem;
  object-fit: cover;
}

.post-counts {
  display: flex;
  gap: 1.5rem;
  margin-bottom: 0.5rem;
  padding: 0 0.5rem;
  color: var(--text-secondary);
  font-weight: 500;
}

.post-counts button:hover {
  text-decoration: underline;
}

/* Overlays fade and scale instead of unmounting */
.overlay {
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.overlay.open {
  opacity: 1;
  transform: scale(1);
  pointer-events: auto;
}

.overlay.closed {
  opacity: 0;
  transform: scale(0.95);
  pointer-events: none;
}

/* === Reacts Popup === */
.reacts-anchor {
  position: relative;
}

.reacts-popup {
  position: absolute;
  left: 0;
  z-index: 20;
  width: 16rem;
  margin-top: 0.5rem;
  padding: 0.75rem 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.reacts-popup-title {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.reacts-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
}

.reacts-row-count {
  font-weight: 500;
}

.reacts-row-names {
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Action Buttons === */
.post-actions {
  display: flex;
  gap: 1rem;
  width: 98%;
  margin: 0.5rem auto 0;
}

.reaction-trigger {
  position: relative;
  flex: 1;
}

.reaction-menu {
  position: absolute;
  left: 50%;
  top: -3rem;
  z-index: 10;
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  translate: -50% 0;
}

.reaction-option {
  font-size: 1.25rem;
  transition: transform var(--transition-normal);
}

.reaction-option:hover {
  transform: scale(1.1);
}

.action-btn {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: #f3f4f6;
  color: #374151;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  transition: all var(--transition-normal);
}

.action-btn.comment:hover {
  background: var(--like-bg);
  color: var(--like-fg);
}

.action-btn.like {
  background: var(--like-bg);
  color: var(--like-fg);
}

.action-btn.love {
  background: var(--love-bg);
  color: var(--love-fg);
}

.action-btn.laugh {
  background: var(--laugh-bg);
  color: var(--laugh-fg);
}

.post-divider {
  margin: 0.5rem 0;
  border-top: 1px solid var(--border-soft);
}

/* === Comment Panel === */
.comment-panel {
  padding: 0 1rem 1rem;
}

.comment-form {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.comment-input {
  flex: 1;
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 9999px;
  background: #f9fafb;
  outline: none;
}

.comment-input:focus {
  box-shadow: 0 0 0 2px #bfdbfe;
}

.comment-post-btn {
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: #3b82f6;
  color: white;
}

.comment-post-btn:hover {
  background: #2563eb;
}

.comment-empty {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.comment-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.comment-item {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.comment-bubble {
  padding: 0.5rem 0.75rem;
  border-radius: 0.5rem;
  background: #f3f4f6;
}

.comment-author {
  font-weight: 600;
  color: #1f2937;
}

.comment-text {
  font-size: 0.875rem;
  color: #374151;
}
"#;
