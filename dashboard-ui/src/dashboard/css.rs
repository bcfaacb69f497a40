//! Dashboard CSS styles
//!
//! Contains all styling for the dashboard UI.
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
    --yellow: #d29922;
    --purple: #a371f7;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
}

a { color: inherit; text-decoration: none; }
code { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 13px; }

.container { max-width: 1200px; margin: 0 auto; padding: 32px 20px; }

/* Navigation */
.navbar { background: var(--card); border-bottom: 1px solid var(--border); }

.nav-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 20px;
    height: 64px;
    display: flex;
    align-items: center;
    gap: 32px;
}

.brand { font-size: 20px; font-weight: 700; color: #fff; }
.nav-links { display: flex; gap: 24px; height: 100%; }

.nav-link {
    display: inline-flex;
    align-items: center;
    font-size: 14px;
    font-weight: 500;
    color: var(--text-dim);
    border-bottom: 2px solid transparent;
}

.nav-link:hover { color: var(--text); border-bottom-color: var(--border); }
.nav-link.active { color: #fff; border-bottom-color: var(--blue); }
.nav-icon { margin-right: 8px; }

/* Page header */
.page-header { text-align: center; margin-bottom: 32px; }
.page-header h1 { font-size: 32px; font-weight: 700; color: #fff; margin-bottom: 12px; }
.subtitle { font-size: 16px; color: var(--text-dim); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn-primary { background: var(--blue); color: #fff; }
.btn-primary:hover { background: #4c9aed; }
.btn-block { width: 100%; }
.arrow { margin-left: 8px; }

/* Grids */
.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 24px;
}

.ticker-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 16px;
    padding: 24px;
}

.doc-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 16px;
}

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 24px;
    height: 100%;
    transition: box-shadow 0.2s;
}

.card:hover { box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4); }
.card-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; }
.card-title { font-size: 18px; font-weight: 600; color: #fff; margin-bottom: 8px; }
.card-text { color: var(--text-dim); margin-bottom: 16px; line-height: 1.5; }
.card-link { display: block; text-align: center; }
.card-icon { font-size: 32px; display: block; margin-bottom: 12px; }

/* Panels */
.panel {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 24px;
    margin-bottom: 24px;
}

.panel h2 { font-size: 20px; font-weight: 600; color: #fff; margin-bottom: 16px; }
.panel-header { padding-bottom: 12px; border-bottom: 1px solid var(--border); }
.panel-header h2 { font-size: 16px; margin-bottom: 0; }
.panel-body { max-height: 384px; overflow-y: auto; }

/* Search */
.search { max-width: 420px; margin: 0 auto 24px; }

.search input {
    width: 100%;
    padding: 10px 16px;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--card);
    color: var(--text);
    font-size: 14px;
}

.search input:focus { outline: 2px solid var(--blue); border-color: transparent; }

/* Tickers */
.ticker {
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 16px;
    cursor: pointer;
    transition: background 0.2s;
}

.ticker:hover { background: rgba(255, 255, 255, 0.03); }
.ticker.copied { border-color: var(--green); }
.ticker-symbol { font-family: ui-monospace, monospace; font-weight: 700; font-size: 18px; color: var(--blue); }
.ticker-name { font-size: 13px; color: var(--text); margin-top: 4px; }
.ticker-exchange { font-size: 11px; color: var(--text-dim); margin-top: 4px; }

/* Load states */
.state {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: 40vh;
}

.state-loading p { margin-top: 16px; font-size: 18px; }

.spinner {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    border-bottom: 2px solid var(--blue);
    animation: spin 1s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.error-panel {
    background: rgba(248, 81, 73, 0.15);
    border: 1px solid var(--red);
    color: var(--red);
    padding: 12px 16px;
    border-radius: 6px;
}

.empty { text-align: center; padding: 48px 0; color: var(--text-dim); }

/* Risk badges */
.badge {
    padding: 3px 8px;
    border-radius: 4px;
    font-size: 11px;
    font-weight: 600;
}

.badge-low { background: rgba(63, 185, 80, 0.2); color: var(--green); }
.badge-medium { background: rgba(210, 153, 34, 0.2); color: var(--yellow); }
.badge-high { background: rgba(248, 81, 73, 0.2); color: var(--red); }
.badge-neutral { background: rgba(139, 148, 158, 0.2); color: var(--text-dim); }

.allocation { margin-bottom: 16px; }
.allocation h4 { font-size: 13px; font-weight: 500; color: #fff; margin-bottom: 8px; }
.alloc-row { display: flex; justify-content: space-between; font-size: 13px; color: var(--text-dim); padding: 2px 0; }
.alloc-value { font-weight: 600; color: var(--text); }

/* Help */
.doc-link { display: block; border: 1px solid var(--border); border-radius: 8px; padding: 16px; }
.doc-link:hover { background: rgba(88, 166, 255, 0.1); }
.doc-link h3 { font-size: 15px; color: var(--blue); }
.doc-link p { color: var(--text-dim); margin-top: 4px; }

.endpoint-list { display: flex; flex-direction: column; gap: 16px; }
.endpoint { border: 1px solid var(--border); border-radius: 8px; padding: 16px; }
.endpoint-head { display: flex; align-items: center; gap: 12px; margin-bottom: 8px; }
.endpoint p { color: var(--text-dim); }
.endpoint code, .example-url { background: rgba(255, 255, 255, 0.05); padding: 4px 8px; border-radius: 4px; }

.method { padding: 3px 8px; border-radius: 4px; font-size: 11px; font-weight: 600; }
.method-get { background: rgba(63, 185, 80, 0.2); color: var(--green); }
.method-other { background: rgba(88, 166, 255, 0.2); color: var(--blue); }
.method-example { background: rgba(163, 113, 247, 0.2); color: var(--purple); display: inline-block; margin-bottom: 8px; }

.example { border: 1px solid var(--border); border-radius: 8px; padding: 16px; }
.example-title { font-size: 15px; color: #fff; margin-bottom: 8px; text-transform: capitalize; }
.example-url { display: block; word-break: break-all; }

.note {
    background: rgba(88, 166, 255, 0.1);
    border: 1px solid rgba(88, 166, 255, 0.4);
    border-radius: 8px;
    padding: 16px;
    color: var(--blue);
}

/* Responsive */
@media (max-width: 640px) {
    .nav-inner { flex-direction: column; height: auto; padding: 12px 20px; gap: 12px; }
    .nav-links { flex-wrap: wrap; justify-content: center; gap: 12px; }
    .card-grid, .doc-grid { grid-template-columns: 1fr; }
}
";
