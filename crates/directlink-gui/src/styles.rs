//! CSS 样式定义
//!
//! Bento 风格的浅色主题

/// 全局 CSS 样式
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --primary: #FACC15;
    --secondary: #F472B6;
    --accent: #22D3EE;
    --success: #4ADE80;
    --error: #FB7185;
    --bg: #F8FAFC;
    --muted: #64748B;
    --border: #000000;
    --shadow: 6px 6px 0px #000000;
    --shadow-sm: 4px 4px 0px #000000;
    --font-main: 'Outfit', 'Inter', sans-serif;
}

body {
    font-family: var(--font-main);
    background-color: var(--bg);
    color: var(--border);
    padding: 24px;
    line-height: 1.5;
}

/* Bento Grid Layout */
.app-container {
    max-width: 760px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    gap: 20px;
}

.bento-tile {
    background: white;
    border: 3px solid var(--border);
    box-shadow: var(--shadow);
    padding: 24px;
    position: relative;
    overflow: hidden;
}

.header-tile {
    grid-column: span 12;
    background: var(--primary);
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
}

.form-tile {
    grid-column: span 12;
    display: flex;
    flex-direction: column;
    gap: 20px;
}

/* Typography */
h1 { font-size: 24px; font-weight: 900; letter-spacing: -0.5px; }

.field {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.field-label {
    font-size: 14px;
    font-weight: 700;
}

.hint {
    font-size: 14px;
    color: var(--muted);
}

/* Inputs */
.text-input {
    font-family: inherit;
    font-size: 15px;
    padding: 10px 12px;
    border: 3px solid var(--border);
    background: white;
    box-shadow: 2px 2px 0px var(--border);
    width: 100%;
}

.text-input:focus {
    outline: none;
    background: #FFFBEB;
}

.text-input.output {
    flex: 1;
    background: var(--bg);
    font-family: 'Courier New', monospace;
}

.output-row {
    display: flex;
    gap: 8px;
}

/* Buttons */
.btn {
    font-family: inherit;
    font-weight: 800;
    padding: 10px 20px;
    border: 3px solid var(--border);
    box-shadow: var(--shadow-sm);
    cursor: pointer;
    background: white;
    transition: all 0.1s;
    text-transform: uppercase;
    display: inline-flex;
    align-items: center;
    gap: 8px;
    white-space: nowrap;
}

.btn:active {
    transform: translate(2px, 2px);
    box-shadow: 0px 0px 0px var(--border);
}

.btn-primary { background: var(--primary); }
.btn-success { background: var(--success); }

/* Status Badge */
.status-badge {
    background: white;
    border: 2px solid var(--border);
    padding: 6px 12px;
    font-weight: 700;
    box-shadow: 2px 2px 0px var(--border);
}

.status-badge.error { background: var(--error); color: white; }

/* Mode Selection Cards */
.mode-row {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.mode-card {
    background: white;
    border: 3px solid var(--border);
    box-shadow: var(--shadow-sm);
    padding: 16px;
    text-align: center;
    cursor: pointer;
    transition: all 0.2s;
}

.mode-card:hover {
    transform: translate(-2px, -2px);
    box-shadow: 6px 6px 0px var(--border);
}

.mode-card.active {
    background: var(--accent);
}

.mode-card-icon {
    font-size: 28px;
    margin-bottom: 8px;
}

.mode-card-title {
    font-weight: 900;
    text-transform: uppercase;
}

.mode-card-desc {
    font-size: 13px;
    color: var(--muted);
}
"#;
